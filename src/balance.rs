use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EthereumError, Result};
use crate::precision;
use crate::rpc::ChainReader;
use crate::tokens;

/// Native coin (ETH) display convention: wei carries 18 fractional digits.
pub const NATIVE_DECIMALS: u32 = 18;

/// Sentinel for a `decimals` read that failed. Distinct from 0, which is a
/// legitimate decimals value for some tokens.
pub const UNKNOWN_DECIMALS: i64 = -1;

/// Sentinel for a caller correlation id that was never assigned.
pub const UNSET_INTERNAL_ID: i64 = -1;

/// Sentinel for token metadata (name/symbol) that could not be read.
pub const MISSING: &str = "MISSING";

/// The aggregate result of one token balance query.
///
/// Built fresh per query and not mutated afterward. Degraded reads leave the
/// documented sentinels behind instead of failing the report; callers that
/// need per-field success must inspect those sentinels.
#[derive(Debug, Clone)]
pub struct TokenBalance {
    pub contract: Address,
    pub wallet: Address,
    pub name: String,
    pub symbol: String,
    /// Token balance in the smallest on-chain unit. Zero when the read failed.
    pub balance: U256,
    /// Native-coin balance in wei. `None` when the read failed, which is
    /// distinct from a balance of zero.
    pub native_balance: Option<U256>,
    /// Fractional digits of the token, or [`UNKNOWN_DECIMALS`].
    pub decimals: i64,
    /// Anchor block height the report was read at.
    pub block: u64,
    pub internal_id: i64,
}

impl TokenBalance {
    /// Render the token balance as an exact decimal string.
    ///
    /// Falls back to the raw integer verbatim when the token has zero
    /// decimals or the decimals read failed.
    pub fn balance_string(&self) -> String {
        if self.decimals <= 0 {
            return self.balance.to_string();
        }
        precision::to_decimal_string(self.balance, self.decimals as u32)
    }

    /// Render the native-coin balance at the fixed 18-decimal convention, or
    /// `None` when the balance read failed.
    pub fn native_balance_string(&self) -> Option<String> {
        self.native_balance
            .map(|wei| precision::to_decimal_string(wei, NATIVE_DECIMALS))
    }

    /// Whether the decimals read succeeded.
    pub fn decimals_known(&self) -> bool {
        self.decimals >= 0
    }

    /// Serialize the report to its wire JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&TokenBalanceJson::from(self))
            .map_err(|e| EthereumError::Serialization(e.to_string()))
    }
}

/// Wire form of [`TokenBalance`].
///
/// Metadata fields carrying the [`MISSING`] sentinel are omitted, as is the
/// native balance when it was never read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalanceJson {
    pub token: String,
    pub wallet: String,
    #[serde(default, skip_serializing_if = "is_missing")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_missing")]
    pub symbol: String,
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_balance: Option<String>,
    pub decimals: i64,
    pub block: u64,
}

fn is_missing(value: &String) -> bool {
    value.is_empty() || value == MISSING
}

impl From<&TokenBalance> for TokenBalanceJson {
    fn from(report: &TokenBalance) -> Self {
        TokenBalanceJson {
            token: report.contract.to_string(),
            wallet: report.wallet.to_string(),
            name: report.name.clone(),
            symbol: report.symbol.clone(),
            balance: report.balance_string(),
            eth_balance: report.native_balance_string(),
            decimals: report.decimals,
            block: report.block,
        }
    }
}

/// Assembles best-effort [`TokenBalance`] reports from five independent chain
/// reads.
///
/// Only the anchor-block read is fatal; every other read degrades its own
/// field and never aborts the rest, so a contract missing an optional ERC20
/// extension still yields a usable report.
pub struct BalanceFetcher<R> {
    reader: R,
}

impl<R: ChainReader> BalanceFetcher<R> {
    pub fn new(reader: R) -> Self {
        BalanceFetcher { reader }
    }

    /// Fetch a token balance report at the latest block.
    pub async fn fetch_latest(&self, contract: Address, wallet: Address) -> Result<TokenBalance> {
        self.fetch(contract, wallet, None).await
    }

    /// Fetch a token balance report anchored at `block`, or at the latest
    /// block when `None`.
    pub async fn fetch(
        &self,
        contract: Address,
        wallet: Address,
        block: Option<u64>,
    ) -> Result<TokenBalance> {
        debug!(
            "Fetching token balance for wallet {:?} on token {:?}",
            wallet, contract
        );

        // The anchor gives every other read its point-in-time meaning, so a
        // failure here aborts the whole fetch.
        let block = self
            .reader
            .block_number(block)
            .await
            .map_err(|e| EthereumError::AnchorBlock(e.to_string()))?;

        let decimals = match self.reader.token_decimals(contract).await {
            Ok(d) => i64::from(d),
            Err(e) => {
                warn!("Failed to get decimals from contract {:?}: {}", contract, e);
                UNKNOWN_DECIMALS
            }
        };

        let native_balance = match self.reader.native_balance(wallet, block).await {
            Ok(wei) => Some(wei),
            Err(e) => {
                warn!("Failed to get ETH balance for {:?}: {}", wallet, e);
                None
            }
        };

        let balance = match self.reader.token_balance(contract, wallet).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to get balance from contract {:?}: {}", contract, e);
                U256::ZERO
            }
        };

        let symbol = match self.reader.token_symbol(contract).await {
            Ok(symbol) => symbol,
            Err(e) => {
                warn!("Failed to get symbol from contract {:?}: {}", contract, e);
                tokens::well_known()
                    .address_to_symbol(contract)
                    .unwrap_or_else(|| MISSING.to_string())
            }
        };

        let name = match self.reader.token_name(contract).await {
            Ok(name) => name,
            Err(e) => {
                warn!("Failed to get name from contract {:?}: {}", contract, e);
                MISSING.to_string()
            }
        };

        Ok(TokenBalance {
            contract,
            wallet,
            name,
            symbol,
            balance,
            native_balance,
            decimals,
            block,
            internal_id: UNSET_INTERNAL_ID,
        })
    }
}

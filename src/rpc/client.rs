use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::BlockTransactionsKind;
use alloy::sol;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::{EthereumError, Result};
use crate::rpc::ChainReader;

/// ERC20 read interface using alloy sol! macro
sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
        function name() external view returns (string);
    }
}

type HttpProvider = alloy::providers::fillers::FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::Identity,
        alloy::providers::fillers::JoinFill<
            alloy::providers::fillers::GasFiller,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::BlobGasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::NonceFiller,
                    alloy::providers::fillers::ChainIdFiller,
                >,
            >,
        >,
    >,
    alloy::providers::RootProvider<alloy::transports::http::Http<reqwest::Client>>,
    alloy::transports::http::Http<reqwest::Client>,
    alloy::network::Ethereum,
>;

/// RPC client for the chain reads behind a token balance report
#[derive(Clone)]
pub struct RpcClient {
    inner: Arc<RpcClientInner>,
}

struct RpcClientInner {
    provider_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(rpc_url: String) -> Result<Self> {
        // Validate URL format
        rpc_url
            .parse::<url::Url>()
            .map_err(|_| EthereumError::Config("Invalid RPC URL format".to_string()))?;

        debug!("Connected to RPC: {}", rpc_url);

        Ok(RpcClient {
            inner: Arc::new(RpcClientInner {
                provider_url: rpc_url,
            }),
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.rpc_url.clone())
    }

    /// Helper to get provider for each operation
    fn get_provider(&self) -> Result<HttpProvider> {
        let url = self
            .inner
            .provider_url
            .parse()
            .map_err(|_| EthereumError::Config("Invalid RPC URL".to_string()))?;

        Ok(ProviderBuilder::new()
            .with_recommended_fillers()
            .on_http(url))
    }

    /// Resolve a block height to a concrete block number, `None` meaning latest
    pub async fn get_block_number(&self, height: Option<u64>) -> Result<u64> {
        debug!("Resolving block number for height: {:?}", height);

        let provider = self.get_provider()?;

        match height {
            None => provider.get_block_number().await.map_err(|e| {
                error!("Failed to get latest block number: {}", e);
                EthereumError::Rpc(format!("Failed to get block number: {}", e))
            }),
            Some(number) => {
                let block = provider
                    .get_block_by_number(
                        BlockNumberOrTag::Number(number),
                        BlockTransactionsKind::Hashes,
                    )
                    .await
                    .map_err(|e| {
                        error!("Failed to get block {}: {}", number, e);
                        EthereumError::Rpc(format!("Failed to get block {}: {}", number, e))
                    })?
                    .ok_or_else(|| EthereumError::Rpc(format!("Block {} not found", number)))?;

                Ok(block.header.number)
            }
        }
    }

    /// Get ETH balance for an address at the given block
    pub async fn get_eth_balance(&self, address: Address, block: u64) -> Result<U256> {
        debug!("Getting ETH balance for: {:?} at block {}", address, block);

        let provider = self.get_provider()?;

        provider
            .get_balance(address)
            .block_id(BlockId::number(block))
            .await
            .map_err(|e| {
                error!("Failed to get ETH balance: {}", e);
                EthereumError::Rpc(format!("Failed to get balance: {}", e))
            })
    }

    /// Get ERC20 token balance for an address
    pub async fn get_token_balance(
        &self,
        token_address: Address,
        account_address: Address,
    ) -> Result<U256> {
        debug!(
            "Getting token balance for: {:?} on token: {:?}",
            account_address, token_address
        );

        let provider = self.get_provider()?;
        let contract = IERC20::new(token_address, provider);

        contract
            .balanceOf(account_address)
            .call()
            .await
            .map(|r| r._0)
            .map_err(|e| {
                error!(
                    "Failed to get token balance: {} (token: {:?})",
                    e, token_address
                );
                EthereumError::Rpc(format!("Failed to get token balance: {}", e))
            })
    }

    /// Get ERC20 token decimals
    pub async fn get_token_decimals(&self, token_address: Address) -> Result<u8> {
        debug!("Getting decimals for token: {:?}", token_address);

        let provider = self.get_provider()?;
        let contract = IERC20::new(token_address, provider);

        contract.decimals().call().await.map(|r| r._0).map_err(|e| {
            error!("Failed to get token decimals: {}", e);
            EthereumError::Rpc(format!("Failed to get token decimals: {}", e))
        })
    }

    /// Get ERC20 token symbol
    pub async fn get_token_symbol(&self, token_address: Address) -> Result<String> {
        debug!("Getting symbol for token: {:?}", token_address);

        let provider = self.get_provider()?;
        let contract = IERC20::new(token_address, provider);

        contract.symbol().call().await.map(|r| r._0).map_err(|e| {
            error!("Failed to get token symbol: {}", e);
            EthereumError::Rpc(format!("Failed to get token symbol: {}", e))
        })
    }

    /// Get ERC20 token name
    pub async fn get_token_name(&self, token_address: Address) -> Result<String> {
        debug!("Getting name for token: {:?}", token_address);

        let provider = self.get_provider()?;
        let contract = IERC20::new(token_address, provider);

        contract.name().call().await.map(|r| r._0).map_err(|e| {
            error!("Failed to get token name: {}", e);
            EthereumError::Rpc(format!("Failed to get token name: {}", e))
        })
    }

    /// Get RPC URL
    pub fn rpc_url(&self) -> &str {
        &self.inner.provider_url
    }
}

impl ChainReader for RpcClient {
    async fn block_number(&self, height: Option<u64>) -> Result<u64> {
        self.get_block_number(height).await
    }

    async fn native_balance(&self, wallet: Address, block: u64) -> Result<U256> {
        self.get_eth_balance(wallet, block).await
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        self.get_token_decimals(token).await
    }

    async fn token_balance(&self, token: Address, wallet: Address) -> Result<U256> {
        self.get_token_balance(token, wallet).await
    }

    async fn token_symbol(&self, token: Address) -> Result<String> {
        self.get_token_symbol(token).await
    }

    async fn token_name(&self, token: Address) -> Result<String> {
        self.get_token_name(token).await
    }
}

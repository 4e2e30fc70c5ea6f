pub mod client;

pub use client::RpcClient;

use alloy::primitives::{Address, U256};
use std::future::Future;

use crate::error::{EthereumError, Result};

/// Parse and validate a chain address supplied as a string.
pub fn parse_address(addr_str: &str) -> Result<Address> {
    addr_str
        .parse::<Address>()
        .map_err(|_| EthereumError::InvalidAddress(format!("invalid Ethereum address: {addr_str}")))
}

/// Read-side chain operations needed to assemble a token balance report.
///
/// Transport, retry policy, and ABI marshaling all live behind this seam;
/// implementors surface each read as a plain `Result`. [`RpcClient`] is the
/// production implementation.
pub trait ChainReader: Send + Sync {
    /// Resolve a block height to an anchor block number. `None` means latest.
    fn block_number(&self, height: Option<u64>) -> impl Future<Output = Result<u64>> + Send;

    /// Native-coin balance of `wallet` in wei, at `block`.
    fn native_balance(
        &self,
        wallet: Address,
        block: u64,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// ERC20 `decimals()` of `token`.
    fn token_decimals(&self, token: Address) -> impl Future<Output = Result<u8>> + Send;

    /// ERC20 `balanceOf(wallet)` on `token`, in the smallest unit.
    fn token_balance(
        &self,
        token: Address,
        wallet: Address,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// ERC20 `symbol()` of `token`.
    fn token_symbol(&self, token: Address) -> impl Future<Output = Result<String>> + Send;

    /// ERC20 `name()` of `token`.
    fn token_name(&self, token: Address) -> impl Future<Output = Result<String>> + Send;
}

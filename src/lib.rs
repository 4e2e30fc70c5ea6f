pub mod balance;
pub mod config;
pub mod error;
pub mod precision;
pub mod rpc;
pub mod tokens;

pub use balance::{BalanceFetcher, TokenBalance, TokenBalanceJson};
pub use config::Config;
pub use error::{EthereumError, Result};
pub use rpc::{ChainReader, RpcClient};

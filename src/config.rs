use crate::error::{EthereumError, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let rpc_url = env::var("RPC_URL")
            .map_err(|_| EthereumError::Config("RPC_URL not set".to_string()))?;

        Ok(Config { rpc_url })
    }

    pub fn from_url(rpc_url: String) -> Self {
        Config { rpc_url }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EthereumError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("failed to resolve anchor block: {0}")]
    AnchorBlock(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("precision conversion error: {0}")]
    Precision(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, EthereumError>;

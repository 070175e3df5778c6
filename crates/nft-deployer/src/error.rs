//! # Deployer Toolkit Errors
//!
//! Errors raised by the low-level pieces of the deployer: RPC communication,
//! transaction building and signing, artifact loading and configuration.
//! The procedure-level error, which tags the failing step, lives in
//! [`crate::deployer::DeploymentError`].
use thiserror::Error;

/// Errors that can occur while talking to a Soroban network or preparing
/// transactions for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeployHelperError {
    /// A transaction was applied but did not succeed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Simulating a transaction returned an error.
    #[error("Transaction simulation failed: {0}")]
    TransactionSimulationFailed(String),

    /// The contract code being uploaded is already installed on the network.
    #[error("Contract code already exists")]
    ContractCodeAlreadyExists,

    /// A request to the Soroban RPC server failed.
    #[error("Network request failed: {0}")]
    NetworkRequestFailed(String),

    #[error("Signing operation failed: {0}")]
    SigningFailed(String),

    #[error("XDR encoding failed: {0}")]
    XdrEncodingFailed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File read error: {0}")]
    FileReadError(String),

    /// A configuration value is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<stellar_xdr::curr::Error> for DeployHelperError {
    fn from(err: stellar_xdr::curr::Error) -> Self {
        Self::XdrEncodingFailed(err.to_string())
    }
}

impl From<std::io::Error> for DeployHelperError {
    fn from(err: std::io::Error) -> Self {
        Self::FileReadError(err.to_string())
    }
}

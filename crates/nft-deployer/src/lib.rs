//! Deploys the Guitar NFT collection contract to a Soroban network.
//!
//! The [`Deployer`] ties the pieces together: a [`Wallet`] supplies the
//! signer, [`Artifacts`] supply the compiled contract as a
//! [`ContractFactory`] and a [`Provider`] carries transactions to the
//! network.
mod artifacts;
mod config;
mod crypto;
mod deployer;
mod error;
mod factory;
mod fs;
#[cfg(test)]
mod mock;
mod operation;
mod params;
mod parser;
mod provider;
mod rpc;
mod scval;
mod signer;
mod transaction;
mod wallet;

pub use artifacts::Artifacts;
pub use config::{DeployConfig, NetworkConfig};
pub use deployer::{Deployer, DeploymentError};
pub use error::DeployHelperError;
pub use factory::{ContractFactory, DeployedContract, PendingDeployment};
pub use fs::{DefaultFileReader, FileReader};
pub use params::{
    DeploymentParameters, COLLECTION_NAME, COLLECTION_SYMBOL, CONTRACT_NAME, METADATA_URIS,
};
pub use provider::Provider;
pub use rpc::{ExternalRpcClient, RpcClient};
pub use signer::Signer;
pub use transaction::TransactionBuilder;
pub use wallet::Wallet;

pub use stellar_strkey::Contract as ContractId;

// re-exports
pub use stellar_xdr::curr as xdr;

// traits
pub use scval::IntoScVal;

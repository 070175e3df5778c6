//! # Deployer
//!
//! The deployment procedure: pick the first signer, load the contract
//! factory, submit the creation with the collection payload, wait for the
//! network to apply it and report the address.
//!
//! Each failure is tagged with the step it happened in. No step is retried
//! and the confirmation wait has no deadline.
use crate::{
    artifacts::Artifacts,
    config::DeployConfig,
    error::DeployHelperError,
    factory::DeployedContract,
    params::{DeploymentParameters, CONTRACT_NAME},
    wallet::Wallet,
    Provider,
};
use std::io::Write;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DeploymentError {
    /// The wallet holds no signer; nothing was submitted.
    #[error("No signer available to deploy with")]
    NoSigner,

    /// The build artifacts hold no contract under that name; nothing was
    /// submitted.
    #[error("Contract factory for {name} not found: {reason}")]
    FactoryNotFound {
        name: String,
        reason: DeployHelperError,
    },

    #[error("Invalid deployment parameters: {0}")]
    InvalidParameters(DeployHelperError),

    /// Installing the code or submitting the creation transaction failed.
    #[error("Deployment submission failed: {0}")]
    SubmissionFailed(DeployHelperError),

    /// The creation transaction was submitted but did not end up applied.
    /// Its fate on the network may be unknown.
    #[error("Deployment confirmation failed: {0}")]
    ConfirmationFailed(DeployHelperError),

    #[error("Failed to write deployment report: {0}")]
    Output(#[from] std::io::Error),
}

pub struct Deployer {
    provider: Provider,
    wallet: Wallet,
    artifacts: Artifacts,
    poll_interval: Duration,
}

impl Deployer {
    pub fn new(config: DeployConfig, wallet: Wallet) -> Result<Self, DeployHelperError> {
        let provider = Provider::new(config.network)?;
        Ok(Self::from_parts(
            provider,
            wallet,
            Artifacts::new(config.artifacts_dir),
            config.poll_interval,
        ))
    }

    pub fn from_parts(
        provider: Provider,
        wallet: Wallet,
        artifacts: Artifacts,
        poll_interval: Duration,
    ) -> Self {
        Self {
            provider,
            wallet,
            artifacts,
            poll_interval,
        }
    }

    /// Deploys the Guitar NFT collection, writing the report lines to `out`.
    pub async fn deploy<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<DeployedContract, DeploymentError> {
        self.deploy_contract(CONTRACT_NAME, &DeploymentParameters::guitar_collection(), out)
            .await
    }

    /// Deploys one instance of `contract_name` constructed with `params`.
    ///
    /// Writes the signer address to `out` before anything is submitted and
    /// the contract address once the creation is confirmed.
    pub async fn deploy_contract<W: Write>(
        &self,
        contract_name: &str,
        params: &DeploymentParameters,
        out: &mut W,
    ) -> Result<DeployedContract, DeploymentError> {
        let signer = self.wallet.first_signer().ok_or(DeploymentError::NoSigner)?;
        writeln!(out, "Deploying contracts with the account: {}", signer.address())?;

        let factory = self
            .artifacts
            .get_contract_factory(contract_name)
            .map_err(|reason| DeploymentError::FactoryNotFound {
                name: contract_name.to_string(),
                reason,
            })?;

        let constructor_args = params
            .constructor_args()
            .map_err(DeploymentError::InvalidParameters)?;

        info!(
            contract = contract_name,
            signer = %signer.address(),
            rpc_url = self.provider.rpc_url(),
            "deploying contract"
        );
        let pending = factory
            .deploy(
                &self.provider,
                signer,
                Some(constructor_args),
                self.poll_interval,
            )
            .await
            .map_err(DeploymentError::SubmissionFailed)?;

        info!(
            contract_id = %pending.contract_id(),
            tx_hash = %hex::encode(pending.tx_hash().0),
            "awaiting deployment confirmation"
        );
        let deployed = pending
            .wait_for_deployment()
            .await
            .map_err(DeploymentError::ConfirmationFailed)?;
        info!(
            contract = contract_name,
            address = %deployed.address(),
            tx_hash = %hex::encode(deployed.tx_hash().0),
            "contract deployed"
        );

        writeln!(out, "{} deployed to: {}", contract_name, deployed.address())?;
        Ok(deployed)
    }
}

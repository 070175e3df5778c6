//! # Contract Factory
//!
//! Deploys instances of a compiled contract. Deployment is split the way the
//! network sees it:
//!
//! - [`ContractFactory::deploy`] installs the contract code if needed, then
//!   submits the creation transaction and returns right after submission.
//! - [`PendingDeployment::wait_for_deployment`] waits until the creation
//!   transaction is applied and yields a [`DeployedContract`].
use crate::{
    crypto, error::DeployHelperError, operation::Operations, parser,
    transaction::TransactionBuilder, Provider, Signer,
};
use std::fmt;
use std::time::Duration;
use stellar_strkey::Contract as ContractId;
use stellar_xdr::curr::{Hash, ScVal};
use tracing::{debug, info};

const CONSTRUCTOR_FUNCTION_NAME: &str = "__constructor";

/// A compiled contract ready to be deployed.
#[derive(Clone)]
pub struct ContractFactory {
    name: String,
    wasm_bytes: Vec<u8>,
    wasm_hash: Hash,
}

impl fmt::Debug for ContractFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractFactory")
            .field("name", &self.name)
            .field("wasm_hash", &hex::encode(self.wasm_hash.0))
            .field("wasm_len", &self.wasm_bytes.len())
            .finish()
    }
}

impl ContractFactory {
    pub fn new(name: impl Into<String>, wasm_bytes: Vec<u8>) -> Self {
        let wasm_hash = crypto::sha256_hash(&wasm_bytes);
        Self {
            name: name.into(),
            wasm_bytes,
            wasm_hash,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wasm_bytes(&self) -> &[u8] {
        &self.wasm_bytes
    }

    pub fn wasm_hash(&self) -> &Hash {
        &self.wasm_hash
    }

    /// Whether the compiled contract exports a constructor.
    ///
    /// Byte-level scan for the export name; it does not parse the wasm
    /// sections, so the name appearing in a data segment also counts.
    pub fn has_constructor(&self) -> bool {
        self.wasm_bytes
            .windows(CONSTRUCTOR_FUNCTION_NAME.len())
            .any(|window| window == CONSTRUCTOR_FUNCTION_NAME.as_bytes())
    }

    /// Submits the creation of a new contract instance signed by `signer`.
    ///
    /// Every call uses a fresh salt, so repeated deployments produce distinct
    /// contracts. Confirmation polls, both for the code upload and later for
    /// the creation, are spaced by `poll_interval`.
    pub async fn deploy(
        &self,
        provider: &Provider,
        signer: &Signer,
        constructor_args: Option<Vec<ScVal>>,
        poll_interval: Duration,
    ) -> Result<PendingDeployment, DeployHelperError> {
        if constructor_args.is_some() && !self.has_constructor() {
            return Err(DeployHelperError::InvalidArgument(format!(
                "Contract {} does not export a constructor but constructor arguments were given",
                self.name
            )));
        }

        self.install(provider, signer, poll_interval).await?;

        let salt = crypto::generate_salt();
        let preimage = crypto::contract_id_preimage(&signer.account_id(), &salt);
        let contract_id = crypto::contract_id_from_preimage(&preimage, &provider.network_id())?;

        let create_operation =
            Operations::create_contract(preimage, self.wasm_hash.clone(), constructor_args)?;
        let deploy_tx = TransactionBuilder::new(signer, provider)
            .add_operation(create_operation)
            .simulate_and_build()
            .await?;
        let tx_envelope = signer.sign_envelope(&deploy_tx, &provider.network_id())?;
        let tx_hash = provider.send_transaction(&tx_envelope).await?;

        info!(
            contract = %self.name,
            contract_id = %contract_id,
            tx_hash = %hex::encode(tx_hash.0),
            "contract creation submitted"
        );

        Ok(PendingDeployment {
            name: self.name.clone(),
            contract_id,
            tx_hash,
            provider: provider.clone(),
            poll_interval,
        })
    }

    /// Uploads the contract code and waits for it to be applied. Code that is
    /// already installed is not an error.
    async fn install(
        &self,
        provider: &Provider,
        signer: &Signer,
        poll_interval: Duration,
    ) -> Result<(), DeployHelperError> {
        let upload_tx = TransactionBuilder::new(signer, provider)
            .add_operation(Operations::upload_wasm(self.wasm_bytes.clone())?)
            .simulate_and_build()
            .await?;
        let tx_envelope = signer.sign_envelope(&upload_tx, &provider.network_id())?;

        let tx_hash = match provider.send_transaction(&tx_envelope).await {
            Ok(tx_hash) => tx_hash,
            Err(DeployHelperError::ContractCodeAlreadyExists) => {
                debug!(
                    wasm_hash = %hex::encode(self.wasm_hash.0),
                    "contract code already installed"
                );
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        provider.wait_for_transaction(&tx_hash, poll_interval).await?;
        debug!(wasm_hash = %hex::encode(self.wasm_hash.0), "contract code installed");
        Ok(())
    }
}

/// A submitted creation transaction whose outcome is not known yet.
pub struct PendingDeployment {
    name: String,
    contract_id: ContractId,
    tx_hash: Hash,
    provider: Provider,
    poll_interval: Duration,
}

impl PendingDeployment {
    /// The address the contract will have once created.
    pub fn contract_id(&self) -> &ContractId {
        &self.contract_id
    }

    pub fn tx_hash(&self) -> &Hash {
        &self.tx_hash
    }

    /// Waits until the creation transaction is applied.
    ///
    /// There is no timeout: as long as the network reports the transaction as
    /// not found, this keeps polling.
    pub async fn wait_for_deployment(self) -> Result<DeployedContract, DeployHelperError> {
        let response = self
            .provider
            .wait_for_transaction(&self.tx_hash, self.poll_interval)
            .await?;

        let contract_id = match parser::parse_deployed_contract(&response)? {
            Some(reported) if reported != self.contract_id => {
                return Err(DeployHelperError::TransactionFailed(format!(
                    "Network reported contract {} but {} was expected",
                    reported, self.contract_id
                )));
            }
            Some(reported) => reported,
            None => self.contract_id,
        };

        Ok(DeployedContract {
            name: self.name,
            contract_id,
            tx_hash: self.tx_hash,
        })
    }
}

/// A contract instance whose creation has been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    name: String,
    contract_id: ContractId,
    tx_hash: Hash,
}

impl DeployedContract {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contract_id(&self) -> &ContractId {
        &self.contract_id
    }

    /// The contract address as a strkey (`C...`).
    pub fn address(&self) -> String {
        self.contract_id.to_string()
    }

    pub fn tx_hash(&self) -> &Hash {
        &self.tx_hash
    }
}

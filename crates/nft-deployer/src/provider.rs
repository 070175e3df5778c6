use crate::{
    config::NetworkConfig,
    error::DeployHelperError,
    rpc::{ExternalRpcClient, RpcClient},
};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{AccountEntry, Hash, TransactionEnvelope};
use tracing::debug;

pub const TX_STATUS_SUCCESS: &str = "SUCCESS";
pub const TX_STATUS_NOT_FOUND: &str = "NOT_FOUND";
pub const TX_STATUS_FAILED: &str = "FAILED";

/// Handle to a Soroban network: the RPC client plus the network identity
/// transactions are signed for.
#[derive(Clone)]
pub struct Provider {
    pub(crate) rpc_client: Arc<dyn RpcClient + Send + Sync>,
    pub(crate) configs: NetworkConfig,
}

impl Provider {
    pub fn new(configs: NetworkConfig) -> Result<Self, DeployHelperError> {
        let client = ExternalRpcClient::new(&configs.rpc_url)?;
        Ok(Self {
            rpc_client: Arc::new(client),
            configs,
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.configs.rpc_url
    }

    pub fn network_passphrase(&self) -> &str {
        &self.configs.network_passphrase
    }

    pub fn network_id(&self) -> Hash {
        let network_pass_bytes = self.configs.network_passphrase.as_bytes();
        Hash(Sha256::digest(network_pass_bytes).into())
    }

    pub async fn get_account(&self, account_id: &str) -> Result<AccountEntry, DeployHelperError> {
        self.rpc_client.get_account(account_id).await.map_err(|e| {
            DeployHelperError::NetworkRequestFailed(format!(
                "Failed to get account {}: {}",
                account_id, e
            ))
        })
    }

    pub async fn simulate_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, DeployHelperError> {
        let simulation = self
            .rpc_client
            .simulate_transaction_envelope(tx_envelope)
            .await
            .map_err(|e| {
                DeployHelperError::NetworkRequestFailed(format!(
                    "Failed to simulate transaction: {}",
                    e
                ))
            })?;

        match &simulation.error {
            Some(error) => Err(DeployHelperError::TransactionSimulationFailed(error.clone())),
            None => Ok(simulation),
        }
    }

    /// Submits a signed transaction and returns its hash as soon as the
    /// network has accepted it for processing.
    pub async fn send_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<Hash, DeployHelperError> {
        self.rpc_client
            .send_transaction(tx_envelope)
            .await
            .map_err(|e| {
                let error_string = e.to_string();
                if error_string.contains("ContractCodeAlreadyExists") {
                    return DeployHelperError::ContractCodeAlreadyExists;
                }
                DeployHelperError::NetworkRequestFailed(format!(
                    "Failed to send transaction: {}",
                    e
                ))
            })
    }

    /// Polls the network until the transaction leaves the `NOT_FOUND` state.
    ///
    /// Waits for as long as the network keeps reporting the transaction as
    /// unknown; callers that need a deadline must impose one themselves.
    pub async fn wait_for_transaction(
        &self,
        tx_hash: &Hash,
        poll_interval: Duration,
    ) -> Result<GetTransactionResponse, DeployHelperError> {
        let tx_hex = hex::encode(tx_hash.0);
        loop {
            let response = self.rpc_client.get_transaction(tx_hash).await.map_err(|e| {
                DeployHelperError::NetworkRequestFailed(format!(
                    "Failed to get transaction {}: {}",
                    tx_hex, e
                ))
            })?;

            match response.status.as_str() {
                TX_STATUS_SUCCESS => {
                    debug!(tx_hash = %tx_hex, "transaction applied");
                    return Ok(response);
                }
                TX_STATUS_NOT_FOUND => {
                    debug!(tx_hash = %tx_hex, "transaction not yet applied, polling again");
                    tokio::time::sleep(poll_interval).await;
                }
                TX_STATUS_FAILED => {
                    return Err(DeployHelperError::TransactionFailed(format!(
                        "Transaction {} failed: {:?}",
                        tx_hex, response.result
                    )));
                }
                status => {
                    return Err(DeployHelperError::TransactionFailed(format!(
                        "Transaction {} finished with unexpected status {}",
                        tx_hex, status
                    )));
                }
            }
        }
    }
}

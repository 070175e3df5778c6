//! # Soroban RPC Client
//!
//! The RPC operations the deployer relies on, behind a trait so the network
//! can be replaced by a scripted mock in tests.
use crate::error::DeployHelperError;
use stellar_rpc_client::Client;
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{AccountEntry, Hash, TransactionEnvelope};

/// Interface for RPC operations with Soroban servers.
#[async_trait::async_trait]
pub trait RpcClient: Send + Sync {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, DeployHelperError>;

    async fn simulate_transaction_envelope(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, DeployHelperError>;

    /// Submits a signed transaction and returns its hash without waiting for
    /// it to be applied.
    async fn send_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<Hash, DeployHelperError>;

    /// Fetches the current status of a previously submitted transaction.
    async fn get_transaction(
        &self,
        tx_hash: &Hash,
    ) -> Result<GetTransactionResponse, DeployHelperError>;
}

/// [`RpcClient`] backed by the official Stellar RPC client.
pub struct ExternalRpcClient {
    client: Client,
}

impl ExternalRpcClient {
    /// Creates a new client for the given RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns `DeployHelperError::NetworkRequestFailed` if the URL cannot be
    /// used to build a client.
    pub fn new(url: &str) -> Result<Self, DeployHelperError> {
        let client = Client::new(url).map_err(|e| {
            DeployHelperError::NetworkRequestFailed(format!("Failed to create client: {}", e))
        })?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl RpcClient for ExternalRpcClient {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, DeployHelperError> {
        self.client
            .get_account(account_id)
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))
    }

    async fn simulate_transaction_envelope(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, DeployHelperError> {
        self.client
            .simulate_transaction_envelope(tx_envelope)
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))
    }

    async fn send_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<Hash, DeployHelperError> {
        self.client
            .send_transaction(tx_envelope)
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))
    }

    async fn get_transaction(
        &self,
        tx_hash: &Hash,
    ) -> Result<GetTransactionResponse, DeployHelperError> {
        self.client
            .get_transaction(tx_hash)
            .await
            .map_err(|e| DeployHelperError::NetworkRequestFailed(format!("Error: {}", e)))
    }
}

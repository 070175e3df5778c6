use crate::crypto;
use crate::error::DeployHelperError;
use crate::provider::{TX_STATUS_NOT_FOUND, TX_STATUS_SUCCESS};
use crate::rpc::RpcClient;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{AccountEntry, Hash, ScAddress, ScVal, TransactionEnvelope};

use super::transaction::{
    mock_simulate_tx_response, mock_transaction_response,
    mock_transaction_response_with_return_value,
};
use super::{created_contracts, mock_account_entry};

enum ScriptedTransaction {
    Status(&'static str),
    Response(Result<GetTransactionResponse, DeployHelperError>),
}

/// Scriptable in-memory RPC server.
///
/// Unscripted calls succeed: accounts exist with sequence 0, simulations cost
/// nothing, submissions are accepted and transactions are immediately
/// applied. A successful contract creation reports the address derived from
/// the submitted envelope, like the real network does.
pub struct MockRpcClient {
    network_passphrase: String,
    get_account_result: Option<Result<AccountEntry, DeployHelperError>>,
    simulation_result: Option<Result<SimulateTransactionResponse, DeployHelperError>>,
    send_results: Mutex<VecDeque<Result<Hash, DeployHelperError>>>,
    get_transaction_results: Mutex<VecDeque<ScriptedTransaction>>,
    fallback_status: &'static str,
    submitted: Mutex<Vec<TransactionEnvelope>>,
    get_transaction_calls: AtomicUsize,
}

impl MockRpcClient {
    pub fn new() -> Self {
        let random_id = rand::random::<u64>();
        Self {
            network_passphrase: format!("Mock Test Random Network {}", random_id),
            get_account_result: None,
            simulation_result: None,
            send_results: Mutex::new(VecDeque::new()),
            get_transaction_results: Mutex::new(VecDeque::new()),
            fallback_status: TX_STATUS_SUCCESS,
            submitted: Mutex::new(Vec::new()),
            get_transaction_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_account(mut self, result: Result<AccountEntry, DeployHelperError>) -> Self {
        self.get_account_result = Some(result);
        self
    }

    pub fn with_simulation(
        mut self,
        result: Result<SimulateTransactionResponse, DeployHelperError>,
    ) -> Self {
        self.simulation_result = Some(result);
        self
    }

    /// Results of the next `send_transaction` calls, in order.
    pub fn with_send_results(self, results: Vec<Result<Hash, DeployHelperError>>) -> Self {
        self.send_results.lock().unwrap().extend(results);
        self
    }

    /// Statuses reported by the next `get_transaction` calls, in order.
    pub fn with_statuses(self, statuses: Vec<&'static str>) -> Self {
        self.get_transaction_results
            .lock()
            .unwrap()
            .extend(statuses.into_iter().map(ScriptedTransaction::Status));
        self
    }

    /// Raw responses of the next `get_transaction` calls, in order.
    pub fn with_get_transaction_results(
        self,
        results: Vec<Result<GetTransactionResponse, DeployHelperError>>,
    ) -> Self {
        self.get_transaction_results
            .lock()
            .unwrap()
            .extend(results.into_iter().map(ScriptedTransaction::Response));
        self
    }

    /// Status reported once the script is exhausted.
    pub fn with_fallback_status(mut self, status: &'static str) -> Self {
        self.fallback_status = status;
        self
    }

    /// Never confirms anything.
    pub fn pending_forever(self) -> Self {
        self.with_fallback_status(TX_STATUS_NOT_FOUND)
    }

    pub fn network_passphrase(&self) -> &str {
        &self.network_passphrase
    }

    pub fn network_id(&self) -> Hash {
        crypto::sha256_hash(self.network_passphrase.as_bytes())
    }

    /// Envelopes accepted by `send_transaction`, in submission order.
    pub fn submitted(&self) -> Vec<TransactionEnvelope> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn get_transaction_calls(&self) -> usize {
        self.get_transaction_calls.load(Ordering::SeqCst)
    }

    fn response_for_status(&self, status: &str) -> GetTransactionResponse {
        if status != TX_STATUS_SUCCESS {
            return GetTransactionResponse {
                status: status.to_string(),
                ..mock_transaction_response()
            };
        }

        let last = self.submitted.lock().unwrap().last().cloned();
        let created = last
            .map(|envelope| created_contracts(&[envelope], &self.network_id()))
            .unwrap_or_default();

        match created.first() {
            Some(contract_id) => mock_transaction_response_with_return_value(ScVal::Address(
                ScAddress::Contract(Hash(contract_id.0)),
            )),
            None => mock_transaction_response(),
        }
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, DeployHelperError> {
        match self.get_account_result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_account_entry(account_id)),
        }
    }

    async fn simulate_transaction_envelope(
        &self,
        _tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, DeployHelperError> {
        match self.simulation_result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_simulate_tx_response(Some(0))),
        }
    }

    async fn send_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<Hash, DeployHelperError> {
        let scripted = self.send_results.lock().unwrap().pop_front();
        let mut submitted = self.submitted.lock().unwrap();
        match scripted {
            Some(Err(e)) => Err(e),
            Some(Ok(hash)) => {
                submitted.push(tx_envelope.clone());
                Ok(hash)
            }
            None => {
                submitted.push(tx_envelope.clone());
                Ok(crypto::sha256_hash(&(submitted.len() as u64).to_be_bytes()))
            }
        }
    }

    async fn get_transaction(
        &self,
        _tx_hash: &Hash,
    ) -> Result<GetTransactionResponse, DeployHelperError> {
        self.get_transaction_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.get_transaction_results.lock().unwrap().pop_front();
        match scripted {
            Some(ScriptedTransaction::Response(res)) => res,
            Some(ScriptedTransaction::Status(status)) => Ok(self.response_for_status(status)),
            None => Ok(self.response_for_status(self.fallback_status)),
        }
    }
}

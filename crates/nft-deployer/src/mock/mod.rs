pub mod fs;
pub mod rpc;

use crate::config::NetworkConfig;
use crate::{crypto, Provider, Signer};
use ed25519_dalek::SigningKey;
use std::str::FromStr;
use std::sync::Arc;
use stellar_strkey::ed25519::PrivateKey;
use stellar_strkey::Contract as ContractId;
use stellar_xdr::curr::{
    AccountEntry, AccountEntryExt, AccountId, Hash, HostFunction, OperationBody, PublicKey,
    ScVal, String32, Thresholds, TransactionEnvelope, VecM,
};

pub use rpc::MockRpcClient;
pub use transaction::{
    mock_simulate_tx_response, mock_transaction, mock_transaction_envelope,
    mock_transaction_response,
};

/// Creates a provider backed by `client`, returning the client handle as well
/// so tests can inspect what was submitted.
pub fn mock_provider_with_client(client: MockRpcClient) -> (Provider, Arc<MockRpcClient>) {
    let client = Arc::new(client);
    let provider = Provider {
        configs: NetworkConfig {
            rpc_url: "http://test.com".to_string(),
            network_passphrase: client.network_passphrase().to_string(),
        },
        rpc_client: client.clone(),
    };
    (provider, client)
}

pub fn mock_provider(client: MockRpcClient) -> Provider {
    mock_provider_with_client(client).0
}

pub fn mock_signer1() -> Signer {
    let pk = PrivateKey::from_string("SD3C2X7WPTUYX4YHL2G34PX75JZ35QJDFKM6SXDLYHWIPOWPIQUXFVLE")
        .unwrap();
    Signer::new(SigningKey::from_bytes(&pk.0))
}

pub fn mock_signer2() -> Signer {
    let pk = PrivateKey::from_string("SDFLNQOG3PV4CYJ4BNUXFXJBBOCQ57MK2NYUK4XUVVJTT2JSA3YDJA3A")
        .unwrap();
    Signer::new(SigningKey::from_bytes(&pk.0))
}

pub fn mock_account_entry(account_id: &str) -> AccountEntry {
    AccountEntry {
        account_id: AccountId(PublicKey::from_str(account_id).unwrap()),
        balance: 0,
        ext: AccountEntryExt::V0,
        flags: 0,
        home_domain: String32::default(),
        inflation_dest: None,
        seq_num: 0.into(),
        num_sub_entries: 0,
        signers: VecM::default(),
        thresholds: Thresholds([0, 0, 0, 0]),
    }
}

/// Host functions invoked by `envelopes`, in submission order.
pub fn host_functions(envelopes: &[TransactionEnvelope]) -> Vec<HostFunction> {
    envelopes
        .iter()
        .filter_map(|envelope| match envelope {
            TransactionEnvelope::Tx(v1) => Some(v1.tx.operations.to_vec()),
            _ => None,
        })
        .flatten()
        .filter_map(|op| match op.body {
            OperationBody::InvokeHostFunction(invoke) => Some(invoke.host_function),
            _ => None,
        })
        .collect()
}

/// Addresses of the contracts created by `envelopes`, in submission order.
pub fn created_contracts(envelopes: &[TransactionEnvelope], network_id: &Hash) -> Vec<ContractId> {
    host_functions(envelopes)
        .into_iter()
        .filter_map(|function| match function {
            HostFunction::CreateContractV2(args) => Some(args.contract_id_preimage),
            HostFunction::CreateContract(args) => Some(args.contract_id_preimage),
            _ => None,
        })
        .map(|preimage| crypto::contract_id_from_preimage(&preimage, network_id).unwrap())
        .collect()
}

/// Constructor arguments of every contract creation in `envelopes`.
pub fn submitted_constructor_args(envelopes: &[TransactionEnvelope]) -> Vec<Vec<ScVal>> {
    host_functions(envelopes)
        .into_iter()
        .filter_map(|function| match function {
            HostFunction::CreateContractV2(args) => Some(args.constructor_args.to_vec()),
            HostFunction::CreateContract(_) => Some(Vec::new()),
            _ => None,
        })
        .collect()
}

use crate::{error::DeployHelperError, Provider, Signer};
use stellar_xdr::curr::{Memo, Operation, Preconditions, SequenceNumber, Transaction, TransactionExt};

pub const DEFAULT_TRANSACTION_FEES: u32 = 100;

#[derive(Clone)]
pub struct TransactionBuilder {
    fee: u32,
    source: Signer,
    operations: Vec<Operation>,
    provider: Provider,
}

impl TransactionBuilder {
    pub fn new(source: &Signer, provider: &Provider) -> Self {
        Self {
            fee: DEFAULT_TRANSACTION_FEES,
            source: source.clone(),
            operations: Vec::new(),
            provider: provider.clone(),
        }
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Builds the transaction with the source account's next sequence number.
    pub async fn build(self) -> Result<Transaction, DeployHelperError> {
        let operations = self.operations.try_into().map_err(|e| {
            DeployHelperError::XdrEncodingFailed(format!("Failed to convert operations: {}", e))
        })?;

        let account = self.provider.get_account(&self.source.address()).await?;

        Ok(Transaction {
            fee: self.fee,
            seq_num: SequenceNumber::from(account.seq_num.0 + 1),
            source_account: self.source.account_id().into(),
            cond: Preconditions::None,
            memo: Memo::None,
            operations,
            ext: TransactionExt::V0,
        })
    }

    /// Builds the transaction, then simulates it to attach the Soroban
    /// resource footprint and the resource fee.
    pub async fn simulate_and_build(self) -> Result<Transaction, DeployHelperError> {
        let provider = self.provider.clone();
        let source = self.source.clone();

        let tx = self.build().await?;
        let tx_envelope = source.sign_envelope(&tx, &provider.network_id())?;
        let simulation = provider.simulate_transaction(&tx_envelope).await?;

        let fee = DEFAULT_TRANSACTION_FEES.max(
            u32::try_from(
                (tx.operations.len() as u64 * DEFAULT_TRANSACTION_FEES as u64)
                    + simulation.min_resource_fee,
            )
            .map_err(|_| {
                DeployHelperError::InvalidArgument("Transaction fee too high".to_string())
            })?,
        );

        let tx_data = simulation.transaction_data().map_err(|e| {
            DeployHelperError::TransactionSimulationFailed(format!(
                "Failed to decode simulated transaction data: {}",
                e
            ))
        })?;

        Ok(Transaction {
            fee,
            ext: TransactionExt::V1(tx_data),
            ..tx
        })
    }
}

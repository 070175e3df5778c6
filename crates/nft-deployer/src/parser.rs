use crate::error::DeployHelperError;
use stellar_rpc_client::GetTransactionResponse;
use stellar_strkey::Contract as ContractId;
use stellar_xdr::curr::{
    ScAddress, ScVal, TransactionMeta, TransactionResult, TransactionResultResult,
};

/// Extracts the address of a freshly created contract from a confirmed
/// creation transaction.
///
/// Returns `Ok(None)` when the transaction succeeded but its metadata does not
/// carry the address.
pub fn parse_deployed_contract(
    response: &GetTransactionResponse,
) -> Result<Option<ContractId>, DeployHelperError> {
    check_tx_success(&response.result)?;

    Ok(response
        .result_meta
        .as_ref()
        .and_then(extract_return_value)
        .and_then(|val| extract_contract_id(&val)))
}

fn check_tx_success(tx_result: &Option<TransactionResult>) -> Result<(), DeployHelperError> {
    let tx_result = tx_result.as_ref().ok_or_else(|| {
        DeployHelperError::TransactionFailed("No transaction result available".to_string())
    })?;

    match &tx_result.result {
        TransactionResultResult::TxSuccess(_) => Ok(()),
        _ => Err(DeployHelperError::TransactionFailed(format!(
            "Transaction failed: {:?}",
            tx_result.result
        ))),
    }
}

fn extract_return_value(meta: &TransactionMeta) -> Option<ScVal> {
    match meta {
        TransactionMeta::V3(v3) => v3.soroban_meta.as_ref().map(|sm| sm.return_value.clone()),
        _ => None,
    }
}

fn extract_contract_id(val: &ScVal) -> Option<ContractId> {
    match val {
        ScVal::Address(ScAddress::Contract(hash)) => Some(ContractId(hash.0)),
        _ => None,
    }
}

use stellar_xdr::curr::{
    ContractExecutable, ContractIdPreimage, CreateContractArgs, CreateContractArgsV2, Hash,
    HostFunction, InvokeHostFunctionOp, Operation, OperationBody, ScVal,
    SorobanAuthorizationEntry, SorobanAuthorizedFunction, SorobanAuthorizedInvocation,
    SorobanCredentials, VecM,
};

use crate::error::DeployHelperError;

pub struct Operations;

impl Operations {
    pub fn upload_wasm(wasm_bytes: Vec<u8>) -> Result<Operation, DeployHelperError> {
        Ok(Operation {
            source_account: None,
            body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                host_function: HostFunction::UploadContractWasm(wasm_bytes.try_into().map_err(
                    |e| {
                        DeployHelperError::XdrEncodingFailed(format!(
                            "Failed to encode WASM bytes: {}",
                            e
                        ))
                    },
                )?),
                auth: VecM::default(),
            }),
        })
    }

    /// Builds the contract creation operation, running the constructor with
    /// `constructor_args` when present.
    pub fn create_contract(
        contract_id_preimage: ContractIdPreimage,
        wasm_hash: Hash,
        constructor_args: Option<Vec<ScVal>>,
    ) -> Result<Operation, DeployHelperError> {
        let (host_function, authorized_function) = match constructor_args {
            Some(args) => {
                let constructor_args: VecM<ScVal, { u32::MAX }> =
                    args.try_into().map_err(|e| {
                        DeployHelperError::XdrEncodingFailed(format!(
                            "Failed to encode constructor args: {}",
                            e
                        ))
                    })?;
                let create_args = CreateContractArgsV2 {
                    contract_id_preimage,
                    executable: ContractExecutable::Wasm(wasm_hash),
                    constructor_args,
                };
                (
                    HostFunction::CreateContractV2(create_args.clone()),
                    SorobanAuthorizedFunction::CreateContractV2HostFn(create_args),
                )
            }
            None => {
                let create_args = CreateContractArgs {
                    contract_id_preimage,
                    executable: ContractExecutable::Wasm(wasm_hash),
                };
                (
                    HostFunction::CreateContract(create_args.clone()),
                    SorobanAuthorizedFunction::CreateContractHostFn(create_args),
                )
            }
        };

        let auth_entry = SorobanAuthorizationEntry {
            credentials: SorobanCredentials::SourceAccount,
            root_invocation: SorobanAuthorizedInvocation {
                function: authorized_function,
                sub_invocations: VecM::default(),
            },
        };

        Ok(Operation {
            source_account: None,
            body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                auth: vec![auth_entry].try_into().map_err(|e| {
                    DeployHelperError::XdrEncodingFailed(format!(
                        "Failed to encode auth entries: {}",
                        e
                    ))
                })?,
                host_function,
            }),
        })
    }
}

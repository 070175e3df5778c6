use crate::error::DeployHelperError;
use sha2::{Digest, Sha256};
use stellar_xdr::curr::{
    AccountId, ContractIdPreimage, ContractIdPreimageFromAddress, Hash, HashIdPreimage,
    HashIdPreimageContractId, Limits, ScAddress, Uint256, WriteXdr,
};

pub fn sha256_hash(data: &[u8]) -> Hash {
    let hash_bytes: [u8; 32] = Sha256::digest(data).into();
    Hash(hash_bytes)
}

/// Fresh random salt; a new salt per deployment yields a new contract address.
pub fn generate_salt() -> Uint256 {
    let salt_bytes: [u8; 32] = rand::random();
    Uint256(salt_bytes)
}

pub fn contract_id_preimage(account_id: &AccountId, salt: &Uint256) -> ContractIdPreimage {
    ContractIdPreimage::Address(ContractIdPreimageFromAddress {
        address: ScAddress::Account(account_id.clone()),
        salt: salt.clone(),
    })
}

/// Derives the address a contract created from `preimage` will live at.
pub fn contract_id_from_preimage(
    preimage: &ContractIdPreimage,
    network_id: &Hash,
) -> Result<stellar_strkey::Contract, DeployHelperError> {
    let preimage = HashIdPreimage::ContractId(HashIdPreimageContractId {
        network_id: network_id.clone(),
        contract_id_preimage: preimage.clone(),
    });

    let preimage_xdr = preimage
        .to_xdr(Limits::none())
        .map_err(|e| DeployHelperError::XdrEncodingFailed(e.to_string()))?;

    Ok(stellar_strkey::Contract(Sha256::digest(preimage_xdr).into()))
}

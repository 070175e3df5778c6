use crate::error::DeployHelperError;
use ed25519_dalek::{Signer as _, SigningKey};
use sha2::{Digest, Sha256};
use std::fmt;
use stellar_strkey::ed25519::{PrivateKey, PublicKey};
use stellar_xdr::curr::{
    AccountId, DecoratedSignature, Hash, Limits, PublicKey as XDRPublicKey, Signature,
    SignatureHint, Transaction, TransactionEnvelope, TransactionSignaturePayload,
    TransactionSignaturePayloadTaggedTransaction, TransactionV1Envelope, WriteXdr,
};

/// An ed25519 identity able to authorize transactions.
#[derive(Clone)]
pub struct Signer {
    signing_key: SigningKey,
    public_key: PublicKey,
    account_id: AccountId,
}

impl Signer {
    pub fn new(signing_key: SigningKey) -> Self {
        let public_key = PublicKey(*signing_key.verifying_key().as_bytes());
        let account_id = AccountId(XDRPublicKey::PublicKeyTypeEd25519(public_key.0.into()));

        Self {
            signing_key,
            public_key,
            account_id,
        }
    }

    /// Builds a signer from a Stellar secret seed (`S...`).
    pub fn from_secret(secret: &str) -> Result<Self, DeployHelperError> {
        let private_key = PrivateKey::from_string(secret.trim()).map_err(|e| {
            DeployHelperError::ConfigError(format!("Invalid private key: {}", e))
        })?;
        Ok(Self::new(SigningKey::from_bytes(&private_key.0)))
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id.clone()
    }

    /// The account address as a strkey (`G...`).
    pub fn address(&self) -> String {
        self.public_key.to_string()
    }

    pub fn sign_transaction(
        &self,
        tx: &Transaction,
        network_id: &Hash,
    ) -> Result<DecoratedSignature, DeployHelperError> {
        let signature_payload = TransactionSignaturePayload {
            network_id: network_id.clone(),
            tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
        };

        let tx_hash: [u8; 32] = Sha256::digest(
            signature_payload
                .to_xdr(Limits::none())
                .map_err(|e| DeployHelperError::XdrEncodingFailed(e.to_string()))?,
        )
        .into();

        let hint = SignatureHint(
            self.signing_key.verifying_key().to_bytes()[28..]
                .try_into()
                .map_err(|_| {
                    DeployHelperError::SigningFailed("Failed to create signature hint".to_string())
                })?,
        );

        let signature = Signature(
            self.signing_key
                .sign(&tx_hash)
                .to_bytes()
                .to_vec()
                .try_into()
                .map_err(|_| {
                    DeployHelperError::SigningFailed(
                        "Failed to convert signature to XDR".to_string(),
                    )
                })?,
        );

        Ok(DecoratedSignature { hint, signature })
    }

    /// Signs `tx` and wraps it into a submittable envelope.
    pub fn sign_envelope(
        &self,
        tx: &Transaction,
        network_id: &Hash,
    ) -> Result<TransactionEnvelope, DeployHelperError> {
        let signature = self.sign_transaction(tx, network_id)?;
        let signatures = vec![signature].try_into().map_err(|_| {
            DeployHelperError::XdrEncodingFailed("Failed to convert signatures to XDR".to_string())
        })?;

        Ok(TransactionEnvelope::Tx(TransactionV1Envelope {
            tx: tx.clone(),
            signatures,
        }))
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

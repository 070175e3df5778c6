//! Ordered collection of the signers available to the deployer.
use crate::{error::DeployHelperError, Signer};

pub const PRIVATE_KEYS_VAR: &str = "DEPLOYER_PRIVATE_KEYS";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

#[derive(Clone, Debug, Default)]
pub struct Wallet {
    signers: Vec<Signer>,
}

impl Wallet {
    pub fn new(signers: Vec<Signer>) -> Self {
        Self { signers }
    }

    /// Loads the signers from the process environment.
    pub fn from_env() -> Result<Self, DeployHelperError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads signers from `DEPLOYER_PRIVATE_KEYS` (comma separated secret
    /// seeds), or from `PRIVATE_KEY` when the list is not set.
    ///
    /// Missing keys produce an empty wallet; a malformed key is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeployHelperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(PRIVATE_KEYS_VAR)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| lookup(PRIVATE_KEY_VAR))
            .unwrap_or_default();

        let signers = raw
            .split(',')
            .map(str::trim)
            .filter(|secret| !secret.is_empty())
            .map(Signer::from_secret)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { signers })
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    /// The signer used to authorize deployments.
    pub fn first_signer(&self) -> Option<&Signer> {
        self.signers.first()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }
}

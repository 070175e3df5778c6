//! # Deployment Configuration
//!
//! Everything the deployer needs from its surroundings is gathered once at
//! process start into a [`DeployConfig`] and handed to the
//! [`Deployer`](crate::Deployer) explicitly.
use crate::error::DeployHelperError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://soroban-testnet.stellar.org";
pub const DEFAULT_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const DEFAULT_ARTIFACTS_DIR: &str = "target/wasm32-unknown-unknown/release";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

pub const RPC_URL_VAR: &str = "SOROBAN_RPC_URL";
pub const NETWORK_PASSPHRASE_VAR: &str = "SOROBAN_NETWORK_PASSPHRASE";
pub const ARTIFACTS_DIR_VAR: &str = "ARTIFACTS_DIR";
pub const POLL_INTERVAL_VAR: &str = "CONFIRMATION_POLL_MS";

/// Endpoint and identity of the Soroban network to deploy to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub network_passphrase: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            network_passphrase: DEFAULT_NETWORK_PASSPHRASE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployConfig {
    pub network: NetworkConfig,
    /// Directory holding the compiled contract `.wasm` files.
    pub artifacts_dir: PathBuf,
    /// Delay between two confirmation polls. There is no overall timeout.
    pub poll_interval: Duration,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl DeployConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenv()` beforehand to pick up values from a `.env` file.
    pub fn from_env() -> Result<Self, DeployHelperError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the testnet defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeployHelperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let poll_interval = match non_empty(POLL_INTERVAL_VAR) {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| {
                    DeployHelperError::ConfigError(format!(
                        "{} must be a number of milliseconds, got {:?}: {}",
                        POLL_INTERVAL_VAR, raw, e
                    ))
                })?;
                if millis == 0 {
                    return Err(DeployHelperError::ConfigError(format!(
                        "{} must be greater than zero",
                        POLL_INTERVAL_VAR
                    )));
                }
                Duration::from_millis(millis)
            }
            None => defaults.poll_interval,
        };

        Ok(Self {
            network: NetworkConfig {
                rpc_url: non_empty(RPC_URL_VAR).unwrap_or(defaults.network.rpc_url),
                network_passphrase: non_empty(NETWORK_PASSPHRASE_VAR)
                    .unwrap_or(defaults.network.network_passphrase),
            },
            artifacts_dir: non_empty(ARTIFACTS_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.artifacts_dir),
            poll_interval,
        })
    }
}

//! Constructor payload of the Guitar NFT collection.
use crate::{error::DeployHelperError, scval::IntoScVal};
use stellar_xdr::curr::ScVal;

/// Name of the compiled contract in the build artifacts.
pub const CONTRACT_NAME: &str = "MyNFTCollection";

pub const COLLECTION_NAME: &str = "Guitar NFT Collection";
pub const COLLECTION_SYMBOL: &str = "YSBGT";

/// Metadata of tokens #1 to #4, in token id order.
pub const METADATA_URIS: [&str; 4] = [
    "ipfs://bafkreihfaimpkvpkxwxtg7qspifflmzslc2yat3q6tm57d3egoygullhqe",
    "ipfs://bafkreifv4d2jhhfw767ffskqaq3otu4virknudq2okbmzp4hky6wni7veu",
    "ipfs://bafkreib4npnzsmbwle24dorc3mcr73jrcxckb6dt4miue36fixcv5iseja",
    "ipfs://bafkreie3fariiezbistghudqbmjgtwtlsllbknbxe3rlkn7lzd2xmy6ivm",
];

/// Arguments handed to the collection constructor.
///
/// URIs are passed through as-is; whether they resolve is the contract's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    name: String,
    symbol: String,
    metadata_uris: Vec<String>,
}

impl DeploymentParameters {
    /// # Errors
    ///
    /// `InvalidArgument` if the name, the symbol or any URI is empty.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        metadata_uris: Vec<String>,
    ) -> Result<Self, DeployHelperError> {
        let name = name.into();
        let symbol = symbol.into();

        if name.is_empty() {
            return Err(DeployHelperError::InvalidArgument(
                "Collection name must not be empty".to_string(),
            ));
        }
        if symbol.is_empty() {
            return Err(DeployHelperError::InvalidArgument(
                "Collection symbol must not be empty".to_string(),
            ));
        }
        if let Some(index) = metadata_uris.iter().position(String::is_empty) {
            return Err(DeployHelperError::InvalidArgument(format!(
                "Metadata URI #{} must not be empty",
                index + 1
            )));
        }

        Ok(Self {
            name,
            symbol,
            metadata_uris,
        })
    }

    /// The embedded Guitar NFT collection payload.
    pub fn guitar_collection() -> Self {
        Self {
            name: COLLECTION_NAME.to_string(),
            symbol: COLLECTION_SYMBOL.to_string(),
            metadata_uris: METADATA_URIS.iter().map(|uri| uri.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn metadata_uris(&self) -> &[String] {
        &self.metadata_uris
    }

    /// `(name, symbol, metadata_uris)` as constructor arguments.
    pub fn constructor_args(&self) -> Result<Vec<ScVal>, DeployHelperError> {
        Ok(vec![
            self.name.try_into_val()?,
            self.symbol.try_into_val()?,
            self.metadata_uris.as_slice().try_into_val()?,
        ])
    }
}

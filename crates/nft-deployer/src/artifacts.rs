//! # Build Artifacts
//!
//! Locates compiled contracts by name and turns them into
//! [`ContractFactory`] handles.
//!
//! Cargo writes wasm outputs under the snake-cased package name, so a
//! contract called `MyNFTCollection` is looked up as `MyNFTCollection.wasm`
//! first and `my_nft_collection.wasm` second.
use crate::{
    error::DeployHelperError,
    factory::ContractFactory,
    fs::{DefaultFileReader, FileReader},
};
use heck::ToSnakeCase;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

const WASM_EXTENSION: &str = "wasm";

#[derive(Clone)]
pub struct Artifacts {
    dir: PathBuf,
    reader: Arc<dyn FileReader>,
}

impl Artifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_reader(dir, Arc::new(DefaultFileReader))
    }

    pub fn with_reader(dir: impl Into<PathBuf>, reader: Arc<dyn FileReader>) -> Self {
        Self {
            dir: dir.into(),
            reader,
        }
    }

    /// Candidate artifact paths for `name`, in lookup order.
    pub fn candidate_paths(&self, name: &str) -> Vec<PathBuf> {
        let mut candidates = vec![self.dir.join(name).with_extension(WASM_EXTENSION)];
        let snake = name.to_snake_case();
        if snake != name {
            candidates.push(self.dir.join(snake).with_extension(WASM_EXTENSION));
        }
        candidates
    }

    /// Loads the compiled contract `name` and wraps it into a factory.
    ///
    /// # Errors
    ///
    /// Returns `DeployHelperError::FileReadError` listing every path tried if
    /// none of the candidates could be read.
    pub fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, DeployHelperError> {
        if name.trim().is_empty() {
            return Err(DeployHelperError::InvalidArgument(
                "Contract name must not be empty".to_string(),
            ));
        }

        let mut failures = Vec::new();
        for path in self.candidate_paths(name) {
            match self.reader.read(&path) {
                Ok(wasm_bytes) => {
                    debug!(contract = name, path = %path.display(), "loaded contract artifact");
                    return Ok(ContractFactory::new(name, wasm_bytes));
                }
                Err(e) => failures.push(e.to_string()),
            }
        }

        Err(DeployHelperError::FileReadError(format!(
            "No artifact for contract {} in {}: {}",
            name,
            self.dir.display(),
            failures.join("; ")
        )))
    }
}

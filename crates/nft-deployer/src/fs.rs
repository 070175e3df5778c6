use std::fs;
use std::path::Path;

use crate::error::DeployHelperError;

/// Source of artifact bytes.
pub trait FileReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<u8>, DeployHelperError>;
}

/// Reads straight from the local filesystem.
pub struct DefaultFileReader;

impl FileReader for DefaultFileReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>, DeployHelperError> {
        fs::read(path).map_err(|e| {
            DeployHelperError::FileReadError(format!("{}: {}", path.display(), e))
        })
    }
}

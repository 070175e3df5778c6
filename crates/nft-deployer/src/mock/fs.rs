use crate::error::DeployHelperError;
use crate::fs::FileReader;
use std::path::Path;

/// Returns the same canned result for every path.
pub struct MockFileReader {
    mock_data: Result<Vec<u8>, DeployHelperError>,
}

impl MockFileReader {
    pub fn new(mock_data: Result<Vec<u8>, DeployHelperError>) -> Self {
        MockFileReader { mock_data }
    }
}

impl FileReader for MockFileReader {
    fn read(&self, _path: &Path) -> Result<Vec<u8>, DeployHelperError> {
        self.mock_data.clone()
    }
}

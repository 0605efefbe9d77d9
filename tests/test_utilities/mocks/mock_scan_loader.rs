use scandiff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ScanLoader for testing that serves canned documents by path
pub struct MockScanLoader {
    documents: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockScanLoader {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: true,
        }
    }

    pub fn with_document(mut self, path: &str, json: &str) -> Self {
        self.documents.insert(PathBuf::from(path), json.to_string());
        self
    }
}

impl Default for MockScanLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanLoader for MockScanLoader {
    fn load_scan(&self, path: &Path) -> Result<ScanDocument> {
        if self.should_fail {
            anyhow::bail!("Mock scan load failure");
        }
        let json = self
            .documents
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Mock has no document for {}", path.display()))?;
        Ok(serde_json::from_str(json)?)
    }
}

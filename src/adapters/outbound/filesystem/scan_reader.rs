use crate::ports::outbound::ScanLoader;
use crate::scan_comparison::domain::ScanDocument;
use crate::shared::error::ScanDiffError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemScanLoader adapter for loading scan exports from disk
///
/// This adapter implements the ScanLoader port, reading a JSON scan
/// export file and deserializing it into a ScanDocument. A file that
/// is missing, unreadable, or malformed is an error, not an empty
/// document: comparing against a silently empty scan would report
/// every baseline issue as gone.
pub struct FileSystemScanLoader;

impl FileSystemScanLoader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| ScanDiffError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        // Security check: Reject symbolic links
        if metadata.is_symlink() {
            return Err(ScanDiffError::InvalidScanPath {
                path: path.to_path_buf(),
                reason: "Security: Scan file path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        // Security check: Ensure it's a regular file
        if !metadata.is_file() {
            return Err(ScanDiffError::InvalidScanPath {
                path: path.to_path_buf(),
                reason: "Not a regular file".to_string(),
            }
            .into());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(ScanDiffError::InvalidScanPath {
                path: path.to_path_buf(),
                reason: format!(
                    "Security: File is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        // Safe to read the file now
        fs::read_to_string(path).map_err(|e| {
            ScanDiffError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemScanLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanLoader for FileSystemScanLoader {
    fn load_scan(&self, path: &Path) -> Result<ScanDocument> {
        if !path.exists() {
            return Err(ScanDiffError::ScanFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Scan file \"{}\" does not exist.\n   \
                     Please check the path, or export the scan again.",
                    path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;

        let document: ScanDocument =
            serde_json::from_str(&content).map_err(|e| ScanDiffError::ScanFileParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document)
    }
}

use serde::Deserialize;

/// Root entity of one scan export file.
///
/// Every field defaults to its zero value when absent, and unknown
/// fields are ignored, matching the tolerant shape of the export
/// format. A file that parses as JSON always yields a document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanDocument {
    /// Format version carried by the export. Not consulted by the
    /// comparison logic.
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub issues: Vec<IssueRecord>,
}

/// A named security finding and the hosts it affects.
///
/// The name is the matching key across files and is not guaranteed
/// unique within a single file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueRecord {
    #[serde(default)]
    pub name: String,
    /// Severity label from the scanner. Carried through, never compared.
    #[serde(default)]
    pub original_risk_rating: String,
    #[serde(default)]
    pub affected_hosts: Vec<HostRecord>,
}

/// A single network endpoint associated with an issue.
///
/// `ip` and `hostname` may both be empty; no uniqueness constraint is
/// enforced on load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostRecord {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub hostname: String,
    /// Display name of the host. The export calls this field `name`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub port: i64,
    #[serde(default)]
    pub protocol: String,
}

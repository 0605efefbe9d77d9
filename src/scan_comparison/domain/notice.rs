use std::fmt;

/// Non-fatal, per-issue conditions discovered while matching issues
/// across scans. Notices are informational: the affected issue is
/// skipped and processing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The baseline issue has no same-named counterpart in the latest scan.
    IssueNotFound { name: String },
    /// The baseline issue name matches more than one entry in the latest
    /// scan, so there is no single counterpart to compare hosts against.
    AmbiguousIssue { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::IssueNotFound { name } => {
                write!(f, "Issue not present in latest scan: {}", name)
            }
            Notice::AmbiguousIssue { name } => {
                write!(f, "Found multiple instances of {} in latest scan", name)
            }
        }
    }
}

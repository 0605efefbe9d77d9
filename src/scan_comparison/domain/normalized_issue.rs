use crate::scan_comparison::domain::{HostKey, HostRecord, IssueRecord};

/// Comparison-friendly shorthand form of an issue: the matching name
/// plus its hosts in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIssue {
    pub name: String,
    pub hosts: Vec<NormalizedHost>,
}

impl NormalizedIssue {
    pub fn from_record(record: &IssueRecord) -> Self {
        Self {
            name: record.name.clone(),
            hosts: record
                .affected_hosts
                .iter()
                .map(NormalizedHost::from_record)
                .collect(),
        }
    }
}

/// A host reduced to its identifying fields, ready for key comparison
/// and report rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedHost {
    pub ip: String,
    pub hostname: String,
    pub display_name: String,
    pub port: i64,
    pub protocol: String,
}

impl NormalizedHost {
    pub fn from_record(record: &HostRecord) -> Self {
        Self {
            ip: record.ip.clone(),
            hostname: record.hostname.clone(),
            display_name: record.name.clone(),
            port: record.port,
            protocol: record.protocol.clone(),
        }
    }

    /// The composite identity used as the sole equality test for
    /// "is this the same host".
    pub fn key(&self) -> HostKey<'_> {
        HostKey {
            ip: &self.ip,
            hostname: &self.hostname,
            display_name: &self.display_name,
            port: self.port,
            protocol: &self.protocol,
        }
    }
}

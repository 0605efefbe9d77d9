use crate::scan_comparison::domain::{NormalizedIssue, ScanDocument};

/// Normalizer service converting a loaded document into its
/// comparison-friendly shorthand form.
///
/// This service contains pure transformation logic. It has no I/O
/// dependencies and works only with domain objects.
pub struct Normalizer;

impl Normalizer {
    /// Produces exactly one NormalizedIssue per issue in the document,
    /// preserving input order for both issues and their hosts.
    ///
    /// Duplicate issue names and duplicate hosts pass through unchanged;
    /// deduplication is not this stage's concern.
    pub fn normalize(document: &ScanDocument) -> Vec<NormalizedIssue> {
        document
            .issues
            .iter()
            .map(NormalizedIssue::from_record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_comparison::domain::{HostRecord, IssueRecord};

    fn host(ip: &str, port: i64) -> HostRecord {
        HostRecord {
            ip: ip.to_string(),
            port,
            protocol: "tcp".to_string(),
            ..Default::default()
        }
    }

    fn issue(name: &str, hosts: Vec<HostRecord>) -> IssueRecord {
        IssueRecord {
            name: name.to_string(),
            original_risk_rating: "Medium".to_string(),
            affected_hosts: hosts,
        }
    }

    #[test]
    fn test_normalize_empty_document() {
        let normalized = Normalizer::normalize(&ScanDocument::default());
        assert!(normalized.is_empty());
    }

    #[test]
    fn test_normalize_one_issue_per_record_in_order() {
        let document = ScanDocument {
            version: 1,
            issues: vec![
                issue("XSS", vec![host("10.0.0.2", 443)]),
                issue("SQL Injection", vec![host("10.0.0.1", 80)]),
            ],
        };

        let normalized = Normalizer::normalize(&document);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].name, "XSS");
        assert_eq!(normalized[1].name, "SQL Injection");
        assert_eq!(normalized[0].hosts.len(), 1);
        assert_eq!(normalized[0].hosts[0].ip, "10.0.0.2");
    }

    #[test]
    fn test_normalize_preserves_duplicate_issues() {
        let document = ScanDocument {
            version: 1,
            issues: vec![
                issue("Weak Ciphers", vec![host("10.0.0.1", 443)]),
                issue("Weak Ciphers", vec![host("10.0.0.2", 443)]),
            ],
        };

        let normalized = Normalizer::normalize(&document);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].name, "Weak Ciphers");
        assert_eq!(normalized[1].name, "Weak Ciphers");
    }

    #[test]
    fn test_normalize_preserves_duplicate_hosts() {
        let document = ScanDocument {
            version: 1,
            issues: vec![issue(
                "Expired Certificate",
                vec![host("10.0.0.1", 443), host("10.0.0.1", 443)],
            )],
        };

        let normalized = Normalizer::normalize(&document);
        assert_eq!(normalized[0].hosts.len(), 2);
        assert_eq!(normalized[0].hosts[0], normalized[0].hosts[1]);
    }

    #[test]
    fn test_normalize_preserves_host_order() {
        let document = ScanDocument {
            version: 1,
            issues: vec![issue(
                "Directory Listing",
                vec![host("10.0.0.9", 80), host("10.0.0.1", 80), host("10.0.0.5", 80)],
            )],
        };

        let normalized = Normalizer::normalize(&document);
        let ips: Vec<&str> = normalized[0].hosts.iter().map(|h| h.ip.as_str()).collect();
        assert_eq!(ips, vec!["10.0.0.9", "10.0.0.1", "10.0.0.5"]);
    }
}

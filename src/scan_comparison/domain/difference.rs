use crate::scan_comparison::domain::NormalizedHost;

/// An issue whose host coverage shrank between two scans: the issue
/// name plus the baseline hosts with no counterpart in the latest scan.
///
/// Only constructed with a non-empty host list; a fully matched issue
/// produces no entry at all.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceEntry {
    pub name: String,
    pub hosts: Vec<NormalizedHost>,
}

impl DifferenceEntry {
    pub fn new(name: String, hosts: Vec<NormalizedHost>) -> Self {
        Self { name, hosts }
    }
}

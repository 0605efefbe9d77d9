use crate::scan_comparison::domain::{DifferenceEntry, HostKey, NormalizedIssue, Notice};
use std::collections::HashSet;

/// Receives notices as the differ discovers them.
///
/// Notices stream out mid-pass, while difference entries are only
/// returned once the whole baseline has been processed.
pub trait NoticeSink {
    fn notice(&mut self, notice: Notice);
}

impl<F: FnMut(Notice)> NoticeSink for F {
    fn notice(&mut self, notice: Notice) {
        self(notice)
    }
}

/// Outcome of looking up a baseline issue name in the comparator scan.
enum IssueLookup<'a> {
    Missing,
    Ambiguous,
    Unique(&'a NormalizedIssue),
}

/// Differ service computing, per baseline issue, the hosts that are no
/// longer reported as affected in the comparator scan.
///
/// This service contains pure comparison logic. It has no I/O
/// dependencies and works only with domain objects.
pub struct Differ;

impl Differ {
    /// Compares two normalized scans.
    ///
    /// For each baseline issue, in baseline order:
    /// - a name with no comparator counterpart emits
    ///   `Notice::IssueNotFound` and is skipped entirely;
    /// - a name matching more than one comparator entry emits
    ///   `Notice::AmbiguousIssue` and is skipped entirely (ambiguous
    ///   matches are never resolved automatically);
    /// - a unique match compares host keys, and any baseline host
    ///   absent from the counterpart lands in a `DifferenceEntry`.
    ///
    /// Entries keep baseline issue order; hosts within an entry keep
    /// baseline host order. Fully matched issues produce no entry.
    pub fn diff(
        baseline: &[NormalizedIssue],
        comparator: &[NormalizedIssue],
        notices: &mut dyn NoticeSink,
    ) -> Vec<DifferenceEntry> {
        let mut differences = Vec::new();

        for issue in baseline {
            let counterpart = match Self::find_issue(&issue.name, comparator) {
                IssueLookup::Missing => {
                    notices.notice(Notice::IssueNotFound {
                        name: issue.name.clone(),
                    });
                    continue;
                }
                IssueLookup::Ambiguous => {
                    notices.notice(Notice::AmbiguousIssue {
                        name: issue.name.clone(),
                    });
                    continue;
                }
                IssueLookup::Unique(counterpart) => counterpart,
            };

            let retained: HashSet<HostKey<'_>> =
                counterpart.hosts.iter().map(|host| host.key()).collect();

            let dropped: Vec<_> = issue
                .hosts
                .iter()
                .filter(|host| !retained.contains(&host.key()))
                .cloned()
                .collect();

            if !dropped.is_empty() {
                differences.push(DifferenceEntry::new(issue.name.clone(), dropped));
            }
        }

        differences
    }

    /// Scans the whole comparator sequence for entries matching `name`.
    fn find_issue<'a>(name: &str, comparator: &'a [NormalizedIssue]) -> IssueLookup<'a> {
        let mut matches = comparator.iter().filter(|issue| issue.name == name);

        match (matches.next(), matches.next()) {
            (None, _) => IssueLookup::Missing,
            (Some(only), None) => IssueLookup::Unique(only),
            (Some(_), Some(_)) => IssueLookup::Ambiguous,
        }
    }
}

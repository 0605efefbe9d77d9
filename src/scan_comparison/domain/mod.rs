pub mod difference;
pub mod host_key;
pub mod normalized_issue;
pub mod notice;
pub mod scan_document;

pub use difference::DifferenceEntry;
pub use host_key::HostKey;
pub use normalized_issue::{NormalizedHost, NormalizedIssue};
pub use notice::Notice;
pub use scan_document::{HostRecord, IssueRecord, ScanDocument};

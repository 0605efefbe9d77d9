/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod scan_comparison_port;

pub use scan_comparison_port::ScanComparisonPort;

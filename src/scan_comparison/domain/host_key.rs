/// Composite identity of a host within an issue.
///
/// Host equality is decided by the full tuple of identifying fields.
/// Keeping the fields structured (rather than concatenating them into a
/// single string) preserves field boundaries: ip "1" / hostname "23"
/// and ip "12" / hostname "3" are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostKey<'a> {
    pub ip: &'a str,
    pub hostname: &'a str,
    pub display_name: &'a str,
    pub port: i64,
    pub protocol: &'a str,
}

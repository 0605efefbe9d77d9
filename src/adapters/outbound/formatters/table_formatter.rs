use crate::ports::outbound::ReportFormatter;
use crate::scan_comparison::domain::DifferenceEntry;
use crate::shared::Result;
use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

/// Report line emitted when the comparison found nothing to report
const NO_DIFFERENCES_LINE: &str = "No differences found!";

/// TableReportFormatter adapter rendering difference entries as ASCII tables
///
/// This adapter implements the ReportFormatter port. Each entry renders
/// as the issue name followed by one table row per dropped host, with a
/// blank line separating entries.
pub struct TableReportFormatter;

impl TableReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_entry(entry: &DifferenceEntry, output: &mut String) {
        output.push_str(&entry.name);
        output.push('\n');

        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.set_header(vec!["Name", "Hostname", "IP", "Port", "Protocol"]);

        for host in &entry.hosts {
            table.add_row(vec![
                host.display_name.clone(),
                host.hostname.clone(),
                host.ip.clone(),
                host.port.to_string(),
                host.protocol.clone(),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output.push('\n');
    }
}

impl Default for TableReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableReportFormatter {
    fn format(&self, differences: &[DifferenceEntry]) -> Result<String> {
        if differences.is_empty() {
            return Ok(format!("{}\n", NO_DIFFERENCES_LINE));
        }

        let mut output = String::new();
        for entry in differences {
            Self::render_entry(entry, &mut output);
        }

        Ok(output)
    }
}

/// Formatter adapters for rendering comparison reports
mod table_formatter;

pub use table_formatter::TableReportFormatter;

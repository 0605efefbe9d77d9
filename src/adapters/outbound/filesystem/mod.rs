/// Filesystem adapters for reading scan export files
mod scan_reader;

pub use scan_reader::FileSystemScanLoader;

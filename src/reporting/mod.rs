//! Scan aggregation and report rendering

pub mod scan_report;
pub mod report_writer;

pub use scan_report::{run_scan, ScanReport};
pub use report_writer::{write_json_report, write_report, DISPLAY_LIMIT};

#![forbid(unsafe_code)]

pub mod catalog;
pub mod report;

pub use catalog::{CatalogSource, InMemoryCatalog, JsonCatalogFile, parse_catalog};
pub use report::{
    DirectorySink, ExportError, InMemorySink, ReportSink, SavedReport, build_workbook,
    report_file_name,
};

//! Reports module - report building and export serialization.

mod csv_writer;
mod reports_model;
mod reports_service;

// Re-export the public interface
pub use csv_writer::to_delimited_text;
pub use reports_model::{ReportData, ReportKind, TabularDocument};
pub use reports_service::{build_report, to_tabular_document, ReportService, ReportServiceTrait};

//! Report domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of report offered on the export page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Key metrics as label/value pairs.
    Summary,
    /// One row per transaction.
    Transactions,
    /// One row per budgeted category.
    Budget,
}

/// Tabular record set produced by the report builder. Every value is
/// already rendered to its export string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportData {
    pub fn new(columns: Vec<&str>) -> Self {
        ReportData {
            columns: columns.into_iter().map(str::to_string).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Structured page description handed to a paginated-document renderer.
/// Shaping only; no rendering happens in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularDocument {
    pub title: String,
    /// Caller-supplied generation instant, kept out of the engine so the
    /// output stays deterministic.
    pub generated_at: NaiveDateTime,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

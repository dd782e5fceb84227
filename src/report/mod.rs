//! Text presentation of statistics
//!
//! Every view renders as an aligned table, JSON, or CSV.

pub mod views;

pub use views::{RawMatches, TeamComparison, TeamList, TeamOverview, TossSummary};

use crate::{Result, StatsError};
use serde::Serialize;

/// Output format for rendered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

/// A view that can be printed in any [`OutputFormat`]
pub trait Report: Serialize {
    /// Human-readable table
    fn table(&self) -> String;

    /// Header and rows for CSV output
    fn rows(&self) -> (Vec<String>, Vec<Vec<String>>);
}

/// Render a view in the requested format
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report.table()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => {
            let (header, rows) = report.rows();
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(&header)?;
            for row in rows {
                writer.write_record(&row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| StatsError::Io(e.into_error()))?;
            String::from_utf8(bytes)
                .map_err(|e| StatsError::InvalidInput(format!("non UTF-8 output: {}", e)))
        }
    }
}

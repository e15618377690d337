//! JSON export of inferred rules with their metrics

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{RuleMetrics, RuleTable};

/// Metadata about the inference run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// roughset version
    pub roughset_version: String,
    /// Input file path
    pub input_file: String,
    /// Identifier column name
    pub id_column: String,
    /// Decision column name
    pub decision_column: String,
    /// Feature column names, in declared order
    pub feature_columns: Vec<String>,
    /// Whether objects without a reduct were kept as empty rules
    pub include_empty: bool,
    /// Support threshold applied to the exported rules
    pub min_support: f64,
    /// Confidence threshold applied to the exported rules
    pub min_confidence: f64,
    /// Lift threshold applied to the exported rules
    pub min_lift: f64,
}

/// Summary statistics of the run
#[derive(Serialize)]
pub struct ExportSummary {
    /// Object rows in the input table
    pub rows: usize,
    /// Rules found by the reduct search
    pub rules_total: usize,
    /// Rules remaining after deduplication
    pub rules_after_dedup: usize,
    /// Rules that cleared all thresholds
    pub rules_exported: usize,
}

/// A single rule with its metrics
#[derive(Serialize)]
pub struct RuleExportEntry {
    /// Set feature conditions only; unset features are omitted
    pub conditions: serde_json::Map<String, serde_json::Value>,
    /// The decision value the rule concludes
    pub decision: serde_json::Value,
    pub support: f64,
    pub confidence: Option<f64>,
    pub lift: Option<f64>,
}

/// Complete rules export with metadata
#[derive(Serialize)]
pub struct RulesExport {
    pub metadata: ExportMetadata,
    pub summary: ExportSummary,
    pub rules: Vec<RuleExportEntry>,
}

/// Build export entries from a rule table and its metrics.
pub fn build_entries(rules: &RuleTable, metrics: &[RuleMetrics]) -> Vec<RuleExportEntry> {
    rules
        .rules
        .iter()
        .zip(metrics.iter())
        .map(|(rule, m)| {
            let mut conditions = serde_json::Map::new();
            for (name, value) in rules.roles.feature_columns.iter().zip(rule.conditions.iter()) {
                if let Some(value) = value {
                    conditions.insert(name.clone(), value.to_json());
                }
            }
            RuleExportEntry {
                conditions,
                decision: rule
                    .decision
                    .as_ref()
                    .map_or(serde_json::Value::Null, |v| v.to_json()),
                support: m.support,
                confidence: m.confidence,
                lift: m.lift,
            }
        })
        .collect()
}

/// Write the export document as pretty-printed JSON.
pub fn write_rules_export(export: &RulesExport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, export)
        .with_context(|| format!("Failed to write JSON export: {}", path.display()))?;
    Ok(())
}

/// Current timestamp for export metadata.
pub fn export_timestamp() -> String {
    Utc::now().to_rfc3339()
}

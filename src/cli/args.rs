//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// roughset - Infer reduct rules and rule-quality metrics from a decision table
#[derive(Parser, Debug)]
#[command(name = "roughset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Object identifier column; values must be unique.
    /// If not provided, will be selected interactively (default: first column).
    #[arg(long)]
    pub id_column: Option<String>,

    /// Decision attribute column.
    /// If not provided, will be selected interactively (default: last column).
    #[arg(short = 'd', long)]
    pub decision_column: Option<String>,

    /// Feature attribute columns (comma-separated).
    /// If not provided, will be selected interactively (default: everything
    /// between the identifier and decision columns).
    #[arg(short = 'f', long, value_delimiter = ',')]
    pub feature_columns: Vec<String>,

    /// Keep objects without any qualifying reduct as all-unset "empty" rules
    #[arg(long, default_value = "false")]
    pub include_empty: bool,

    /// Skip deduplication and keep one rule per originating object
    #[arg(long, default_value = "false")]
    pub keep_duplicates: bool,

    /// Minimum support - drop rules below this fraction of the table
    #[arg(long, default_value = "0.0", value_parser = validate_unit_interval)]
    pub min_support: f64,

    /// Minimum confidence - drop rules below this conditional accuracy
    #[arg(long, default_value = "0.0", value_parser = validate_unit_interval)]
    pub min_confidence: f64,

    /// Minimum lift - drop rules below this co-occurrence ratio
    #[arg(long, default_value = "0.0", value_parser = validate_non_negative)]
    pub min_lift: f64,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to the input directory with a '_rules' suffix
    /// (e.g. data.csv -> data_rules.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a JSON report next to the output file
    #[arg(long, default_value = "false")]
    pub export_json: bool,

    /// Skip interactive prompts; column roles fall back to positional defaults
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check feature independence and approximation sets of a decision table
    Analyze {
        /// Input file path (CSV or Parquet)
        input: PathBuf,

        /// Object identifier column (default: first column)
        #[arg(long)]
        id_column: Option<String>,

        /// Decision attribute column (default: last column)
        #[arg(short = 'd', long)]
        decision_column: Option<String>,

        /// Feature attribute columns (comma-separated)
        #[arg(short = 'f', long, value_delimiter = ',')]
        feature_columns: Vec<String>,

        /// Decision value whose lower/upper approximations are reported.
        /// Matched against the decision column's values by their text form.
        #[arg(long)]
        decision_value: Option<String>,

        /// Also print the full equivalence classes under the feature set
        #[arg(long, default_value = "false")]
        show_classes: bool,

        /// Skip interactive prompts
        #[arg(long, default_value = "false")]
        no_confirm: bool,

        /// Number of rows to use for schema inference (CSV only)
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },

    /// Evaluate a saved rules file against another decision table
    Apply {
        /// Rules file path (CSV or Parquet, e.g. produced by the infer run)
        rules: PathBuf,

        /// Data file path the rules are scored against
        data: PathBuf,

        /// Object identifier column of the data table (default: first column)
        #[arg(long)]
        id_column: Option<String>,

        /// Decision attribute column (default: last column)
        #[arg(short = 'd', long)]
        decision_column: Option<String>,

        /// Feature attribute columns (comma-separated)
        #[arg(short = 'f', long, value_delimiter = ',')]
        feature_columns: Vec<String>,

        /// Minimum support threshold
        #[arg(long, default_value = "0.0", value_parser = validate_unit_interval)]
        min_support: f64,

        /// Minimum confidence threshold
        #[arg(long, default_value = "0.0", value_parser = validate_unit_interval)]
        min_confidence: f64,

        /// Minimum lift threshold
        #[arg(long, default_value = "0.0", value_parser = validate_non_negative)]
        min_lift: f64,

        /// Output file path (defaults to the rules file with a
        /// '_test_metrics' suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip interactive prompts
        #[arg(long, default_value = "false")]
        no_confirm: bool,

        /// Number of rows to use for schema inference (CSV only)
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },
}

impl Cli {
    /// Get the input path for the infer pipeline.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path sits next to the input with a '_rules' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.output.clone().unwrap_or_else(|| derive_path(input, "_rules")))
    }

    /// Path of the JSON report, derived from the output path.
    pub fn export_path(&self) -> Option<PathBuf> {
        Some(self.output_path()?.with_extension("json"))
    }
}

/// Derive a sibling path with a suffix appended to the file stem.
pub fn derive_path(input: &std::path::Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = input.extension().and_then(|e| e.to_str()).unwrap_or("csv");
    parent.join(format!("{}{}.{}", stem, suffix, extension))
}

/// Validator for ratio thresholds in [0, 1]
fn validate_unit_interval(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!("threshold must be between 0.0 and 1.0, got {}", value))
    } else {
        Ok(value)
    }
}

/// Validator for the lift threshold (unbounded above)
fn validate_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value < 0.0 {
        Err(format!("threshold must be non-negative, got {}", value))
    } else {
        Ok(value)
    }
}

//! `apply` subcommand: score a saved rules file against another table

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use crate::cli::args::derive_path;
use crate::cli::prompts::resolve_roles;
use crate::pipeline::{
    evaluate_rules, load_dataset, passes_thresholds, rules_with_metrics_dataframe, save_dataset,
    DecisionTable, RuleTable,
};
use crate::utils::{print_count, print_info, print_success};

#[allow(clippy::too_many_arguments)]
pub fn run_apply(
    rules_path: &Path,
    data_path: &Path,
    id_column: Option<String>,
    decision_column: Option<String>,
    feature_columns: Vec<String>,
    min_support: f64,
    min_confidence: f64,
    min_lift: f64,
    output: Option<PathBuf>,
    no_confirm: bool,
    infer_schema_length: usize,
) -> Result<()> {
    let data_df = load_dataset(data_path, infer_schema_length)?;
    let columns: Vec<String> = data_df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let roles = resolve_roles(
        &columns,
        id_column,
        decision_column,
        feature_columns,
        no_confirm,
    )?;

    let reference = DecisionTable::from_dataframe(&data_df, roles.clone())
        .context("Data file does not form a valid decision table")?;

    let rules_df = load_dataset(rules_path, infer_schema_length)?;
    let rules = RuleTable::from_dataframe(&rules_df, roles)
        .context("Rules file does not match the data table's columns")?;

    println!(
        "\n {} Scoring {} rules against {} ({} objects)",
        style("◆").cyan().bold(),
        rules.len(),
        style(data_path.display()).dim(),
        reference.height()
    );

    let metrics = evaluate_rules(&rules, &reference)?;

    let keep: Vec<bool> = metrics
        .iter()
        .map(|m| passes_thresholds(m, min_support, min_confidence, min_lift))
        .collect();
    let kept_rules = RuleTable {
        roles: rules.roles.clone(),
        rules: rules
            .rules
            .iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|(rule, _)| rule.clone())
            .collect(),
    };
    let kept_metrics: Vec<_> = metrics
        .iter()
        .zip(keep.iter())
        .filter(|(_, keep)| **keep)
        .map(|(m, _)| *m)
        .collect();

    print_count("rules scored", rules.len(), None);
    let thresholds = format!(
        "(support >= {}, confidence >= {}, lift >= {})",
        min_support, min_confidence, min_lift
    );
    print_count("rules above thresholds", kept_rules.len(), Some(&thresholds));
    if kept_rules.is_empty() {
        print_info("No rules cleared the thresholds; nothing to save");
        return Ok(());
    }

    for (rule, m) in kept_rules.rules.iter().zip(kept_metrics.iter()).take(5) {
        println!(
            "     {}  [support {:.3}, confidence {:.3}, lift {:.3}]",
            kept_rules.render_rule(rule),
            m.support,
            m.confidence.unwrap_or(f64::NAN),
            m.lift.unwrap_or(f64::NAN)
        );
    }
    if kept_rules.len() > 5 {
        print_info(&format!("... and {} more", kept_rules.len() - 5));
    }

    let output = output.unwrap_or_else(|| derive_path(rules_path, "_test_metrics"));
    let mut out_df = rules_with_metrics_dataframe(&kept_rules, &kept_metrics)
        .context("Failed to assemble the scored rules table")?;
    save_dataset(&mut out_df, &output)?;
    print_success(&format!("Saved scored rules to {}", output.display()));

    Ok(())
}

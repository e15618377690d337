//! Roughset: Reduct Rule Inference CLI Tool
//!
//! A command-line tool for inferring decision rules from symbolic decision
//! tables using rough-set reduct search.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::{confirm_step, resolve_roles, run_analyze, run_apply, Cli, Commands};
use pipeline::{
    create_reduct_rules, evaluate_rules, load_dataset, passes_thresholds,
    rules_with_metrics_dataframe, save_dataset, DecisionTable, RuleTable,
};
use report::{
    build_entries, export_timestamp, write_rules_export, ExportMetadata, ExportSummary,
    InferenceSummary, RulesExport,
};
use utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = cli.command.take() {
        return match command {
            Commands::Analyze {
                input,
                id_column,
                decision_column,
                feature_columns,
                decision_value,
                show_classes,
                no_confirm,
                infer_schema_length,
            } => run_analyze(
                &input,
                id_column,
                decision_column,
                feature_columns,
                decision_value,
                show_classes,
                no_confirm,
                infer_schema_length,
            ),
            Commands::Apply {
                rules,
                data,
                id_column,
                decision_column,
                feature_columns,
                min_support,
                min_confidence,
                min_lift,
                output,
                no_confirm,
                infer_schema_length,
            } => run_apply(
                &rules,
                &data,
                id_column,
                decision_column,
                feature_columns,
                min_support,
                min_confidence,
                min_lift,
                output,
                no_confirm,
                infer_schema_length,
            ),
        };
    }

    // Main infer pipeline - require input
    let input = cli.input().cloned().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;

    // Derive output path from input if not provided
    let output_path = cli.output_path().unwrap();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Load dataset
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", df.height());
    println!("      Columns: {}", df.width());

    // Determine column roles - either from flags or interactive selection
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let roles = resolve_roles(
        &column_names,
        cli.id_column.clone(),
        cli.decision_column.clone(),
        cli.feature_columns.clone(),
        cli.no_confirm,
    )?;

    print_config(
        &input,
        &roles.id_column,
        &roles.decision_column,
        roles.feature_columns.len(),
        &output_path,
    );

    // Subset count doubles per feature, so warn before long searches
    if roles.feature_columns.len() > 12 && !cli.no_confirm {
        let candidates = (1u64 << roles.feature_columns.len()) - 2;
        let proceed = confirm_step(&format!(
            "{} feature columns mean {} candidate subsets per object. Continue?",
            roles.feature_columns.len(),
            candidates
        ))?;
        if !proceed {
            println!("Cancelled by user.");
            return Ok(());
        }
    }

    let table = DecisionTable::from_dataframe(&df, roles)?;
    let mut summary = InferenceSummary::new(table.height(), table.roles().feature_columns.len());
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Step 2: Reduct search
    print_step_header(1, "Reduct Search");

    let step_start = Instant::now();
    let rules = create_reduct_rules(&table, cli.include_empty)?;
    summary.rules_total = rules.len();
    summary.empty_rules = rules.empty_rule_count();

    print_count("reduct rule(s)", rules.len(), None);
    if summary.empty_rules > 0 {
        print_info(&format!(
            "{} object(s) produced no informative reduct",
            summary.empty_rules
        ));
    }
    let search_elapsed = step_start.elapsed();
    summary.set_search_time(search_elapsed);
    print_step_time(search_elapsed);

    // Step 3: Deduplicate
    print_step_header(2, "Deduplication");

    let rules = if cli.keep_duplicates {
        print_info("Keeping duplicate rules (--keep-duplicates)");
        rules
    } else {
        let deduped = rules.deduplicate();
        let removed = rules.len() - deduped.len();
        if removed == 0 {
            print_info("No duplicate rules found");
        } else {
            print_count("duplicate rule(s) removed", removed, None);
        }
        deduped
    };
    summary.rules_after_dedup = rules.len();

    // Step 4: Score rules
    print_step_header(3, "Rule Metrics");

    let step_start = Instant::now();
    let spinner = create_spinner("Scoring rules against the table...");
    let metrics = evaluate_rules(&rules, &table)?;
    if rules.is_empty() {
        finish_with_warning(&spinner, "No rules to score");
    } else {
        finish_with_success(&spinner, "Metrics calculated");
    }

    let keep: Vec<bool> = metrics
        .iter()
        .map(|m| passes_thresholds(m, cli.min_support, cli.min_confidence, cli.min_lift))
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
    summary.rules_kept = kept_rules.len();

    let dropped = rules.len() - kept_rules.len();
    if dropped > 0 {
        let thresholds = format!(
            "(support >= {}, confidence >= {}, lift >= {})",
            cli.min_support, cli.min_confidence, cli.min_lift
        );
        print_count("rule(s) below thresholds", dropped, Some(&thresholds));
    }

    for (rule, m) in kept_rules.rules.iter().zip(kept_metrics.iter()).take(3) {
        println!(
            "      {}  {}",
            kept_rules.render_rule(rule),
            style(format!(
                "[support {:.3}, confidence {:.3}, lift {:.3}]",
                m.support,
                m.confidence.unwrap_or(f64::NAN),
                m.lift.unwrap_or(f64::NAN)
            ))
            .dim()
        );
    }
    if kept_rules.len() > 3 {
        print_info(&format!("... and {} more", kept_rules.len() - 3));
    }
    let metrics_elapsed = step_start.elapsed();
    summary.set_metrics_time(metrics_elapsed);
    print_step_time(metrics_elapsed);

    // Step 5: Save output
    print_step_header(4, "Save Results");

    let step_start = Instant::now();
    if kept_rules.is_empty() {
        print_info("No rules cleared the thresholds; nothing to save");
    } else {
        let spinner = create_spinner("Writing rules file...");
        let mut out_df = rules_with_metrics_dataframe(&kept_rules, &kept_metrics)?;
        save_dataset(&mut out_df, &output_path)?;
        finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

        if cli.export_json {
            let export_path = cli.export_path().unwrap();
            let export = RulesExport {
                metadata: ExportMetadata {
                    timestamp: export_timestamp(),
                    roughset_version: env!("CARGO_PKG_VERSION").to_string(),
                    input_file: input.display().to_string(),
                    id_column: kept_rules.roles.id_column.clone(),
                    decision_column: kept_rules.roles.decision_column.clone(),
                    feature_columns: kept_rules.roles.feature_columns.clone(),
                    include_empty: cli.include_empty,
                    min_support: cli.min_support,
                    min_confidence: cli.min_confidence,
                    min_lift: cli.min_lift,
                },
                summary: ExportSummary {
                    rows: table.height(),
                    rules_total: summary.rules_total,
                    rules_after_dedup: summary.rules_after_dedup,
                    rules_exported: kept_rules.len(),
                },
                rules: build_entries(&kept_rules, &kept_metrics),
            };
            write_rules_export(&export, &export_path)?;
            print_success(&format!("JSON report: {}", export_path.display()));
        }
    }
    let save_elapsed = step_start.elapsed();
    summary.set_save_time(save_elapsed);
    print_step_time(save_elapsed);

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}

//! `analyze` subcommand: feature independence and approximation sets

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::cli::prompts::resolve_roles;
use crate::pipeline::{
    boundary_region, feature_dependence, load_dataset, lower_approximation, partition,
    upper_approximation, DecisionTable, Dependence, Value,
};
use crate::utils::print_info;

#[allow(clippy::too_many_arguments)]
pub fn run_analyze(
    input: &Path,
    id_column: Option<String>,
    decision_column: Option<String>,
    feature_columns: Vec<String>,
    decision_value: Option<String>,
    show_classes: bool,
    no_confirm: bool,
    infer_schema_length: usize,
) -> Result<()> {
    let df = load_dataset(input, infer_schema_length)?;
    let columns: Vec<String> = df
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

    let table = DecisionTable::from_dataframe(&df, roles)
        .context("Input does not form a valid decision table")?;

    println!(
        "\n {} Analyzing {} ({} objects, {} features)",
        style("◆").cyan().bold(),
        style(input.display()).dim(),
        table.height(),
        table.roles().feature_columns.len()
    );

    if show_classes {
        print_equivalence_classes(&table)?;
    }

    print_dependence(&table)?;

    if let Some(raw) = decision_value {
        let value = match_decision_value(&table, &raw)?;
        print_approximations(&table, &value)?;
    } else {
        print_info("Pass --decision-value to report approximation sets");
    }

    Ok(())
}

fn print_equivalence_classes(table: &DecisionTable) -> Result<()> {
    let features = table.roles().feature_columns.clone();
    let classes = partition(table, &features)?;

    println!(
        "\n   Equivalence classes under {{{}}}:",
        classes.attributes().join(", ")
    );
    for class in classes.classes() {
        let key: Vec<String> = class.key.iter().map(|v| v.to_string()).collect();
        println!(
            "     ({}) -> {}",
            key.join(", "),
            render_set(&class.members)
        );
    }
    Ok(())
}

fn print_dependence(table: &DecisionTable) -> Result<()> {
    let verdicts = feature_dependence(table)?;

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(vec![
        Cell::new("Feature").add_attribute(Attribute::Bold),
        Cell::new("Verdict").add_attribute(Attribute::Bold),
    ]);
    for (feature, verdict) in &verdicts {
        let cell = match verdict {
            Dependence::Dependent => Cell::new("dependent").fg(Color::Yellow),
            Dependence::Independent => Cell::new("independent").fg(Color::Green),
        };
        out.add_row(vec![Cell::new(feature), cell]);
    }

    println!("\n   Feature independence (against the remaining features):");
    for line in out.to_string().lines() {
        println!("   {}", line);
    }
    Ok(())
}

fn print_approximations(table: &DecisionTable, value: &Value) -> Result<()> {
    let features = table.roles().feature_columns.clone();
    let decision_column = &table.roles().decision_column;

    let target = table.decision_class(value)?;
    let lower = lower_approximation(table, &features, value)?;
    let upper = upper_approximation(table, &features, value)?;
    let boundary = boundary_region(table, &features, value)?;

    println!(
        "\n   Approximations of {} = {}:",
        style(decision_column).bold(),
        style(value).bold()
    );
    println!("     Decision class   ({:>3}): {}", target.len(), render_set(&target));
    println!("     Lower (certain)  ({:>3}): {}", lower.len(), render_set(&lower));
    println!("     Upper (possible) ({:>3}): {}", upper.len(), render_set(&upper));
    println!("     Boundary         ({:>3}): {}", boundary.len(), render_set(&boundary));
    Ok(())
}

/// Match a textual decision value against the column's actual values.
fn match_decision_value(table: &DecisionTable, raw: &str) -> Result<Value> {
    let unique = table.unique_decision_values()?;
    unique
        .iter()
        .find(|v| v.to_string() == raw)
        .cloned()
        .ok_or_else(|| {
            let available: Vec<String> = unique.iter().map(|v| v.to_string()).collect();
            anyhow::anyhow!(
                "Decision value '{}' does not occur in column '{}'. Available values: {:?}",
                raw,
                table.roles().decision_column,
                available
            )
        })
}

fn render_set(set: &BTreeSet<Value>) -> String {
    let items: Vec<String> = set.iter().map(|v| v.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

//! Interactive prompts for column-role selection using dialoguer

use anyhow::{Context, Result};
use dialoguer::{Confirm, MultiSelect, Select};

use crate::pipeline::ColumnRoles;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Resolve the column roles from flags, prompts, or positional defaults.
///
/// Positional defaults follow the common decision-table layout: first
/// column is the object identifier, last column is the decision, and
/// everything in between is a feature. Flags always win; without
/// `no_confirm`, missing roles are selected interactively.
pub fn resolve_roles(
    columns: &[String],
    id_column: Option<String>,
    decision_column: Option<String>,
    feature_columns: Vec<String>,
    no_confirm: bool,
) -> Result<ColumnRoles> {
    anyhow::ensure!(
        columns.len() >= 2,
        "Dataset needs at least an identifier and a decision column, found {}",
        columns.len()
    );

    let id_column = match id_column {
        Some(column) => column,
        None if no_confirm => columns[0].clone(),
        None => select_column("Object identifier column", columns, 0)?,
    };

    let decision_column = match decision_column {
        Some(column) => column,
        None if no_confirm => columns[columns.len() - 1].clone(),
        None => select_column("Decision column", columns, columns.len() - 1)?,
    };

    let feature_columns = if !feature_columns.is_empty() {
        feature_columns
    } else {
        let candidates: Vec<String> = columns
            .iter()
            .filter(|c| **c != id_column && **c != decision_column)
            .cloned()
            .collect();
        anyhow::ensure!(
            !candidates.is_empty(),
            "No feature columns remain after assigning identifier and decision"
        );
        if no_confirm {
            candidates
        } else {
            select_features(&candidates)?
        }
    };

    Ok(ColumnRoles::new(id_column, feature_columns, decision_column))
}

fn select_column(prompt: &str, columns: &[String], default: usize) -> Result<String> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(columns)
        .default(default)
        .interact()
        .context("Column selection cancelled")?;
    Ok(columns[index].clone())
}

fn select_features(candidates: &[String]) -> Result<Vec<String>> {
    let defaults = vec![true; candidates.len()];
    let picked = MultiSelect::new()
        .with_prompt("Feature columns (space to toggle, enter to accept)")
        .items(candidates)
        .defaults(&defaults)
        .interact()
        .context("Feature selection cancelled")?;
    anyhow::ensure!(!picked.is_empty(), "At least one feature column is required");
    Ok(picked.into_iter().map(|i| candidates[i].clone()).collect())
}

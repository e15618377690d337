//! Reduct rule search: per-object enumeration of feature subsets whose
//! induced equivalence class is contained in the object's decision class.

use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::error::RoughSetError;
use crate::pipeline::partition::{partition, Partition};
use crate::pipeline::rules::{ReductRule, RuleTable};
use crate::pipeline::table::DecisionTable;
use crate::pipeline::value::Value;

/// Discover reduct rules for every object of `table`.
///
/// For each row r with decision value y, every non-empty proper subset S of
/// the feature columns is tested: S qualifies iff all rows matching r on S
/// also carry decision y. One rule is emitted per qualifying subset, with
/// the non-subset features left unset. The full feature set is the trivial
/// reduct and is never reported. No minimality reduction is applied; a
/// superset of a qualifying subset is kept whenever it qualifies on its own.
///
/// When no subset qualifies for a row and `include_empty` is set, a single
/// all-unset rule is emitted for that row instead; otherwise the row
/// contributes nothing. Output order follows table row order, subsets in
/// ascending size and feature-declaration order within each row.
///
/// Partitions only depend on the table and the subset, so they are computed
/// once per subset and shared across rows.
pub fn create_reduct_rules(
    table: &DecisionTable,
    include_empty: bool,
) -> Result<RuleTable, RoughSetError> {
    let roles = table.roles().clone();
    let features = &roles.feature_columns;
    let subsets = proper_subsets(features.len());

    let mut partitions: Vec<Partition> = Vec::with_capacity(subsets.len());
    for subset in &subsets {
        let columns: Vec<String> = subset.iter().map(|&i| features[i].clone()).collect();
        partitions.push(partition(table, &columns)?);
    }

    let ids = table.identifiers()?;
    let decisions = table.decisions()?;
    let decision_classes = table.decision_classes()?;
    let feature_cells: Vec<&[Value]> = features
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<_, _>>()?;

    let pb = ProgressBar::new(table.height() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("   Searching reducts [{bar:40.cyan/blue}] {pos}/{len} objects ({eta})")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut rules = Vec::new();
    for row in 0..table.height() {
        let decision = &decisions[row];
        let target = decision_classes
            .get(decision)
            .expect("every decision value has a class");

        let mut found = false;
        for (subset, part) in subsets.iter().zip(partitions.iter()) {
            let key: Vec<Value> = subset
                .iter()
                .map(|&i| feature_cells[i][row].clone())
                .collect();
            let similar = part
                .class_of(&key)
                .expect("a row always belongs to its own equivalence class");

            if similar.is_subset(target) {
                found = true;
                let mut conditions = vec![None; features.len()];
                for &i in subset {
                    conditions[i] = Some(feature_cells[i][row].clone());
                }
                rules.push(ReductRule {
                    object: Some(ids[row].clone()),
                    conditions,
                    decision: Some(decision.clone()),
                });
            }
        }

        if !found && include_empty {
            rules.push(ReductRule {
                object: Some(ids[row].clone()),
                conditions: vec![None; features.len()],
                decision: Some(decision.clone()),
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(RuleTable { roles, rules })
}

/// All non-empty proper subsets of `0..n`, by ascending size, lexicographic
/// within each size. A single-feature table yields no candidates at all.
fn proper_subsets(n: usize) -> Vec<Vec<usize>> {
    let mut subsets = Vec::new();
    for size in 1..n {
        combinations(n, size, &mut subsets);
    }
    subsets
}

fn combinations(n: usize, size: usize, out: &mut Vec<Vec<usize>>) {
    if size > n {
        return;
    }
    let mut current: Vec<usize> = (0..size).collect();
    loop {
        out.push(current.clone());

        // Rightmost position that can still advance.
        let Some(i) = (0..size).rev().find(|&i| current[i] < i + n - size) else {
            return;
        };
        current[i] += 1;
        for j in (i + 1)..size {
            current[j] = current[j - 1] + 1;
        }
    }
}

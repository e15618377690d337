//! Equivalence partitioning and the feature dependence test.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::pipeline::error::RoughSetError;
use crate::pipeline::table::{row_key, DecisionTable};
use crate::pipeline::value::Value;

/// One equivalence class: the shared value tuple and its member identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    /// Attribute values shared by all members, in attribute-list order
    pub key: Vec<Value>,
    /// Identifiers of the objects in this class
    pub members: BTreeSet<Value>,
}

/// A full partition of the object universe under a chosen attribute set.
///
/// Classes are listed in first-occurrence (row) order; together they cover
/// every identifier exactly once.
#[derive(Debug, Clone)]
pub struct Partition {
    attributes: Vec<String>,
    classes: Vec<EquivalenceClass>,
    index: HashMap<Vec<Value>, usize>,
}

impl Partition {
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    /// Members of the class with the given value tuple, if any.
    pub fn class_of(&self, key: &[Value]) -> Option<&BTreeSet<Value>> {
        self.index.get(key).map(|&i| &self.classes[i].members)
    }
}

/// Group all objects by their exact value tuple over `attributes`.
///
/// Two objects land in the same class iff their values are equal on every
/// attribute; values never coerce across types. The key tuple follows the
/// order of `attributes` as given.
pub fn partition(
    table: &DecisionTable,
    attributes: &[String],
) -> Result<Partition, RoughSetError> {
    if attributes.is_empty() {
        return Err(RoughSetError::EmptyAttributeSet);
    }
    for attribute in attributes {
        table.column(attribute)?;
    }

    let ids = table.identifiers()?;
    let mut classes: Vec<EquivalenceClass> = Vec::new();
    let mut index: HashMap<Vec<Value>, usize> = HashMap::new();

    for row in 0..table.height() {
        let key = row_key(table, attributes, row)?;
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            classes.push(EquivalenceClass {
                key,
                members: BTreeSet::new(),
            });
            classes.len() - 1
        });
        classes[slot].members.insert(ids[row].clone());
    }

    Ok(Partition {
        attributes: attributes.to_vec(),
        classes,
        index,
    })
}

/// Whether two partitions induce the same grouping.
///
/// Compared as unordered collections of member sets; the key tuples play no
/// part, so partitions over different attribute sets can still be "the same".
pub fn partitions_equal(a: &Partition, b: &Partition) -> bool {
    if a.classes.len() != b.classes.len() {
        return false;
    }
    let b_sets: HashSet<&BTreeSet<Value>> = b.classes.iter().map(|c| &c.members).collect();
    a.classes.iter().all(|c| b_sets.contains(&c.members))
}

/// Verdict of the single-feature dependence test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependence {
    /// Removing the feature leaves the partition unchanged
    Dependent,
    /// The feature contributes discernibility of its own
    Independent,
}

/// Test each declared feature against the rest of the feature set.
///
/// A feature f is dependent iff partitioning by F and by F\{f} yields the
/// same grouping. Removing the only feature of a one-feature table always
/// collapses the universe into a single class, so the comparison there is
/// against that trivial partition.
pub fn feature_dependence(
    table: &DecisionTable,
) -> Result<Vec<(String, Dependence)>, RoughSetError> {
    let features = &table.roles().feature_columns;
    let full = partition(table, features)?;

    let mut verdicts = Vec::with_capacity(features.len());
    for feature in features {
        let remaining: Vec<String> = features
            .iter()
            .filter(|f| *f != feature)
            .cloned()
            .collect();

        let same = if remaining.is_empty() {
            full.classes.len() == 1
        } else {
            partitions_equal(&full, &partition(table, &remaining)?)
        };

        let verdict = if same {
            Dependence::Dependent
        } else {
            Dependence::Independent
        };
        verdicts.push((feature.clone(), verdict));
    }
    Ok(verdicts)
}

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A single table cell: one value plus the group tags it belongs to.
///
/// Group tags mark a cell as a member of one or more logical subsets;
/// aggregation and retrieval can then be restricted to those subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    value: Value,
    groups: Vec<String>,
}

impl Cell {
    pub fn new(value: impl Into<Value>) -> Self {
        Cell {
            value: value.into(),
            groups: Vec::new(),
        }
    }

    pub fn with_groups(value: impl Into<Value>, groups: &[&str]) -> Self {
        Cell {
            value: value.into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn set_groups(&mut self, groups: &[&str]) {
        self.groups = groups.iter().map(|g| g.to_string()).collect();
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// True if this cell belongs to any of the requested groups, or if no
    /// groups are requested.
    pub(crate) fn in_any_group(&self, groups: &[&str]) -> bool {
        groups.is_empty() || groups.iter().any(|group| self.in_group(group))
    }

    /// True if this cell belongs to every requested group.
    pub(crate) fn in_all_groups(&self, groups: &[&str]) -> bool {
        groups.iter().all(|group| self.in_group(group))
    }
}

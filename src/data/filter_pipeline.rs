//! Search and category filtering over the employee records
//!
//! Three stages narrow the record sequence in turn: department (exact
//! match), status (active flag) and free-text search (case-insensitive
//! substring over the text fields). Every stage keeps input order.

use anyhow::{anyhow, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::data::employee::EmployeeRecord;

/// Selector value meaning "no restriction"
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    /// `"All"` maps to the sentinel; anything else is a department name
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepartmentFilter::All => ALL,
            DepartmentFilter::Only(name) => name,
        }
    }

    /// Exact, case-sensitive comparison
    pub fn matches(&self, department: &str) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(name) => name == department,
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Selector order
    pub const OPTIONS: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    /// The `isActive` value a record must have, if any
    pub fn wants_active(&self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }

    /// Total mapping used by the string-level `filter`: any value other
    /// than `"All"` and `"Active"` selects inactive records.
    pub fn from_label(value: &str) -> Self {
        match value {
            ALL => StatusFilter::All,
            "Active" => StatusFilter::Active,
            _ => StatusFilter::Inactive,
        }
    }

    pub fn cycle_next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Inactive,
            StatusFilter::Inactive => StatusFilter::All,
        }
    }

    pub fn cycle_prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Inactive,
            StatusFilter::Active => StatusFilter::All,
            StatusFilter::Inactive => StatusFilter::Active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        StatusFilter::OPTIONS
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown status '{}': expected All, Active or Inactive", s))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three user-controlled inputs of the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub department: DepartmentFilter,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn new(
        search_text: impl Into<String>,
        department: DepartmentFilter,
        status: StatusFilter,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            department,
            status,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Lower-cased, trimmed search text; `None` disables the search stage
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Distinct departments in ascending (case-sensitive) order, prefixed with `"All"`.
///
/// A department literally named `"All"` collapses into the sentinel.
pub fn department_options(records: &[EmployeeRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> = records
        .iter()
        .map(|r| r.department.as_str())
        .filter(|d| *d != ALL)
        .collect();

    std::iter::once(ALL)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// True if any searchable field contains `needle`.
///
/// `needle` must already be lower-cased. An absent manager is skipped.
pub fn matches_search(record: &EmployeeRecord, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&record.first_name)
        || contains(&record.last_name)
        || contains(&record.email)
        || contains(&record.department)
        || contains(&record.position)
        || contains(&record.location)
        || record.manager.as_deref().is_some_and(|m| contains(m))
        || record.skills.iter().any(|skill| contains(skill))
}

pub struct FilterPipeline;

impl FilterPipeline {
    /// Indices of the records that survive all three stages, in input order
    pub fn matching_indices(records: &[EmployeeRecord], state: &FilterState) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();

        if let DepartmentFilter::Only(_) = &state.department {
            indices.retain(|&i| state.department.matches(&records[i].department));
        }

        if let Some(want_active) = state.status.wants_active() {
            indices.retain(|&i| records[i].is_active == want_active);
        }

        if let Some(needle) = state.search_needle() {
            indices.retain(|&i| matches_search(&records[i], &needle));
        }

        tracing::debug!(
            target: "filter",
            "search='{}' department='{}' status='{}' -> {} of {} rows",
            state.search_text,
            state.department,
            state.status,
            indices.len(),
            records.len()
        );

        indices
    }

    pub fn apply(records: &[EmployeeRecord], state: &FilterState) -> Vec<EmployeeRecord> {
        Self::matching_indices(records, state)
            .into_iter()
            .map(|i| records[i].clone())
            .collect()
    }
}

/// Filter with selector values given as plain text.
///
/// Total over any input; unknown status text selects inactive records.
pub fn filter(
    records: &[EmployeeRecord],
    search_text: &str,
    department_filter: &str,
    status_filter: &str,
) -> Vec<EmployeeRecord> {
    let state = FilterState::new(
        search_text,
        DepartmentFilter::parse(department_filter),
        StatusFilter::from_label(status_filter),
    );
    FilterPipeline::apply(records, &state)
}

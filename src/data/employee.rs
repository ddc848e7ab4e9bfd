use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::data::filter_pipeline::department_options;

/// Dataset compiled into the binary; loaded once at startup
const EMBEDDED_DATASET: &str = include_str!("../../data/employees.json");

/// A single row of the directory. Field names follow the JSON source
/// (`firstName`, `hireDate`, `isActive`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub age: u32,
    pub location: String,
    pub performance_rating: f64,
    pub projects_completed: u32,
    pub is_active: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    /// `null` and a missing key both deserialize to `None`
    #[serde(default)]
    pub manager: Option<String>,
}

/// Read-only, shared sequence of employees.
///
/// Cloning is cheap: the records live behind an `Arc` and are never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    records: Arc<[EmployeeRecord]>,
}

impl EmployeeStore {
    /// Build a store, rejecting duplicate ids
    pub fn new(records: Vec<EmployeeRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(anyhow!("Duplicate employee id {} in dataset", record.id));
            }
        }

        tracing::debug!(target: "store", "Loaded {} employee records", records.len());

        Ok(Self {
            records: records.into(),
        })
    }

    /// Load the dataset embedded at build time
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET).context("Embedded employee dataset is malformed")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<EmployeeRecord> =
            serde_json::from_str(json).context("Failed to parse employee records")?;
        Self::new(records)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        Self::from_json_str(&contents).with_context(|| format!("Invalid dataset {}", path.display()))
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its id
    pub fn get(&self, id: u32) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Record at a position in load order
    pub fn get_by_index(&self, index: usize) -> Option<&EmployeeRecord> {
        self.records.get(index)
    }

    /// Department selector options: `"All"` followed by the sorted departments
    pub fn departments(&self) -> Vec<String> {
        department_options(&self.records)
    }
}

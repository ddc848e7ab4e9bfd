//! Data provider trait for abstracting row access
//!
//! The table renderer and the plain-text printer only need formatted
//! strings; they never see `EmployeeRecord` directly.

use std::fmt::Debug;

/// Sort order for columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortOrder::Ascending => " ↑",
            SortOrder::Descending => " ↓",
        }
    }
}

/// Core trait for read-only data access
pub trait DataProvider: Debug {
    /// Get a single formatted row by index.
    /// Returns None if the index is out of bounds
    fn get_row(&self, index: usize) -> Option<Vec<String>>;

    fn get_column_names(&self) -> Vec<String>;

    fn get_row_count(&self) -> usize;

    fn get_column_count(&self) -> usize {
        self.get_column_names().len()
    }

    /// Rows `start..start + count`, clipped to the available data
    fn get_visible_rows(&self, start: usize, count: usize) -> Vec<Vec<String>> {
        let end = (start + count).min(self.get_row_count());
        (start..end).filter_map(|i| self.get_row(i)).collect()
    }
}

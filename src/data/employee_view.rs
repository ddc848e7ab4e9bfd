use anyhow::{anyhow, Result};

use crate::data::columns::COLUMNS;
use crate::data::data_provider::{DataProvider, SortOrder};
use crate::data::employee::{EmployeeRecord, EmployeeStore};
use crate::data::filter_pipeline::{FilterPipeline, FilterState};

/// Which column is sorted and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub order: SortOrder,
}

/// A view over the employee store that filters and sorts rows
/// without touching the underlying records
#[derive(Debug, Clone)]
pub struct EmployeeView {
    /// The underlying immutable data source
    source: EmployeeStore,

    /// Indices that passed the filter pipeline, in store order
    filtered_rows: Vec<usize>,

    /// `filtered_rows` after the active sort
    visible_rows: Vec<usize>,

    sort: Option<SortState>,
}

impl EmployeeView {
    /// Create a new view showing every record
    pub fn new(source: EmployeeStore) -> Self {
        let all: Vec<usize> = (0..source.len()).collect();
        Self {
            source,
            filtered_rows: all.clone(),
            visible_rows: all,
            sort: None,
        }
    }

    /// Re-run the filter pipeline; the current sort is kept
    pub fn apply_filter(&mut self, state: &FilterState) {
        self.filtered_rows = FilterPipeline::matching_indices(self.source.records(), state);
        self.rebuild_visible_rows();
    }

    /// Sort rows by a column
    pub fn sort_by(&mut self, column_index: usize, order: SortOrder) -> Result<()> {
        if column_index >= COLUMNS.len() {
            return Err(anyhow!("Column index {} out of bounds", column_index));
        }

        self.sort = Some(SortState {
            column: column_index,
            order,
        });
        self.rebuild_visible_rows();
        Ok(())
    }

    /// Cycle a column through ascending, descending and unsorted
    pub fn toggle_sort(&mut self, column_index: usize) -> Result<Option<SortState>> {
        let next = match self.sort {
            Some(SortState { column, order }) if column == column_index => match order {
                SortOrder::Ascending => Some(SortOrder::Descending),
                SortOrder::Descending => None,
            },
            _ => Some(SortOrder::Ascending),
        };

        match next {
            Some(order) => self.sort_by(column_index, order)?,
            None => self.clear_sort(),
        }
        Ok(self.sort)
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.rebuild_visible_rows();
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    fn rebuild_visible_rows(&mut self) {
        let mut rows = self.filtered_rows.clone();

        if let Some(SortState { column, order }) = self.sort {
            let descriptor = &COLUMNS[column];
            let records = self.source.records();
            // Stable sort: ties keep filter order
            rows.sort_by(|&a, &b| {
                let cmp = descriptor.compare(&records[a], &records[b]);
                match order {
                    SortOrder::Ascending => cmp,
                    SortOrder::Descending => cmp.reverse(),
                }
            });
        }

        self.visible_rows = rows;
    }

    /// Number of visible rows
    pub fn row_count(&self) -> usize {
        self.visible_rows.len()
    }

    /// Number of records in the store, regardless of filters
    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }

    /// Record at a visible position
    pub fn record(&self, index: usize) -> Option<&EmployeeRecord> {
        let row_idx = *self.visible_rows.get(index)?;
        self.source.get_by_index(row_idx)
    }

    /// Visible records in display order
    pub fn records(&self) -> impl Iterator<Item = &EmployeeRecord> + '_ {
        let records = self.source.records();
        self.visible_rows.iter().map(move |&i| &records[i])
    }

    /// Store indices of visible rows in display order
    pub fn visible_row_indices(&self) -> &[usize] {
        &self.visible_rows
    }
}

impl DataProvider for EmployeeView {
    fn get_row(&self, index: usize) -> Option<Vec<String>> {
        let record = self.record(index)?;
        Some(COLUMNS.iter().map(|c| c.display_value(record)).collect())
    }

    fn get_column_names(&self) -> Vec<String> {
        crate::data::columns::display_names()
    }

    fn get_row_count(&self) -> usize {
        self.row_count()
    }

    fn get_column_count(&self) -> usize {
        COLUMNS.len()
    }
}

//! View state for the directory screen
//!
//! Holds the three filter inputs and the derived view. Every setter
//! recomputes the view before returning, so readers never observe a
//! stale row set.

use anyhow::Result;

use crate::data::employee::EmployeeStore;
use crate::data::employee_view::{EmployeeView, SortState};
use crate::data::filter_pipeline::{DepartmentFilter, FilterState, StatusFilter};

#[derive(Debug, Clone)]
pub struct DirectoryState {
    /// Selector options, computed once per store
    departments: Vec<String>,
    filter: FilterState,
    view: EmployeeView,
}

impl DirectoryState {
    pub fn new(store: EmployeeStore) -> Self {
        let departments = store.departments();
        Self {
            departments,
            filter: FilterState::default(),
            view: EmployeeView::new(store),
        }
    }

    /// Start from a non-default filter (used by the command line modes)
    pub fn with_filter(store: EmployeeStore, filter: FilterState) -> Self {
        let mut state = Self::new(store);
        state.filter = filter;
        state.refresh();
        state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> &EmployeeView {
        &self.view
    }

    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.filter.search_text {
            self.filter.search_text = text;
            self.refresh();
        }
    }

    pub fn set_department(&mut self, department: DepartmentFilter) {
        if department != self.filter.department {
            self.filter.department = department;
            self.refresh();
        }
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        if status != self.filter.status {
            self.filter.status = status;
            self.refresh();
        }
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.refresh();
    }

    /// Move the department selector one step, wrapping at either end
    pub fn cycle_department(&mut self, forward: bool) {
        let len = self.departments.len();
        if len == 0 {
            return;
        }

        let current = self
            .departments
            .iter()
            .position(|d| d == self.filter.department.as_str())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        let department = DepartmentFilter::parse(&self.departments[next]);
        self.set_department(department);
    }

    pub fn cycle_status(&mut self, forward: bool) {
        let status = if forward {
            self.filter.status.cycle_next()
        } else {
            self.filter.status.cycle_prev()
        };
        self.set_status(status);
    }

    pub fn toggle_sort(&mut self, column: usize) -> Result<Option<SortState>> {
        self.view.toggle_sort(column)
    }

    /// "Showing X of Y employees"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} employees",
            self.view.row_count(),
            self.view.total_count()
        )
    }

    fn refresh(&mut self) {
        self.view.apply_filter(&self.filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DirectoryState {
        DirectoryState::new(EmployeeStore::embedded().unwrap())
    }

    #[test]
    fn test_starts_with_default_filter_and_all_rows() {
        let state = state();
        assert!(state.filter().is_default());
        assert_eq!(state.view().row_count(), state.view().total_count());
    }

    #[test]
    fn test_setters_recompute_view() {
        let mut state = state();
        state.set_status(StatusFilter::Inactive);
        let inactive = state.view().row_count();
        assert!(inactive > 0);
        assert!(state.view().records().all(|r| !r.is_active));

        state.set_search_text("zzz-nobody");
        assert_eq!(state.view().row_count(), 0);

        state.reset_filters();
        assert_eq!(state.view().row_count(), state.view().total_count());
    }

    #[test]
    fn test_cycle_department_wraps() {
        let mut state = state();
        let count = state.departments().len();

        state.cycle_department(false);
        assert_eq!(
            state.filter().department.as_str(),
            state.departments()[count - 1]
        );

        state.cycle_department(true);
        assert_eq!(state.filter().department, DepartmentFilter::All);

        state.cycle_department(true);
        assert_eq!(state.filter().department.as_str(), state.departments()[1]);
    }

    #[test]
    fn test_summary() {
        let state = state();
        let total = state.view().total_count();
        assert_eq!(
            state.summary(),
            format!("Showing {} of {} employees", total, total)
        );
    }
}

mod common;

use common::ann_and_bo;
use employee_directory::data::employee::EmployeeStore;
use employee_directory::data::filter_pipeline::{DepartmentFilter, FilterState, StatusFilter};
use employee_directory::directory_state::DirectoryState;

fn ids(state: &DirectoryState) -> Vec<u32> {
    state.view().records().map(|r| r.id).collect()
}

#[test]
fn test_every_input_change_refreshes_view() {
    let mut state = DirectoryState::new(ann_and_bo());
    assert_eq!(ids(&state), vec![1, 2]);

    state.set_status(StatusFilter::Active);
    assert_eq!(ids(&state), vec![1]);

    state.set_status(StatusFilter::All);
    state.set_search_text("bo");
    assert_eq!(ids(&state), vec![2]);

    state.set_search_text("");
    state.set_department(DepartmentFilter::parse("Eng"));
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn test_reset_restores_everything() {
    let mut state = DirectoryState::new(EmployeeStore::embedded().unwrap());
    let total = state.view().total_count();

    state.set_search_text("zzz-no-match");
    state.set_department(DepartmentFilter::parse("Sales"));
    assert!(state.view().is_empty());
    assert_eq!(state.summary(), format!("Showing 0 of {} employees", total));

    state.reset_filters();
    assert!(state.filter().is_default());
    assert_eq!(state.view().row_count(), total);
}

#[test]
fn test_department_cycle_walks_options_and_wraps() {
    let mut state = DirectoryState::new(ann_and_bo());
    assert_eq!(state.departments(), ["All", "Eng", "HR"]);

    state.cycle_department(true);
    assert_eq!(state.filter().department.as_str(), "Eng");
    state.cycle_department(true);
    assert_eq!(state.filter().department.as_str(), "HR");
    state.cycle_department(true);
    assert_eq!(state.filter().department, DepartmentFilter::All);

    state.cycle_department(false);
    assert_eq!(state.filter().department.as_str(), "HR");
    assert_eq!(ids(&state), vec![1]);
}

#[test]
fn test_status_cycle() {
    let mut state = DirectoryState::new(ann_and_bo());

    state.cycle_status(true);
    assert_eq!(state.filter().status, StatusFilter::Active);
    state.cycle_status(true);
    assert_eq!(state.filter().status, StatusFilter::Inactive);
    assert_eq!(ids(&state), vec![2]);
    state.cycle_status(true);
    assert_eq!(state.filter().status, StatusFilter::All);
    state.cycle_status(false);
    assert_eq!(state.filter().status, StatusFilter::Inactive);
}

#[test]
fn test_with_filter_applies_immediately() {
    let filter = FilterState::new("ann", DepartmentFilter::All, StatusFilter::Inactive);
    let state = DirectoryState::with_filter(ann_and_bo(), filter.clone());

    assert_eq!(state.filter(), &filter);
    // Bo matches through his manager field
    assert_eq!(ids(&state), vec![2]);
}

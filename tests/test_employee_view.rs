use employee_directory::data::columns::find_column;
use employee_directory::data::data_provider::{DataProvider, SortOrder};
use employee_directory::data::employee::EmployeeStore;
use employee_directory::data::employee_view::{EmployeeView, SortState};
use employee_directory::data::filter_pipeline::{DepartmentFilter, FilterState, StatusFilter};

fn view() -> EmployeeView {
    EmployeeView::new(EmployeeStore::embedded().unwrap())
}

#[test]
fn test_new_view_shows_all_rows() {
    let view = view();
    assert_eq!(view.row_count(), view.total_count());
    assert_eq!(view.get_column_count(), 15);
    assert!(view.sort_state().is_none());
}

#[test]
fn test_sort_by_salary_descending() {
    let mut view = view();
    view.sort_by(find_column("Salary").unwrap(), SortOrder::Descending)
        .unwrap();

    let salaries: Vec<f64> = view.records().map(|r| r.salary).collect();
    assert!(salaries.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_sort_survives_filter_change() {
    let mut view = view();
    let age = find_column("age").unwrap();
    view.sort_by(age, SortOrder::Ascending).unwrap();

    view.apply_filter(&FilterState::new(
        "",
        DepartmentFilter::All,
        StatusFilter::Active,
    ));

    assert_eq!(
        view.sort_state(),
        Some(SortState {
            column: age,
            order: SortOrder::Ascending
        })
    );
    let ages: Vec<u32> = view.records().map(|r| r.age).collect();
    assert!(ages.windows(2).all(|w| w[0] <= w[1]));
    assert!(view.records().all(|r| r.is_active));
}

#[test]
fn test_toggle_sort_cycles_and_restores_filter_order() {
    let mut view = view();
    let original = view.visible_row_indices().to_vec();
    let last_name = find_column("lastName").unwrap();

    let first = view.toggle_sort(last_name).unwrap();
    assert_eq!(first.map(|s| s.order), Some(SortOrder::Ascending));

    let second = view.toggle_sort(last_name).unwrap();
    assert_eq!(second.map(|s| s.order), Some(SortOrder::Descending));

    let third = view.toggle_sort(last_name).unwrap();
    assert!(third.is_none());
    assert_eq!(view.visible_row_indices(), original.as_slice());
}

#[test]
fn test_sort_out_of_bounds_is_error() {
    let mut view = view();
    assert!(view.sort_by(99, SortOrder::Ascending).is_err());
    assert!(view.sort_state().is_none());
}

#[test]
fn test_provider_rows_use_display_formatting() {
    let mut view = view();
    view.apply_filter(&FilterState::new(
        "sarah",
        DepartmentFilter::All,
        StatusFilter::All,
    ));

    let row = view.get_row(0).unwrap();
    assert_eq!(row[find_column("id").unwrap()], "1");
    assert_eq!(row[find_column("salary").unwrap()], "$125,000");
    assert_eq!(row[find_column("hireDate").unwrap()], "3/15/2019");
    assert_eq!(row[find_column("skills").unwrap()], "Rust, TypeScript, Kubernetes");
    assert!(view.get_row(1).is_none());
}

#[test]
fn test_visible_rows_window() {
    let view = view();
    let window = view.get_visible_rows(20, 10);
    assert_eq!(window.len(), view.row_count() - 20);
}

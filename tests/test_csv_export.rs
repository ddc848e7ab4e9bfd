use employee_directory::data::columns::{display_names, find_column};
use employee_directory::data::data_exporter::{DataExporter, DEFAULT_EXPORT_FILE};
use employee_directory::data::data_provider::SortOrder;
use employee_directory::data::employee::EmployeeStore;
use employee_directory::data::employee_view::EmployeeView;
use employee_directory::data::filter_pipeline::{DepartmentFilter, FilterState, StatusFilter};
use tempfile::TempDir;

fn read_csv(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

fn cell<'a>(row: &'a [String], column: &str) -> &'a str {
    &row[find_column(column).unwrap()]
}

#[test]
fn test_single_record_export_formats_cells() {
    let json = r#"[{
        "id": 7, "firstName": "Kai", "lastName": "Moreno",
        "email": "kai.moreno@company.com", "department": "Engineering",
        "position": "Backend Engineer", "salary": 95000, "hireDate": "2022-03-05",
        "age": 29, "location": "Portland", "performanceRating": 4.25,
        "projectsCompleted": 12, "isActive": true, "skills": ["Go", "Rust"],
        "manager": null
    }]"#;
    let mut view = EmployeeView::new(EmployeeStore::from_json_str(json).unwrap());
    view.apply_filter(&FilterState::new(
        "kai",
        DepartmentFilter::All,
        StatusFilter::Active,
    ));

    let (headers, rows) = read_csv(&DataExporter::to_csv_string(&view).unwrap());

    assert_eq!(headers, display_names());
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(cell(row, "salary"), "$95,000");
    assert_eq!(cell(row, "isActive"), "Active");
    assert_eq!(cell(row, "skills"), "Go, Rust");
    assert_eq!(cell(row, "hireDate"), "3/5/2022");
    assert_eq!(cell(row, "performanceRating"), "4.3");
    assert_eq!(cell(row, "manager"), "");
}

#[test]
fn test_export_follows_filter_and_sort() {
    let store = EmployeeStore::embedded().unwrap();
    let mut view = EmployeeView::new(store);
    view.apply_filter(&FilterState::new(
        "",
        DepartmentFilter::parse("Engineering"),
        StatusFilter::All,
    ));
    view.sort_by(find_column("id").unwrap(), SortOrder::Descending)
        .unwrap();

    let (_, rows) = read_csv(&DataExporter::to_csv_string(&view).unwrap());
    let ids: Vec<&str> = rows.iter().map(|r| cell(r, "id")).collect();

    assert_eq!(ids, vec!["23", "19", "11", "2", "1"]);
    assert!(rows.iter().all(|r| cell(r, "department") == "Engineering"));
}

#[test]
fn test_empty_view_exports_header_only() {
    let mut view = EmployeeView::new(EmployeeStore::embedded().unwrap());
    view.apply_filter(&FilterState::new(
        "zzz-no-match",
        DepartmentFilter::All,
        StatusFilter::All,
    ));

    let (headers, rows) = read_csv(&DataExporter::to_csv_string(&view).unwrap());
    assert_eq!(headers.len(), 15);
    assert!(rows.is_empty());
}

#[test]
fn test_export_writes_file_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("exports");
    let mut view = EmployeeView::new(EmployeeStore::embedded().unwrap());

    let summary = DataExporter::export_csv(&view, &dir, DEFAULT_EXPORT_FILE).unwrap();
    assert_eq!(summary.path, dir.join("employee-data.csv"));
    assert_eq!(summary.rows, view.row_count());
    assert!(summary.status_message().contains("employee-data.csv"));

    view.apply_filter(&FilterState::new(
        "",
        DepartmentFilter::All,
        StatusFilter::Inactive,
    ));
    let summary = DataExporter::export_csv(&view, &dir, DEFAULT_EXPORT_FILE).unwrap();
    assert_eq!(summary.rows, 4);

    let contents = std::fs::read_to_string(&summary.path).unwrap();
    let (_, rows) = read_csv(&contents);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| cell(r, "isActive") == "Inactive"));
}

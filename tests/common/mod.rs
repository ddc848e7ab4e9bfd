#![allow(dead_code)]

use employee_directory::data::employee::{EmployeeRecord, EmployeeStore};

/// The two-record dataset used by the filter scenarios
pub fn ann_and_bo() -> EmployeeStore {
    let json = r#"[
        {
            "id": 1, "firstName": "Ann", "lastName": "Archer",
            "email": "ann@example.com", "department": "HR", "position": "Recruiter",
            "salary": 70000, "hireDate": "2020-01-06", "age": 30, "location": "Austin",
            "performanceRating": 4.0, "projectsCompleted": 3, "isActive": true,
            "skills": ["Excel"], "manager": null
        },
        {
            "id": 2, "firstName": "Bo", "lastName": "Brandt",
            "email": "bo@example.com", "department": "Eng", "position": "Developer",
            "salary": 95000, "hireDate": "2021-09-13", "age": 27, "location": "Denver",
            "performanceRating": 3.5, "projectsCompleted": 8, "isActive": false,
            "skills": ["Go"], "manager": "Ann"
        }
    ]"#;
    EmployeeStore::from_json_str(json).expect("fixture should parse")
}

pub fn ids(records: &[EmployeeRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

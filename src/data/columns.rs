//! Static column configuration for the directory grid
//!
//! One descriptor per column, in display order. Formatting is shared by
//! the on-screen table and the CSV export; the only difference between
//! the two is how an absent value is shown.

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

use crate::data::employee::EmployeeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Id,
    FirstName,
    LastName,
    Email,
    Department,
    Position,
    Salary,
    HireDate,
    Age,
    Location,
    PerformanceRating,
    ProjectsCompleted,
    IsActive,
    Skills,
    Manager,
}

/// How a column's values are rendered and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Email,
    Currency,
    Date,
    Rating,
    Status,
    List,
    OptionalText,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatTarget {
    Screen,
    Export,
}

/// A record field borrowed for formatting or comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Integer(u32),
    Number(f64),
    Text(&'a str),
    Date(NaiveDate),
    Boolean(bool),
    List(&'a [String]),
    Missing,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    /// Field name in the source JSON
    pub field: &'static str,
    pub display_name: &'static str,
    pub kind: ColumnKind,
    pub width: u16,
}

const fn column(
    key: ColumnKey,
    field: &'static str,
    display_name: &'static str,
    kind: ColumnKind,
    width: u16,
) -> ColumnDescriptor {
    ColumnDescriptor {
        key,
        field,
        display_name,
        kind,
        width,
    }
}

pub const COLUMNS: &[ColumnDescriptor] = &[
    column(ColumnKey::Id, "id", "ID", ColumnKind::Integer, 5),
    column(ColumnKey::FirstName, "firstName", "First Name", ColumnKind::Text, 12),
    column(ColumnKey::LastName, "lastName", "Last Name", ColumnKind::Text, 12),
    column(ColumnKey::Email, "email", "Email", ColumnKind::Email, 28),
    column(ColumnKey::Department, "department", "Department", ColumnKind::Text, 14),
    column(ColumnKey::Position, "position", "Position", ColumnKind::Text, 22),
    column(ColumnKey::Salary, "salary", "Salary", ColumnKind::Currency, 10),
    column(ColumnKey::HireDate, "hireDate", "Hire Date", ColumnKind::Date, 10),
    column(ColumnKey::Age, "age", "Age", ColumnKind::Integer, 4),
    column(ColumnKey::Location, "location", "Location", ColumnKind::Text, 14),
    column(ColumnKey::PerformanceRating, "performanceRating", "Rating", ColumnKind::Rating, 6),
    column(ColumnKey::ProjectsCompleted, "projectsCompleted", "Projects", ColumnKind::Integer, 8),
    column(ColumnKey::IsActive, "isActive", "Status", ColumnKind::Status, 8),
    column(ColumnKey::Skills, "skills", "Skills", ColumnKind::List, 28),
    column(ColumnKey::Manager, "manager", "Manager", ColumnKind::OptionalText, 16),
];

/// Position of a column by JSON field name or display name (case-insensitive)
pub fn find_column(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| {
        c.field.eq_ignore_ascii_case(name) || c.display_name.eq_ignore_ascii_case(name)
    })
}

pub fn display_names() -> Vec<String> {
    COLUMNS.iter().map(|c| c.display_name.to_string()).collect()
}

impl ColumnKey {
    pub fn value(self, record: &EmployeeRecord) -> CellValue<'_> {
        match self {
            ColumnKey::Id => CellValue::Integer(record.id),
            ColumnKey::FirstName => CellValue::Text(&record.first_name),
            ColumnKey::LastName => CellValue::Text(&record.last_name),
            ColumnKey::Email => CellValue::Text(&record.email),
            ColumnKey::Department => CellValue::Text(&record.department),
            ColumnKey::Position => CellValue::Text(&record.position),
            ColumnKey::Salary => CellValue::Number(record.salary),
            ColumnKey::HireDate => CellValue::Date(record.hire_date),
            ColumnKey::Age => CellValue::Integer(record.age),
            ColumnKey::Location => CellValue::Text(&record.location),
            ColumnKey::PerformanceRating => CellValue::Number(record.performance_rating),
            ColumnKey::ProjectsCompleted => CellValue::Integer(record.projects_completed),
            ColumnKey::IsActive => CellValue::Boolean(record.is_active),
            ColumnKey::Skills => CellValue::List(&record.skills),
            ColumnKey::Manager => match &record.manager {
                Some(manager) => CellValue::Text(manager),
                None => CellValue::Missing,
            },
        }
    }
}

impl ColumnDescriptor {
    pub fn display_value(&self, record: &EmployeeRecord) -> String {
        self.format(record, FormatTarget::Screen)
    }

    pub fn export_value(&self, record: &EmployeeRecord) -> String {
        self.format(record, FormatTarget::Export)
    }

    pub fn format(&self, record: &EmployeeRecord, target: FormatTarget) -> String {
        match self.key.value(record) {
            CellValue::Integer(v) => v.to_string(),
            CellValue::Number(v) => match self.kind {
                ColumnKind::Currency => format_currency(v),
                ColumnKind::Rating => format_rating(v),
                _ => v.to_string(),
            },
            CellValue::Text(s) => s.to_string(),
            CellValue::Date(d) => format_us_date(d),
            CellValue::Boolean(active) => status_label(active).to_string(),
            CellValue::List(items) => items.join(", "),
            CellValue::Missing => match target {
                FormatTarget::Screen => "None".to_string(),
                FormatTarget::Export => String::new(),
            },
        }
    }

    /// Ordering used by column sort. Absent values sort first.
    pub fn compare(&self, a: &EmployeeRecord, b: &EmployeeRecord) -> Ordering {
        match (self.key.value(a), self.key.value(b)) {
            (CellValue::Integer(x), CellValue::Integer(y)) => x.cmp(&y),
            (CellValue::Number(x), CellValue::Number(y)) => {
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
            (CellValue::Date(x), CellValue::Date(y)) => x.cmp(&y),
            (CellValue::Boolean(x), CellValue::Boolean(y)) => x.cmp(&y),
            (CellValue::List(x), CellValue::List(y)) => x.cmp(y),
            (CellValue::Missing, CellValue::Missing) => Ordering::Equal,
            (CellValue::Missing, _) => Ordering::Less,
            (_, CellValue::Missing) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

/// US currency with thousands separators and no cents, e.g. `$95,000`.
/// Halves round away from zero.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// US short date without zero padding, e.g. `3/5/2021`
pub fn format_us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// One decimal place, rounded from the stored binary value.
///
/// `4.35` is stored just below the midpoint and prints `4.3`. Only exact
/// ties (odd multiples of 0.25, such as `4.25`) round away from zero.
pub fn format_rating(rating: f64) -> String {
    let quarters = rating * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (rating * 10.0).round() / 10.0);
    }
    format!("{:.1}", rating)
}

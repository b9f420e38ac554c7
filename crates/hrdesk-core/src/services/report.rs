//! Employee list reports
//!
//! Both renderers consume the same rows: ID, full name, position, hire date
//! (`dd.mm.yyyy`) and remaining vacation days.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::excel::EmployeeExcelReport;
use super::pdf::EmployeePdfReport;
use crate::error::Result;
use crate::models::Employee;

/// Column headers shared by all report formats
pub const REPORT_HEADERS: [&str; 5] = ["ID", "Full name", "Position", "Hire date", "Vacation (days)"];

/// One employee as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: i64,
    pub full_name: String,
    pub position: String,
    pub hire_date: String,
    pub vacation_days: Option<i32>,
}

impl From<&Employee> for ReportRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            position: employee.position.clone(),
            hire_date: format_hire_date(employee.hire_date),
            vacation_days: employee.vacation_days_left,
        }
    }
}

impl ReportRow {
    /// Cell texts in header order
    pub fn cells(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.full_name.clone(),
            self.position.clone(),
            self.hire_date.clone(),
            self.vacation_days.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

pub fn format_hire_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub title: String,
    pub generated_on: NaiveDate,
    /// TrueType font for PDF output; discovered on the system when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_font: Option<PathBuf>,
}

impl ReportMetadata {
    pub fn today() -> Self {
        Self {
            title: "Employee report".to_string(),
            generated_on: Local::now().date_naive(),
            pdf_font: None,
        }
    }

    /// Title line printed above the PDF table
    pub fn heading(&self) -> String {
        format!("{} - {}", self.title, self.generated_on.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Excel,
    Pdf,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Excel => "xlsx",
            ReportFormat::Pdf => "pdf",
        }
    }
}

/// Render `employees` (in the given order) to `path`
pub fn export_employees(
    path: &Path,
    format: ReportFormat,
    employees: &[Employee],
    metadata: &ReportMetadata,
) -> Result<()> {
    let rows: Vec<ReportRow> = employees.iter().map(ReportRow::from).collect();

    match format {
        ReportFormat::Excel => {
            let mut report = EmployeeExcelReport::new();
            report.write_employees(&rows)?;
            report.save(path)?;
        }
        ReportFormat::Pdf => {
            EmployeePdfReport::new(metadata).render(&rows)?.save(path)?;
        }
    }

    log::info!(
        "Exported {} employees to {} ({})",
        rows.len(),
        path.display(),
        format.extension()
    );
    Ok(())
}

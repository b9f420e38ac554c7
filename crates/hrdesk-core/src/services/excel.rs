//! Excel export service
//!
//! Generate the employee list as an `.xlsx` workbook

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

use super::report::{ReportRow, REPORT_HEADERS};
use crate::error::Result;

/// Excel report generator
pub struct EmployeeExcelReport {
    workbook: Workbook,
    // Styles
    header_format: Format,
    cell_format: Format,
}

impl EmployeeExcelReport {
    pub fn new() -> Self {
        // Header style: grey background, bold text
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0xD9D9D9))
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        let cell_format = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            workbook: Workbook::new(),
            header_format,
            cell_format,
        }
    }

    /// Write the `Employees` sheet
    pub fn write_employees(&mut self, rows: &[ReportRow]) -> Result<()> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name("Employees")?;

        let mut widths: Vec<usize> = REPORT_HEADERS.iter().map(|h| h.chars().count()).collect();

        for (col, header) in REPORT_HEADERS.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *header, &self.header_format)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let r = 1 + idx as u32;
            worksheet.write_with_format(r, 0, row.id as f64, &self.cell_format)?;
            worksheet.write_with_format(r, 1, &row.full_name, &self.cell_format)?;
            worksheet.write_with_format(r, 2, &row.position, &self.cell_format)?;
            worksheet.write_with_format(r, 3, &row.hire_date, &self.cell_format)?;
            if let Some(days) = row.vacation_days {
                worksheet.write_with_format(r, 4, days, &self.cell_format)?;
            }

            for (col, cell) in row.cells().iter().enumerate() {
                widths[col] = widths[col].max(cell.chars().count());
            }
        }

        // Column widths fit the longest cell
        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, (width + 2) as f64)?;
        }

        Ok(())
    }

    /// Save the workbook to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}

impl Default for EmployeeExcelReport {
    fn default() -> Self {
        Self::new()
    }
}

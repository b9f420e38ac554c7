//! Report commands
//!
//! Export the employee list to Excel or PDF.

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use super::session::require_hr;
use super::Context;
use crate::output::{print_info, print_success};
use hrdesk_core::config::expand_path;
use hrdesk_core::{export_employees, ReportFormat, ReportMetadata};

#[derive(Subcommand)]
pub enum ReportAction {
    /// Export employees to an Excel workbook
    Excel {
        /// Output file path (default: employees-YYYY-MM-DD.xlsx)
        #[arg(short, long)]
        output: Option<String>,

        /// Only include employees matching this search text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Export employees to a PDF table
    Pdf {
        /// Output file path (default: employees-YYYY-MM-DD.pdf)
        #[arg(short, long)]
        output: Option<String>,

        /// Only include employees matching this search text
        #[arg(short, long, default_value = "")]
        search: String,

        /// TrueType font for the table (default: $HRDESK_PDF_FONT or a system font)
        #[arg(long)]
        font: Option<String>,
    },
}

pub async fn execute(ctx: &Context, action: ReportAction) -> Result<()> {
    match action {
        ReportAction::Excel { output, search } => {
            export(ctx, ReportFormat::Excel, output, search, None).await
        }
        ReportAction::Pdf {
            output,
            search,
            font,
        } => export(ctx, ReportFormat::Pdf, output, search, font).await,
    }
}

fn default_output(format: ReportFormat, metadata: &ReportMetadata) -> PathBuf {
    PathBuf::from(format!(
        "employees-{}.{}",
        metadata.generated_on.format("%Y-%m-%d"),
        format.extension()
    ))
}

async fn export(
    ctx: &Context,
    format: ReportFormat,
    output: Option<String>,
    search: String,
    font: Option<String>,
) -> Result<()> {
    require_hr(ctx).await?;

    let employees = ctx.employees().search(&search).await?;
    if employees.is_empty() {
        print_info("No employees match; writing an empty report.", ctx.quiet);
    }

    let metadata = ReportMetadata {
        pdf_font: font.map(|f| expand_path(&f)),
        ..ReportMetadata::today()
    };
    let path = match output {
        Some(p) => expand_path(&p),
        None => default_output(format, &metadata),
    };

    export_employees(&path, format, &employees, &metadata)?;

    print_success(
        &format!("Exported {} employees to {}", employees.len(), path.display()),
        ctx.quiet,
    );

    Ok(())
}

//! Photo and document commands
//!
//! Attachments live on the filesystem next to the database. Reading is open
//! to HR and to the employee the record belongs to; changes need HR.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use super::session::{load_employee, require_hr, require_hr_or_owner};
use super::Context;
use crate::output::{print_info, print_output, print_success};
use hrdesk_core::config::expand_path;
use hrdesk_core::DocumentInfo;

#[derive(Subcommand)]
pub enum PhotoAction {
    /// Upload a photo, replacing the current one
    Set {
        /// Employee ID
        id: i64,

        /// Image file (png, jpg, jpeg, bmp, gif, webp)
        file: String,
    },

    /// Print the path of the stored photo
    Show {
        /// Employee ID
        id: i64,
    },

    /// Remove the stored photo
    Remove {
        /// Employee ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum DocAction {
    /// Attach a document; an existing document with the same name is kept
    Add {
        /// Employee ID
        id: i64,

        /// File to attach
        file: String,
    },

    /// List attached documents
    List {
        /// Employee ID
        id: i64,
    },

    /// Remove an attached document
    Remove {
        /// Employee ID
        id: i64,

        /// Document file name as shown by `doc list`
        name: String,
    },
}

/// Document row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct DocumentRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Size (bytes)")]
    pub size: u64,
}

impl From<DocumentInfo> for DocumentRow {
    fn from(doc: DocumentInfo) -> Self {
        Self {
            name: doc.name,
            size: doc.size,
        }
    }
}

fn source_path(file: &str) -> PathBuf {
    expand_path(file)
}

pub async fn execute_photo(ctx: &Context, action: PhotoAction) -> Result<()> {
    let store = ctx.attachments();

    match action {
        PhotoAction::Set { id, file } => {
            require_hr(ctx).await?;
            load_employee(ctx, id).await?;

            let dest = store.set_photo(id, &source_path(&file)).await?;
            print_success(&format!("Stored photo: {}", dest.display()), ctx.quiet);
        }
        PhotoAction::Show { id } => {
            require_hr_or_owner(ctx, id).await?;

            match store.photo_path(id).await? {
                Some(path) => println!("{}", path.display()),
                None => print_info(&format!("No photo for employee {}", id), ctx.quiet),
            }
        }
        PhotoAction::Remove { id } => {
            require_hr(ctx).await?;
            load_employee(ctx, id).await?;

            store.remove_photo(id).await?;
            print_success(&format!("Removed photo of employee {}", id), ctx.quiet);
        }
    }

    Ok(())
}

pub async fn execute_doc(ctx: &Context, action: DocAction) -> Result<()> {
    let store = ctx.attachments();

    match action {
        DocAction::Add { id, file } => {
            require_hr(ctx).await?;
            load_employee(ctx, id).await?;

            let dest = store.add_document(id, &source_path(&file)).await?;
            print_success(&format!("Attached document: {}", dest.display()), ctx.quiet);
        }
        DocAction::List { id } => {
            require_hr_or_owner(ctx, id).await?;

            let rows: Vec<DocumentRow> = store
                .list_documents(id)
                .await?
                .into_iter()
                .map(DocumentRow::from)
                .collect();
            print_output(&rows, ctx.format)?;
        }
        DocAction::Remove { id, name } => {
            require_hr(ctx).await?;
            load_employee(ctx, id).await?;

            store.remove_document(id, &name).await?;
            print_success(&format!("Removed document: {}", name), ctx.quiet);
        }
    }

    Ok(())
}

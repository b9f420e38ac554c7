//! Employee photos and documents on the filesystem
//!
//! Layout:
//! - `<photos_dir>/<employee_id>.<ext>` - one photo per employee, replaced on upload
//! - `<documents_dir>/<employee_id>/<file name>` - any number of documents
//!
//! None of this is covered by database transactions.

use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::AppPaths;
use crate::error::{Error, Result};

/// Image extensions accepted for profile photos
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// A stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentInfo {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct AttachmentStore {
    photos_dir: PathBuf,
    documents_dir: PathBuf,
}

impl AttachmentStore {
    pub fn new(photos_dir: impl Into<PathBuf>, documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            photos_dir: photos_dir.into(),
            documents_dir: documents_dir.into(),
        }
    }

    pub fn from_paths(paths: &AppPaths) -> Self {
        Self::new(paths.photos_dir(), paths.documents_dir())
    }

    fn documents_for(&self, employee_id: i64) -> PathBuf {
        self.documents_dir.join(employee_id.to_string())
    }

    // ========================================================================
    // Photos
    // ========================================================================

    /// Copy `source` in as the employee's photo, replacing any previous one
    pub async fn set_photo(&self, employee_id: i64, source: &Path) -> Result<PathBuf> {
        let ext = photo_extension(source)?;
        ensure_source_exists(source).await?;

        fs::create_dir_all(&self.photos_dir).await?;
        self.remove_photo_files(employee_id).await?;

        let dest = self.photos_dir.join(format!("{}.{}", employee_id, ext));
        fs::copy(source, &dest).await?;

        log::info!("Stored photo for employee {}: {}", employee_id, dest.display());
        Ok(dest)
    }

    /// Path of the employee's photo, if one is stored
    pub async fn photo_path(&self, employee_id: i64) -> Result<Option<PathBuf>> {
        for ext in PHOTO_EXTENSIONS {
            let candidate = self.photos_dir.join(format!("{}.{}", employee_id, ext));
            if fs::try_exists(&candidate).await? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    pub async fn remove_photo(&self, employee_id: i64) -> Result<()> {
        if self.remove_photo_files(employee_id).await? == 0 {
            return Err(Error::not_found(format!("photo for employee {}", employee_id)));
        }
        Ok(())
    }

    async fn remove_photo_files(&self, employee_id: i64) -> Result<usize> {
        let mut removed = 0;
        for ext in PHOTO_EXTENSIONS {
            let candidate = self.photos_dir.join(format!("{}.{}", employee_id, ext));
            match fs::remove_file(&candidate).await {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(removed)
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// Copy `source` into the employee's document folder.
    ///
    /// A document with the same file name is never overwritten.
    pub async fn add_document(&self, employee_id: i64, source: &Path) -> Result<PathBuf> {
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::validation(format!("Invalid file name: {}", source.display())))?;

        let mut input = match fs::File::open(source).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::not_found(source.display().to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let dir = self.documents_for(employee_id);
        fs::create_dir_all(&dir).await?;
        let dest = dir.join(name);

        let mut output = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&dest)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::already_exists(format!(
                    "document {} for employee {}",
                    name, employee_id
                )))
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = tokio::io::copy(&mut input, &mut output).await {
            drop(output);
            if let Err(cleanup) = fs::remove_file(&dest).await {
                log::warn!("Failed to remove partial document {}: {}", dest.display(), cleanup);
            }
            return Err(e.into());
        }

        log::info!("Stored document for employee {}: {}", employee_id, name);
        Ok(dest)
    }

    /// Documents of an employee sorted by name
    pub async fn list_documents(&self, employee_id: i64) -> Result<Vec<DocumentInfo>> {
        let dir = self.documents_for(employee_id);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            documents.push(DocumentInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
            });
        }

        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(documents)
    }

    pub async fn document_path(&self, employee_id: i64, name: &str) -> Result<PathBuf> {
        check_document_name(name)?;
        let path = self.documents_for(employee_id).join(name);
        if !fs::try_exists(&path).await? {
            return Err(Error::not_found(format!(
                "document {} for employee {}",
                name, employee_id
            )));
        }
        Ok(path)
    }

    pub async fn remove_document(&self, employee_id: i64, name: &str) -> Result<()> {
        let path = self.document_path(employee_id, name).await?;
        fs::remove_file(&path).await?;
        log::info!("Removed document for employee {}: {}", employee_id, name);
        Ok(())
    }

    // ========================================================================
    // Cleanup
    // ========================================================================

    /// Remove the photo and all documents of an employee
    pub async fn purge(&self, employee_id: i64) -> Result<()> {
        self.remove_photo_files(employee_id).await?;

        match fs::remove_dir_all(self.documents_for(employee_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn photo_extension(source: &Path) -> Result<String> {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        return Err(Error::validation(format!(
            "Unsupported photo format: {} (expected one of {})",
            source.display(),
            PHOTO_EXTENSIONS.join(", ")
        )));
    }
    Ok(ext)
}

async fn ensure_source_exists(source: &Path) -> Result<()> {
    if !fs::try_exists(source).await? {
        return Err(Error::not_found(source.display().to_string()));
    }
    Ok(())
}

/// A document name must be a single path component
fn check_document_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    if name.is_empty() || path.file_name().and_then(|n| n.to_str()) != Some(name) {
        return Err(Error::validation(format!("Invalid document name: {}", name)));
    }
    Ok(())
}

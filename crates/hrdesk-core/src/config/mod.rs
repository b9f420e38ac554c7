//! Filesystem locations and bootstrap settings

use crate::error::{Error, Result};
use crate::models::Role;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "HRDESK_DB_PATH";
pub const DATA_DIR_ENV: &str = "HRDESK_DATA_DIR";
pub const SEED_USERNAME_ENV: &str = "HRDESK_SEED_USERNAME";
pub const SEED_PASSWORD_ENV: &str = "HRDESK_SEED_PASSWORD";
pub const PDF_FONT_ENV: &str = "HRDESK_PDF_FONT";

const DB_FILE_NAME: &str = "hrdesk.db";
const PHOTOS_DIR: &str = "photos";
const DOCUMENTS_DIR: &str = "documents";

const DEFAULT_SEED_USERNAME: &str = "da";
const DEFAULT_SEED_PASSWORD: &str = "da";

/// Resolved locations of the database file and attachment directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl AppPaths {
    /// Resolve paths from explicit overrides, then environment, then the
    /// platform data directory.
    pub fn resolve(db_override: Option<&str>, data_dir_override: Option<&str>) -> Result<Self> {
        let data_dir = match data_dir_override
            .map(str::to_string)
            .or_else(|| std::env::var(DATA_DIR_ENV).ok())
        {
            Some(dir) => expand_path(&dir),
            None => default_data_dir()?,
        };

        let db_path = match db_override
            .map(str::to_string)
            .or_else(|| std::env::var(DB_PATH_ENV).ok())
        {
            Some(path) => expand_path(&path),
            None => data_dir.join(DB_FILE_NAME),
        };

        Ok(Self { data_dir, db_path })
    }

    /// Paths rooted at a single directory (used by tests and portable installs)
    pub fn under(root: impl AsRef<Path>) -> Self {
        let data_dir = root.as_ref().to_path_buf();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            data_dir,
        }
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.data_dir.join(PHOTOS_DIR)
    }

    pub fn documents_dir(&self) -> PathBuf {
        self.data_dir.join(DOCUMENTS_DIR)
    }
}

/// Platform data directory for HRDesk
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "hrdesk", "HRDesk")
        .ok_or_else(|| Error::config("Could not determine project directories"))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Expand `~` and environment variables in a user-supplied path
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(path),
    }
}

/// The well-known HR account created on first start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl SeedAccount {
    /// Seed credentials, overridable through environment variables
    pub fn from_env() -> Self {
        Self {
            username: std::env::var(SEED_USERNAME_ENV)
                .unwrap_or_else(|_| DEFAULT_SEED_USERNAME.to_string()),
            password: std::env::var(SEED_PASSWORD_ENV)
                .unwrap_or_else(|_| DEFAULT_SEED_PASSWORD.to_string()),
            role: Role::Hr,
        }
    }
}

impl Default for SeedAccount {
    fn default() -> Self {
        Self {
            username: DEFAULT_SEED_USERNAME.to_string(),
            password: DEFAULT_SEED_PASSWORD.to_string(),
            role: Role::Hr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests don't run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_resolve_default_db_under_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(DB_PATH_ENV);
        let paths = AppPaths::resolve(None, Some("/tmp/hrdesk-data")).unwrap();
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/hrdesk-data"));
        assert_eq!(paths.db_path, PathBuf::from("/tmp/hrdesk-data/hrdesk.db"));
    }

    #[test]
    fn test_resolve_env_override() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(DB_PATH_ENV, "/tmp/test_hrdesk.db");
        let paths = AppPaths::resolve(None, Some("/tmp/hrdesk-data")).unwrap();
        assert_eq!(paths.db_path, PathBuf::from("/tmp/test_hrdesk.db"));
        std::env::remove_var(DB_PATH_ENV);
    }

    #[test]
    fn test_resolve_explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(DB_PATH_ENV, "/tmp/from_env.db");
        let paths = AppPaths::resolve(Some("/tmp/explicit.db"), Some("/tmp/d")).unwrap();
        assert_eq!(paths.db_path, PathBuf::from("/tmp/explicit.db"));
        std::env::remove_var(DB_PATH_ENV);
    }

    #[test]
    fn test_attachment_dirs() {
        let paths = AppPaths::under("/srv/hr");
        assert_eq!(paths.photos_dir(), PathBuf::from("/srv/hr/photos"));
        assert_eq!(paths.documents_dir(), PathBuf::from("/srv/hr/documents"));
        assert_eq!(paths.db_path, PathBuf::from("/srv/hr/hrdesk.db"));
    }

    #[test]
    fn test_seed_account_env_override() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(SEED_USERNAME_ENV, "chief");
        let seed = SeedAccount::from_env();
        assert_eq!(seed.username, "chief");
        assert_eq!(seed.role, Role::Hr);
        std::env::remove_var(SEED_USERNAME_ENV);

        assert_eq!(SeedAccount::from_env(), SeedAccount::default());
    }
}

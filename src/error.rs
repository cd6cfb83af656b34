use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Terminus is not installed or not callable ({program})")]
    ToolNotFound { program: String },

    #[error("Site '{site}' is not accessible with the current Terminus session")]
    SiteNotAccessible { site: String },

    #[error("Invalid environment '{env}' (expected one of: dev, test, live)")]
    InvalidEnvironment { env: String },

    #[error("Failed to create a database backup of {source_id}")]
    BackupCreationFailed { source_id: String },

    #[error("Failed to download the database backup of {source_id} to {}: {reason}", path.display())]
    DownloadFailed {
        source_id: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to import the {source_id} snapshot into local database '{database}'")]
    ImportFailed { source_id: String, database: String },
}

impl SyncError {
    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            SyncError::ToolNotFound { .. } => "PANTHEON_TERMINUS_NOT_FOUND",
            SyncError::SiteNotAccessible { .. } => "PANTHEON_SITE_NOT_ACCESSIBLE",
            SyncError::InvalidEnvironment { .. } => "PANTHEON_INVALID_ENV",
            SyncError::BackupCreationFailed { .. } => "PANTHEON_BACKUP_FAILED",
            SyncError::DownloadFailed { .. } => "PANTHEON_DOWNLOAD_FAILED",
            SyncError::ImportFailed { .. } => "PANTHEON_IMPORT_FAILED",
        }
    }
}

use crate::command_utils::CommandRunner;
use crate::config::Config;
use crate::error::SyncError;
use crate::site::SiteReference;
use crate::terminus::Terminus;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A database backup downloaded, or about to be downloaded, to local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotArtifact {
    source: String,
    path: PathBuf,
}

impl SnapshotArtifact {
    /// Destination for a snapshot of `site` taken at `now`. The timestamp
    /// keeps successive runs from colliding.
    pub fn planned(temp_dir: &Path, site: &SiteReference, now: DateTime<Local>) -> Self {
        let source = site.composite();
        let filename = format!("{}.{}.sql.gz", source, now.format("%Y%m%d%H%M%S"));
        Self {
            path: temp_dir.join(filename),
            source,
        }
    }

    /// `<site>.<env>` the snapshot was taken from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_present(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }

    /// Removes whatever was written to the artifact's path, if anything.
    pub fn discard(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Requests a fresh database backup of `site` and downloads it to the
/// artifact's path.
pub fn run<R: CommandRunner>(
    config: &Config,
    runner: &R,
    site: &SiteReference,
    artifact: &SnapshotArtifact,
) -> Result<()> {
    let terminus = Terminus::new(&config.terminus_path, runner);
    let composite = site.composite();

    info!("Creating a database backup of {}", composite);
    match terminus.backup_create(&composite, config.keep_for_days) {
        Ok(true) => {}
        Ok(false) => {
            return Err(SyncError::BackupCreationFailed {
                source_id: composite,
            }
            .into())
        }
        Err(e) => {
            debug!("backup:create could not run: {:#}", e);
            return Err(SyncError::BackupCreationFailed {
                source_id: composite,
            }
            .into());
        }
    }

    let download_failed = |reason: String| SyncError::DownloadFailed {
        source_id: composite.clone(),
        path: artifact.path().to_path_buf(),
        reason,
    };

    let url = match terminus.backup_url(&composite) {
        Ok(Some(url)) => url,
        Ok(None) => {
            return Err(download_failed("Terminus returned no backup URL".into()).into());
        }
        Err(e) => return Err(download_failed(format!("{:#}", e)).into()),
    };

    info!("Downloading backup to {}", artifact.path().display());
    let args = vec![
        "--insecure".to_string(),
        "--fail".to_string(),
        "--silent".to_string(),
        "--show-error".to_string(),
        "--location".to_string(),
        "--output".to_string(),
        artifact.path().display().to_string(),
        url,
    ];
    let output = runner
        .run(&config.curl_path, &args)
        .map_err(|e| download_failed(format!("could not run {}: {:#}", config.curl_path, e)))?;

    if !output.status.success() {
        artifact.discard()?;
        let error_msg = String::from_utf8_lossy(&output.stderr);
        return Err(download_failed(error_msg.trim().to_string()).into());
    }

    // Exit statuses are not trusted here; only a non-empty file counts.
    if !artifact.is_present() {
        artifact.discard()?;
        return Err(download_failed("no file was written".into()).into());
    }

    Ok(())
}

use crate::import::InvocationOptions;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Local site selection for every drush call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalTarget {
    pub root: Option<String>,
    pub uri: Option<String>,
}

impl LocalTarget {
    pub fn selector_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(root) = &self.root {
            args.push(format!("--root={}", root));
        }
        if let Some(uri) = &self.uri {
            args.push(format!("--uri={}", uri));
        }
        args
    }
}

/// Which ambient options may reach the SQL import dispatch.
///
/// Denied keys select the invocation target, so forwarding them would point
/// the import somewhere else. `file` and `file-delete` are always forced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionFilter {
    pub deny: Vec<String>,
}

impl Default for OptionFilter {
    fn default() -> Self {
        Self {
            deny: vec!["root".to_string(), "uri".to_string()],
        }
    }
}

impl OptionFilter {
    pub fn apply(&self, ambient: &InvocationOptions, artifact: &Path) -> InvocationOptions {
        let mut options: InvocationOptions = ambient
            .iter()
            .filter(|(key, _)| !self.deny.iter().any(|denied| denied == *key))
            .map(|(key, value)| (key.to_string(), value.map(str::to_string)))
            .collect();

        options.insert("file", Some(artifact.display().to_string()));
        options.insert("file-delete", None);
        options
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub terminus_path: String,
    pub curl_path: String,
    pub drush_path: String,
    pub temp_dir: PathBuf,
    /// Days the remote platform retains the backup.
    pub keep_for_days: u32,
    pub target: LocalTarget,
    pub option_filter: OptionFilter,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let terminus_path = lookup("TERMINUS_PATH").unwrap_or_else(|| "terminus".to_string());
        let curl_path = lookup("CURL_PATH").unwrap_or_else(|| "curl".to_string());
        let drush_path = lookup("DRUSH_PATH").unwrap_or_else(|| "drush".to_string());
        let temp_dir = lookup("PANTHEON_SYNC_TMPDIR")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        let keep_for_days = match lookup("PANTHEON_SYNC_KEEP_FOR") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(days) if days > 0 => days,
                _ => bail!(
                    "PANTHEON_SYNC_KEEP_FOR must be a positive number of days, got '{}'",
                    raw
                ),
            },
            None => 1,
        };

        Ok(Config {
            terminus_path,
            curl_path,
            drush_path,
            temp_dir,
            keep_for_days,
            target: LocalTarget::default(),
            option_filter: OptionFilter::default(),
        })
    }

    pub fn with_target(mut self, target: LocalTarget) -> Self {
        self.target = target;
        self
    }
}

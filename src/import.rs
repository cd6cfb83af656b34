use crate::config::OptionFilter;
use crate::database::{LocalDatabase, LocalDatabaseTarget};
use crate::error::SyncError;
use crate::fetch::SnapshotArtifact;
use anyhow::Result;
use std::collections::BTreeMap;
use tracing::info;

/// Options handed to a sub-invocation, keyed by option name without dashes.
/// A `None` value is a bare flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    entries: BTreeMap<String, Option<String>>,
}

impl InvocationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `KEY`, `KEY=VALUE`, `--KEY` or `--KEY=VALUE` items.
    pub fn parse<S: AsRef<str>>(items: &[S]) -> Self {
        items
            .iter()
            .filter_map(|item| {
                let item = item.as_ref().trim().trim_start_matches('-');
                if item.is_empty() {
                    return None;
                }
                Some(match item.split_once('=') {
                    Some((key, value)) => (key.to_string(), Some(value.to_string())),
                    None => (item.to_string(), None),
                })
            })
            .collect()
    }

    pub fn insert(&mut self, key: &str, value: Option<String>) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Renders the options as command-line arguments.
    pub fn to_args(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| match value {
                Some(value) => format!("--{}={}", key, value),
                None => format!("--{}", key),
            })
            .collect()
    }
}

impl FromIterator<(String, Option<String>)> for InvocationOptions {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Replaces the local database contents with the downloaded snapshot.
///
/// The artifact is removed by the dispatched import (`file-delete`), on
/// success and on failure alike. If the drop fails the import never runs,
/// so the artifact is discarded here.
pub fn run<D: LocalDatabase>(
    database: &D,
    filter: &OptionFilter,
    ambient: &InvocationOptions,
    artifact: &SnapshotArtifact,
    target: &LocalDatabaseTarget,
) -> Result<()> {
    let failed = || SyncError::ImportFailed {
        source_id: artifact.source().to_string(),
        database: target.database.clone(),
    };

    info!("Dropping local database '{}'", target.database);
    if !database.drop_or_create()? {
        artifact.discard()?;
        return Err(failed().into());
    }

    let options = filter.apply(ambient, artifact.path());
    info!(
        "Importing {} into '{}'",
        artifact.path().display(),
        target.database
    );
    let result = database.query_file(&options)?;

    if result.is_error() {
        return Err(failed().into());
    }

    Ok(())
}

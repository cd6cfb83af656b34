use crate::command_utils::CommandRunner;
use crate::config::LocalTarget;
use crate::import::InvocationOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use std::io::Write;

/// Connection details of the local database. Credentials are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalDatabaseTarget {
    #[serde(default)]
    pub driver: String,
    pub database: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "port_as_string")]
    pub port: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

fn port_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Port>::deserialize(deserializer)? {
        Some(Port::Number(port)) => Some(port.to_string()),
        Some(Port::Text(port)) if !port.is_empty() => Some(port),
        _ => None,
    })
}

/// Outcome of a dispatched SQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub error_status: i32,
}

impl DispatchResult {
    pub fn is_error(&self) -> bool {
        self.error_status != 0
    }
}

/// The local toolchain's database abstraction.
pub trait LocalDatabase {
    fn target(&self) -> Result<LocalDatabaseTarget>;

    /// Drops the database, or creates it if it does not exist yet.
    fn drop_or_create(&self) -> Result<bool>;

    /// Runs SQL from the file named in `options`.
    fn query_file(&self, options: &InvocationOptions) -> Result<DispatchResult>;
}

/// `LocalDatabase` backed by drush's `sql:*` commands.
pub struct Drush<'a, R: CommandRunner> {
    program: &'a str,
    target: &'a LocalTarget,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Drush<'a, R> {
    pub fn new(program: &'a str, target: &'a LocalTarget, runner: &'a R) -> Self {
        Self {
            program,
            target,
            runner,
        }
    }

    fn args(&self, command: &str, extra: Vec<String>) -> Vec<String> {
        let mut args = self.target.selector_args();
        args.push(command.to_string());
        args.extend(extra);
        args
    }
}

impl<R: CommandRunner> LocalDatabase for Drush<'_, R> {
    fn target(&self) -> Result<LocalDatabaseTarget> {
        let args = self.args("sql:conf", vec!["--format=json".to_string()]);
        let output = self
            .runner
            .run(self.program, &args)
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Failed to read the local database configuration: {}",
                error_msg.trim()
            );
        }

        serde_json::from_slice(&output.stdout)
            .context("Failed to parse the local database configuration")
    }

    fn drop_or_create(&self) -> Result<bool> {
        let args = self.args("sql:create", vec!["--yes".to_string()]);
        let output = self.runner.run(self.program, &args)?;
        if !output.status.success() {
            std::io::stderr().write_all(&output.stderr)?;
        }
        Ok(output.status.success())
    }

    fn query_file(&self, options: &InvocationOptions) -> Result<DispatchResult> {
        let args = self.args("sql:query", options.to_args());
        let output = self.runner.run(self.program, &args)?;

        // drush reports its own failure; pass it through untouched.
        if !output.status.success() {
            std::io::stderr().write_all(&output.stderr)?;
        }

        Ok(DispatchResult {
            error_status: output.status.code().unwrap_or(-1),
        })
    }
}

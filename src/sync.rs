use crate::command_utils::CommandRunner;
use crate::config::Config;
use crate::database::LocalDatabase;
use crate::fetch::{self, SnapshotArtifact};
use crate::import::{self, InvocationOptions};
use crate::prompt::Prompt;
use crate::report;
use crate::site::SiteReference;
use crate::validate;
use anyhow::Result;
use chrono::Local;
use tracing::info;

/// How a run ended when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Imported {
        artifact: SnapshotArtifact,
        database: String,
    },
    /// The operator declined; nothing was changed.
    Aborted,
}

/// Collaborators a sync run talks to.
pub struct Workflow<'a, R, D, P> {
    pub config: &'a Config,
    pub runner: &'a R,
    pub database: &'a D,
    pub prompt: &'a P,
}

impl<R, D, P> Workflow<'_, R, D, P>
where
    R: CommandRunner,
    D: LocalDatabase,
    P: Prompt,
{
    /// Validate, confirm, back up, download, import. Any failure ends the
    /// run; nothing is retried or rolled back.
    pub fn run(&self, site: &SiteReference, ambient: &InvocationOptions) -> Result<Outcome> {
        validate::run(self.config, self.runner, site)?;
        info!("Preconditions satisfied for {}", site);
        report::ok(&format!("{} is accessible", site));

        let target = self.database.target()?;
        let artifact = SnapshotArtifact::planned(&self.config.temp_dir, site, Local::now());

        let message = format!(
            "Replace local database '{}' with a snapshot of {} (downloaded to {})?",
            target.database,
            artifact.source(),
            artifact.path().display()
        );
        if !self.prompt.confirm(&message)? {
            info!("Sync of {} declined by user", site);
            report::info("Aborted.");
            return Ok(Outcome::Aborted);
        }

        report::info(&format!("Creating a database backup of {}...", site));
        fetch::run(self.config, self.runner, site, &artifact)?;
        report::ok(&format!("Downloaded backup to {}", artifact.path().display()));

        import::run(
            self.database,
            &self.config.option_filter,
            ambient,
            &artifact,
            &target,
        )?;
        report::success(&format!(
            "Imported {} into local database '{}'",
            artifact.source(),
            target.database
        ));

        Ok(Outcome::Imported {
            artifact,
            database: target.database,
        })
    }
}

use crate::command_utils::CommandRunner;
use anyhow::Result;

/// Typed calls into the Terminus CLI. Each returns whether the process
/// exited successfully; spawn failures surface as `Err`.
pub struct Terminus<'a, R: CommandRunner> {
    program: &'a str,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Terminus<'a, R> {
    pub fn new(program: &'a str, runner: &'a R) -> Self {
        Self { program, runner }
    }

    pub fn version(&self) -> Result<bool> {
        self.succeeds(&["--version".to_string()])
    }

    pub fn site_info(&self, site: &str) -> Result<bool> {
        self.succeeds(&["site:info".to_string(), site.to_string()])
    }

    pub fn backup_create(&self, composite: &str, keep_for_days: u32) -> Result<bool> {
        self.succeeds(&[
            "backup:create".to_string(),
            composite.to_string(),
            "--element=database".to_string(),
            format!("--keep-for={}", keep_for_days),
            "--yes".to_string(),
        ])
    }

    /// Signed download URL of the latest database backup, if Terminus
    /// produced one.
    pub fn backup_url(&self, composite: &str) -> Result<Option<String>> {
        let output = self.runner.run(
            self.program,
            &[
                "backup:get".to_string(),
                composite.to_string(),
                "--element=database".to_string(),
            ],
        )?;

        if !output.status.success() {
            return Ok(None);
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(if url.is_empty() { None } else { Some(url) })
    }

    fn succeeds(&self, args: &[String]) -> Result<bool> {
        let output = self.runner.run(self.program, args)?;
        Ok(output.status.success())
    }
}

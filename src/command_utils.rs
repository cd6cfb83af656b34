use anyhow::Result;
use std::ffi::OsStr;
use std::process::{Command, Output};
use tracing::debug;

/// Execute a command with debug logging
pub fn execute_command<S: AsRef<OsStr>>(cmd: &str, args: &[S]) -> Result<Output> {
    let line = render(cmd, args);
    debug!("Executing command: {}", line);

    let output = Command::new(cmd).args(args).output()?;

    if output.status.success() {
        debug!("Command succeeded: {}", line);
    } else {
        debug!(
            "Command failed: {} (exit code: {:?})",
            line,
            output.status.code()
        );
    }
    if !output.stdout.is_empty() {
        debug!("stdout: {}", String::from_utf8_lossy(&output.stdout).trim());
    }
    if !output.stderr.is_empty() {
        debug!("stderr: {}", String::from_utf8_lossy(&output.stderr).trim());
    }

    Ok(output)
}

fn render<S: AsRef<OsStr>>(cmd: &str, args: &[S]) -> String {
    let mut line = cmd.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

/// Seam between the workflow and the processes it spawns.
///
/// Every external call (`terminus`, `curl`, `drush`) goes through a runner.
/// Arguments are always passed as an explicit vector; nothing is handed to a
/// shell.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Output>;
}

/// Runs commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        execute_command(program, args)
    }
}

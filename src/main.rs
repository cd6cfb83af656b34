use anyhow::Result;
use clap::Parser;
use pantheon_sync::command_utils::SystemRunner;
use pantheon_sync::config::{Config, LocalTarget};
use pantheon_sync::database::Drush;
use pantheon_sync::error::SyncError;
use pantheon_sync::import::InvocationOptions;
use pantheon_sync::prompt::TerminalPrompt;
use pantheon_sync::report;
use pantheon_sync::site::SiteReference;
use pantheon_sync::sync::Workflow;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pantheon-sync")]
#[command(about = "Restore a Pantheon database snapshot into the local site")]
struct Cli {
    /// Pantheon site name
    site: String,

    /// Environment to copy from (dev, test or live)
    env: String,

    /// Drupal root of the local site
    #[arg(long)]
    root: Option<String>,

    /// URI of the local site
    #[arg(long)]
    uri: Option<String>,

    /// Extra option for the SQL import, as KEY or KEY=VALUE
    #[arg(short = 'O', long = "option", value_name = "KEY[=VALUE]")]
    options: Vec<String>,

    /// Show every external command that runs
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let site = SiteReference::new(&cli.site, &cli.env)?;
    let target = LocalTarget {
        root: cli.root,
        uri: cli.uri,
    };
    let config = Config::from_env()?.with_target(target);
    let ambient = InvocationOptions::parse(&cli.options);

    let runner = SystemRunner;
    let database = Drush::new(&config.drush_path, &config.target, &runner);
    let workflow = Workflow {
        config: &config,
        runner: &runner,
        database: &database,
        prompt: &TerminalPrompt,
    };

    workflow.run(&site, &ambient)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SyncError>() {
                Some(sync_error) => {
                    report::error(&format!("{}: {}", sync_error.code(), sync_error))
                }
                None => report::error(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}

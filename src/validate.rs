use crate::command_utils::CommandRunner;
use crate::config::Config;
use crate::error::SyncError;
use crate::site::SiteReference;
use crate::terminus::Terminus;
use tracing::debug;

/// Confirms Terminus is callable and the site is reachable under the current
/// session. Stops at the first failure. The environment allow-list is
/// enforced earlier, when `SiteReference::new` parses it.
pub fn run<R: CommandRunner>(
    config: &Config,
    runner: &R,
    site: &SiteReference,
) -> Result<(), SyncError> {
    let terminus = Terminus::new(&config.terminus_path, runner);

    match terminus.version() {
        Ok(true) => {}
        Ok(false) => {
            return Err(SyncError::ToolNotFound {
                program: config.terminus_path.clone(),
            })
        }
        Err(e) => {
            debug!("{} could not be spawned: {:#}", config.terminus_path, e);
            return Err(SyncError::ToolNotFound {
                program: config.terminus_path.clone(),
            });
        }
    }

    if !terminus.site_info(site.site()).unwrap_or(false) {
        return Err(SyncError::SiteNotAccessible {
            site: site.site().to_string(),
        });
    }

    Ok(())
}

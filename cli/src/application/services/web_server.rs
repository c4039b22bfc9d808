//! Application service — reload the web server after config changes.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::{SiteConfig, SiteError};

/// Run the configured restart command and wait for it to exit.
///
/// # Errors
///
/// Returns [`SiteError::Process`] if the command cannot be spawned or exits
/// with a non-zero status.
pub async fn restart(
    runner: &impl CommandRunner,
    site: &SiteConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let command = site.restart_command_line();
    let Some((program, rest)) = site.restart_command.split_first() else {
        return Err(SiteError::Process {
            command,
            reason: "is empty".to_string(),
        }
        .into());
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    reporter.step("Restarting Nginx...");
    tracing::debug!(%command, "running restart command");

    let output = runner
        .run(program, &args)
        .await
        .map_err(|e| SiteError::Process {
            command: command.clone(),
            reason: format!("could not be started: {e:#}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!(%command, status = %output.status, stderr = %stderr.trim(), "restart failed");
        return Err(SiteError::Process {
            command,
            reason: format!("exited with {}", output.status),
        }
        .into());
    }

    reporter.success("Nginx restarted successfully");
    Ok(())
}

//! `site-manager delete` — remove everything `create` produced.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::site_delete::{self, DeleteOutcome};

/// Run `site-manager delete`.
///
/// A declined confirmation is not an error.
///
/// # Errors
///
/// Returns an error if the prompt or any removal step fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let outcome =
        site_delete::delete_site(&app.fs, &app.runner, app, &app.site, &app.reporter()).await?;
    if outcome == DeleteOutcome::Deleted {
        app.output.info(&format!("Site removed: {}", app.site.domain));
    }
    Ok(())
}

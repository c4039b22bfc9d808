//! `site-manager create` — provision the site for the current folder.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::site_create;

/// Run `site-manager create`.
///
/// # Errors
///
/// Returns an error if any provisioning step fails.
pub async fn run(app: &AppContext) -> Result<()> {
    app.output.header(&format!("Creating {}", app.site.domain));
    site_create::create_site(&app.fs, &app.runner, &app.site, &app.reporter()).await?;
    app.output.info(&format!("Site ready: http://{}", app.site.domain));
    Ok(())
}

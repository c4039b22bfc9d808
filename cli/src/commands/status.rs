//! `site-manager status` — show which artifacts exist for the current folder.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::site_status::{self, LinkState};

/// Run `site-manager status`.
///
/// # Errors
///
/// Returns an error if the hosts file cannot be read.
pub fn run(app: &AppContext) -> Result<()> {
    let site = &app.site;
    let status = site_status::inspect(&app.fs, site)?;
    let out = &app.output;

    out.header(&site.domain);
    out.kv("document root", &site.document_root.display().to_string());

    let config = site.config_path.display();
    if status.config_present {
        out.success(&format!("Nginx config: {config}"));
    } else {
        out.warn(&format!("Nginx config not found: {config}"));
    }

    let link = site.enabled_link_path.display();
    match &status.link {
        LinkState::Enabled => out.success(&format!("Symlink: {link}")),
        LinkState::Missing => out.warn(&format!("Symlink not found: {link}")),
        LinkState::Foreign(target) => out.warn(&format!(
            "Symlink {link} points to {} instead",
            target.display()
        )),
        LinkState::NotALink => out.warn(&format!("{link} exists but is not a symlink")),
    }

    let hosts = site.hosts_file.display();
    if status.hosts_lines.is_empty() {
        out.warn(&format!("Domain not found in {hosts}: {}", site.domain));
    } else {
        for line in &status.hosts_lines {
            out.success(&format!("{hosts}: {line}"));
        }
    }

    if status.is_provisioned() {
        out.info("Site is provisioned");
    } else {
        out.info("Site is not fully provisioned; run `site-manager create`");
    }
    Ok(())
}

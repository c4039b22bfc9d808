//! Interactive action menu shown when no subcommand is given.

use anyhow::{Context, Result};
use dialoguer::Select;

use crate::cli::Command;

/// Menu entries, in display order.
pub const MENU: &[(Command, &str)] = &[
    (Command::Create, "Create a new domain configuration"),
    (Command::Delete, "Delete domain configuration"),
];

/// Prompt the user to pick an action.
///
/// # Errors
///
/// Returns an error if the selection cannot be read (e.g. no TTY).
pub fn select_action() -> Result<Command> {
    let labels: Vec<&str> = MENU.iter().map(|(_, label)| *label).collect();
    let idx = Select::new()
        .with_prompt("Select action")
        .items(&labels)
        .default(0)
        .interact()
        .context("action selection")?;
    MENU.get(idx)
        .map(|(command, _)| *command)
        .ok_or_else(|| anyhow::anyhow!("no action at menu index {idx}"))
}

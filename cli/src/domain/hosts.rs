//! Byte-level transforms over the contents of a hosts file.
//!
//! A line "belongs" to a domain when it contains the domain anywhere, so
//! comments or aliases mentioning it are rewritten too. Contents are handled
//! as raw bytes: lines that are not valid UTF-8 pass through unchanged.

use anyhow::{Context, Result};
use regex::bytes::{NoExpand, Regex};

/// Canonical hosts entry: address, four spaces, domain.
#[must_use]
pub fn entry(ip: &str, domain: &str) -> String {
    format!("{ip}    {domain}")
}

/// Literal substring check used to pick between update and append.
#[must_use]
pub fn contains_domain(contents: &[u8], domain: &str) -> bool {
    let needle = domain.as_bytes();
    needle.is_empty() || contents.windows(needle.len()).any(|w| w == needle)
}

/// Replace every line mentioning `domain` with `entry`, preserving order and
/// the surrounding line breaks.
///
/// # Errors
///
/// Returns an error if the line pattern cannot be compiled.
pub fn replace_entries(contents: &[u8], domain: &str, entry: &str) -> Result<Vec<u8>> {
    let pattern = line_pattern(domain)?;
    Ok(pattern
        .replace_all(contents, NoExpand(entry.as_bytes()))
        .into_owned())
}

/// Blank out every line mentioning `domain`.
///
/// The line terminator stays, so each removed entry leaves an empty line.
///
/// # Errors
///
/// Returns an error if the line pattern cannot be compiled.
pub fn remove_entries(contents: &[u8], domain: &str) -> Result<Vec<u8>> {
    let pattern = line_pattern(domain)?;
    Ok(pattern.replace_all(contents, &b""[..]).into_owned())
}

// `(?-u:.)` matches any single byte except `\n`, invalid UTF-8 included.
fn line_pattern(domain: &str) -> Result<Regex> {
    Regex::new(&format!(
        r"(?m)^(?-u:.)*{}(?-u:.)*$",
        regex::escape(domain)
    ))
    .with_context(|| format!("building hosts pattern for {domain}"))
}

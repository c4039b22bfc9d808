//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod hosts;
pub mod site;
pub mod vhost;

pub use config::Settings;
pub use error::{ConfigError, SiteError};
pub use site::SiteConfig;

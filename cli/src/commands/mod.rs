//! Command implementations

pub mod create;
pub mod delete;
pub mod menu;
pub mod status;

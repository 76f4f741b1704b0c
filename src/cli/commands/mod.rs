//! Command implementations for the dexidoc CLI

pub mod config;
pub mod scan;

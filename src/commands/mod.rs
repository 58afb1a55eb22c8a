//! Command implementations for the botcfg CLI

pub mod completions;
pub mod scan;
pub mod show;
pub mod version;

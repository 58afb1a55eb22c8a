//! Configuration file parsing
//!
//! - [`ini`]: the `.cfg` dialect bot configs are written in

pub mod ini;

pub use ini::{ConfigDocument, DEFAULT_SECTION, parse_bool};

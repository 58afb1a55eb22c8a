//! Domain models for botcfg
//!
//! Pure value objects produced by loading configuration files.

pub mod bundle;

pub use bundle::{BotDetails, ConfigBundle, DETAILS_SECTION, LOCATIONS_SECTION};

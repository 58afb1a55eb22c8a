//! Bundle domain types
//!
//! A [`ConfigBundle`] is one parsed bot config. Two bundles are equal when
//! their parsed content is equal, regardless of which file they came from.

use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ConfigDocument, parse_bool};
use crate::error::{Result, parse};

pub const LOCATIONS_SECTION: &str = "Locations";
pub const DETAILS_SECTION: &str = "Details";

const NAME_KEY: &str = "name";
const PYTHON_FILE_KEY: &str = "python_file";
const LOOKS_CONFIG_KEY: &str = "looks_config";
const LOGO_FILE_KEY: &str = "logo_file";
const SUPPORTS_EARLY_START_KEY: &str = "supports_early_start";
const MAXIMUM_TICK_RATE_KEY: &str = "maximum_tick_rate_preference";

/// Optional descriptive metadata from the `[Details]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BotDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl BotDetails {
    fn from_document(doc: &ConfigDocument) -> Self {
        let field = |key: &str| {
            doc.get(DETAILS_SECTION, key)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        BotDetails {
            developer: field("developer"),
            description: field("description"),
            fun_fact: field("fun_fact"),
            github: field("github"),
            language: field("language"),
            tags: doc
                .get(DETAILS_SECTION, "tags")
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A bot configuration loaded from a `.cfg` file
#[derive(Debug, Clone, Serialize)]
pub struct ConfigBundle {
    name: String,
    source: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    python_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    looks_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supports_early_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum_tick_rate_preference: Option<u32>,
    #[serde(skip_serializing_if = "BotDetails::is_empty")]
    details: BotDetails,
    config: ConfigDocument,
}

impl ConfigBundle {
    /// Build a bundle from a parsed document
    ///
    /// Requires `[Locations]` with a non-empty `name` option. Typed options that are
    /// present must hold a value of the right shape.
    pub fn from_document(document: ConfigDocument, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let origin = source.display().to_string();

        if !document.has_section(LOCATIONS_SECTION) {
            return Err(parse::missing_section(origin, LOCATIONS_SECTION));
        }

        let name = document
            .get(LOCATIONS_SECTION, NAME_KEY)
            .ok_or_else(|| parse::missing_option(&origin, LOCATIONS_SECTION, NAME_KEY))?
            .to_string();
        if name.is_empty() {
            return Err(parse::invalid_value(
                &origin,
                LOCATIONS_SECTION,
                NAME_KEY,
                "bot name is empty",
            ));
        }

        let supports_early_start = document
            .get(LOCATIONS_SECTION, SUPPORTS_EARLY_START_KEY)
            .map(|v| {
                parse_bool(v).ok_or_else(|| {
                    parse::invalid_value(
                        &origin,
                        LOCATIONS_SECTION,
                        SUPPORTS_EARLY_START_KEY,
                        format!("'{v}' is not a boolean"),
                    )
                })
            })
            .transpose()?;

        let maximum_tick_rate_preference = document
            .get(LOCATIONS_SECTION, MAXIMUM_TICK_RATE_KEY)
            .map(|v| {
                v.parse::<u32>().map_err(|e| {
                    parse::invalid_value(
                        &origin,
                        LOCATIONS_SECTION,
                        MAXIMUM_TICK_RATE_KEY,
                        format!("'{v}': {e}"),
                    )
                })
            })
            .transpose()?;

        let optional = |key: &str| {
            document
                .get(LOCATIONS_SECTION, key)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Ok(ConfigBundle {
            name,
            python_file: optional(PYTHON_FILE_KEY),
            looks_config: optional(LOOKS_CONFIG_KEY),
            logo_file: optional(LOGO_FILE_KEY),
            supports_early_start,
            maximum_tick_rate_preference,
            details: BotDetails::from_document(&document),
            config: document,
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file this bundle was loaded from
    ///
    /// When several files hold identical content only one of them survives a
    /// scan, so this is one representative path, not the identity.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn config_directory(&self) -> &Path {
        self.source.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn python_file(&self) -> Option<&str> {
        self.python_file.as_deref()
    }

    pub fn looks_config(&self) -> Option<&str> {
        self.looks_config.as_deref()
    }

    pub fn logo_file(&self) -> Option<&str> {
        self.logo_file.as_deref()
    }

    pub fn supports_early_start(&self) -> Option<bool> {
        self.supports_early_start
    }

    pub fn maximum_tick_rate_preference(&self) -> Option<u32> {
        self.maximum_tick_rate_preference
    }

    pub fn details(&self) -> &BotDetails {
        &self.details
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.config
    }

    /// Resolve a path written in the config relative to its directory
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.config_directory().join(relative)
    }
}

impl PartialEq for ConfigBundle {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Eq for ConfigBundle {}

impl Hash for ConfigBundle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config.hash(state);
    }
}

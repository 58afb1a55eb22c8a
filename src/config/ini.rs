//! INI-style parser for `.cfg` files
//!
//! The accepted dialect:
//! - `[name]` opens a section; `[DEFAULT]` holds fallbacks for every other section
//! - `key = value` or `key: value`, whichever delimiter comes first
//! - option names are case-insensitive, section names are not
//! - `#` and `;` start whole-line comments
//! - lines indented deeper than their option's key continue its value;
//!   blank lines between continuation lines are kept in the value
//! - before the first section any non-header line, including a broken
//!   header, means the file has no section headers

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::{Result, parse};

/// Name of the section whose options every other section inherits
pub const DEFAULT_SECTION: &str = "DEFAULT";

type Options = BTreeMap<String, String>;

/// A parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ConfigDocument {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    defaults: Options,
    sections: BTreeMap<String, Options>,
}

/// Where the next continuation line should go
struct OpenOption {
    key: String,
    indent: usize,
    /// Blank lines seen since the last line of the value
    blanks: usize,
}

impl ConfigDocument {
    /// Parse configuration text
    ///
    /// `origin` names the text in error messages, usually the file path.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let mut doc = Self::default();
        let mut current: Option<String> = None;
        let mut open: Option<OpenOption> = None;
        let mut seen: HashSet<String> = HashSet::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let stripped = raw.trim();

            if stripped.is_empty() {
                if let Some(option) = open.as_mut() {
                    option.blanks += 1;
                }
                continue;
            }
            if stripped.starts_with('#') || stripped.starts_with(';') {
                continue;
            }

            let indent = raw.len() - raw.trim_start().len();

            if let (Some(section), Some(option)) = (&current, open.as_mut()) {
                if indent > option.indent {
                    let options = doc.options_mut(section);
                    if let Some(value) = options.get_mut(&option.key) {
                        value.push_str(&"\n".repeat(option.blanks));
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(stripped);
                    }
                    option.blanks = 0;
                    continue;
                }
            }

            if let Some(rest) = stripped.strip_prefix('[') {
                let Some(header) = parse_header(rest) else {
                    return Err(match current {
                        None => parse::missing_section_header(origin, line_no),
                        Some(_) => parse::malformed_line(origin, line_no, stripped),
                    });
                };
                // `[DEFAULT]` may be reopened; its options merge
                if header != DEFAULT_SECTION && !seen.insert(header.to_string()) {
                    return Err(parse::duplicate_section(origin, line_no, header));
                }
                if header != DEFAULT_SECTION {
                    doc.sections.insert(header.to_string(), Options::new());
                }
                current = Some(header.to_string());
                open = None;
                continue;
            }

            let Some(section) = &current else {
                return Err(parse::missing_section_header(origin, line_no));
            };

            let Some(pos) = stripped.find(['=', ':']) else {
                return Err(parse::malformed_line(origin, line_no, stripped));
            };
            let key = stripped[..pos].trim().to_lowercase();
            if key.is_empty() {
                return Err(parse::malformed_line(origin, line_no, stripped));
            }
            let value = stripped[pos + 1..].trim().to_string();

            let options = doc.options_mut(section);
            if options.contains_key(&key) {
                return Err(parse::duplicate_option(origin, line_no, section, key));
            }
            options.insert(key.clone(), value);
            open = Some(OpenOption {
                key,
                indent,
                blanks: 0,
            });
        }

        Ok(doc)
    }

    fn options_mut(&mut self, section: &str) -> &mut Options {
        if section == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(section.to_string()).or_default()
        }
    }

    /// Whether a (non-default) section exists
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Names of all non-default sections, sorted
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Look up an option, falling back to `[DEFAULT]`
    ///
    /// Returns `None` when the section itself does not exist.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        let options = self.sections.get(section)?;
        let key = option.to_lowercase();
        options
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    /// All options visible in a section, defaults included
    pub fn options(&self, section: &str) -> Option<BTreeMap<&str, &str>> {
        let options = self.sections.get(section)?;
        let mut merged: BTreeMap<&str, &str> = self
            .defaults
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        merged.extend(options.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Some(merged)
    }
}

/// Extract the name from the part of a header line after `[`
fn parse_header(rest: &str) -> Option<&str> {
    let end = rest.rfind(']')?;
    let name = &rest[..end];
    if name.is_empty() { None } else { Some(name) }
}

/// Interpret a boolean option value
///
/// Accepts `1/yes/true/on` and `0/no/false/off`, ignoring case.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

//! Display functions for bundles
//!
//! Everything renders to a `String` so commands decide where it goes.

use console::Style;

use botcfg::ConfigBundle;
use botcfg::error::Result;

use crate::cli::OutputFormat;

macro_rules! push_opt_field {
    ($lines:expr, $label:expr, $value:expr) => {
        if let Some(v) = $value {
            $lines.push(format!("    {} {}", Style::new().bold().apply_to($label), v));
        }
    };
}

/// Render a list of bundles in the requested format
pub fn render_bundles(bundles: &[&ConfigBundle], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(bundles)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(bundles)?),
        OutputFormat::Text => Ok(render_text_list(bundles)),
    }
}

/// Render one bundle in the requested format
pub fn render_bundle(bundle: &ConfigBundle, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(bundle)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(bundle)?),
        OutputFormat::Text => Ok(bundle_lines(bundle).join("\n")),
    }
}

fn render_text_list(bundles: &[&ConfigBundle]) -> String {
    if bundles.is_empty() {
        return "No bundles found.".to_string();
    }

    let noun = if bundles.len() == 1 { "bundle" } else { "bundles" };
    let mut out = vec![format!("Found {} {noun}:", bundles.len())];
    for bundle in bundles {
        out.push(String::new());
        out.extend(bundle_lines(bundle));
    }
    out.join("\n")
}

fn bundle_lines(bundle: &ConfigBundle) -> Vec<String> {
    let mut lines = vec![format!(
        "  {}",
        Style::new().bold().yellow().apply_to(bundle.name())
    )];
    lines.push(format!(
        "    {} {}",
        Style::new().bold().apply_to("Source:"),
        bundle.source().display()
    ));
    push_opt_field!(lines, "Python file:", bundle.python_file());
    push_opt_field!(lines, "Looks config:", bundle.looks_config());
    push_opt_field!(lines, "Logo file:", bundle.logo_file());
    push_opt_field!(lines, "Early start:", bundle.supports_early_start());
    push_opt_field!(lines, "Max tick rate:", bundle.maximum_tick_rate_preference());

    let details = bundle.details();
    push_opt_field!(lines, "Developer:", details.developer.as_deref());
    push_opt_field!(lines, "Description:", details.description.as_deref());
    push_opt_field!(lines, "Language:", details.language.as_deref());
    push_opt_field!(lines, "GitHub:", details.github.as_deref());
    if !details.tags.is_empty() {
        lines.push(format!(
            "    {} {}",
            Style::new().bold().apply_to("Tags:"),
            details.tags.join(", ")
        ));
    }

    lines
}

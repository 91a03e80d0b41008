//! Formatting utilities for CLI output.

use crate::{
    config::{LoadReport, Settings},
    layout::LayoutRegistry,
};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats success markers with green styling
pub fn format_success(text: &str) -> String {
    format!("{}{}{}", Colors::GREEN, text, Colors::RESET)
}

/// Formats warnings with yellow styling
pub fn format_warning(text: &str) -> String {
    format!("{}{}{}", Colors::YELLOW, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        format_description("none")
    } else {
        items.join(", ")
    }
}

/// Renders a load report for humans.
pub fn format_report(report: &LoadReport, settings: &Settings) -> String {
    let source = match &report.source {
        Some(path) => path.display().to_string(),
        None => format_description("none, using defaults"),
    };

    let mut lines = vec![
        format!("{} {source}", format_header("Source:")),
        format!("{} {}", format_header("Border width:"), settings.border_width),
        format!(
            "{} {}",
            format_header("Modules:"),
            list_or_none(&report.loaded_modules)
        ),
        format!(
            "{} {}",
            format_header("Configured:"),
            list_or_none(&report.configured)
        ),
    ];

    if let Some(unrecognized) = report
        .settings
        .as_ref()
        .map(|settings| &settings.unrecognized)
        .filter(|keys| !keys.is_empty())
    {
        lines.push(format!(
            "{} {}",
            format_header("Ignored keys:"),
            unrecognized.join(", ")
        ));
    }

    for failure in &report.module_failures {
        lines.push(format_warning(&format!(
            "  module {}: {}",
            failure.name, failure.error
        )));
    }
    for failure in &report.failures {
        lines.push(format_warning(&format!(
            "  document {}: {}",
            failure.index, failure.error
        )));
    }

    if report.is_clean() {
        lines.push(format_success("OK"));
    }

    lines.join("\n")
}

/// Renders the registered layouts, one per line.
pub fn format_layouts(layouts: &LayoutRegistry) -> String {
    if layouts.is_empty() {
        return format_description("no layouts registered");
    }

    layouts
        .names()
        .iter()
        .filter_map(|name| layouts.lookup(name))
        .map(|layout| {
            format!(
                "{:<8} {} {}",
                layout.name(),
                format_description(&format!("[{}]", layout.provider())),
                layout.summary()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

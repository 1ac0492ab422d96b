//! CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (one JSON
//! object per line, for scripting), color control, and verbosity levels.
//! Status lines go to stdout; errors go to stderr.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Style output with ANSI colors.
    pub color: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, color: bool, verbose: u8) -> Self {
        Self {
            json,
            color,
            verbose,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Apply a style only when colors are enabled.
fn paint(config: OutputConfig, text: &str, style: fn(&str) -> String) -> String {
    if config.color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Wrap a payload in the `{"type", "payload"}` envelope of JSON mode.
fn json_line(kind: &str, payload: serde_json::Value) -> serde_json::Value {
    json!({
        "type": kind,
        "payload": payload,
    })
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json_line(kind, payload));
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point, before any output is written.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit_json_line(
            "header",
            json!({
                "app": "roster",
                "version": version,
            }),
        );
        return;
    }

    println!(
        "{} {}",
        paint(config, "roster", |s| s.bold().to_string()),
        paint(config, version, |s| s.dimmed().to_string())
    );
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }

    println!(
        "  {} {}",
        paint(config, &format!("{label:<12}"), |s| s.dimmed().to_string()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }

    println!(
        "  {} {}",
        paint(config, "✓", |s| s.green().to_string()),
        message
    );
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", paint(config, "×", |s| s.red().to_string()), message);
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }

    println!("  {}", paint(config, message, |s| s.dimmed().to_string()));
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("lines", json!({ "content": content }));
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a result set as one JSON line.
pub fn rows(kind: &str, rows: serde_json::Value) {
    emit_json_line(kind, json!({ "rows": rows }));
}

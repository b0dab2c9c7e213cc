// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs parses arguments and dispatches here.

pub mod map;
pub mod process;
pub mod route;
pub mod stats;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use transport_catalogue_lib::TransportDocument;

/// Load the input document from `path`, or from stdin when the path is absent or `-`.
pub fn load_document(path: Option<&Path>) -> Result<TransportDocument> {
    match path {
        Some(path) if path != Path::new("-") => TransportDocument::from_path(path)
            .with_context(|| format!("failed to load document from {}", path.display())),
        _ => TransportDocument::from_reader(io::stdin().lock())
            .context("failed to read document from stdin"),
    }
}

/// Friendly rendering of an unknown stop name with optional suggestions.
pub fn format_unknown_stop_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown stop '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = if let [suggestion] = suggestions {
            format!("Did you mean '{suggestion}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

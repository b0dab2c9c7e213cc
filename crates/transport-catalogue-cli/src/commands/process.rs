//! Process command: answer every stat request of a document.

use std::io;

use anyhow::{Context, Result};

use transport_catalogue_lib::{process_document, write_responses, TransportDocument};

/// Run the full load, build, and query pipeline and print a JSON array.
pub fn handle_process_command(document: &TransportDocument) -> Result<()> {
    let responses = process_document(document).context("failed to process document")?;
    write_responses(&responses, io::stdout().lock()).context("failed to write responses")?;
    Ok(())
}

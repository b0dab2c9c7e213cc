//! Map data command: emit the snapshot consumed by map renderers.

use std::io;

use anyhow::{Context, Result};

use transport_catalogue_lib::TransportDocument;

pub fn handle_map_data_command(document: &TransportDocument) -> Result<()> {
    let catalogue = document
        .build_catalogue()
        .context("failed to build catalogue")?;
    let mut out = io::stdout().lock();
    catalogue
        .map_data()
        .write_json(&mut out)
        .context("failed to write map data")?;
    println!();
    Ok(())
}

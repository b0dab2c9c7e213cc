//! Bus and stop statistics commands.

use std::io;

use anyhow::{Context, Result};

use transport_catalogue_lib::{Error as CatalogueError, TransportDocument};
use transport_catalogue_cli::output::OutputFormat;

use super::format_unknown_stop_message;

/// Print statistics for one bus line.
pub fn handle_bus_command(
    document: &TransportDocument,
    format: OutputFormat,
    name: &str,
) -> Result<()> {
    let catalogue = document
        .build_catalogue()
        .context("failed to build catalogue")?;
    let info = catalogue.bus_info(name).map_err(|err| match err {
        CatalogueError::UnknownBus { name } => anyhow::anyhow!("Bus '{}' not found.", name),
        other => anyhow::Error::new(other),
    })?;

    format
        .render_bus(&mut io::stdout().lock(), name, &info)
        .context("failed to write output")
}

/// Print the buses serving one stop.
pub fn handle_stop_command(
    document: &TransportDocument,
    format: OutputFormat,
    name: &str,
) -> Result<()> {
    let catalogue = document
        .build_catalogue()
        .context("failed to build catalogue")?;
    let buses = catalogue.stop_info(name).map_err(|err| match err {
        CatalogueError::UnknownStop { name, suggestions } => {
            anyhow::anyhow!(format_unknown_stop_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    })?;
    let buses: Vec<&str> = buses.into_iter().collect();

    format
        .render_stop(&mut io::stdout().lock(), name, &buses)
        .context("failed to write output")
}

//! Route command handler for computing the fastest trip between two stops.

use std::io;

use anyhow::{Context, Result};

use transport_catalogue_lib::{
    Error as RouteError, RoutingSettings, TransportDocument, TransportRouter,
};
use transport_catalogue_cli::output::OutputFormat;

use super::format_unknown_stop_message;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting stop name.
    pub from: String,
    /// Destination stop name.
    pub to: String,
    /// Override for the document's bus wait time (minutes).
    pub wait_time: Option<u32>,
    /// Override for the document's bus velocity (km/h).
    pub velocity: Option<f64>,
}

impl RouteCommandArgs {
    /// Merge command-line overrides with the document's routing settings.
    pub fn settings(&self, document: &TransportDocument) -> Result<RoutingSettings> {
        let base = document.routing_settings;
        let wait_time = self.wait_time.or(base.map(|s| s.wait_time));
        let velocity = self.velocity.or(base.map(|s| s.velocity));
        let (Some(wait_time), Some(velocity)) = (wait_time, velocity) else {
            anyhow::bail!(
                "routing settings missing: add routing_settings to the document or pass --wait-time and --velocity"
            );
        };
        RoutingSettings::new(wait_time, velocity).context("invalid routing settings")
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    document: &TransportDocument,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let settings = args.settings(document)?;
    let catalogue = document
        .build_catalogue()
        .context("failed to build catalogue")?;
    let router = TransportRouter::build_for(&catalogue, settings)?;

    let plan = match router.require_route(&args.from, &args.to) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    format
        .render_route(&mut io::stdout().lock(), &args.from, &args.to, &plan)
        .context("failed to write output")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownStop { name, suggestions } => {
            anyhow::anyhow!(format_unknown_stop_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => anyhow::anyhow!(
            "No route found between {} and {}. No bus line connects these stops.",
            start,
            goal
        ),
        other => anyhow::Error::new(other),
    }
}

//! Snapshot of the network handed to an external map renderer.
//!
//! Rendering itself happens elsewhere; this module only gathers what a
//! renderer needs and writes it to a sink chosen by the caller.

use std::io::Write;

use serde::Serialize;

use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::geo::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapStop {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapBus {
    pub name: String,
    /// Effective stop sequence, return leg included.
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// Stops served by at least one bus and every bus, both sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub stops: Vec<MapStop>,
    pub buses: Vec<MapBus>,
}

impl MapData {
    /// Write the snapshot as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl Catalogue {
    /// Collect the data a map renderer consumes.
    pub fn map_data(&self) -> MapData {
        let mut stops: Vec<MapStop> = self
            .stops()
            .iter()
            .filter(|stop| self.is_served(stop.id))
            .map(|stop| MapStop {
                name: stop.name.clone(),
                coordinates: stop.coordinates,
            })
            .collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));

        let mut buses: Vec<MapBus> = self
            .buses()
            .iter()
            .map(|bus| MapBus {
                name: bus.name.clone(),
                stops: bus
                    .stops
                    .iter()
                    .filter_map(|&stop| self.stop_name(stop))
                    .map(str::to_string)
                    .collect(),
                is_roundtrip: bus.is_roundtrip,
            })
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        MapData { stops, buses }
    }
}

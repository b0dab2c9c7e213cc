//! Input document types and the load pipeline that fills a [`Catalogue`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalogue::Catalogue;
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::graph::RoutingSettings;

/// Entry of the `base_requests` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// Declares a stop and the road distances leaving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Directed road distances in meters, keyed by destination stop name.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// Declares a bus line by the names of the stops it visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// Entry of the `stat_requests` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// Snapshot of the network for a map renderer.
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Complete input document: network description, settings, and queries.
///
/// Keys this library does not handle (such as rendering settings) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl TransportDocument {
    /// Decode a document from any JSON byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Decode a document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let document = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), "loaded transport document");
        Ok(document)
    }

    /// Build a catalogue from the document's base requests.
    pub fn build_catalogue(&self) -> Result<Catalogue> {
        let mut catalogue = Catalogue::new();
        apply_base_requests(&mut catalogue, &self.base_requests)?;
        Ok(catalogue)
    }

    /// Validated routing settings; absent settings are malformed input.
    pub fn routing_settings(&self) -> Result<RoutingSettings> {
        let settings = self.routing_settings.ok_or_else(|| Error::MalformedInput {
            message: "document has no routing_settings".to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Apply a batch of base requests to `catalogue`.
///
/// Stops are added first, then their road distances, then buses, so entries
/// may reference stops declared later in the same batch.
pub fn apply_base_requests(catalogue: &mut Catalogue, requests: &[BaseRequest]) -> Result<()> {
    let stops: Vec<&StopRequest> = requests
        .iter()
        .filter_map(|request| match request {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRequest> = requests
        .iter()
        .filter_map(|request| match request {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    for stop in &stops {
        catalogue.add_stop(
            stop.name.clone(),
            Coordinates::new(stop.latitude, stop.longitude),
        )?;
    }

    for stop in &stops {
        catalogue.add_stop_distances(
            &stop.name,
            stop.road_distances
                .iter()
                .map(|(to, meters)| (to.as_str(), *meters)),
        )?;
    }

    for bus in &buses {
        catalogue.add_bus(bus.name.clone(), &bus.stops, bus.is_roundtrip)?;
    }

    info!(
        stops = stops.len(),
        buses = buses.len(),
        "catalogue loaded"
    );
    Ok(())
}

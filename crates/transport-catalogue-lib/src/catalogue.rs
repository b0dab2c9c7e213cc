use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geo::Coordinates;

/// Stable arena index of a stop inside a [`Catalogue`].
pub type StopId = usize;

/// Stable arena index of a bus inside a [`Catalogue`].
pub type BusId = usize;

/// Distance reported for stop pairs that have no recorded road distance in
/// either direction.
///
/// Zero silently shortens `route_length` and travel times when data is
/// missing. It is kept for compatibility with existing inputs until the
/// intended semantics for absent pairs are settled; callers that need to tell
/// the difference should use [`Catalogue::road_distance`].
pub const MISSING_DISTANCE_DEFAULT: u32 = 0;

/// Named stop with its geographic position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
}

/// Bus line with its effective stop sequence.
///
/// `stops` already contains the synthesized return leg for lines that are not
/// round trips, so consumers never need to expand it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: BusId,
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

/// Aggregate statistics for a single bus line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BusInfo {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: u64,
    pub curvature: f64,
}

/// In-memory store of stops, buses, and directed road distances.
///
/// Stops and buses live in append-only arenas addressed by [`StopId`] and
/// [`BusId`]; name maps provide lookup. Nothing is ever removed, so indices
/// stay valid for the lifetime of the catalogue.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    buses_for_stop: Vec<BTreeSet<BusId>>,
    distances: HashMap<(StopId, StopId), u32>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new stop. Names are unique; re-adding one is an error.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> Result<StopId> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(Error::DuplicateStop { name });
        }

        let id = self.stops.len();
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop {
            id,
            name,
            coordinates,
        });
        self.buses_for_stop.push(BTreeSet::new());
        Ok(id)
    }

    /// Register a new bus line over existing stops.
    ///
    /// A round trip keeps `stop_names` as given. Any other line is expanded to
    /// run back to its origin: `[A, B, C]` becomes `[A, B, C, B, A]`.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(Error::DuplicateBus { name });
        }
        if stop_names.is_empty() {
            return Err(Error::EmptyBusRoute { name });
        }

        let declared = stop_names
            .iter()
            .map(|stop| self.require_stop(stop.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let stops = effective_stops(declared, is_roundtrip);

        let id = self.buses.len();
        for &stop in &stops {
            self.buses_for_stop[stop].insert(id);
        }
        trace!(bus = %name, stops = stops.len(), is_roundtrip, "registered bus");

        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus {
            id,
            name,
            stops,
            is_roundtrip,
        });
        Ok(id)
    }

    /// Record directed road distances (meters) from `from` to each listed stop.
    ///
    /// Only the given direction is stored; the reverse is never inferred. Every
    /// name is resolved before anything is written, so an unknown stop leaves
    /// the table untouched.
    pub fn add_stop_distances<I, S>(&mut self, from: &str, distances: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let from_id = self.require_stop(from)?;
        let resolved = distances
            .into_iter()
            .map(|(to, meters)| self.require_stop(to.as_ref()).map(|to_id| (to_id, meters)))
            .collect::<Result<Vec<_>>>()?;

        for (to_id, meters) in resolved {
            self.set_distance(from_id, to_id, meters);
        }
        Ok(())
    }

    /// Store a single directed distance, replacing any previous value.
    pub fn set_distance(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.insert((from, to), meters);
    }

    /// Recorded distance between two stops: the exact direction first, then
    /// the reverse. `None` when neither direction was recorded.
    pub fn road_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Like [`Catalogue::road_distance`] but falls back to
    /// [`MISSING_DISTANCE_DEFAULT`] when nothing was recorded.
    pub fn distance_between(&self, from: StopId, to: StopId) -> u32 {
        self.road_distance(from, to).unwrap_or_else(|| {
            debug!(
                from = self.stop_name(from).unwrap_or("<unknown>"),
                to = self.stop_name(to).unwrap_or("<unknown>"),
                "no road distance recorded; using default"
            );
            MISSING_DISTANCE_DEFAULT
        })
    }

    /// Name-based variant of [`Catalogue::distance_between`].
    pub fn distance_between_stops(&self, from: &str, to: &str) -> Result<u32> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        Ok(self.distance_between(from_id, to_id))
    }

    /// Statistics for the named bus line.
    pub fn bus_info(&self, name: &str) -> Result<BusInfo> {
        let bus = self.bus_by_name(name).ok_or_else(|| Error::UnknownBus {
            name: name.to_string(),
        })?;

        let unique_stop_count = bus.stops.iter().collect::<HashSet<_>>().len();
        let mut route_length = 0u64;
        let mut geographic_length = 0.0;
        for pair in bus.stops.windows(2) {
            route_length += u64::from(self.distance_between(pair[0], pair[1]));
            geographic_length += self.stops[pair[0]]
                .coordinates
                .distance_to(&self.stops[pair[1]].coordinates);
        }

        let curvature = if geographic_length > 0.0 {
            route_length as f64 / geographic_length
        } else {
            0.0
        };

        Ok(BusInfo {
            stop_count: bus.stops.len(),
            unique_stop_count,
            route_length,
            curvature,
        })
    }

    /// Sorted names of the buses serving the named stop.
    ///
    /// A stop that no bus visits yields an empty set; only an unknown name is
    /// an error.
    pub fn stop_info(&self, name: &str) -> Result<BTreeSet<&str>> {
        let id = self.require_stop(name)?;
        Ok(self.buses_for_stop[id]
            .iter()
            .map(|&bus| self.buses[bus].name.as_str())
            .collect())
    }

    /// Lookup a stop identifier by its case-sensitive name.
    pub fn stop_id_by_name(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Lookup a bus identifier by its case-sensitive name.
    pub fn bus_id_by_name(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stop_id_by_name(name).map(|id| &self.stops[id])
    }

    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        self.bus_id_by_name(name).map(|id| &self.buses[id])
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id)
    }

    /// Lookup a stop name by identifier.
    pub fn stop_name(&self, id: StopId) -> Option<&str> {
        self.stops.get(id).map(|stop| stop.name.as_str())
    }

    /// Lookup a bus name by identifier.
    pub fn bus_name(&self, id: BusId) -> Option<&str> {
        self.buses.get(id).map(|bus| bus.name.as_str())
    }

    pub fn contains_stop(&self, name: &str) -> bool {
        self.stop_index.contains_key(name)
    }

    pub fn contains_bus(&self, name: &str) -> bool {
        self.bus_index.contains_key(name)
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// `true` when at least one bus visits the stop.
    pub fn is_served(&self, id: StopId) -> bool {
        self.buses_for_stop
            .get(id)
            .is_some_and(|buses| !buses.is_empty())
    }

    /// Stop names resembling `name`, best match first.
    pub fn fuzzy_stop_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.8;

        let mut scored: Vec<(f64, &str)> = self
            .stops
            .iter()
            .map(|stop| (strsim::jaro_winkler(name, &stop.name), stop.name.as_str()))
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Resolve a stop name or build an [`Error::UnknownStop`] with suggestions.
    pub fn require_stop(&self, name: &str) -> Result<StopId> {
        self.stop_id_by_name(name)
            .ok_or_else(|| Error::UnknownStop {
                name: name.to_string(),
                suggestions: self.fuzzy_stop_matches(name, 3),
            })
    }
}

fn effective_stops(mut declared: Vec<StopId>, is_roundtrip: bool) -> Vec<StopId> {
    if !is_roundtrip {
        let return_leg: Vec<StopId> = declared.iter().rev().skip(1).copied().collect();
        declared.extend(return_leg);
    }
    declared
}

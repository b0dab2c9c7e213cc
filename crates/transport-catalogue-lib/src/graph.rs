use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalogue::{BusId, Catalogue, StopId};
use crate::error::{Error, Result};

/// Index of a vertex in the routing graph.
pub type VertexId = usize;

/// Index of an edge in the routing graph.
pub type EdgeId = usize;

const METERS_PER_KILOMETER: f64 = 1_000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Scalar inputs of the time cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding.
    #[serde(rename = "bus_wait_time")]
    pub wait_time: u32,
    /// Bus speed in km/h.
    #[serde(rename = "bus_velocity")]
    pub velocity: f64,
}

impl RoutingSettings {
    /// Build validated settings.
    pub fn new(wait_time: u32, velocity: f64) -> Result<Self> {
        let settings = Self {
            wait_time,
            velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Reject speeds that would produce infinite or negative travel times.
    pub fn validate(&self) -> Result<()> {
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(Error::MalformedInput {
                message: format!(
                    "bus_velocity must be a positive number, got {}",
                    self.velocity
                ),
            });
        }
        Ok(())
    }

    /// Minutes a bus needs to cover `meters` of road.
    pub fn travel_time(&self, meters: u64) -> f64 {
        meters as f64 * MINUTES_PER_HOUR / (self.velocity * METERS_PER_KILOMETER)
    }
}

/// What an edge of the routing graph models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Boarding delay at a stop.
    Wait { stop: StopId },
    /// Uninterrupted ride on one bus over `span_count` consecutive hops.
    Travel { bus: BusId, span_count: usize },
}

/// Directed weighted edge; the weight is a duration in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub kind: EdgeKind,
}

/// The pair of vertices modelling a stop: arriving passengers land on
/// `wait_start`, boarding happens from `wait_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopVertices {
    pub wait_start: VertexId,
    pub wait_end: VertexId,
}

impl StopVertices {
    pub fn for_stop(stop: StopId) -> Self {
        Self {
            wait_start: stop * 2,
            wait_end: stop * 2 + 1,
        }
    }
}

/// Immutable routing graph derived from a catalogue snapshot.
#[derive(Debug, Clone)]
pub struct Graph {
    settings: RoutingSettings,
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
    stop_vertices: HashMap<String, StopVertices>,
}

impl Graph {
    /// Settings the weights were computed with.
    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Identifiers of the edges leaving `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Vertex pair for the named stop.
    pub fn stop_vertices(&self, name: &str) -> Option<StopVertices> {
        self.stop_vertices.get(name).copied()
    }

    /// Mapping of every stop name to its vertex pair.
    pub fn stop_vertex_map(&self) -> &HashMap<String, StopVertices> {
        &self.stop_vertices
    }

    pub fn wait_edge_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|edge| matches!(edge.kind, EdgeKind::Wait { .. }))
            .count()
    }

    pub fn travel_edge_count(&self) -> usize {
        self.edge_count() - self.wait_edge_count()
    }

    fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }
}

/// Derive the routing graph from the catalogue.
///
/// Every stop contributes two vertices joined by a wait edge. Every bus
/// contributes one travel edge for each ordered pair of positions `i < j` in
/// its effective stop sequence, weighted by the cumulative road distance
/// between them, so a single edge covers an uninterrupted ride of any length.
/// Settings that fail [`RoutingSettings::validate`] are rejected before any
/// edge is weighted.
pub fn build_graph(catalogue: &Catalogue, settings: &RoutingSettings) -> Result<Graph> {
    settings.validate()?;

    let stop_count = catalogue.stops().len();
    let mut graph = Graph {
        settings: *settings,
        edges: Vec::new(),
        incidence: vec![Vec::new(); stop_count * 2],
        stop_vertices: HashMap::with_capacity(stop_count),
    };

    for stop in catalogue.stops() {
        let vertices = StopVertices::for_stop(stop.id);
        graph.stop_vertices.insert(stop.name.clone(), vertices);
        graph.add_edge(Edge {
            from: vertices.wait_start,
            to: vertices.wait_end,
            weight: f64::from(settings.wait_time),
            kind: EdgeKind::Wait { stop: stop.id },
        });
    }

    for bus in catalogue.buses() {
        add_travel_edges(&mut graph, catalogue, settings, bus.id, &bus.stops);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        wait_time = settings.wait_time,
        velocity = settings.velocity,
        "built routing graph"
    );

    Ok(graph)
}

fn add_travel_edges(
    graph: &mut Graph,
    catalogue: &Catalogue,
    settings: &RoutingSettings,
    bus: BusId,
    stops: &[StopId],
) {
    for (i, &boarding) in stops.iter().enumerate() {
        let from = StopVertices::for_stop(boarding).wait_end;
        let mut road_distance = 0u64;
        for j in (i + 1)..stops.len() {
            road_distance += u64::from(catalogue.distance_between(stops[j - 1], stops[j]));
            graph.add_edge(Edge {
                from,
                to: StopVertices::for_stop(stops[j]).wait_start,
                weight: settings.travel_time(road_distance),
                kind: EdgeKind::Travel {
                    bus,
                    span_count: j - i,
                },
            });
        }
    }
}

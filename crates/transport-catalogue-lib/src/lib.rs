//! Transport catalogue library entry points.
//!
//! This crate stores stops, bus lines, and road distances, derives a weighted
//! routing graph from them, and answers statistics and fastest-route queries.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalogue;
pub mod error;
pub mod geo;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod requests;
pub mod routing;

pub use catalogue::{Bus, BusId, BusInfo, Catalogue, Stop, StopId, MISSING_DISTANCE_DEFAULT};
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use graph::{build_graph, Edge, EdgeId, EdgeKind, Graph, RoutingSettings, StopVertices, VertexId};
pub use map::{MapBus, MapData, MapStop};
pub use output::{answer_stat_request, process_document, write_responses, StatResponse};
pub use path::{find_route, shortest_path_tree, RouteResult, ShortestPathTree};
pub use requests::{apply_base_requests, BaseRequest, BusRequest, StatRequest, StopRequest, TransportDocument};
pub use routing::{describe_route, RouteItem, RoutePlan, TransportRouter};

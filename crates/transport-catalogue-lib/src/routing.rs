use serde::Serialize;
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::error::{Error, Result};
use crate::graph::{build_graph, EdgeKind, Graph, RoutingSettings, StopVertices};
use crate::path::{find_route, RouteResult};

/// One leg of a planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Waiting for a bus at `stop_name`.
    Wait { stop_name: String, time: f64 },
    /// Riding `bus` across `span_count` stop-to-stop hops.
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }
}

/// Minimum-time trip between two stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RoutePlan {
    /// The plan for a trip that starts and ends at the same stop.
    pub fn empty() -> Self {
        Self {
            total_time: 0.0,
            items: Vec::new(),
        }
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, RouteItem::Bus { .. }))
            .count()
    }
}

#[derive(Debug, Clone)]
enum RouterState<'c> {
    Unbuilt,
    Built {
        catalogue: &'c Catalogue,
        graph: Graph,
    },
}

/// Answers point-to-point route queries over a catalogue.
///
/// The router starts `Unbuilt`. [`TransportRouter::build`] derives the graph
/// once and keeps a shared borrow of the catalogue, which freezes the
/// catalogue for as long as the router lives. Calling `build` again performs
/// a full rebuild; nothing is patched incrementally.
#[derive(Debug, Clone)]
pub struct TransportRouter<'c> {
    settings: RoutingSettings,
    state: RouterState<'c>,
}

impl<'c> TransportRouter<'c> {
    /// Create an unbuilt router after validating `settings`.
    pub fn new(settings: RoutingSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            state: RouterState::Unbuilt,
        })
    }

    /// Create a router and build it against `catalogue` in one step.
    pub fn build_for(catalogue: &'c Catalogue, settings: RoutingSettings) -> Result<Self> {
        let mut router = Self::new(settings)?;
        router.build(catalogue)?;
        Ok(router)
    }

    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, RouterState::Built { .. })
    }

    /// Derive the routing graph from `catalogue`, replacing any earlier one.
    pub fn build(&mut self, catalogue: &'c Catalogue) -> Result<()> {
        let graph = build_graph(catalogue, &self.settings)?;
        self.state = RouterState::Built { catalogue, graph };
        Ok(())
    }

    /// The built graph, if any.
    pub fn graph(&self) -> Option<&Graph> {
        match &self.state {
            RouterState::Built { graph, .. } => Some(graph),
            RouterState::Unbuilt => None,
        }
    }

    /// Plan the fastest trip between two named stops.
    ///
    /// Returns `Ok(None)` when no bus connects the stops. Unknown names are
    /// errors, as is querying before [`TransportRouter::build`].
    pub fn route(&self, from: &str, to: &str) -> Result<Option<RoutePlan>> {
        let RouterState::Built { catalogue, graph } = &self.state else {
            return Err(Error::RouterNotBuilt);
        };

        let from_id = catalogue.require_stop(from)?;
        let to_id = catalogue.require_stop(to)?;
        if from_id == to_id {
            return Ok(Some(RoutePlan::empty()));
        }

        let start = StopVertices::for_stop(from_id);
        let goal = StopVertices::for_stop(to_id);
        let plan = find_route(graph, start.wait_start, goal.wait_start)
            .map(|result| describe_route(catalogue, graph, &result));
        debug!(
            from,
            to,
            found = plan.is_some(),
            total_time = plan.as_ref().map(|plan| plan.total_time),
            "route query"
        );
        Ok(plan)
    }

    /// Like [`TransportRouter::route`] but treats an unreachable goal as
    /// [`Error::RouteNotFound`].
    pub fn require_route(&self, from: &str, to: &str) -> Result<RoutePlan> {
        self.route(from, to)?.ok_or_else(|| Error::RouteNotFound {
            start: from.to_string(),
            goal: to.to_string(),
        })
    }
}

/// Turn a raw edge sequence into named trip items.
pub fn describe_route(catalogue: &Catalogue, graph: &Graph, result: &RouteResult) -> RoutePlan {
    let items = result
        .edges
        .iter()
        .filter_map(|&edge_id| graph.edge(edge_id))
        .map(|edge| match edge.kind {
            EdgeKind::Wait { stop } => RouteItem::Wait {
                stop_name: catalogue.stop_name(stop).unwrap_or("<unknown>").to_string(),
                time: edge.weight,
            },
            EdgeKind::Travel { bus, span_count } => RouteItem::Bus {
                bus: catalogue.bus_name(bus).unwrap_or("<unknown>").to_string(),
                span_count,
                time: edge.weight,
            },
        })
        .collect();

    RoutePlan {
        total_time: result.weight,
        items,
    }
}

//! Stat query processing and response payloads.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::map::MapData;
use crate::requests::{StatRequest, TransportDocument};
use crate::routing::{RouteItem, RoutePlan, TransportRouter};

/// Message used for every lookup failure.
pub const NOT_FOUND_MESSAGE: &str = "not found";

/// Answer to a single stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
    Map {
        request_id: i64,
        map: MapData,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound {
            request_id,
            error_message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus { request_id, .. }
            | StatResponse::Stop { request_id, .. }
            | StatResponse::Route { request_id, .. }
            | StatResponse::Map { request_id, .. }
            | StatResponse::NotFound { request_id, .. } => *request_id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StatResponse::NotFound { .. })
    }

    fn from_route(request_id: i64, plan: RoutePlan) -> Self {
        StatResponse::Route {
            request_id,
            total_time: plan.total_time,
            items: plan.items,
        }
    }
}

/// Answer one stat request.
///
/// Lookup failures and unreachable routes become
/// [`StatResponse::NotFound`]; anything else is a real fault and propagates.
pub fn answer_stat_request(
    catalogue: &Catalogue,
    router: &TransportRouter<'_>,
    request: &StatRequest,
) -> Result<StatResponse> {
    let id = request.id();
    let answer = match request {
        StatRequest::Bus { name, .. } => catalogue.bus_info(name).map(|info| StatResponse::Bus {
            request_id: id,
            curvature: info.curvature,
            route_length: info.route_length,
            stop_count: info.stop_count,
            unique_stop_count: info.unique_stop_count,
        }),
        StatRequest::Stop { name, .. } => catalogue.stop_info(name).map(|buses| StatResponse::Stop {
            request_id: id,
            buses: buses.into_iter().map(str::to_string).collect(),
        }),
        StatRequest::Route { from, to, .. } => router
            .require_route(from, to)
            .map(|plan| StatResponse::from_route(id, plan)),
        StatRequest::Map { .. } => Ok(StatResponse::Map {
            request_id: id,
            map: catalogue.map_data(),
        }),
    };

    match answer {
        Ok(response) => Ok(response),
        Err(error) if error.is_not_found() => {
            debug!(request_id = id, %error, "stat request not found");
            Ok(StatResponse::not_found(id))
        }
        Err(error) => Err(error),
    }
}

/// Run a whole document: load the catalogue, build the router, and answer
/// every stat request in order.
pub fn process_document(document: &TransportDocument) -> Result<Vec<StatResponse>> {
    let catalogue = document.build_catalogue()?;
    let settings = document.routing_settings()?;
    let router = TransportRouter::build_for(&catalogue, settings)?;

    let responses = document
        .stat_requests
        .iter()
        .map(|request| answer_stat_request(&catalogue, &router, request))
        .collect::<Result<Vec<_>>>()?;

    info!(
        requests = responses.len(),
        not_found = responses.iter().filter(|r| r.is_not_found()).count(),
        "processed stat requests"
    );
    Ok(responses)
}

/// Write responses as a pretty-printed JSON array.
pub fn write_responses<W: Write>(responses: &[StatResponse], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, responses)?;
    writeln!(writer)?;
    Ok(())
}

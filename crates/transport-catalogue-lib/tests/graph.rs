mod common;

use common::{assert_close, fixture_catalogue, two_stop_catalogue};
use transport_catalogue_lib::{
    build_graph, Catalogue, Coordinates, EdgeKind, RoutingSettings, StopVertices,
};

fn settings() -> RoutingSettings {
    RoutingSettings::new(6, 40.0).expect("valid settings")
}

#[test]
fn graph_has_two_vertices_and_one_wait_edge_per_stop() {
    let catalogue = fixture_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");

    assert_eq!(graph.vertex_count(), 2 * catalogue.stops().len());
    assert_eq!(graph.wait_edge_count(), catalogue.stops().len());
}

#[test]
fn travel_edges_cover_every_ordered_pair_of_positions() {
    let catalogue = fixture_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");

    let expected: usize = catalogue
        .buses()
        .iter()
        .map(|bus| bus.stops.len() * (bus.stops.len() - 1) / 2)
        .sum();
    // 297: 2 stops -> 1, 635: 5 stops -> 10, 828: 2 stops -> 1
    assert_eq!(expected, 12);
    assert_eq!(graph.travel_edge_count(), expected);
    assert_eq!(graph.edge_count(), 6 + 12);
}

#[test]
fn shared_stops_do_not_duplicate_wait_edges() {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
    catalogue.add_stop("B", Coordinates::new(0.0, 0.1)).unwrap();
    catalogue.add_bus("1", &["A", "B"], true).unwrap();
    catalogue.add_bus("2", &["B", "A"], true).unwrap();
    catalogue.add_bus("3", &["A", "B"], false).unwrap();

    let graph = build_graph(&catalogue, &settings()).expect("graph builds");
    assert_eq!(graph.wait_edge_count(), 2);
    assert_eq!(graph.travel_edge_count(), 1 + 1 + 3);
}

#[test]
fn wait_edge_joins_stop_vertex_pair() {
    let catalogue = two_stop_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");
    let vertices = graph.stop_vertices("Marushkino").expect("stop mapped");
    assert_eq!(
        vertices,
        StopVertices::for_stop(catalogue.stop_id_by_name("Marushkino").unwrap())
    );

    let wait = graph
        .outgoing(vertices.wait_start)
        .iter()
        .map(|&id| graph.edge(id).unwrap())
        .find(|edge| matches!(edge.kind, EdgeKind::Wait { .. }))
        .expect("wait edge present");
    assert_eq!(wait.to, vertices.wait_end);
    assert_close(wait.weight, 6.0);
}

#[test]
fn travel_edge_weight_is_minutes_at_bus_speed() {
    let catalogue = two_stop_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");
    let from = graph.stop_vertices("Tolstopaltsevo").unwrap();
    let to = graph.stop_vertices("Marushkino").unwrap();

    let travel: Vec<_> = graph
        .outgoing(from.wait_end)
        .iter()
        .map(|&id| graph.edge(id).unwrap())
        .collect();
    assert_eq!(travel.len(), 1);
    assert_eq!(travel[0].to, to.wait_start);
    assert_close(travel[0].weight, 3900.0 / (40.0 * 1000.0 / 60.0));
    let bus = catalogue.bus_id_by_name("297").unwrap();
    assert_eq!(
        travel[0].kind,
        EdgeKind::Travel {
            bus,
            span_count: 1
        }
    );
}

#[test]
fn travel_edges_accumulate_distance_and_span() {
    let catalogue = fixture_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");
    let bus = catalogue.bus_id_by_name("635").unwrap();
    let start = graph.stop_vertices("Tolstopaltsevo").unwrap();
    let goal = graph.stop_vertices("Rasskazovka").unwrap();

    let edge = graph
        .outgoing(start.wait_end)
        .iter()
        .map(|&id| graph.edge(id).unwrap())
        .find(|edge| edge.to == goal.wait_start && edge.kind == EdgeKind::Travel { bus, span_count: 2 })
        .expect("two-hop edge on 635");
    // 3900 + 9900 meters at 40 km/h
    assert_close(edge.weight, 20.7);
}

#[test]
fn stop_vertex_map_covers_every_stop() {
    let catalogue = fixture_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");

    let map = graph.stop_vertex_map();
    assert_eq!(map.len(), catalogue.stops().len());
    for stop in catalogue.stops() {
        assert_eq!(map[&stop.name], StopVertices::for_stop(stop.id));
    }
}

#[test]
fn graph_keeps_settings_it_was_built_with() {
    let catalogue = two_stop_catalogue();
    let graph = build_graph(&catalogue, &settings()).expect("graph builds");
    assert_eq!(graph.settings(), settings());
}

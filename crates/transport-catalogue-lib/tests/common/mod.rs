#![allow(dead_code)]

use std::path::PathBuf;

use transport_catalogue_lib::{Catalogue, Coordinates, TransportDocument};

pub const EPSILON: f64 = 1e-6;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_document() -> TransportDocument {
    TransportDocument::from_path(&fixtures_dir().join("example_network.json"))
        .expect("load fixture example_network.json")
}

pub fn fixture_catalogue() -> Catalogue {
    fixture_document()
        .build_catalogue()
        .expect("fixture builds a catalogue")
}

pub fn tolstopaltsevo() -> Coordinates {
    Coordinates::new(55.611087, 37.20829)
}

pub fn marushkino() -> Coordinates {
    Coordinates::new(55.595884, 37.209755)
}

/// Two stops joined by the round-trip bus "297" and a single forward distance.
pub fn two_stop_catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    catalogue
        .add_stop("Tolstopaltsevo", tolstopaltsevo())
        .expect("add stop");
    catalogue
        .add_stop("Marushkino", marushkino())
        .expect("add stop");
    catalogue
        .add_stop_distances("Tolstopaltsevo", [("Marushkino", 3900)])
        .expect("add distances");
    catalogue
        .add_bus("297", &["Tolstopaltsevo", "Marushkino"], true)
        .expect("add bus");
    catalogue
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

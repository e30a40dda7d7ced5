//! Landmark graph for the special journeys feature.
//!
//! A small hand-built road graph between well-known Bhubaneswar landmarks.
//! Connectivity is deliberately partial: not every landmark is reachable
//! from every other.

use std::collections::HashMap;

use crate::domain::Coordinate;
use crate::estimate::distance_km;

/// Road distance is taken as the straight-line distance times this factor.
///
/// Keeping it at or above 1 keeps the straight-line distance an admissible
/// A* heuristic.
pub const ROAD_DETOUR_FACTOR: f64 = 1.3;

/// A named place in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    /// Stable identifier, e.g. "lingaraj".
    pub id: String,
    /// Display name, e.g. "Lingaraj Temple".
    pub name: String,
    pub location: Coordinate,
}

/// Weighted undirected graph of landmarks.
///
/// Roads are symmetric: a road from A to B can be travelled from B to A
/// with the same length.
#[derive(Debug, Clone, Default)]
pub struct LandmarkGraph {
    landmarks: HashMap<String, Landmark>,
    /// Map from landmark id to (neighbour id, road km).
    /// Stored in both directions.
    roads: HashMap<String, Vec<(String, f64)>>,
}

impl LandmarkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a landmark.
    pub fn add_landmark(&mut self, landmark: Landmark) {
        self.roads.entry(landmark.id.clone()).or_default();
        self.landmarks.insert(landmark.id.clone(), landmark);
    }

    /// Add a road between two existing landmarks.
    ///
    /// Returns the road length in km, or `None` if either landmark is unknown.
    pub fn add_road(&mut self, a: &str, b: &str) -> Option<f64> {
        let from = self.landmarks.get(a)?;
        let to = self.landmarks.get(b)?;
        let km = distance_km(&from.location, &to.location) * ROAD_DETOUR_FACTOR;

        self.roads
            .entry(a.to_string())
            .or_default()
            .push((b.to_string(), km));
        self.roads
            .entry(b.to_string())
            .or_default()
            .push((a.to_string(), km));
        Some(km)
    }

    /// Look up a landmark by id.
    pub fn get(&self, id: &str) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    /// Roads leaving a landmark.
    pub fn neighbours(&self, id: &str) -> &[(String, f64)] {
        self.roads.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All landmarks, sorted by id.
    pub fn landmarks(&self) -> Vec<&Landmark> {
        let mut all: Vec<&Landmark> = self.landmarks.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of landmarks.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Returns true if the graph has no landmarks.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Number of roads (counting A-B and B-A as one).
    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum::<usize>() / 2
    }
}

/// Builder for creating landmark graphs.
///
/// Invalid coordinates and roads to unknown landmarks are skipped.
#[derive(Debug, Default)]
pub struct LandmarkGraphBuilder {
    inner: LandmarkGraph,
}

impl LandmarkGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a landmark.
    pub fn landmark(mut self, id: &str, name: &str, lat: f64, lng: f64) -> Self {
        if let Ok(location) = Coordinate::new(lat, lng) {
            self.inner.add_landmark(Landmark {
                id: id.to_string(),
                name: name.to_string(),
                location,
            });
        }
        self
    }

    /// Add a road between two landmarks already added.
    pub fn road(mut self, a: &str, b: &str) -> Self {
        self.inner.add_road(a, b);
        self
    }

    /// Build the graph.
    pub fn build(self) -> LandmarkGraph {
        self.inner
    }
}

/// The default Bhubaneswar landmark graph.
///
/// Dhauli has no roads in this graph, so journeys to or from it fail.
pub fn bhubaneswar_landmarks() -> LandmarkGraph {
    LandmarkGraphBuilder::new()
        .landmark("jaydev_vihar", "Jaydev Vihar", 20.2961, 85.8245)
        .landmark("lingaraj", "Lingaraj Temple", 20.2382, 85.8338)
        .landmark(
            "railway_station",
            "Bhubaneswar Railway Station",
            20.2665,
            85.8437,
        )
        .landmark("airport", "Biju Patnaik Airport", 20.2444, 85.8178)
        .landmark("khandagiri", "Khandagiri Caves", 20.2542, 85.7792)
        .landmark(
            "nandankanan",
            "Nandankanan Zoological Park",
            20.3957,
            85.8252,
        )
        .landmark("kiit", "KIIT University", 20.3549, 85.8161)
        .landmark("infocity", "Infocity", 20.3400, 85.8080)
        .landmark("saheed_nagar", "Saheed Nagar", 20.2893, 85.8451)
        .landmark("master_canteen", "Master Canteen Square", 20.2700, 85.8400)
        .landmark("dhauli", "Dhauli Peace Pagoda", 20.1920, 85.8390)
        .road("jaydev_vihar", "saheed_nagar")
        .road("jaydev_vihar", "airport")
        .road("jaydev_vihar", "infocity")
        .road("saheed_nagar", "master_canteen")
        .road("master_canteen", "railway_station")
        .road("railway_station", "lingaraj")
        .road("airport", "lingaraj")
        .road("airport", "khandagiri")
        .road("infocity", "kiit")
        .road("kiit", "nandankanan")
        .build()
}

//! Shortest paths over the landmark graph.
//!
//! Dijkstra and A* share one best-first search; A* adds the straight-line
//! distance to the target as its heuristic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use tracing::{debug, trace};

use super::graph::{Landmark, LandmarkGraph};
use crate::estimate::distance_km;

/// Error from a landmark journey search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JourneyError {
    /// No landmark with this id
    #[error("unknown landmark: {0}")]
    UnknownLandmark(String),

    /// The graph has no path between the landmarks
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    /// Algorithm name not recognised
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Parse from "dijkstra", "astar" or "a*".
    pub fn parse(s: &str) -> Result<Self, JourneyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(JourneyError::UnknownAlgorithm(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shortest path between two landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyPath {
    /// Landmarks visited, origin first.
    pub landmarks: Vec<Landmark>,
    /// Total road distance.
    pub distance_km: f64,
    pub algorithm: Algorithm,
    /// Number of landmarks settled before reaching the target.
    pub nodes_explored: usize,
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest priority first.
#[derive(Debug, Clone, Copy)]
struct Frontier<'a> {
    priority: f64,
    cost: f64,
    id: &'a str,
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.id.cmp(self.id))
    }
}

/// Find the shortest road path between two landmarks.
pub fn shortest_path(
    graph: &LandmarkGraph,
    from: &str,
    to: &str,
    algorithm: Algorithm,
) -> Result<JourneyPath, JourneyError> {
    let origin = graph
        .get(from)
        .ok_or_else(|| JourneyError::UnknownLandmark(from.to_string()))?;
    let target = graph
        .get(to)
        .ok_or_else(|| JourneyError::UnknownLandmark(to.to_string()))?;

    let heuristic = |id: &str| -> f64 {
        match algorithm {
            Algorithm::Dijkstra => 0.0,
            Algorithm::AStar => graph
                .get(id)
                .map(|l| distance_km(&l.location, &target.location))
                .unwrap_or(0.0),
        }
    };

    let mut best: HashMap<&str, f64> = HashMap::new();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut heap = BinaryHeap::new();

    best.insert(origin.id.as_str(), 0.0);
    heap.push(Frontier {
        priority: heuristic(origin.id.as_str()),
        cost: 0.0,
        id: origin.id.as_str(),
    });

    while let Some(Frontier { cost, id, .. }) = heap.pop() {
        if !settled.insert(id) {
            continue;
        }
        trace!(landmark = id, cost, "settled");

        if id == target.id {
            let path = reconstruct(graph, &previous, origin.id.as_str(), id);
            debug!(
                %algorithm,
                from,
                to,
                distance_km = cost,
                nodes_explored = settled.len(),
                "journey found"
            );
            return Ok(JourneyPath {
                landmarks: path,
                distance_km: cost,
                algorithm,
                nodes_explored: settled.len(),
            });
        }

        for (next, km) in graph.neighbours(id) {
            let next = next.as_str();
            if settled.contains(next) {
                continue;
            }
            let candidate = cost + km;
            if best.get(next).is_none_or(|known| candidate < *known) {
                best.insert(next, candidate);
                previous.insert(next, id);
                heap.push(Frontier {
                    priority: candidate + heuristic(next),
                    cost: candidate,
                    id: next,
                });
            }
        }
    }

    Err(JourneyError::NoPath {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Walk the predecessor map back from `end` to `start`.
fn reconstruct(
    graph: &LandmarkGraph,
    previous: &HashMap<&str, &str>,
    start: &str,
    end: &str,
) -> Vec<Landmark> {
    let mut ids = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(current) {
            Some(&prev) => {
                ids.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    ids.reverse();

    ids.into_iter()
        .filter_map(|id| graph.get(id).cloned())
        .collect()
}

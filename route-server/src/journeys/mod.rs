//! Special journeys between city landmarks.
//!
//! Unlike the estimation engine, which only ever looks at straight-line
//! distance, this subsystem searches an explicit (and incomplete) road
//! graph between a handful of landmarks.

mod graph;
mod search;

pub use graph::{
    Landmark, LandmarkGraph, LandmarkGraphBuilder, ROAD_DETOUR_FACTOR, bhubaneswar_landmarks,
};
pub use search::{Algorithm, JourneyError, JourneyPath, shortest_path};

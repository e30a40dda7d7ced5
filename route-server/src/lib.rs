//! Route and fare estimation server for Bhubaneswar.
//!
//! Answers: "how far is it, what will it cost, and how long will it take
//! by each way of getting there?"

pub mod config;
pub mod domain;
pub mod estimate;
pub mod journeys;
pub mod ratelimit;
pub mod web;

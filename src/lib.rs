//! Household energy cost estimation.
//!
//! [`analysis`] and [`recommend`] are the pure calculation core; [`api`] and
//! [`repo`] are the HTTP and storage layers that feed it.

pub mod analysis;
pub mod api;
pub mod config;
pub mod domain;
pub mod recommend;
pub mod repo;
pub mod state;
pub mod telemetry;

pub use analysis::{analyze, AnalysisResult};
pub use recommend::{recommend, Tip};

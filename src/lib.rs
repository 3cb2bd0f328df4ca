//! radar-rs: radial ("spider"/"radar") chart rendering engine.
//!
//! This crate maps an ordered categorical-quantitative dataset onto a ringed
//! polar plot: concentric grid rings, one spoke and label per category, a
//! gradient-filled area polygon through all data points, and one marker per
//! point. Rendering is backend-agnostic: the engine produces deterministic
//! layered frames that any [`render::Renderer`] can consume.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};

//! # Knot Simulation
//!
//! Owns the mutable state of the elastic-network visualization: the knot
//! registry, the photon pool with its per-tick propagation step, and the
//! scene snapshots handed to whatever renders them.

mod context;
mod engine;
mod registry;
mod scene;

pub use context::Simulation;
pub use engine::{Photon, PropagationEngine};
pub use registry::KnotRegistry;
pub use scene::{GridGeometry, OverlayToggles, RenderSurface, Scene};

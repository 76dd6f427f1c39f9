//! # Knot Physics
//!
//! Pure physics layer for the R-QNT elastic-network visualization:
//! topological knot types, the two theory branches, and the local
//! propagation-speed model photons experience near matter.

pub mod branch;
pub mod constants;
pub mod knot;

pub use branch::*;
pub use constants::*;
pub use knot::*;

//! Scene description handed to the rendering collaborator
//!
//! Rendering is one-way: the simulation produces a snapshot, the surface
//! draws it (diffing or rebuilding as it likes) and feeds nothing back.

use glam::DVec3;
use knot_physics::{Branch, Knot, GRID_HALF_DIM, GRID_SPACING};

/// The background elastic-network grid: lines every `spacing` units,
/// spanning ±`half_dim` cells around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub half_dim: u32,
    pub spacing: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            half_dim: GRID_HALF_DIM,
            spacing: GRID_SPACING,
        }
    }
}

/// Optional field overlays the user can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayToggles {
    pub torsion_fields: bool,
    pub tension_maps: bool,
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub branch: Branch,
    pub knots: Vec<Knot>,
    pub photons: Vec<DVec3>,
    pub grid: GridGeometry,
    pub overlays: OverlayToggles,
}

/// A rendering surface. Implementations own all drawing state.
pub trait RenderSurface {
    fn draw(&mut self, scene: &Scene);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_defaults() {
        let grid = GridGeometry::default();
        assert_eq!(grid.half_dim, 10);
        assert_eq!(grid.spacing, 2.0);
    }

    #[test]
    fn test_overlays_default_off() {
        let overlays = OverlayToggles::default();
        assert!(!overlays.torsion_fields);
        assert!(!overlays.tension_maps);
    }
}

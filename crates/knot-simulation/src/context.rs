//! Owned simulation context
//!
//! All mutable simulation state lives here, explicitly owned rather than
//! ambient, so hosts and tests alike drive the same `tick()` interface:
//! a display loop calls it once per rendered frame, a test calls it a
//! fixed number of times.

use glam::DVec3;
use knot_physics::{analysis_curve, AnalysisPoint, Branch, Knot, KnotKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::PropagationEngine;
use crate::registry::KnotRegistry;
use crate::scene::{OverlayToggles, Scene};

/// The simulation: knot registry, photon pool, selected branch, and the
/// cached analysis curve. Single-threaded by construction; there is no
/// concurrent writer.
pub struct Simulation {
    branch: Branch,
    registry: KnotRegistry,
    engine: PropagationEngine,
    curve: Vec<AnalysisPoint>,
    rng: StdRng,
}

impl Simulation {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic construction: the same seed and the same sequence of
    /// operations reproduce the same trajectories.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let branch = Branch::default();
        Self {
            branch,
            registry: KnotRegistry::new(),
            engine: PropagationEngine::new(),
            curve: analysis_curve(branch),
            rng,
        }
    }

    /// Add a knot at a random position in the spawn cube.
    pub fn add_knot(&mut self, kind: KnotKind) -> Knot {
        let knot = self.registry.spawn(kind, &mut self.rng);
        log::info!(
            "added {} knot #{} at ({:.2}, {:.2}, {:.2})",
            knot.kind.label(),
            knot.id,
            knot.position.x,
            knot.position.y,
            knot.position.z
        );
        knot
    }

    /// Add a knot at a fixed position.
    pub fn add_knot_at(&mut self, kind: KnotKind, position: DVec3) -> Knot {
        self.registry.spawn_at(kind, position)
    }

    /// Empty the registry. Photons keep flying; only their sources vanish.
    pub fn clear_knots(&mut self) {
        self.registry.clear();
        log::info!("network reset, all knots removed");
    }

    pub fn knots(&self) -> &[Knot] {
        self.registry.knots()
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// Select a theory branch and regenerate the analysis curve wholesale.
    pub fn set_branch(&mut self, branch: Branch) {
        self.branch = branch;
        self.curve = analysis_curve(branch);
        log::info!("theory branch set to {}", branch.label());
    }

    /// The cached local-c vs. radius profile for the current branch.
    pub fn analysis_curve(&self) -> &[AnalysisPoint] {
        &self.curve
    }

    /// Advance the photon pool by one logical tick.
    pub fn tick(&mut self) {
        self.engine
            .step(self.registry.knots(), self.branch, &mut self.rng);
    }

    /// Current photon positions (render snapshot).
    pub fn photon_positions(&self) -> Vec<DVec3> {
        self.engine.photons().iter().map(|p| p.position).collect()
    }

    /// Full scene description for a rendering collaborator.
    pub fn scene(&self, overlays: OverlayToggles) -> Scene {
        Scene {
            branch: self.branch,
            knots: self.registry.knots().to_vec(),
            photons: self.photon_positions(),
            grid: Default::default(),
            overlays,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knot_physics::PHOTON_POOL_SIZE;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed| {
            let mut sim = Simulation::seeded(seed);
            sim.add_knot(KnotKind::Proton);
            sim.add_knot(KnotKind::Electron);
            sim.set_branch(Branch::VariableC);
            for _ in 0..120 {
                sim.tick();
            }
            sim.photon_positions()
        };
        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn test_branch_change_regenerates_curve() {
        let mut sim = Simulation::seeded(1);
        assert!(sim.analysis_curve().iter().all(|p| p.local_c == 1.0));
        sim.set_branch(Branch::VariableC);
        assert!(sim.analysis_curve().iter().all(|p| p.local_c < 1.0));
        assert_eq!(sim.analysis_curve().len(), 38);
    }

    #[test]
    fn test_scene_snapshot() {
        let mut sim = Simulation::seeded(2);
        sim.add_knot_at(KnotKind::Proton, DVec3::ZERO);
        sim.tick();
        let scene = sim.scene(OverlayToggles::default());
        assert_eq!(scene.knots.len(), 1);
        assert_eq!(scene.photons.len(), PHOTON_POOL_SIZE);
        assert_eq!(scene.branch, Branch::ConstantC);
        assert!(!scene.overlays.torsion_fields);
    }

    #[test]
    fn test_clear_keeps_photons_flying() {
        let mut sim = Simulation::seeded(3);
        sim.add_knot(KnotKind::Neutron);
        sim.tick();
        sim.clear_knots();
        sim.tick();
        assert!(sim.knots().is_empty());
        assert_eq!(sim.photon_positions().len(), PHOTON_POOL_SIZE);
    }
}

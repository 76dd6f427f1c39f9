//! Photon propagation engine
//!
//! Advances the photon pool by one step per call. This is a stateful
//! integrator: in-range knots add to photon velocity every tick, so the
//! pull compounds across frames.

use glam::DVec3;
use knot_physics::{
    propagation_speed, Branch, Knot, ATTRACTION_SOFTENING, ATTRACTION_STRENGTH,
    INTERACTION_RADIUS, PHOTON_LAUNCH_HALF_EXTENT, PHOTON_LAUNCH_SPEED, PHOTON_LAUNCH_X,
    PHOTON_POOL_SIZE, PHOTON_WRAP_X,
};
use rand::Rng;

/// A transient simulation particle, owned exclusively by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Photon {
    pub position: DVec3,
    pub velocity: DVec3,
}

impl Photon {
    fn launch(rng: &mut impl Rng) -> Self {
        let half = PHOTON_LAUNCH_HALF_EXTENT;
        Self {
            position: DVec3::new(
                PHOTON_LAUNCH_X,
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            ),
            velocity: DVec3::new(PHOTON_LAUNCH_SPEED, 0.0, 0.0),
        }
    }
}

/// Advances the photon pool one step per [`step`](Self::step) call.
#[derive(Debug, Default)]
pub struct PropagationEngine {
    photons: Vec<Photon>,
}

impl PropagationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every photon by exactly one tick.
    ///
    /// The pool is bootstrapped lazily: the first call spawns the fixed
    /// pool, and since wraparound resets positions rather than removing
    /// photons, the emptiness check never fires again.
    pub fn step(&mut self, knots: &[Knot], branch: Branch, rng: &mut impl Rng) {
        if self.photons.is_empty() {
            self.photons = (0..PHOTON_POOL_SIZE).map(|_| Photon::launch(rng)).collect();
            log::debug!("launched photon pool ({} photons)", self.photons.len());
        }

        for photon in &mut self.photons {
            let mut local_c = knot_physics::C;

            for knot in knots {
                let d = photon.position.distance(knot.position);
                if d < INTERACTION_RADIUS {
                    // Softened attraction toward the knot; accumulates in
                    // the velocity across knots and across ticks.
                    let pull = (knot.position - photon.position).normalize_or_zero()
                        * (ATTRACTION_STRENGTH / (d + ATTRACTION_SOFTENING));
                    photon.velocity += pull;
                    if branch == Branch::VariableC {
                        // Last in-range knot in registry order wins.
                        local_c = propagation_speed(branch, d);
                    }
                }
            }

            photon.position += photon.velocity * local_c;
            if photon.position.x > PHOTON_WRAP_X {
                photon.position.x = PHOTON_LAUNCH_X;
            }
        }
    }

    /// Current photon snapshot for rendering.
    pub fn photons(&self) -> &[Photon] {
        &self.photons
    }
}

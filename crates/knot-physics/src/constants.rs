//! Tuning constants for the elastic-network simulation
//!
//! These are simulation-scale values chosen for real-time visualization,
//! not physical units; the handful of real-world constants at the bottom
//! exist only for the metrics readout.

/// Baseline propagation speed in simulation units (dimensionless multiplier)
pub const C: f64 = 1.0;

/// Radius within which a knot perturbs passing photons
pub const INTERACTION_RADIUS: f64 = 5.0;

/// Attraction strength of a knot on an in-range photon
pub const ATTRACTION_STRENGTH: f64 = 0.02;

/// Softening added to the distance in the pull term, prevents blow-up at d=0
pub const ATTRACTION_SOFTENING: f64 = 0.1;

/// Softening added to the distance in the variable-c speed terms
pub const SPEED_SOFTENING: f64 = 1.0;

/// Floor for the variable-branch local speed near a knot
pub const MIN_LOCAL_C: f64 = 0.1;

/// Half-extent of the cube new knots spawn in (side length 10, origin-centered)
pub const KNOT_SPAWN_HALF_EXTENT: f64 = 5.0;

/// Electron knot mass (display weighting only)
pub const ELECTRON_MASS: f64 = 1.0;

/// Proton knot mass
pub const PROTON_MASS: f64 = 10.0;

/// Neutron knot mass
pub const NEUTRON_MASS: f64 = 10.0;

/// Number of photons in the propagation pool
pub const PHOTON_POOL_SIZE: usize = 5;

/// Photons launch from this x plane
pub const PHOTON_LAUNCH_X: f64 = -20.0;

/// Crossing this x plane wraps a photon back to the launch plane
pub const PHOTON_WRAP_X: f64 = 20.0;

/// Half-extent of the y/z band photons launch from
pub const PHOTON_LAUNCH_HALF_EXTENT: f64 = 5.0;

/// Initial photon speed along +x
pub const PHOTON_LAUNCH_SPEED: f64 = 0.2;

/// Analysis-curve radius domain: start
pub const CURVE_RADIUS_START: f64 = 1.0;

/// Analysis-curve radius domain: exclusive end
pub const CURVE_RADIUS_END: f64 = 20.0;

/// Analysis-curve radius step
pub const CURVE_RADIUS_STEP: f64 = 0.5;

/// Network grid half-dimension in cells (grid spans ±half-dim * spacing)
pub const GRID_HALF_DIM: u32 = 10;

/// Network grid line spacing
pub const GRID_SPACING: f64 = 2.0;

// Real-world reference values, shown in the metrics panel only.

/// Planck length in meters
pub const PLANCK_LENGTH: f64 = 1.616255e-35;

/// Planck tension in newtons
pub const PLANCK_TENSION: f64 = 4.8e41;

/// Vacuum light speed in m/s
pub const C_VACUUM: f64 = 299_792_458.0;

//! Knot types and properties for the elastic-network simulation

use glam::DVec3;

/// Matter-source kinds the network supports
///
/// A closed set: the UI only ever constructs intents from these three,
/// so there is no unknown-particle case to reject downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnotKind {
    Proton,
    Electron,
    Neutron,
}

impl KnotKind {
    /// Geometric handedness of the knot, doubling as charge sign.
    /// Right-handed = positive, left-handed = negative, neutron = none.
    pub fn chirality(self) -> i8 {
        match self {
            KnotKind::Proton => 1,
            KnotKind::Electron => -1,
            KnotKind::Neutron => 0,
        }
    }

    /// Knot mass, used for display weighting only (the attraction law
    /// reads positions, not masses).
    pub fn mass(self) -> f64 {
        match self {
            KnotKind::Electron => crate::constants::ELECTRON_MASS,
            KnotKind::Proton => crate::constants::PROTON_MASS,
            KnotKind::Neutron => crate::constants::NEUTRON_MASS,
        }
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            KnotKind::Proton => "Proton",
            KnotKind::Electron => "Electron",
            KnotKind::Neutron => "Neutron",
        }
    }
}

/// A topological knot in the elastic network
///
/// Immutable after creation: position is fixed for the knot's lifetime and
/// mass/chirality are derived from the kind at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Knot {
    /// Unique within the registry for the knot's lifetime
    pub id: u64,
    pub kind: KnotKind,
    /// Position in 3D continuous space
    pub position: DVec3,
    pub mass: f64,
    pub chirality: i8,
}

impl Knot {
    pub fn new(id: u64, kind: KnotKind, position: DVec3) -> Self {
        Self {
            id,
            kind,
            position,
            mass: kind.mass(),
            chirality: kind.chirality(),
        }
    }
}

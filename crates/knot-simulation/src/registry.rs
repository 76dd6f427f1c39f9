//! Authoritative registry of matter sources

use glam::DVec3;
use knot_physics::{Knot, KnotKind, KNOT_SPAWN_HALF_EXTENT};
use rand::Rng;

/// Ordered collection of the knots currently perturbing the network.
///
/// Insertion order is display order only; ids are unique for the life of
/// the registry and keep counting up across `clear()`.
#[derive(Debug, Default)]
pub struct KnotRegistry {
    knots: Vec<Knot>,
    next_id: u64,
}

impl KnotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a knot of `kind` at a position uniformly sampled from the
    /// spawn cube and append it. Always succeeds.
    pub fn spawn(&mut self, kind: KnotKind, rng: &mut impl Rng) -> Knot {
        let half = KNOT_SPAWN_HALF_EXTENT;
        let position = DVec3::new(
            rng.random_range(-half..half),
            rng.random_range(-half..half),
            rng.random_range(-half..half),
        );
        self.spawn_at(kind, position)
    }

    /// Create a knot of `kind` at a fixed position and append it.
    pub fn spawn_at(&mut self, kind: KnotKind, position: DVec3) -> Knot {
        let knot = Knot::new(self.next_id, kind, position);
        self.next_id += 1;
        self.knots.push(knot.clone());
        knot
    }

    /// Bulk reset. Idempotent.
    pub fn clear(&mut self) {
        self.knots.clear();
    }

    /// Read-only snapshot for the engine and the renderer.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut registry = KnotRegistry::new();
        let mut ids = Vec::new();
        for _ in 0..20 {
            ids.push(registry.spawn(KnotKind::Proton, &mut rng).id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut registry = KnotRegistry::new();
        let first = registry.spawn(KnotKind::Neutron, &mut rng).id;
        registry.clear();
        let second = registry.spawn(KnotKind::Neutron, &mut rng).id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_spawn_position_inside_cube() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut registry = KnotRegistry::new();
        for _ in 0..100 {
            let knot = registry.spawn(KnotKind::Electron, &mut rng);
            for axis in knot.position.to_array() {
                assert!(axis.abs() <= KNOT_SPAWN_HALF_EXTENT);
            }
        }
    }

    #[test]
    fn test_spawn_derives_mass_from_kind() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut registry = KnotRegistry::new();
        assert_eq!(registry.spawn(KnotKind::Electron, &mut rng).mass, 1.0);
        assert_eq!(registry.spawn(KnotKind::Proton, &mut rng).mass, 10.0);
        assert_eq!(registry.spawn(KnotKind::Neutron, &mut rng).mass, 10.0);
    }

    #[test]
    fn test_clear_empties_regardless_of_size() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut registry = KnotRegistry::new();
        registry.clear();
        assert!(registry.is_empty());
        for _ in 0..7 {
            registry.spawn(KnotKind::Proton, &mut rng);
        }
        assert_eq!(registry.len(), 7);
        registry.clear();
        assert!(registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = KnotRegistry::new();
        registry.spawn_at(KnotKind::Proton, DVec3::ZERO);
        registry.spawn_at(KnotKind::Electron, DVec3::ONE);
        let kinds: Vec<_> = registry.knots().iter().map(|k| k.kind).collect();
        assert_eq!(kinds, vec![KnotKind::Proton, KnotKind::Electron]);
    }
}

use crate::core::utils::random::{seed_state, unit_f32};
use crate::domain::{Container, SimulationConfig};

use super::{Particle, Vec2};

/// Owns the authoritative state of every capsule in the current run.
///
/// The population is all-or-nothing: `initialize` replaces the whole
/// collection, there is no incremental add/remove. Old indices are
/// meaningless after a reinitialization.
pub struct ParticleStore {
    particles: Vec<Particle>,
    rng_state: u32,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            rng_state: seed_state(0),
        }
    }

    /// Create `count` capsules at rest on a loose spawn grid.
    ///
    /// Capsule `i` goes to cell `(i % columns, i / columns)`, offset by up to
    /// `jitter` on each axis. The jitter stream is reseeded from `config.seed`
    /// every time, so the same inputs always give the same layout.
    pub fn initialize(
        &mut self,
        count: usize,
        _container: &Container,
        config: &SimulationConfig,
    ) -> &[Particle] {
        self.rng_state = seed_state(config.seed);
        self.particles.clear();
        self.particles.reserve(count);

        let columns = config.columns.max(1) as usize;
        let origin = config.radius;

        for i in 0..count {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            let (jx, jy) = self.jitter(config.jitter);
            let position = Vec2::new(
                origin + col * config.spacing + jx,
                origin + row * config.spacing + jy,
            );
            self.particles
                .push(Particle::at_rest(i as u32, position, config.radius));
        }

        &self.particles
    }

    fn jitter(&mut self, amount: f32) -> (f32, f32) {
        if amount <= 0.0 {
            return (0.0, 0.0);
        }
        let jx = unit_f32(&mut self.rng_state) * amount;
        let jy = unit_f32(&mut self.rng_state) * amount;
        (jx, jy)
    }

    /// Read-only view for rendering and inspection
    #[inline]
    pub fn get(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access is reserved for the stepper and the phase switch.
    #[inline]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Tear the population down
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Drop all motion, keep positions (used when leaving the shaking phase)
    pub fn reset_velocities(&mut self) {
        for p in self.particles.iter_mut() {
            p.velocity = Vec2::zero();
        }
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Container, SimulationConfig) {
        (Container::default(), SimulationConfig::default())
    }

    #[test]
    fn layout_follows_four_column_grid_without_jitter() {
        let (container, config) = setup();
        let config = config.without_jitter();
        let mut store = ParticleStore::new();
        let particles = store.initialize(6, &container, &config);

        assert_eq!(particles.len(), 6);
        assert_eq!(particles[0].position, Vec2::new(20.0, 20.0));
        assert_eq!(particles[3].position, Vec2::new(200.0, 20.0));
        assert_eq!(particles[4].position, Vec2::new(20.0, 80.0));
        assert_eq!(particles[5].position, Vec2::new(80.0, 80.0));
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.index, i as u32);
            assert_eq!(p.velocity, Vec2::zero());
            assert_eq!(p.radius, 20.0);
        }
    }

    #[test]
    fn jitter_is_bounded() {
        let (container, config) = setup();
        let mut store = ParticleStore::new();
        let particles = store.initialize(20, &container, &config);

        for (i, p) in particles.iter().enumerate() {
            let cell_x = 20.0 + (i % 4) as f32 * 60.0;
            let cell_y = 20.0 + (i / 4) as f32 * 60.0;
            let dx = p.position.x - cell_x;
            let dy = p.position.y - cell_y;
            assert!((0.0..=10.0).contains(&dx), "dx {} out of range", dx);
            assert!((0.0..=10.0).contains(&dy), "dy {} out of range", dy);
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let (container, config) = setup();
        let mut a = ParticleStore::new();
        let mut b = ParticleStore::new();
        let first = a.initialize(12, &container, &config).to_vec();
        let second = b.initialize(12, &container, &config).to_vec();
        assert_eq!(first, second);

        // Reinitializing the same store restarts the stream too.
        let again = a.initialize(12, &container, &config).to_vec();
        assert_eq!(first, again);
    }

    #[test]
    fn different_seed_moves_capsules() {
        let (container, config) = setup();
        let mut other = config;
        other.seed = config.seed + 1;

        let mut store = ParticleStore::new();
        let first = store.initialize(8, &container, &config).to_vec();
        let second = store.initialize(8, &container, &other).to_vec();
        assert_ne!(first, second);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let (container, config) = setup();
        let mut store = ParticleStore::new();
        let particles = store.initialize(17, &container, &config);
        assert_eq!(particles[0].color, particles[15].color);
        assert_eq!(particles[1].color, particles[16].color);
        assert_ne!(particles[0].color, particles[1].color);
    }

    #[test]
    fn reinitialize_replaces_population() {
        let (container, config) = setup();
        let mut store = ParticleStore::new();
        store.initialize(10, &container, &config);
        assert_eq!(store.len(), 10);
        store.initialize(3, &container, &config);
        assert_eq!(store.len(), 3);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn reset_velocities_keeps_positions() {
        let (container, config) = setup();
        let mut store = ParticleStore::new();
        store.initialize(2, &container, &config);
        let before: Vec<Vec2> = store.get().iter().map(|p| p.position).collect();
        for p in store.particles_mut() {
            p.velocity = Vec2::new(3.0, -2.0);
        }
        store.reset_velocities();
        for (p, pos) in store.get().iter().zip(before) {
            assert_eq!(p.velocity, Vec2::zero());
            assert_eq!(p.position, pos);
        }
    }
}

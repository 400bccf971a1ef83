//! Particle bursts: short-lived sprays of points expanding from an origin.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec3;
use rand::Rng;

use crate::util::easing::EasingFunction;

/// One particle of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Direction scaled by this particle's speed factor.
    heading: Vec3,
    /// Current world position.
    pub position: Vec3,
    /// Current opacity.
    pub alpha: f32,
    /// Current sprite size.
    pub size: f32,
}

/// A spray of particles flying outward and fading over its lifetime.
///
/// The burst starts on its first [`advance`](Self::advance); positions are
/// computed from elapsed time rather than integrated, so frame rate does not
/// change the trajectory.
#[derive(Debug, Clone)]
pub struct ParticleBurst {
    origin: Vec3,
    color: [f32; 3],
    spread: f32,
    size: f32,
    lifetime: Duration,
    particles: Vec<Particle>,
    started: Option<Duration>,
    progress: f32,
}

impl ParticleBurst {
    /// Lifetime used by [`make_particle_burst`](super::make_particle_burst).
    pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(1200);

    /// Burst of `count` particles with random headings drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        origin: Vec3,
        color: [f32; 3],
        count: usize,
        spread: f32,
        size: f32,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let z: f32 = rng.random_range(-1.0..=1.0);
                let theta: f32 = rng.random_range(0.0..TAU);
                let r = (1.0 - z * z).max(0.0).sqrt();
                let speed: f32 = rng.random_range(0.5..=1.0);
                Particle {
                    heading: Vec3::new(r * theta.cos(), r * theta.sin(), z) * speed,
                    position: origin,
                    alpha: 1.0,
                    size,
                }
            })
            .collect();

        Self {
            origin,
            color,
            spread,
            size,
            lifetime: Self::DEFAULT_LIFETIME,
            particles,
            started: None,
            progress: 0.0,
        }
    }

    /// Override the lifetime.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Change the lifetime of a burst already in the scene.
    pub fn set_lifetime(&mut self, lifetime: Duration) {
        self.lifetime = lifetime;
    }

    /// Move particles to their positions at `now`.
    pub fn advance(&mut self, now: Duration) {
        let start = *self.started.get_or_insert(now);
        let elapsed = now.saturating_sub(start);
        let t = if self.lifetime.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.lifetime.as_secs_f32()).min(1.0)
        };
        self.progress = t;

        let travel = EasingFunction::QuadraticOut.evaluate(t) * self.spread;
        let alpha = 1.0 - t;
        let size = self.size * (1.0 - 0.5 * t);
        for p in &mut self.particles {
            p.position = self.origin + p.heading * travel;
            p.alpha = alpha;
            p.size = size;
        }
    }

    /// Particles in their current state.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Burst color.
    #[must_use]
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Burst origin.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Whether every particle has faded out.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn burst() -> ParticleBurst {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleBurst::new(Vec3::ONE, [1.0, 0.0, 0.0], 32, 3.0, 0.2, &mut rng)
    }

    #[test]
    fn particles_stay_within_spread() {
        let mut b = burst();
        b.advance(Duration::ZERO);
        b.advance(Duration::from_millis(600));
        for p in b.particles() {
            assert!((p.position - Vec3::ONE).length() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn burst_fades_and_is_spent_after_lifetime() {
        let mut b = burst().with_lifetime(Duration::from_millis(500));
        b.advance(Duration::from_secs(1));
        assert!(!b.is_spent());
        b.advance(Duration::from_millis(1500));
        assert!(b.is_spent());
        assert!(b.particles().iter().all(|p| p.alpha == 0.0));
    }

    #[test]
    fn same_seed_gives_same_burst() {
        let mut a = burst();
        let mut b = burst();
        a.advance(Duration::ZERO);
        b.advance(Duration::ZERO);
        a.advance(Duration::from_millis(300));
        b.advance(Duration::from_millis(300));
        assert_eq!(a.particles(), b.particles());
    }
}

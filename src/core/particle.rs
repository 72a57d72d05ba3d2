use crate::config::SimParams;
use rand::Rng;
use std::f64::consts::TAU;

/// A single orientable particle.
///
/// Positions stay inside the domain rectangle (the integrator clamps them
/// at the walls). `theta` is unbounded: it is only ever consumed through
/// trigonometric functions, so wrapping would change nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Orientation angle in radians.
    pub theta: f64,
    /// Angular velocity.
    pub omega: f64,
}

impl Particle {
    /// Spawn a particle at a uniformly random position inset from the
    /// walls by the spawn margin, with small random velocity components in
    /// `[-0.5, 0.5)`, a uniform random orientation and no spin.
    ///
    /// `params` must have passed [`SimParams::validate`]: a domain too
    /// small for twice the spawn margin leaves the position range empty,
    /// and drawing from an empty range panics. The `Simulation` entry
    /// points validate before ever spawning.
    pub fn spawn<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> Self {
        let margin = params.spawn_margin();
        Self {
            x: rng.random_range(margin..params.w - margin),
            y: rng.random_range(margin..params.h - margin),
            vx: rng.random_range(-0.5..0.5),
            vy: rng.random_range(-0.5..0.5),
            theta: rng.random_range(0.0..TAU),
            omega: 0.0,
        }
    }

    /// Squared speed, the per-particle contribution to kinetic energy.
    #[inline]
    pub fn speed_sq(&self) -> f64 {
        self.vx * self.vx + self.vy * self.vy
    }
}

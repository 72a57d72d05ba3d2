//! Simulation driver: owns the particle store and the RNG, reconciles the
//! population against the configured count, and advances the system tick
//! by tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};

use crate::config::SimParams;
use crate::core::forces::{self, ForceBuffer};
use crate::core::integrate;
use crate::core::particle::Particle;
use crate::error::Result;

/// Integration sub-steps per tick. One tick is one rendered frame.
pub const SUBSTEPS: usize = 3;

/// A running simulation.
///
/// Parameters are not stored here; every call takes the current
/// [`SimParams`] so they can change freely between ticks. The particle
/// store is public for rendering and inspection, the RNG stays private
/// so all draws flow through the driver.
#[derive(Debug)]
pub struct Simulation {
    pub particles: Vec<Particle>,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    /// Validate `params` and spawn the initial population.
    ///
    /// With `seed` given, every run is bit-for-bit reproducible;
    /// otherwise a fresh seed is drawn from the thread RNG.
    pub fn new(params: &SimParams, seed: Option<u64>) -> Result<Self> {
        params.validate()?;
        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        let particles = (0..params.n)
            .map(|_| Particle::spawn(params, &mut rng))
            .collect();
        Ok(Self {
            particles,
            rng,
            frame: 0,
        })
    }

    /// Discard the population and spawn a fresh one, rewinding the frame
    /// counter. The RNG stream continues, so consecutive resets produce
    /// different initial conditions.
    pub fn reset(&mut self, params: &SimParams) -> Result<()> {
        params.validate()?;
        self.particles.clear();
        for _ in 0..params.n {
            let p = Particle::spawn(params, &mut self.rng);
            self.particles.push(p);
        }
        self.frame = 0;
        Ok(())
    }

    /// Advance one tick: reconcile the population with `params.n`, then
    /// run [`SUBSTEPS`] force/integration passes.
    ///
    /// Returns the kinetic energy sampled in the final sub-step. Invalid
    /// parameters fail the tick before anything mutates.
    pub fn tick(&mut self, params: &SimParams) -> Result<f64> {
        params.validate()?;
        self.reconcile_population(params);

        let mut energy = 0.0;
        for _ in 0..SUBSTEPS {
            let mut buf = ForceBuffer::zeroed(self.particles.len());
            forces::accumulate(&self.particles, params, &mut buf);
            energy = integrate::step(&mut self.particles, &buf, params);
        }
        self.frame += 1;
        Ok(energy)
    }

    /// Ticks completed since construction or the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Grow by spawning newcomers at the tail, shrink by truncating it.
    /// Surviving particles keep their state.
    fn reconcile_population(&mut self, params: &SimParams) {
        while self.particles.len() < params.n {
            let p = Particle::spawn(params, &mut self.rng);
            self.particles.push(p);
        }
        self.particles.truncate(params.n);
    }
}

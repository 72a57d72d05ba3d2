//! 2-D self-assembly of orientable particles with three-fold bonding
//! symmetry, the way sp² carbon prefers its neighbors.
//!
//! Particles carry a position, a velocity, an orientation and an angular
//! velocity. Pairs attract only when both orientations present a bonding
//! axis toward each other, repel softly at short range, and feel a torque
//! that pulls the nearest axis onto the bond line. Under damped
//! integration the population relaxes into honeycomb sheets, rings or
//! droplets depending on the parameters.
//!
//! [`Simulation`] drives the system tick by tick from a [`SimParams`]
//! snapshot that may change freely between ticks; [`Preset`] bundles a
//! few known-good parameter sets. Seeded runs replay bit-for-bit.

pub mod config;
pub mod core;
pub mod error;

pub use config::{MAX_PARTICLES, Preset, SimParams};
pub use core::{ForceBuffer, Particle, Simulation};
pub use error::{Error, Result};

//! Simulation core: particle state, the orientation-gated force model,
//! the damped integrator, and the tick driver.

pub mod forces;
pub mod integrate;
pub mod orientation;
pub mod particle;
pub mod sim;

pub use forces::ForceBuffer;
pub use particle::Particle;
pub use sim::Simulation;

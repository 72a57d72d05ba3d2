//! Damped semi-implicit Euler integration and wall handling.

use crate::config::SimParams;
use crate::core::forces::ForceBuffer;
use crate::core::particle::Particle;

/// Fixed integration sub-step.
pub const DT: f64 = 0.4;
/// Unconditional per-step velocity damping, a numerical stabilizer applied
/// on top of the configurable friction.
pub const LINEAR_DAMPING: f64 = 0.97;
/// Unconditional per-step angular damping; decays slightly faster than the
/// linear term.
pub const ANGULAR_DAMPING: f64 = 0.94;
/// Walls sit this far inside the domain edges.
pub const WALL_INSET: f64 = 3.0;
/// Velocity scale on wall contact: an inelastic reflection that absorbs
/// most of the kinetic energy in the hit axis.
const WALL_RESTITUTION: f64 = -0.3;

/// Advance velocities, then positions and orientations, by one sub-step
/// from the accumulated forces, and clamp to the walls afterwards.
///
/// Velocities are updated before positions (semi-implicit Euler) and
/// scaled by both the fixed damping and the friction multiplier
/// `max(0, 1 - friction * DT)`, which floors at zero once `friction * DT`
/// reaches 1. Returns the total kinetic energy `0.5 * sum(vx² + vy²)`,
/// sampled before wall clamping.
pub fn step(particles: &mut [Particle], buf: &ForceBuffer, params: &SimParams) -> f64 {
    debug_assert_eq!(buf.len(), particles.len());
    let friction_mul = (1.0 - params.friction * DT).max(0.0);
    let mut energy = 0.0;

    for (i, p) in particles.iter_mut().enumerate() {
        p.vx = (p.vx + buf.fx[i] * DT) * LINEAR_DAMPING * friction_mul;
        p.vy = (p.vy + buf.fy[i] * DT) * LINEAR_DAMPING * friction_mul;
        p.x += p.vx * DT;
        p.y += p.vy * DT;
        p.omega = (p.omega + buf.torque[i] * DT) * ANGULAR_DAMPING * friction_mul;
        p.theta += p.omega * DT;
        energy += p.speed_sq();

        if p.x < WALL_INSET {
            p.x = WALL_INSET;
            p.vx *= WALL_RESTITUTION;
        } else if p.x > params.w - WALL_INSET {
            p.x = params.w - WALL_INSET;
            p.vx *= WALL_RESTITUTION;
        }
        if p.y < WALL_INSET {
            p.y = WALL_INSET;
            p.vy *= WALL_RESTITUTION;
        } else if p.y > params.h - WALL_INSET {
            p.y = params.h - WALL_INSET;
            p.vy *= WALL_RESTITUTION;
        }
    }

    0.5 * energy
}

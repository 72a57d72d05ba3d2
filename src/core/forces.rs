//! Pairwise force and torque accumulation.
//!
//! The O(n²) hot pass. It reads the particle store as an immutable
//! snapshot and writes only into a transient [`ForceBuffer`]; positions
//! and velocities never change until the integration phase consumes the
//! buffer.

use crate::config::SimParams;
use crate::core::orientation::{alignment_weight, nearest_axis_offset};
use crate::core::particle::Particle;
use std::f64::consts::PI;

/// Pairs closer than this squared distance are skipped as near-singular.
const MIN_DIST_SQ: f64 = 1.0;
/// Repulsion acts below this multiple of the equilibrium distance.
const REPULSION_RANGE: f64 = 1.2;
/// Combined alignment gate below which the bonding term is dropped.
const BOND_GATE_MIN: f64 = 0.01;

/// Accumulation target for one sub-step: a force and torque slot per
/// particle, zeroed on construction and sized exactly to the population.
#[derive(Clone, Debug)]
pub struct ForceBuffer {
    pub fx: Vec<f64>,
    pub fy: Vec<f64>,
    pub torque: Vec<f64>,
}

impl ForceBuffer {
    /// A zeroed buffer for `n` particles.
    pub fn zeroed(n: usize) -> Self {
        Self {
            fx: vec![0.0; n],
            fy: vec![0.0; n],
            torque: vec![0.0; n],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.fx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fx.is_empty()
    }
}

/// Accumulate repulsive, bonding and torque contributions over every
/// unordered particle pair within the cutoff radius.
///
/// Forces obey Newton's third law (equal and opposite on the pair);
/// torques are independent per particle since each depends only on that
/// particle's own orientation relative to the bond.
pub fn accumulate(particles: &[Particle], params: &SimParams, buf: &mut ForceBuffer) {
    debug_assert_eq!(buf.len(), particles.len());
    let eq = params.eq_dist;
    let cutoff_sq = params.cutoff() * params.cutoff();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dx = particles[j].x - particles[i].x;
            let dy = particles[j].y - particles[i].y;
            let r_sq = dx * dx + dy * dy;
            if r_sq < MIN_DIST_SQ || r_sq > cutoff_sq {
                continue;
            }
            let r = r_sq.sqrt();
            let ux = dx / r;
            let uy = dy / r;
            // The bond direction as seen from each end of the pair.
            let angle_ij = dy.atan2(dx);
            let angle_ji = angle_ij + PI;

            // Soft repulsion: quadratic in the overlap fraction, pushing
            // the pair apart symmetrically.
            if r < REPULSION_RANGE * eq {
                let overlap = (REPULSION_RANGE * eq - r) / eq;
                let rf = params.rep_str * overlap * overlap;
                buf.fx[i] -= rf * ux;
                buf.fy[i] -= rf * uy;
                buf.fx[j] += rf * ux;
                buf.fy[j] += rf * uy;
            }

            let dev = (r - eq) / eq;

            // Bonding attraction, gated by both particles' alignment
            // toward each other. A stretched bond (dev > 0) pulls the pair
            // together; a compressed one pushes apart through the same
            // formula. The decay tapers the pull at large stretch so bonds
            // break instead of snapping back from arbitrary distance.
            let gate = alignment_weight(angle_ij, particles[i].theta, params.sharpness)
                * alignment_weight(angle_ji, particles[j].theta, params.sharpness);
            if gate > BOND_GATE_MIN {
                let stretch = dev.max(0.0);
                let decay = (-2.0 * stretch * stretch).exp();
                let sf = params.att_str * gate * dev * decay;
                buf.fx[i] += sf * ux;
                buf.fy[i] += sf * uy;
                buf.fx[j] -= sf * ux;
                buf.fy[j] -= sf * uy;
            }

            // Alignment torque, peaked at the equilibrium separation and
            // applied whenever the pair is within cutoff, gate or not.
            let proximity = (-2.0 * dev * dev).exp();
            let di = nearest_axis_offset(angle_ij, particles[i].theta);
            let dj = nearest_axis_offset(angle_ji, particles[j].theta);
            buf.torque[i] += params.torque_str * di.sin() * proximity;
            buf.torque[j] += params.torque_str * dj.sin() * proximity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn pair_at(
        r: f64,
        theta_left: f64,
        theta_right: f64,
        params: &SimParams,
    ) -> (Vec<Particle>, ForceBuffer) {
        let particles = vec![
            Particle {
                x: 200.0,
                y: 200.0,
                vx: 0.0,
                vy: 0.0,
                theta: theta_left,
                omega: 0.0,
            },
            Particle {
                x: 200.0 + r,
                y: 200.0,
                vx: 0.0,
                vy: 0.0,
                theta: theta_right,
                omega: 0.0,
            },
        ];
        let mut buf = ForceBuffer::zeroed(2);
        accumulate(&particles, params, &mut buf);
        (particles, buf)
    }

    fn base_params() -> SimParams {
        SimParams {
            n: 2,
            eq_dist: 20.0,
            ..SimParams::default()
        }
    }

    #[test]
    fn forces_are_equal_and_opposite() {
        // Aligned pair inside repulsion range: both the repulsive and the
        // bonding term contribute, and their sum must still cancel.
        let (_, buf) = pair_at(18.0, 0.0, PI, &base_params());
        assert_eq!(buf.fx[0], -buf.fx[1]);
        assert_eq!(buf.fy[0], -buf.fy[1]);
        assert!(buf.fx[0] != 0.0);
    }

    #[test]
    fn pairs_beyond_cutoff_contribute_nothing() {
        let params = base_params();
        let (_, buf) = pair_at(params.cutoff() + 0.5, 0.0, PI, &params);
        assert!(buf.fx.iter().all(|&f| f == 0.0));
        assert!(buf.fy.iter().all(|&f| f == 0.0));
        assert!(buf.torque.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn near_singular_pairs_are_skipped() {
        // Closer than one unit: skipped entirely, no division blow-up.
        let (_, buf) = pair_at(0.5, 0.0, PI, &base_params());
        assert!(buf.fx.iter().all(|&f| f == 0.0 && f.is_finite()));
        assert!(buf.torque.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn misaligned_close_pair_only_repels() {
        // Both orientations 60 degrees off the bond axis: the combined
        // gate is far below the threshold, leaving pure repulsion. The
        // left particle is pushed further left, the right one right.
        let (_, buf) = pair_at(10.0, PI / 3.0, 0.0, &base_params());
        assert!(buf.fx[0] < 0.0);
        assert!(buf.fx[1] > 0.0);
        assert_eq!(buf.fy[0], 0.0);
    }

    #[test]
    fn stretched_aligned_pair_attracts() {
        // Beyond the repulsion range but aligned: the gated bond pulls the
        // pair together.
        let params = base_params();
        let (_, buf) = pair_at(1.3 * params.eq_dist, 0.0, PI, &params);
        assert!(buf.fx[0] > 0.0);
        assert!(buf.fx[1] < 0.0);
    }

    #[test]
    fn compressed_aligned_pair_pushes_apart_through_the_bond_term() {
        // Disable plain repulsion; the negative deviation alone must give
        // a repulsive correction.
        let params = SimParams {
            rep_str: 0.0,
            ..base_params()
        };
        let (_, buf) = pair_at(0.9 * params.eq_dist, 0.0, PI, &params);
        assert!(buf.fx[0] < 0.0);
        assert!(buf.fx[1] > 0.0);
    }

    #[test]
    fn torque_restores_alignment() {
        // The left particle's nearest axis trails the bond by 0.2 rad, so
        // its torque must be positive (rotate counter-clockwise toward the
        // bond); leading by 0.2 flips the sign. The right particle is held
        // aligned and feels no torque.
        let (_, buf) = pair_at(20.0, -0.2, PI, &base_params());
        assert!(buf.torque[0] > 0.0);
        assert!(buf.torque[1].abs() < 1e-12);

        let (_, buf) = pair_at(20.0, 0.2, PI, &base_params());
        assert!(buf.torque[0] < 0.0);
    }

    #[test]
    fn torque_applies_even_when_the_bond_gate_is_shut() {
        // 60 degrees off on both sides kills the attraction gate, but the
        // torque still acts within cutoff.
        let params = base_params();
        let (_, buf) = pair_at(params.eq_dist, PI / 3.0 - 0.1, 0.0, &params);
        assert!(buf.torque[0] != 0.0);
    }

    #[test]
    fn buffer_starts_zeroed_and_sized() {
        let buf = ForceBuffer::zeroed(7);
        assert_eq!(buf.len(), 7);
        assert!(!buf.is_empty());
        assert!(buf.fx.iter().all(|&f| f == 0.0));
        assert!(buf.fy.iter().all(|&f| f == 0.0));
        assert!(buf.torque.iter().all(|&t| t == 0.0));
    }
}

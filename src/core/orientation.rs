//! Three-fold orientation field.
//!
//! A particle bonds along three equivalent axes spaced 120 degrees apart.
//! These pure functions score how well a bond direction matches a
//! particle's axes and measure the rotation that would line them up.

use std::f64::consts::{PI, TAU};

/// Angular spacing between the three bonding axes (120 degrees).
pub const AXIS_SPACING: f64 = TAU / 3.0;

/// Alignment weight in `[0, 1]` between a bond direction and a particle's
/// orientation.
///
/// Takes the best cosine match across the three axes, clamps it to zero
/// and raises it to `sharpness`: exactly 1 when the bond lies on an axis,
/// falling off toward 0 as the misalignment grows. Higher `sharpness`
/// gives stricter lattice-like bonding; 1 approaches isotropic behavior.
pub fn alignment_weight(bond_angle: f64, orientation: f64, sharpness: f64) -> f64 {
    let mut best = -1.0_f64;
    for k in 0..3 {
        let c = (bond_angle - orientation - k as f64 * AXIS_SPACING).cos();
        if c > best {
            best = c;
        }
    }
    best.max(0.0).powf(sharpness)
}

/// Signed angle in `(-PI, PI]` from the nearest of the three axes to the
/// bond direction.
///
/// This is the restoring angle the particle would have to rotate through
/// to align its closest axis with the bond; the torque term is driven by
/// its sine.
pub fn nearest_axis_offset(bond_angle: f64, orientation: f64) -> f64 {
    let mut best = 0.0_f64;
    let mut best_abs = f64::INFINITY;
    for k in 0..3 {
        let mut d = bond_angle - orientation - k as f64 * AXIS_SPACING;
        while d > PI {
            d -= TAU;
        }
        while d < -PI {
            d += TAU;
        }
        if d.abs() < best_abs {
            best_abs = d.abs();
            best = d;
        }
    }
    best
}

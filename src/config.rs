//! Simulation parameters, named presets and validation.

use crate::error::{Error, Result};

/// Hard ceiling on the particle population. Configurations asking for more
/// are rejected as a validation error rather than allocated.
pub const MAX_PARTICLES: usize = 20_000;

/// Configuration for one simulation run.
///
/// The driver treats a `SimParams` as an immutable snapshot per tick: the
/// host may replace values between ticks (the sliders do exactly that) but
/// a single tick always sees one consistent set. Out-of-range values are
/// rejected at the `Simulation` entry points; nothing is clamped silently.
#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
    /// Target particle count, reconciled at the start of every tick.
    pub n: usize,
    /// Soft repulsion strength.
    pub rep_str: f64,
    /// Bonding attraction strength.
    pub att_str: f64,
    /// Equilibrium bond length; also sets the interaction cutoff (3x) and
    /// the repulsion range (1.2x).
    pub eq_dist: f64,
    /// Angular selectivity exponent (>= 1). High values demand near-exact
    /// axis alignment for bonding; 1 approaches isotropic behavior.
    pub sharpness: f64,
    /// Alignment torque strength.
    pub torque_str: f64,
    /// Velocity damping coefficient. At `friction * dt >= 1` the friction
    /// multiplier floors at zero and velocities fully dissipate.
    pub friction: f64,
    /// Domain width.
    pub w: f64,
    /// Domain height.
    pub h: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Preset::Graphene.params()
    }
}

impl SimParams {
    /// Interaction cutoff radius: pairs farther apart contribute nothing.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        3.0 * self.eq_dist
    }

    /// Wall inset used when spawning new particles.
    #[inline]
    pub fn spawn_margin(&self) -> f64 {
        self.eq_dist.max(5.0)
    }

    /// Validate every field against its documented range.
    ///
    /// Errors carry the offending field name. Called by `Simulation::new`,
    /// `tick` and `reset` before anything else runs.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidParam("n must be at least 1".into()));
        }
        if self.n > MAX_PARTICLES {
            return Err(Error::InvalidParam(format!(
                "n must be at most {MAX_PARTICLES}, got {}",
                self.n
            )));
        }
        for (field, value) in [
            ("rep_str", self.rep_str),
            ("att_str", self.att_str),
            ("torque_str", self.torque_str),
            ("friction", self.friction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParam(format!(
                    "{field} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !self.eq_dist.is_finite() || self.eq_dist <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "eq_dist must be finite and > 0, got {}",
                self.eq_dist
            )));
        }
        if !self.sharpness.is_finite() || self.sharpness < 1.0 {
            return Err(Error::InvalidParam(format!(
                "sharpness must be finite and >= 1, got {}",
                self.sharpness
            )));
        }
        let min_extent = 2.0 * self.spawn_margin();
        for (field, value) in [("w", self.w), ("h", self.h)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParam(format!(
                    "{field} must be finite and > 0, got {value}"
                )));
            }
            if value <= min_extent {
                return Err(Error::InvalidParam(format!(
                    "{field} must exceed twice the spawn margin ({min_extent}), got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The shipped parameter sets, from tight lattice formation to a hot gas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Graphene,
    Breathing,
    Liquid,
    Gas,
    Clusters,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 5] = [
        Preset::Graphene,
        Preset::Breathing,
        Preset::Liquid,
        Preset::Gas,
        Preset::Clusters,
    ];

    /// Human-readable name for buttons and logs.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Graphene => "Graphene Lattice",
            Preset::Breathing => "Breathing Mode",
            Preset::Liquid => "Liquid Phase",
            Preset::Gas => "Hot Gas",
            Preset::Clusters => "Nano Clusters",
        }
    }

    /// The parameter set this preset stands for.
    pub fn params(self) -> SimParams {
        match self {
            Preset::Graphene => SimParams {
                n: 500,
                rep_str: 3000.0,
                att_str: 400.0,
                eq_dist: 29.0,
                sharpness: 8.0,
                torque_str: 195.0,
                friction: 2.4,
                w: 800.0,
                h: 450.0,
            },
            Preset::Breathing => SimParams {
                n: 1000,
                rep_str: 3000.0,
                att_str: 680.0,
                eq_dist: 16.0,
                sharpness: 8.0,
                torque_str: 200.0,
                friction: 2.4,
                w: 800.0,
                h: 450.0,
            },
            Preset::Liquid => SimParams {
                n: 600,
                rep_str: 500.0,
                att_str: 200.0,
                eq_dist: 20.0,
                sharpness: 1.0,
                torque_str: 20.0,
                friction: 1.0,
                w: 800.0,
                h: 450.0,
            },
            Preset::Gas => SimParams {
                n: 300,
                rep_str: 1500.0,
                att_str: 100.0,
                eq_dist: 25.0,
                sharpness: 2.0,
                torque_str: 30.0,
                friction: 0.2,
                w: 800.0,
                h: 450.0,
            },
            Preset::Clusters => SimParams {
                n: 400,
                rep_str: 3000.0,
                att_str: 250.0,
                eq_dist: 8.0,
                sharpness: 7.5,
                torque_str: 165.0,
                friction: 2.4,
                w: 800.0,
                h: 450.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_validate() -> Result<()> {
        for preset in Preset::ALL {
            preset.params().validate()?;
        }
        Ok(())
    }

    #[test]
    fn zero_population_rejected() {
        let err = SimParams {
            n: 0,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("n must be at least 1"));
    }

    #[test]
    fn oversized_population_rejected() {
        let err = SimParams {
            n: MAX_PARTICLES + 1,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("n must be at most"));
    }

    #[test]
    fn negative_eq_dist_rejected() {
        let err = SimParams {
            eq_dist: -4.0,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("eq_dist"));
    }

    #[test]
    fn negative_domain_width_rejected() {
        let err = SimParams {
            w: -5.0,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("w must be finite and > 0"));
    }

    #[test]
    fn zero_domain_height_rejected() {
        let err = SimParams {
            h: 0.0,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("h must be finite and > 0"));
    }

    #[test]
    fn non_finite_strength_rejected() {
        let err = SimParams {
            att_str: f64::NAN,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("att_str"));
    }

    #[test]
    fn flat_sharpness_rejected() {
        let err = SimParams {
            sharpness: 0.5,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("sharpness"));
    }

    #[test]
    fn domain_too_small_for_margin_rejected() {
        // eq_dist 29 makes the spawn margin 29; a 50-wide domain cannot
        // hold two of them.
        let err = SimParams {
            w: 50.0,
            ..SimParams::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("w must exceed"));
    }

    #[test]
    fn cutoff_and_margin_derive_from_eq_dist() {
        let params = SimParams {
            eq_dist: 20.0,
            ..SimParams::default()
        };
        assert_eq!(params.cutoff(), 60.0);
        assert_eq!(params.spawn_margin(), 20.0);

        let tiny = SimParams {
            eq_dist: 2.0,
            ..SimParams::default()
        };
        assert_eq!(tiny.spawn_margin(), 5.0);
    }
}

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Every reachable error is a caller-input validation failure raised at
/// the entry of `Simulation::new`, `tick` or `reset`. Numerical edge
/// cases (near-zero pair separations) are skipped in the force pass, not
/// reported.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is outside its documented range. The message
    /// names the offending field.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_field() {
        let e = Error::InvalidParam("eq_dist must be finite and > 0, got -1".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("eq_dist"));
    }
}

use crate::TdError;

/// Floating point type used throughout the system.
///
/// Commanded actuator values live in `[-1, 1]` for motors and `[0, 1]`
/// for servos, per device convention.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TdError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TdError::NonFinite { what, value: v })
    }
}

/// Whether a commanded servo value is a valid position.
pub fn is_unit_range(v: Real) -> bool {
    (0.0..=1.0).contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_passes_values_through() {
        assert_eq!(ensure_finite(0.25, "test").unwrap(), 0.25);
        assert!(ensure_finite(Real::INFINITY, "test").is_err());
    }

    #[test]
    fn unit_range_edges() {
        assert!(is_unit_range(0.0));
        assert!(is_unit_range(1.0));
        assert!(!is_unit_range(1.2));
        assert!(!is_unit_range(-0.1));
        assert!(!is_unit_range(Real::NAN));
    }
}

// src/core/threshold.rs

use super::constants::DEFAULT_THRESHOLD;
use super::error::GateError;
use std::fmt;

/// Activation cutoff for control bit-values.
///
/// A control counts as active when `value >= threshold` (inclusive). The
/// threshold must be a finite number; it is not required to lie in [0, 1],
/// since a cutoff outside that interval is still a well-defined comparison
/// (e.g. a threshold above 1.0 keeps every in-range control inactive).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Creates a threshold, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self, GateError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(GateError::InvalidThreshold { value })
        }
    }

    /// The raw cutoff value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `true` if `control` is at or above the cutoff.
    pub fn is_active(&self, control: f64) -> bool {
        control >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Threshold({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_half() {
        assert_eq!(Threshold::default().value(), 0.5);
    }

    #[test]
    fn test_threshold_rejects_non_finite() {
        assert!(matches!(Threshold::new(f64::NAN), Err(GateError::InvalidThreshold { .. })));
        assert_eq!(
            Threshold::new(f64::INFINITY),
            Err(GateError::InvalidThreshold { value: f64::INFINITY })
        );
        assert!(Threshold::new(1.5).is_ok());
    }

    #[test]
    fn test_is_active_is_inclusive() -> Result<(), GateError> {
        let th = Threshold::new(0.5)?;
        assert!(th.is_active(0.5));
        assert!(th.is_active(0.51));
        assert!(!th.is_active(0.49));
        Ok(())
    }
}

// src/validation/mod.rs

//! Opt-in range checks for bit-values.
//!
//! The gate functions accept any number and never call into this module.
//! These checks are for callers that want to reject values outside the
//! conventional [0, 1] interval before running anything, such as the
//! simulator in strict mode.

use crate::core::{BIT_MAX, BIT_MIN, GateError, SoftRegister, WireId};

/// Returns `true` if `value` is finite and within [0, 1].
pub fn in_bit_range(value: f64) -> bool {
    value.is_finite() && (BIT_MIN..=BIT_MAX).contains(&value)
}

/// Checks a single bit-value.
///
/// # Returns
/// * `Ok(())` if the value is within [0, 1].
/// * `Err(GateError::OutOfRange)` otherwise, including for NaN and infinities.
pub fn check_bit_value(value: f64) -> Result<(), GateError> {
    if in_bit_range(value) {
        Ok(())
    } else {
        Err(GateError::OutOfRange { wire: None, value })
    }
}

/// Checks every wire of a register, reporting the first offending wire.
pub fn validate_register(register: &SoftRegister) -> Result<(), GateError> {
    match register.values().iter().position(|v| !in_bit_range(*v)) {
        Some(i) => Err(GateError::OutOfRange {
            wire: Some(WireId(i)),
            value: register.values()[i],
        }),
        None => Ok(()),
    }
}

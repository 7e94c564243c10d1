// src/gates/mod.rs

//! Threshold analogues of controlled quantum gates over real-valued bits.
//!
//! Every function here is pure arithmetic. A control is "active" when it is
//! at or above the threshold, and an active gate maps the target through its
//! transformation (a flip `1 - x` for CNOT and Toffoli). No range checks are
//! made: values outside [0, 1] follow the same formulas.
//!
//! The functions are generic over [`num_traits::Float`], so `f32` and `f64`
//! registers share one implementation. Pass
//! [`DEFAULT_THRESHOLD`](crate::core::DEFAULT_THRESHOLD) for the usual 0.5
//! cutoff.

use num_traits::Float;

/// Returns `true` if `control >= threshold`.
#[inline]
pub fn is_active<T: Float>(control: T, threshold: T) -> bool {
    control >= threshold
}

/// Controlled-NOT for real-valued bits.
///
/// Returns `1 - target` when `control` is active, otherwise `target`.
///
/// ```
/// use soft_gates::gates::cnot;
/// assert_eq!(cnot(0.7, 0.3, 0.5), 0.7);
/// assert_eq!(cnot(0.2, 0.3, 0.5), 0.3);
/// ```
#[inline]
pub fn cnot<T: Float>(control: T, target: T, threshold: T) -> T {
    controlled_gate(control, target, not_gate, threshold)
}

/// Toffoli (controlled-controlled-NOT) for real-valued bits.
///
/// Flips `target` only when both controls are active.
#[inline]
pub fn toffoli<T: Float>(control1: T, control2: T, target: T, threshold: T) -> T {
    if is_active(control1, threshold) && is_active(control2, threshold) {
        not_gate(target)
    } else {
        target
    }
}

/// Applies `gate_function` to `target` when `control` is active.
///
/// Any closure or function item works as the gate function:
///
/// ```
/// use soft_gates::gates::controlled_gate;
/// let halve = |x: f64| x / 2.0;
/// assert_eq!(controlled_gate(0.9, 0.8, halve, 0.5), 0.4);
/// assert_eq!(controlled_gate(0.1, 0.8, halve, 0.5), 0.8);
/// ```
#[inline]
pub fn controlled_gate<T, F>(control: T, target: T, gate_function: F, threshold: T) -> T
where
    T: Float,
    F: FnOnce(T) -> T,
{
    if is_active(control, threshold) {
        gate_function(target)
    } else {
        target
    }
}

/// Logical NOT: `1 - target`.
#[inline]
pub fn not_gate<T: Float>(target: T) -> T {
    T::one() - target
}

/// Identity: returns `target` unchanged.
#[inline]
pub fn identity_gate<T: Float>(target: T) -> T {
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_THRESHOLD;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cnot_flips_when_active() {
        assert_eq!(cnot(0.7, 0.3, DEFAULT_THRESHOLD), 1.0 - 0.3);
        assert_eq!(cnot(1.0, 0.0, DEFAULT_THRESHOLD), 1.0);
    }

    #[test]
    fn test_cnot_passes_through_when_inactive() {
        assert_eq!(cnot(0.49, 0.3, DEFAULT_THRESHOLD), 0.3);
        assert_eq!(cnot(0.0, 1.0, DEFAULT_THRESHOLD), 1.0);
    }

    #[test]
    fn test_control_at_threshold_is_active() {
        assert_eq!(cnot(0.5, 0.25, 0.5), 0.75);
        assert_eq!(toffoli(0.5, 0.5, 0.25, 0.5), 0.75);
        assert_eq!(controlled_gate(0.5, 0.25, not_gate, 0.5), 0.75);
    }

    #[test]
    fn test_toffoli_requires_both_controls() {
        assert_eq!(toffoli(0.7, 0.8, 0.4, DEFAULT_THRESHOLD), 1.0 - 0.4);
        assert_eq!(toffoli(0.7, 0.2, 0.4, DEFAULT_THRESHOLD), 0.4);
        assert_eq!(toffoli(0.2, 0.8, 0.4, DEFAULT_THRESHOLD), 0.4);
        assert_eq!(toffoli(0.1, 0.2, 0.4, DEFAULT_THRESHOLD), 0.4);
    }

    #[test]
    fn test_out_of_range_values_follow_arithmetic() {
        // No clamping: a flip of 1.5 is -0.5, and a control of 3.0 is simply active.
        assert_eq!(cnot(3.0, 1.5, DEFAULT_THRESHOLD), -0.5);
        assert_eq!(cnot(-1.0, 1.5, DEFAULT_THRESHOLD), 1.5);
    }

    #[test]
    fn test_gates_work_on_f32() {
        assert_abs_diff_eq!(cnot(0.7f32, 0.3f32, 0.5f32), 0.7f32, epsilon = 1e-6);
        assert_eq!(identity_gate(0.3f32), 0.3f32);
    }

    #[test]
    fn test_nan_control_never_activates() {
        assert_eq!(cnot(f64::NAN, 0.3, DEFAULT_THRESHOLD), 0.3);
    }
}

//! Numeric constants shared by the gates and the simulator.

/// Default activation cutoff. A control at or above this value is active.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Lower bound of the conventional bit-value interval.
pub const BIT_MIN: f64 = 0.0;

/// Upper bound of the conventional bit-value interval.
pub const BIT_MAX: f64 = 1.0;

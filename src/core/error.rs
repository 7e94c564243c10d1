//! Error handling logic

use std::fmt;

/// Index of a wire (a single bit-value slot) within a `SoftRegister`.
/// Wires are addressed by position, so `WireId(0)` is the first value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub usize);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W({})", self.0)
    }
}

/// Failures raised around the gate library.
///
/// The gate functions themselves never fail: they are plain arithmetic over
/// whatever values they receive. These variants come from the opt-in
/// validation layer and from running circuits against a register.
#[derive(Debug, Clone, PartialEq)]
pub enum GateError {
    /// A threshold that cannot be compared against (NaN or infinite).
    InvalidThreshold {
        /// The rejected threshold
        value: f64,
    },

    /// A bit-value outside the closed interval [0.0, 1.0], or non-finite.
    OutOfRange {
        /// The wire holding the value, when the value came from a register
        wire: Option<WireId>,
        /// The rejected value
        value: f64,
    },

    /// An operation references a wire the register does not have.
    WireOutOfRange {
        /// The missing wire
        wire: WireId,
        /// Number of wires in the register
        width: usize,
    },

    /// An operation is inconsistent with itself, e.g. control and target on the same wire.
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::InvalidThreshold { value } => {
                write!(f, "Invalid Threshold: {} is not a finite number", value)
            }
            GateError::OutOfRange { wire: Some(wire), value } => {
                write!(f, "Bit-value Out Of Range ({}): {} not in [0, 1]", wire, value)
            }
            GateError::OutOfRange { wire: None, value } => {
                write!(f, "Bit-value Out Of Range: {} not in [0, 1]", value)
            }
            GateError::WireOutOfRange { wire, width } => write!(
                f,
                "Wire Out Of Range: {} does not exist in a register of {} wires",
                wire, width
            ),
            GateError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
        }
    }
}

impl std::error::Error for GateError {}

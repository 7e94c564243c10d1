// src/operations/mod.rs

//! Named transformations and the operations a circuit is built from.
//!
//! An `Operation` is one application of a gate function from
//! [`crate::gates`] to wires of a register. Operations only describe what to
//! apply; the `Simulator` performs it.

use crate::core::WireId;
use crate::gates::{identity_gate, not_gate};
use std::fmt;

/// A unary bit-value transformation that can be named inside a circuit.
///
/// Arbitrary closures can be passed straight to
/// [`controlled_gate`](crate::gates::controlled_gate); this enum covers the
/// canonical transformations so that circuits stay comparable and printable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    /// `1 - x`
    Not,
    /// `x`
    Identity,
}

impl Transformation {
    /// Applies the transformation to a single bit-value.
    pub fn apply(self, target: f64) -> f64 {
        match self {
            Transformation::Not => not_gate(target),
            Transformation::Identity => identity_gate(target),
        }
    }

    /// Glyph used for this transformation in circuit diagrams.
    pub fn symbol(self) -> &'static str {
        match self {
            Transformation::Not => "X",
            Transformation::Identity => "I",
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Not => write!(f, "NOT"),
            Transformation::Identity => write!(f, "ID"),
        }
    }
}

/// One gate application within a circuit.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Controlled-NOT: flips `target` when `control` is active.
    Cnot {
        /// Wire whose value decides activation.
        control: WireId,
        /// Wire that is conditionally flipped.
        target: WireId,
    },

    /// Controlled-controlled-NOT: flips `target` when both controls are active.
    Toffoli {
        control1: WireId,
        control2: WireId,
        target: WireId,
    },

    /// General controlled gate: applies `transformation` to `target` when
    /// `control` is active.
    Controlled {
        control: WireId,
        target: WireId,
        transformation: Transformation,
    },

    /// Unconditional application of a transformation, e.g. to prepare a wire.
    Apply {
        target: WireId,
        transformation: Transformation,
    },
}

impl Operation {
    /// Returns every wire referenced by the operation, controls first.
    pub fn involved_wires(&self) -> Vec<WireId> {
        match self {
            Operation::Cnot { control, target } => vec![*control, *target],
            Operation::Toffoli { control1, control2, target } => {
                vec![*control1, *control2, *target]
            }
            Operation::Controlled { control, target, .. } => vec![*control, *target],
            Operation::Apply { target, .. } => vec![*target],
        }
    }

    /// The wire whose value the operation may change.
    pub fn target(&self) -> WireId {
        match self {
            Operation::Cnot { target, .. }
            | Operation::Toffoli { target, .. }
            | Operation::Controlled { target, .. }
            | Operation::Apply { target, .. } => *target,
        }
    }

    /// The control wires, empty for `Apply`.
    pub fn controls(&self) -> Vec<WireId> {
        match self {
            Operation::Cnot { control, .. } | Operation::Controlled { control, .. } => {
                vec![*control]
            }
            Operation::Toffoli { control1, control2, .. } => vec![*control1, *control2],
            Operation::Apply { .. } => Vec::new(),
        }
    }

    /// Glyph drawn on the target wire in circuit diagrams.
    pub fn target_symbol(&self) -> &'static str {
        match self {
            Operation::Cnot { .. } | Operation::Toffoli { .. } => "X",
            Operation::Controlled { transformation, .. }
            | Operation::Apply { transformation, .. } => transformation.symbol(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Cnot { control, target } => write!(f, "CNOT({} -> {})", control, target),
            Operation::Toffoli { control1, control2, target } => {
                write!(f, "TOFFOLI({}, {} -> {})", control1, control2, target)
            }
            Operation::Controlled { control, target, transformation } => {
                write!(f, "C-{}({} -> {})", transformation, control, target)
            }
            Operation::Apply { target, transformation } => {
                write!(f, "{}({})", transformation, target)
            }
        }
    }
}

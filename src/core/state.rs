// src/core/state.rs

use super::error::WireId;
use std::fmt;

/// An ordered set of soft bit-values, one per wire.
///
/// Values are stored as given. Nothing here clamps or checks them against
/// [0, 1]; see `crate::validation` for the opt-in range checks.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftRegister {
    values: Vec<f64>,
}

impl SoftRegister {
    /// Creates a register holding `values`, wire `i` being `values[i]`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a register of `width` wires, all at 0.0.
    pub fn zeros(width: usize) -> Self {
        Self { values: vec![0.0; width] }
    }

    /// Reads a wire, or `None` if the register has no such wire.
    pub fn get(&self, wire: WireId) -> Option<f64> {
        self.values.get(wire.0).copied()
    }

    /// Overwrites a wire. Callers check the index beforehand.
    pub(crate) fn set(&mut self, wire: WireId, value: f64) {
        self.values[wire.0] = value;
    }

    /// Read-only view of all values in wire order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of wires.
    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for SoftRegister {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for SoftRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register[")?;
        for (i, v) in self.values.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, v)?;
        }
        write!(f, "]")
    }
}

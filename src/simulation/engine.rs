// src/simulation/engine.rs

//! Applies operations to a register, one at a time.

use super::results::StepRecord;
use crate::core::{GateError, SoftRegister, Threshold, WireId};
use crate::gates::{cnot, controlled_gate, is_active, toffoli};
use crate::operations::Operation;
use tracing::trace;

/// Owns the evolving register for the duration of a run.
#[derive(Debug)]
pub(crate) struct SimulationEngine {
    register: SoftRegister,
    threshold: Threshold,
}

impl SimulationEngine {
    pub(crate) fn init(register: SoftRegister, threshold: Threshold) -> Self {
        Self { register, threshold }
    }

    /// Checks that every wire of `op` exists and that no wire appears twice.
    pub(crate) fn check_operation(&self, op: &Operation) -> Result<(), GateError> {
        let wires = op.involved_wires();
        let width = self.register.width();
        if let Some(wire) = wires.iter().find(|w| w.0 >= width) {
            return Err(GateError::WireOutOfRange { wire: *wire, width });
        }
        for (i, wire) in wires.iter().enumerate() {
            if wires[i + 1..].contains(wire) {
                return Err(GateError::InvalidOperation {
                    message: format!("{} uses {} more than once", op, wire),
                });
            }
        }
        Ok(())
    }

    /// Applies one operation and records what happened to its target.
    pub(crate) fn apply_operation(
        &mut self,
        index: usize,
        op: &Operation,
    ) -> Result<StepRecord, GateError> {
        self.check_operation(op)?;

        let th = self.threshold.value();
        let value = |w: WireId| self.register.values()[w.0];
        let target = op.target();
        let before = value(target);

        let (after, fired) = match op {
            Operation::Cnot { control, .. } => {
                let c = value(*control);
                (cnot(c, before, th), is_active(c, th))
            }
            Operation::Toffoli { control1, control2, .. } => {
                let (c1, c2) = (value(*control1), value(*control2));
                (toffoli(c1, c2, before, th), is_active(c1, th) && is_active(c2, th))
            }
            Operation::Controlled { control, transformation, .. } => {
                let c = value(*control);
                (controlled_gate(c, before, |x| transformation.apply(x), th), is_active(c, th))
            }
            Operation::Apply { transformation, .. } => (transformation.apply(before), true),
        };

        trace!(index, op = %op, before, after, fired, "applied operation");
        self.register.set(target, after);

        Ok(StepRecord { index, target, before, after, fired })
    }

    pub(crate) fn into_register(self) -> SoftRegister {
        self.register
    }
}

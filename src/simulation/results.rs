// src/simulation/results.rs
use crate::core::{SoftRegister, WireId};
use std::fmt;

/// What a single operation did to its target wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Position of the operation in the circuit.
    pub index: usize,
    /// The wire the operation targets.
    pub target: WireId,
    /// Target value before the operation.
    pub before: f64,
    /// Target value after the operation.
    pub after: f64,
    /// Whether every control was active (always `true` for `Apply`).
    pub fired: bool,
}

/// Holds the outcome of running a circuit: the final register plus one
/// `StepRecord` per operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    final_register: SoftRegister,
    steps: Vec<StepRecord>,
}

impl SimulationResult {
    pub(crate) fn new(final_register: SoftRegister, steps: Vec<StepRecord>) -> Self {
        Self { final_register, steps }
    }

    /// The register after the last operation.
    pub fn final_register(&self) -> &SoftRegister {
        &self.final_register
    }

    /// Final value of a wire, or `None` if the register has no such wire.
    pub fn get_value(&self, wire: WireId) -> Option<f64> {
        self.final_register.get(wire)
    }

    /// Per-operation records, in execution order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        if self.steps.is_empty() {
            writeln!(f, "  No operations were applied.")?;
        } else {
            writeln!(f, "  Steps:")?;
            for step in &self.steps {
                writeln!(
                    f,
                    "    #{} {}: {:.4} -> {:.4}{}",
                    step.index,
                    step.target,
                    step.before,
                    step.after,
                    if step.fired { "" } else { " (inactive)" }
                )?;
            }
        }
        writeln!(f, "  Final: {}", self.final_register)
    }
}

// src/simulation/mod.rs

//! Runs a `soft_gates::circuits::Circuit` over a `SoftRegister`.
//!
//! The `Simulator` carries the run configuration (threshold, strictness);
//! the internal `SimulationEngine` owns the register while operations are
//! applied through the functions in [`crate::gates`].

mod results;
pub(crate) mod engine;

pub use results::{SimulationResult, StepRecord};

use crate::circuits::Circuit;
use crate::core::{GateError, SoftRegister, Threshold};
use crate::validation::validate_register;
use engine::SimulationEngine;
use tracing::debug;

/// Executes circuits. Defaults to the 0.5 threshold and permissive inputs.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    threshold: Threshold,
    strict: bool,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `threshold` as the activation cutoff for every controlled operation.
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// In strict mode the initial register must lie within [0, 1];
    /// otherwise values flow through the gate arithmetic unchecked.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Runs `circuit` starting from `initial`.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the final register and one step per operation.
    /// * `Err(GateError::OutOfRange)` in strict mode if `initial` holds a value outside [0, 1].
    /// * `Err(GateError::WireOutOfRange)` if an operation references a wire past the register.
    /// * `Err(GateError::InvalidOperation)` if an operation uses the same wire twice.
    pub fn run(
        &self,
        circuit: &Circuit,
        initial: SoftRegister,
    ) -> Result<SimulationResult, GateError> {
        if self.strict {
            validate_register(&initial)?;
        }

        debug!(
            operations = circuit.len(),
            width = initial.width(),
            threshold = self.threshold.value(),
            strict = self.strict,
            "running circuit"
        );

        let mut engine = SimulationEngine::init(initial, self.threshold);

        // Reject the whole circuit before touching the register.
        for op in circuit.operations() {
            engine.check_operation(op)?;
        }

        let mut steps = Vec::with_capacity(circuit.len());
        for (index, op) in circuit.operations().iter().enumerate() {
            steps.push(engine.apply_operation(index, op)?);
        }

        Ok(SimulationResult::new(engine.into_register(), steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::WireId;
    use crate::operations::{Operation, Transformation};

    fn wid(i: usize) -> WireId {
        WireId(i)
    }

    #[test]
    fn test_engine_rejects_repeated_wire() {
        let engine = SimulationEngine::init(SoftRegister::zeros(2), Threshold::default());
        let op = Operation::Cnot { control: wid(1), target: wid(1) };
        assert!(matches!(engine.check_operation(&op), Err(GateError::InvalidOperation { .. })));
    }

    #[test]
    fn test_engine_records_inactive_step() -> Result<(), GateError> {
        let initial = SoftRegister::new(vec![0.2, 0.3]);
        let mut engine = SimulationEngine::init(initial, Threshold::default());
        let op = Operation::Cnot { control: wid(0), target: wid(1) };
        let step = engine.apply_operation(0, &op)?;
        assert!(!step.fired);
        assert_eq!(step.before, 0.3);
        assert_eq!(step.after, 0.3);
        Ok(())
    }

    #[test]
    fn test_simulator_defaults() {
        let sim = Simulator::new();
        assert_eq!(sim.threshold(), Threshold::default());
        assert!(!sim.is_strict());
        assert!(sim.strict(true).is_strict());
    }

    #[test]
    fn test_custom_threshold_changes_activation() -> Result<(), GateError> {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Controlled {
                control: wid(0),
                target: wid(1),
                transformation: Transformation::Not,
            })
            .build();

        let initial = SoftRegister::new(vec![0.7, 0.25]);
        let lenient = Simulator::new().run(&circuit, initial.clone())?;
        assert_eq!(lenient.get_value(wid(1)), Some(0.75));

        let demanding = Simulator::new()
            .with_threshold(Threshold::new(0.9)?)
            .run(&circuit, initial)?;
        assert_eq!(demanding.get_value(wid(1)), Some(0.25));
        assert!(!demanding.steps()[0].fired);
        Ok(())
    }

    #[test]
    fn test_invalid_circuit_leaves_no_partial_result() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Apply { target: wid(0), transformation: Transformation::Not })
            .add_op(Operation::Cnot { control: wid(0), target: wid(5) })
            .build();

        let err = Simulator::new().run(&circuit, SoftRegister::zeros(2));
        assert_eq!(err, Err(GateError::WireOutOfRange { wire: wid(5), width: 2 }));
    }
}

// src/lib.rs

//! `soft_gates` - Classical analogues of controlled quantum gates
//!
//! Bits are real numbers ("soft bits", conventionally in [0, 1]) and a
//! control counts as set when it reaches a threshold. On top of the pure
//! gate functions the crate offers named operations, circuits over a
//! register of wires, and a simulator that runs them.

pub mod core;
pub mod gates;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod demo;

// Re-export the most common types for easier top-level use
pub use crate::core::{GateError, SoftRegister, Threshold, WireId, DEFAULT_THRESHOLD};
pub use gates::{cnot, controlled_gate, identity_gate, not_gate, toffoli};
pub use operations::{Operation, Transformation};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{SimulationResult, Simulator, StepRecord};
pub use validation::{check_bit_value, validate_register};

// Example 1: The gate functions on their own
// Each gate is a plain function of its inputs and the threshold.
/// ```
/// use soft_gates::{cnot, toffoli, controlled_gate, not_gate, identity_gate, DEFAULT_THRESHOLD};
///
/// let control = 0.7;
/// let target = 0.3;
///
/// // 0.7 >= 0.5, so the target flips to 1 - 0.3
/// assert_eq!(cnot(control, target, DEFAULT_THRESHOLD), 0.7);
///
/// // Both controls active: 0.4 flips to 0.6
/// assert_eq!(toffoli(control, 0.8, 0.4, DEFAULT_THRESHOLD), 0.6);
///
/// // One control inactive: the target is untouched
/// assert_eq!(toffoli(control, 0.2, 0.4, DEFAULT_THRESHOLD), 0.4);
///
/// // The general form takes the transformation as an argument
/// assert_eq!(controlled_gate(control, target, not_gate, DEFAULT_THRESHOLD), 0.7);
/// assert_eq!(controlled_gate(control, target, identity_gate, DEFAULT_THRESHOLD), 0.3);
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: The demonstration sequence as a circuit
// W(0) = control, W(1) = target, W(2) = second Toffoli control, W(3) = Toffoli target.
/// ```
/// use soft_gates::{CircuitBuilder, Operation, Simulator, SoftRegister, WireId, GateError};
///
/// fn wid(i: usize) -> WireId { WireId(i) }
///
/// let circuit = CircuitBuilder::new()
///     .add_op(Operation::Cnot { control: wid(0), target: wid(1) })
///     .add_op(Operation::Toffoli { control1: wid(0), control2: wid(2), target: wid(3) })
///     .build();
///
/// let result = Simulator::new().run(&circuit, SoftRegister::new(vec![0.7, 0.3, 0.8, 0.4]))?;
/// println!("Circuit:\n{}", circuit);
/// println!("Result:\n{}", result);
///
/// assert_eq!(result.get_value(wid(1)), Some(0.7));
/// assert_eq!(result.get_value(wid(3)), Some(0.6));
/// # Ok::<(), GateError>(())
/// ```
#[doc(hidden)]
const _: () = ();

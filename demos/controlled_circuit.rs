//! Builds a small circuit of soft-bit gates, prints its diagram, and runs it
//! at two different thresholds to show how the cutoff decides activation.

use soft_gates::{
    CircuitBuilder, GateError, Operation, Simulator, SoftRegister, Threshold, Transformation, WireId,
};
use tracing_subscriber::EnvFilter;

// Helper for WireId creation
fn wid(i: usize) -> WireId {
    WireId(i)
}

fn main() -> Result<(), GateError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("--- soft_gates Example: Controlled Circuit ---");

    // 1. CNOT from W(0) onto W(1).
    // 2. Toffoli with controls W(0), W(2) onto W(3).
    // 3. General controlled NOT from W(2) onto W(1).
    // 4. Controlled identity, which never changes its target.
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Cnot { control: wid(0), target: wid(1) })
        .add_op(Operation::Toffoli { control1: wid(0), control2: wid(2), target: wid(3) })
        .add_op(Operation::Controlled { control: wid(2), target: wid(1), transformation: Transformation::Not })
        .add_op(Operation::Controlled { control: wid(0), target: wid(3), transformation: Transformation::Identity })
        .build();

    println!("\nCircuit Definition:\n{}", circuit);

    let initial = SoftRegister::new(vec![0.7, 0.3, 0.8, 0.4]);
    println!("Initial: {}", initial);

    for cutoff in [0.5, 0.75] {
        let simulator = Simulator::new().with_threshold(Threshold::new(cutoff)?);
        let result = simulator.run(&circuit, initial.clone())?;
        println!("\nThreshold {}:\n{}", cutoff, result);
    }

    // Out-of-range values pass through unless the simulator is strict.
    let noisy = SoftRegister::new(vec![1.2, 0.3, 0.8, 0.4]);
    let permissive = Simulator::new().run(&circuit, noisy.clone())?;
    println!("Permissive run on {}:\n{}", noisy, permissive);

    match Simulator::new().strict(true).run(&circuit, noisy) {
        Ok(_) => println!("Strict run unexpectedly accepted the register."),
        Err(e) => println!("Strict run rejected the register: {}", e),
    }

    Ok(())
}

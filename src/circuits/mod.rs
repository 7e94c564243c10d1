// src/circuits/mod.rs

//! Ordered sequences of operations (`soft_gates::operations::Operation`)
//! over the wires of a register.

use crate::core::WireId;
use crate::operations::Operation;
use std::collections::BTreeSet;
use std::fmt;

/// An ordered sequence of operations applied to a set of wires.
///
/// Operations run in insertion order; the set of wires is derived from
/// the operations as they are added.
#[derive(Clone, PartialEq, Default)]
pub struct Circuit {
    /// Every wire referenced by at least one operation, kept sorted.
    wires: BTreeSet<WireId>,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation and registers the wires it touches.
    pub fn add_operation(&mut self, op: Operation) {
        self.wires.extend(op.involved_wires());
        self.operations.push(op);
    }

    /// Appends every operation yielded by `ops`, in order.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// The sorted set of wires referenced by this circuit.
    pub fn wires(&self) -> &BTreeSet<WireId> {
        &self.wires
    }

    /// The operations in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Smallest register width able to hold every referenced wire.
    pub fn width(&self) -> usize {
        self.wires.iter().next_back().map_or(0, |w| w.0 + 1)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Builds a `Circuit` through method chaining.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single operation. Returns `self` for chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds several operations. Returns `self` for chaining.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes the circuit. Wire bounds are checked when it is run.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

/// Centers a gate glyph on a seven-column stretch of wire, e.g. `───X───`.
fn gate_cell(symbol: &str) -> String {
    format!("{:─^7.7}", symbol)
}

/// A seven-column cell below a wire row, holding `│` where an operation spans rows.
fn connector_cell(spans: bool) -> String {
    format!("{:^7}", if spans { '│' } else { ' ' })
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_ops = self.operations.len();
        writeln!(f, "soft_gates::Circuit[{} operations on {} wires]", num_ops, self.wires.len())?;
        if num_ops == 0 {
            return Ok(());
        }

        // Every wire up to the highest one referenced gets a row, so gaps stay visible.
        let num_rows = self.width();
        let label_width = WireId(num_rows - 1).to_string().len() + 2;

        // cells[row][time] is the drawn segment; spans[row][time] marks a link to the row below.
        let mut cells = vec![vec![gate_cell(""); num_ops]; num_rows];
        let mut spans = vec![vec![false; num_ops]; num_rows];

        for (t, op) in self.operations.iter().enumerate() {
            cells[op.target().0][t] = gate_cell(op.target_symbol());

            let controls = op.controls();
            for control in &controls {
                cells[control.0][t] = gate_cell("@");
            }
            if controls.is_empty() {
                continue;
            }

            let touched: Vec<usize> = op.involved_wires().iter().map(|w| w.0).collect();
            let top = touched.iter().copied().min().unwrap_or(0);
            let bottom = touched.iter().copied().max().unwrap_or(0);
            for row in &mut spans[top..bottom] {
                row[t] = true;
            }
        }

        for (r, (row_cells, row_spans)) in cells.iter().zip(&spans).enumerate() {
            let label = format!("{}: ", WireId(r));
            writeln!(f, "{:<label_width$}{}", label, row_cells.concat())?;

            if r + 1 < num_rows {
                let links: String = row_spans.iter().map(|s| connector_cell(*s)).collect();
                writeln!(f, "{:label_width$}{}", "", links)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::Transformation;

    fn wid(i: usize) -> WireId {
        WireId(i)
    }

    #[test]
    fn test_builder_collects_wires_in_order() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Cnot { control: wid(2), target: wid(0) })
            .add_op(Operation::Apply { target: wid(1), transformation: Transformation::Not })
            .build();

        assert_eq!(circuit.len(), 2);
        let wires: Vec<WireId> = circuit.wires().iter().copied().collect();
        assert_eq!(wires, vec![wid(0), wid(1), wid(2)]);
        assert_eq!(circuit.width(), 3);
        assert_eq!(
            circuit.operations()[1],
            Operation::Apply { target: wid(1), transformation: Transformation::Not }
        );
    }

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new();
        assert!(circuit.is_empty());
        assert_eq!(circuit.width(), 0);
        assert_eq!(circuit.to_string(), "soft_gates::Circuit[0 operations on 0 wires]\n");
    }

    #[test]
    fn test_display_draws_controls_and_targets() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Cnot { control: wid(0), target: wid(1) })
            .build();

        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "soft_gates::Circuit[1 operations on 2 wires]");
        assert_eq!(lines[1], "W(0): ───@───");
        assert_eq!(lines[2], format!("{}│{}", " ".repeat(9), " ".repeat(3)));
        assert_eq!(lines[3], "W(1): ───X───");
    }

    #[test]
    fn test_cells_are_seven_columns() {
        assert_eq!(gate_cell(""), "───────");
        assert_eq!(gate_cell("X"), "───X───");
        // Odd padding puts the extra dash on the right.
        assert_eq!(gate_cell("ID"), "──ID───");
        assert_eq!(gate_cell("TOOLONGX"), "TOOLONG");
        assert_eq!(connector_cell(true), "   │   ");
        assert_eq!(connector_cell(false), "       ");
    }

    #[test]
    fn test_display_keeps_unused_rows() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Toffoli { control1: wid(0), control2: wid(3), target: wid(1) })
            .build();

        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();
        // Header plus four wire rows and three connector rows.
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[5], "W(2): ───────");
        assert_eq!(lines[7], "W(3): ───@───");
    }
}

// src/demo.rs

//! The fixed demonstration sequence: one CNOT, one Toffoli and one general
//! controlled NOT on hard-coded sample values.

use crate::core::DEFAULT_THRESHOLD;
use crate::gates::{cnot, controlled_gate, not_gate, toffoli};
use std::io::{self, Write};

/// Writes the four demonstration lines to `out`:
///
/// ```text
/// Original Target: 0.3
/// After CNOT: 0.7
/// After Toffoli: 0.6
/// After General Controlled NOT: 0.7
/// ```
pub fn write_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let control = 0.7;
    let target = 0.3;

    writeln!(out, "Original Target: {}", target)?;

    let new_target_cnot = cnot(control, target, DEFAULT_THRESHOLD);
    writeln!(out, "After CNOT: {}", new_target_cnot)?;

    // The Toffoli reuses `control` as its first control.
    let control2 = 0.8;
    let target_toffoli = 0.4;
    let new_target_toffoli = toffoli(control, control2, target_toffoli, DEFAULT_THRESHOLD);
    writeln!(out, "After Toffoli: {}", new_target_toffoli)?;

    let new_target_general = controlled_gate(control, target, not_gate, DEFAULT_THRESHOLD);
    writeln!(out, "After General Controlled NOT: {}", new_target_general)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() -> io::Result<()> {
        let mut buf = Vec::new();
        write_demo(&mut buf)?;
        let text = String::from_utf8(buf).map_err(io::Error::other)?;
        assert_eq!(
            text,
            "Original Target: 0.3\n\
             After CNOT: 0.7\n\
             After Toffoli: 0.6\n\
             After General Controlled NOT: 0.7\n"
        );
        Ok(())
    }
}

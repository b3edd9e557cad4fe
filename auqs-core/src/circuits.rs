//! Fixed gate sequences built from the catalogue

use crate::error::QuantumResult;
use crate::gates::Gate;
use crate::register::QuantumRegister;

/// Exchanges qubits `a` and `b`.
///
/// Three CNOTs with the middle one reversed by Hadamards on both wires:
///
/// ```text
/// a ──●──H──●──H──●──
///     │     │     │
/// b ──X──H──X──H──X──
/// ```
pub fn swap(register: &mut QuantumRegister, a: usize, b: usize) -> QuantumResult<()> {
    register.apply_gate(Gate::Cnot, a, Some(b))?;
    register.apply_gate(Gate::H, a, None)?;
    register.apply_gate(Gate::H, b, None)?;
    register.apply_gate(Gate::Cnot, a, Some(b))?;
    register.apply_gate(Gate::H, a, None)?;
    register.apply_gate(Gate::H, b, None)?;
    register.apply_gate(Gate::Cnot, a, Some(b))?;
    Ok(())
}

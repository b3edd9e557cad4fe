//! # Gate Composer
//!
//! Expands a catalogue gate acting on specific qubits into the full
//! `2^n × 2^n` operator of an n-qubit register.
//!
//! Qubit 0 is the leftmost (most significant) tensor factor:
//!
//! ```text
//! X on qubit 1 of 3  =  Id ⊗ X ⊗ Id
//! ```
//!
//! CNOT is not a product of per-qubit operators, so it is written as the sum
//! of its two control branches, each of which is a plain tensor product:
//!
//! ```text
//! CNOT(c, t) = (|0⟩⟨0| at c, Id elsewhere) + (|1⟩⟨1| at c, X at t, Id elsewhere)
//! ```

use num_complex::Complex64;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::Gate;
use crate::matrix::GateMatrix;

/// Builds the full register operator for `gate`.
///
/// `qubit1` is the target of a single-qubit gate, or the control of CNOT.
/// `qubit2` is the CNOT target and is ignored for single-qubit gates.
pub fn generate_gate(
    gate: Gate,
    num_qubits: usize,
    qubit1: usize,
    qubit2: Option<usize>,
) -> QuantumResult<GateMatrix> {
    if num_qubits == 0 {
        return Err(QuantumError::EmptyRegister);
    }
    check_qubit(qubit1, num_qubits)?;

    let operator = match gate {
        Gate::Cnot => {
            let target = qubit2.ok_or(QuantumError::MissingTarget(gate))?;
            check_qubit(target, num_qubits)?;
            if target == qubit1 {
                return Err(QuantumError::ControlIsTarget(target));
            }
            controlled_not(num_qubits, qubit1, target)?
        }
        single => expand(num_qubits, &[(qubit1, single.matrix()?)])?,
    };

    tracing::trace!(
        gate = %gate,
        num_qubits,
        qubit1,
        ?qubit2,
        dim = operator.dim(),
        "composed gate"
    );

    Ok(operator)
}

/// Same as [`generate_gate`], resolving the gate by catalogue name
pub fn generate_gate_by_name(
    name: &str,
    num_qubits: usize,
    qubit1: usize,
    qubit2: Option<usize>,
) -> QuantumResult<GateMatrix> {
    generate_gate(name.parse()?, num_qubits, qubit1, qubit2)
}

fn check_qubit(qubit: usize, num_qubits: usize) -> QuantumResult<()> {
    if qubit >= num_qubits {
        return Err(QuantumError::QubitOutOfRange { qubit, num_qubits });
    }
    Ok(())
}

/// Tensor product of one factor per qubit: the given placements, identity elsewhere
fn expand(num_qubits: usize, placements: &[(usize, GateMatrix)]) -> QuantumResult<GateMatrix> {
    let identity = GateMatrix::identity(2);
    let factors: Vec<&GateMatrix> = (0..num_qubits)
        .map(|qubit| {
            placements
                .iter()
                .find(|(position, _)| *position == qubit)
                .map_or(&identity, |(_, factor)| factor)
        })
        .collect();

    GateMatrix::reduce(factors).ok_or(QuantumError::EmptyRegister)
}

fn controlled_not(num_qubits: usize, control: usize, target: usize) -> QuantumResult<GateMatrix> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    let project_zero = GateMatrix::from_2x2([[one, zero], [zero, zero]]);
    let project_one = GateMatrix::from_2x2([[zero, zero], [zero, one]]);

    let idle = expand(num_qubits, &[(control, project_zero)])?;
    let active = expand(num_qubits, &[(control, project_one), (target, Gate::X.matrix()?)])?;

    Ok(idle.add(&active))
}

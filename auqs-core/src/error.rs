//! Error types for auqs-core

use thiserror::Error;

use crate::gates::Gate;

/// Result alias for register and gate operations
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Errors raised while composing gates or evolving a register
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Cannot apply gate to measured register")]
    InvalidState,

    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    #[error("Gate {0} is not a single-qubit gate")]
    NotSingleQubit(Gate),

    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Control and target are both qubit {0}")]
    ControlIsTarget(usize),

    #[error("Gate {0} needs a target qubit")]
    MissingTarget(Gate),

    #[error("Register must hold at least one qubit")]
    EmptyRegister,

    #[error("Register of {requested} qubits exceeds the limit of {max}")]
    TooManyQubits { requested: usize, max: usize },

    #[error("Probabilities sum to {0}, state is not normalized")]
    NumericDegenerate(f64),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

//! # Gate Library
//!
//! The fixed gate catalogue. Single-qubit gates resolve to their canonical
//! 2x2 unitaries; `CNOT` is the only two-qubit gate and is expanded by the
//! composer.
//!
//! ## Gates
//!
//! - **Pauli**: X, Y, Z
//! - **Hadamard**: H
//! - **Phase**: S, S†, T, T†
//! - **Identity**: Id
//! - **Two-qubit**: CNOT

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

use crate::error::{QuantumError, QuantumResult};
use crate::matrix::GateMatrix;

/// Member of the gate catalogue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X (quantum NOT)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard
    H,
    /// Identity
    Id,
    /// S (√Z)
    S,
    /// S†
    SDagger,
    /// T (π/8)
    T,
    /// T†
    TDagger,
    /// Controlled-NOT; first qubit is the control
    #[serde(rename = "CNOT")]
    Cnot,
}

impl Gate {
    /// Whole catalogue, in declaration order
    pub const ALL: [Gate; 10] = [
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::Id,
        Gate::S,
        Gate::SDagger,
        Gate::T,
        Gate::TDagger,
        Gate::Cnot,
    ];

    /// Catalogue name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::Id => "Id",
            Self::S => "S",
            Self::SDagger => "SDagger",
            Self::T => "T",
            Self::TDagger => "TDagger",
            Self::Cnot => "CNOT",
        }
    }

    /// Number of qubits the gate acts on
    pub fn arity(&self) -> usize {
        match self {
            Self::Cnot => 2,
            _ => 1,
        }
    }

    /// Adjoint gate within the catalogue
    pub fn dagger(&self) -> Gate {
        match self {
            Self::S => Self::SDagger,
            Self::SDagger => Self::S,
            Self::T => Self::TDagger,
            Self::TDagger => Self::T,
            other => *other,
        }
    }

    /// Canonical 2x2 matrix of a single-qubit gate
    pub fn matrix(&self) -> QuantumResult<GateMatrix> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);

        let rows = match self {
            Self::X => [[zero, one], [one, zero]],
            Self::Y => [[zero, -i], [i, zero]],
            Self::Z => [[one, zero], [zero, -one]],
            Self::H => [[h, h], [h, -h]],
            Self::Id => [[one, zero], [zero, one]],
            Self::S => [[one, zero], [zero, i]],
            Self::SDagger => [[one, zero], [zero, -i]],
            Self::T => [[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            Self::TDagger => [[one, zero], [zero, Complex64::from_polar(1.0, -FRAC_PI_4)]],
            Self::Cnot => return Err(QuantumError::NotSingleQubit(*self)),
        };

        Ok(GateMatrix::from_2x2(rows))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gate {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|gate| gate.name() == s)
            .ok_or_else(|| QuantumError::UnknownGate(s.to_string()))
    }
}

/// Looks up the 2x2 matrix of a single-qubit gate by catalogue name
pub fn lookup(name: &str) -> QuantumResult<GateMatrix> {
    name.parse::<Gate>()?.matrix()
}

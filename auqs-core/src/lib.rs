//! # ⚛️ auqs-core: State-Vector Quantum Registers
//!
//! Simulates an n-qubit register as a vector of `2^n` complex amplitudes.
//! Gates from a fixed catalogue are expanded to full register operators by
//! Kronecker products and applied by matrix multiplication; measurement
//! samples one basis state and freezes the register.
//!
//! ## Computational Complexity
//!
//! **Gate composition: O(4^n)**
//! - Every gate is materialized as a dense `2^n × 2^n` matrix
//!
//! **Gate application: O(4^n)**
//! - Row vector times dense operator
//!
//! **Measurement: O(2^n)**
//! - One probability per basis state, one weighted draw
//!
//! Memory grows the same way; `SimulatorConfig::max_qubits` bounds it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumRegister                        │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Amplitudes (2^n × Complex64)             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Composer (Kronecker fold, CNOT branches) │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Library (fixed 2x2 unitaries)       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use auqs_core::{Gate, QuantumRegister, circuits};
//! use rand::SeedableRng;
//!
//! let mut register = QuantumRegister::new(2).unwrap();
//! register.apply_gate(Gate::X, 0, None).unwrap();
//! circuits::swap(&mut register, 0, 1).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! assert_eq!(register.measure(&mut rng).unwrap(), "01");
//! ```

pub mod circuits;
pub mod composer;
pub mod config;
pub mod error;
pub mod gates;
pub mod matrix;
pub mod register;

pub use composer::{generate_gate, generate_gate_by_name};
pub use config::SimulatorConfig;
pub use error::{QuantumError, QuantumResult};
pub use gates::Gate;
pub use matrix::GateMatrix;
pub use register::{QuantumRegister, RegisterSnapshot};

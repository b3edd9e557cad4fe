//! # Quantum Register
//!
//! A `QuantumRegister` owns the `2^n` complex amplitudes of an n-qubit state.
//! Basis index bits follow qubit order, qubit 0 being the most significant:
//!
//! ```text
//! |q0 q1 … q(n-1)⟩  ↔  index = q0·2^(n-1) + q1·2^(n-2) + … + q(n-1)
//! ```
//!
//! Gates are applied as a row vector times the composed operator,
//! `a'[i] = Σ_j a[j] · M[j][i]`.
//!
//! Measurement samples one basis state weighted by `|a_i|²`, using the RNG the
//! caller passes in. It happens once: afterwards the register is terminal,
//! further measurements return the recorded bitstring and gate application
//! fails with [`QuantumError::InvalidState`].

use num_complex::Complex64;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::composer::generate_gate;
use crate::config::SimulatorConfig;
use crate::error::{QuantumError, QuantumResult};
use crate::gates::Gate;

/// State vector of an n-qubit register
#[derive(Debug, Clone)]
pub struct QuantumRegister {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
    /// Probabilities recorded at measurement
    probabilities: Option<Vec<f64>>,
    measured_value: Option<String>,
    tolerance: f64,
}

/// Serializable view of a register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    pub num_qubits: usize,
    pub amplitudes: Vec<Complex64>,
    pub probabilities: Vec<f64>,
    pub measured_value: Option<String>,
}

impl QuantumRegister {
    /// Creates a register in |0…0⟩ with the default configuration
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_config(num_qubits, &SimulatorConfig::default())
    }

    /// Creates a register in |0…0⟩, bounded by `config.max_qubits`
    pub fn with_config(num_qubits: usize, config: &SimulatorConfig) -> QuantumResult<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::EmptyRegister);
        }
        if num_qubits > config.max_qubits {
            return Err(QuantumError::TooManyQubits {
                requested: num_qubits,
                max: config.max_qubits,
            });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
            probabilities: None,
            measured_value: None,
            tolerance: config.tolerance,
        })
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.measured_value.is_some()
    }

    /// Bitstring recorded by [`measure`](Self::measure), if any
    pub fn measured_value(&self) -> Option<&str> {
        self.measured_value.as_deref()
    }

    /// Per-basis-state probabilities; after measurement, the ones it sampled from
    pub fn probabilities(&self) -> Vec<f64> {
        match &self.probabilities {
            Some(recorded) => recorded.clone(),
            None => self.amplitudes.iter().map(|a| a.norm_sqr()).collect(),
        }
    }

    /// Applies a catalogue gate.
    ///
    /// `qubit1` is the target (or CNOT control); `qubit2` is the CNOT target
    /// and ignored otherwise. On error the register is left unchanged.
    pub fn apply_gate(
        &mut self,
        gate: Gate,
        qubit1: usize,
        qubit2: Option<usize>,
    ) -> QuantumResult<()> {
        if self.is_measured() {
            return Err(QuantumError::InvalidState);
        }

        let operator = generate_gate(gate, self.num_qubits, qubit1, qubit2)?;
        self.amplitudes = operator.apply_row_vector(&self.amplitudes);

        tracing::debug!(gate = %gate, qubit1, ?qubit2, "applied gate");
        Ok(())
    }

    /// Applies a gate given by catalogue name
    pub fn apply_named(
        &mut self,
        name: &str,
        qubit1: usize,
        qubit2: Option<usize>,
    ) -> QuantumResult<()> {
        self.apply_gate(name.parse()?, qubit1, qubit2)
    }

    /// Measures every qubit, returning e.g. `"01"` (qubit 0 first).
    ///
    /// Fails with [`QuantumError::NumericDegenerate`] when the probabilities do
    /// not sum to one within the configured tolerance.
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuantumResult<String> {
        if let Some(value) = &self.measured_value {
            return Ok(value.clone());
        }

        let probabilities = self.probabilities();
        let total: f64 = probabilities.iter().sum();
        if !total.is_finite() || (total - 1.0).abs() > self.tolerance {
            tracing::warn!(total, "probabilities are not normalized");
            return Err(QuantumError::NumericDegenerate(total));
        }

        let distribution = WeightedIndex::new(probabilities.iter().copied())
            .map_err(|_| QuantumError::NumericDegenerate(total))?;
        let index = distribution.sample(rng);
        let value = format!("{:0width$b}", index, width = self.num_qubits);

        // Collapse onto the sampled basis state
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[index] = Complex64::new(1.0, 0.0);
        self.probabilities = Some(probabilities);
        self.measured_value = Some(value.clone());

        tracing::debug!(outcome = %value, index, "register measured");
        Ok(value)
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            num_qubits: self.num_qubits,
            amplitudes: self.amplitudes.clone(),
            probabilities: self.probabilities(),
            measured_value: self.measured_value.clone(),
        }
    }
}

impl fmt::Display for QuantumRegister {
    /// Non-zero amplitudes, one basis state per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sqr() < 1e-12 {
                continue;
            }
            writeln!(
                f,
                "|{:0width$b}⟩: {:+.4}{:+.4}i (p = {:.4})",
                index,
                amp.re,
                amp.im,
                amp.norm_sqr(),
                width = self.num_qubits
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_starts_in_zero_state() {
        let reg = QuantumRegister::new(3).unwrap();
        assert_eq!(reg.num_qubits(), 3);
        assert_eq!(reg.amplitudes().len(), 8);
        assert_eq!(reg.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert!(reg.amplitudes()[1..].iter().all(|a| a.norm_sqr() == 0.0));
        assert!(!reg.is_measured());
        assert_eq!(reg.measured_value(), None);
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(QuantumRegister::new(0).unwrap_err(), QuantumError::EmptyRegister);

        let config = SimulatorConfig {
            max_qubits: 3,
            ..Default::default()
        };
        assert_eq!(
            QuantumRegister::with_config(4, &config).unwrap_err(),
            QuantumError::TooManyQubits { requested: 4, max: 3 }
        );
        assert!(QuantumRegister::with_config(3, &config).is_ok());
    }

    #[test]
    fn test_x_on_qubit_zero() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.apply_gate(Gate::X, 0, None).unwrap();
        // |10⟩ is index 2
        assert!((reg.amplitudes()[2].re - 1.0).abs() < 1e-10);
        assert!(reg.amplitudes()[0].norm_sqr() < 1e-10);
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.apply_gate(Gate::H, 0, None).unwrap();

        let amps = reg.amplitudes();
        assert!((amps[0].re - FRAC_1_SQRT_2).abs() < 1e-10);
        assert!((amps[1].re - FRAC_1_SQRT_2).abs() < 1e-10);

        let probs = reg.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-10);
        assert!((probs[1] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_row_vector_convention_with_y() {
        // v · Y for v = |0⟩ is the first row of Y: [0, -i]
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.apply_gate(Gate::Y, 0, None).unwrap();
        assert!((reg.amplitudes()[1] - Complex64::new(0.0, -1.0)).norm() < 1e-10);
    }

    #[test]
    fn test_measure_deterministic_state() {
        let mut reg = QuantumRegister::new(3).unwrap();
        reg.apply_gate(Gate::X, 2, None).unwrap();
        assert_eq!(reg.measure(&mut rng()).unwrap(), "001");
        assert!(reg.is_measured());
    }

    #[test]
    fn test_measure_idempotent() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.apply_gate(Gate::H, 0, None).unwrap();
        reg.apply_gate(Gate::H, 1, None).unwrap();

        let mut rng = rng();
        let first = reg.measure(&mut rng).unwrap();
        let second = reg.measure(&mut rng).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(reg.measured_value(), Some(first.as_str()));
    }

    #[test]
    fn test_measure_collapses_state() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.apply_gate(Gate::H, 1, None).unwrap();
        let value = reg.measure(&mut rng()).unwrap();
        let index = usize::from_str_radix(&value, 2).unwrap();

        assert!((reg.amplitudes()[index].re - 1.0).abs() < 1e-10);
        // Recorded probabilities are the pre-measurement ones
        let probs = reg.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-10);
        assert!((probs[1] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_apply_after_measure_fails() {
        let mut reg = QuantumRegister::new(1).unwrap();
        let value = reg.measure(&mut rng()).unwrap();
        assert_eq!(value, "0");

        assert_eq!(reg.apply_gate(Gate::X, 0, None), Err(QuantumError::InvalidState));
        assert_eq!(reg.measured_value(), Some("0"));
        assert_eq!(reg.measure(&mut rng()).unwrap(), "0");
    }

    #[test]
    fn test_failed_apply_leaves_state() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.apply_gate(Gate::H, 0, None).unwrap();
        let before = reg.amplitudes().to_vec();

        assert!(reg.apply_gate(Gate::X, 7, None).is_err());
        assert!(reg.apply_gate(Gate::Cnot, 0, Some(0)).is_err());
        assert!(reg.apply_named("Foo", 0, None).is_err());
        assert_eq!(reg.amplitudes(), before.as_slice());
    }

    #[test]
    fn test_unnormalized_state_is_degenerate() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.amplitudes = vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];

        let err = reg.measure(&mut rng()).unwrap_err();
        assert_eq!(err, QuantumError::NumericDegenerate(2.0));
        assert!(!reg.is_measured());
    }

    #[test]
    fn test_sampling_follows_weights() {
        // Ry-like state with p(|1⟩) = 0.9 built from raw amplitudes
        let mut ones = 0;
        for seed in 0..400 {
            let mut reg = QuantumRegister::new(1).unwrap();
            reg.amplitudes = vec![
                Complex64::new(0.1_f64.sqrt(), 0.0),
                Complex64::new(0.0, 0.9_f64.sqrt()),
            ];
            if reg.measure(&mut StdRng::seed_from_u64(seed)).unwrap() == "1" {
                ones += 1;
            }
        }
        assert!(ones > 320 && ones < 395, "ones = {ones}");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.apply_gate(Gate::X, 0, None).unwrap();
        reg.measure(&mut rng()).unwrap();

        let snapshot = reg.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RegisterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.measured_value.as_deref(), Some("1"));
    }

    #[test]
    fn test_display_lists_nonzero_states() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.apply_gate(Gate::X, 1, None).unwrap();
        let text = reg.to_string();
        assert!(text.contains("|01⟩"));
        assert_eq!(text.lines().count(), 1);
    }
}

//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use kickback_ir::{QubitId, StandardGate};

/// Probabilities closer than this to 0 or 1 are treated as exact.
const PROBABILITY_EPS: f64 = 1e-12;

/// A statevector representing a quantum state.
///
/// Basis-state index bit `k` holds qubit `k`.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Apply a gate to its operands (controls first, target last).
    pub fn apply_gate(&mut self, gate: StandardGate, qubits: &[QubitId]) {
        let q: Vec<usize> = qubits.iter().map(|q| q.index()).collect();
        match gate {
            // Single-qubit gates
            StandardGate::I => {}
            StandardGate::X => self.apply_x(q[0]),
            StandardGate::Y => self.apply_y(q[0]),
            StandardGate::Z => self.apply_z(q[0]),
            StandardGate::H => self.apply_h(q[0]),
            StandardGate::S => self.apply_phase(q[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(q[0], -PI / 2.0),
            StandardGate::T => self.apply_phase(q[0], PI / 4.0),
            StandardGate::Tdg => self.apply_phase(q[0], -PI / 4.0),

            // Two-qubit gates
            StandardGate::CZ => self.apply_cz(q[0], q[1]),
            StandardGate::Swap => self.apply_swap(q[0], q[1]),

            // Controlled-X family
            StandardGate::CX | StandardGate::CCX | StandardGate::Mcx { .. } => {
                if let Some((&target, controls)) = q.split_last() {
                    self.apply_mcx(controls, target);
                }
            }
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// X on `target` when every control reads 1. No controls means plain X.
    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let ctrl_mask = controls.iter().fold(0usize, |m, &c| m | (1 << c));
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Probability that measuring `qubit` yields 1.
    pub fn probability_one(&self, qubit: usize) -> f64 {
        let mask = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Measure `qubit` in the computational basis.
    ///
    /// Collapses the state onto the observed outcome and renormalizes.
    pub fn measure<R: Rng + ?Sized>(&mut self, qubit: usize, rng: &mut R) -> bool {
        let p1 = self.probability_one(qubit);
        let outcome = if p1 < PROBABILITY_EPS {
            false
        } else if p1 > 1.0 - PROBABILITY_EPS {
            true
        } else {
            rng.r#gen::<f64>() < p1
        };

        let mask = 1 << qubit;
        let kept = if outcome { p1 } else { 1.0 - p1 };
        let norm = kept.sqrt();
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if ((i & mask) != 0) == outcome {
                if norm > 0.0 {
                    *amp /= norm;
                }
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn q(ids: &[u32]) -> Vec<QubitId> {
        ids.iter().copied().map(QubitId).collect()
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &q(&[0]));

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(StandardGate::H, &q(&[0]));
        sv.apply_gate(StandardGate::CX, &q(&[0, 1]));

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::X, &q(&[0]));

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_mcx_fires_only_on_all_ones() {
        // |011⟩ (qubits 0 and 1 set): MCX(0,1 → 2) flips qubit 2
        let mut sv = Statevector::new(3);
        sv.apply_gate(StandardGate::X, &q(&[0]));
        sv.apply_gate(StandardGate::X, &q(&[1]));
        sv.apply_gate(StandardGate::Mcx { num_controls: 2 }, &q(&[0, 1, 2]));
        assert!(approx_eq(sv.amplitudes[0b111], Complex64::new(1.0, 0.0)));

        // |001⟩: one control off, nothing happens
        let mut sv = Statevector::new(3);
        sv.apply_gate(StandardGate::X, &q(&[0]));
        sv.apply_gate(StandardGate::Mcx { num_controls: 2 }, &q(&[0, 1, 2]));
        assert!(approx_eq(sv.amplitudes[0b001], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_mcx_without_controls_is_x() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::Mcx { num_controls: 0 }, &q(&[0]));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_phase_kickback() {
        // H·X on the ancilla gives |−⟩; CX from |+⟩ kicks the phase back.
        let mut sv = Statevector::new(2);
        sv.apply_gate(StandardGate::X, &q(&[1]));
        sv.apply_gate(StandardGate::H, &q(&[0]));
        sv.apply_gate(StandardGate::H, &q(&[1]));
        sv.apply_gate(StandardGate::CX, &q(&[0, 1]));
        sv.apply_gate(StandardGate::H, &q(&[0]));
        assert!((sv.probability_one(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_s_and_sdg_cancel() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &q(&[0]));
        let before = sv.clone();
        sv.apply_gate(StandardGate::S, &q(&[0]));
        sv.apply_gate(StandardGate::Sdg, &q(&[0]));
        for (a, b) in sv.amplitudes().iter().zip(before.amplitudes()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_measure_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::X, &q(&[0]));

        for _ in 0..100 {
            assert!(sv.measure(0, &mut rng));
        }
    }

    #[test]
    fn test_measure_collapses_entangled_partner() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let mut sv = Statevector::new(2);
            sv.apply_gate(StandardGate::H, &q(&[0]));
            sv.apply_gate(StandardGate::CX, &q(&[0, 1]));
            let first = sv.measure(0, &mut rng);
            let second = sv.measure(1, &mut rng);
            assert_eq!(first, second);
            let norm: f64 = sv.probabilities().iter().sum();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }
}

//! State-vector engine for small qubit counts.
//!
//! Owns a complex amplitude vector over the joint Hilbert space of all
//! declared qubits (qubit 0 is the least significant bit of a basis index)
//! and mutates it in place. Unitary application is deterministic; projective
//! measurement is the only stochastic primitive and samples the Born rule.
//!
//! The register starts small (5 data qubits for the code) and grows when
//! ancillas are allocated, so the vector never exceeds 2^9 amplitudes in the
//! syndrome-extraction phase of a trial.

use num_complex::Complex;
use num_traits::{One, Zero};
use rand::Rng;

use crate::register::ClassicalRegister;

/// Hard cap on the register size. 2^24 amplitudes is already far beyond what
/// this simulator is asked to hold (9 qubits).
pub const MAX_QUBITS: usize = 24;

/// Gates between norm checks.
const NORM_CHECK_INTERVAL: usize = 64;

/// Drift below this is left alone; above it the state is renormalized.
const SOFT_DRIFT_TOLERANCE: f64 = 1e-10;

/// Drift above this means a gate implementation is not unitary. Fatal.
const HARD_DRIFT_TOLERANCE: f64 = 1e-6;

/// A single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    /// The three nontrivial Paulis, in error-channel sampling order.
    pub const ERRORS: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Whether two single-qubit Paulis anticommute.
    ///
    /// Distinct nontrivial Paulis anticommute; identity commutes with all.
    pub fn anticommutes_with(self, other: Pauli) -> bool {
        self != Pauli::I && other != Pauli::I && self != other
    }
}

/// Complex amplitude vector over `2^num_qubits` basis states.
#[derive(Debug, Clone)]
pub struct QuantumState {
    num_qubits: usize,
    amps: Vec<Complex<f64>>,
    ops_since_check: usize,
}

impl QuantumState {
    /// Create a register of `num_qubits` qubits in |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits >= 1, "at least one qubit required");
        assert!(
            num_qubits <= MAX_QUBITS,
            "register of {} qubits exceeds the {}-qubit cap",
            num_qubits,
            MAX_QUBITS
        );
        let mut amps = vec![Complex::zero(); 1 << num_qubits];
        amps[0] = Complex::one();
        Self {
            num_qubits,
            amps,
            ops_since_check: 0,
        }
    }

    /// Number of qubits currently declared.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space, `2^num_qubits`.
    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    /// Read-only view of the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amps
    }

    /// Append `count` fresh qubits in |0⟩ above the existing ones.
    ///
    /// Existing amplitudes keep their indices: the new qubits occupy the
    /// high bits and are all zero, so the vector is extended with zeros.
    pub fn add_qubits(&mut self, count: usize) {
        assert!(
            self.num_qubits + count <= MAX_QUBITS,
            "register of {} qubits exceeds the {}-qubit cap",
            self.num_qubits + count,
            MAX_QUBITS
        );
        self.num_qubits += count;
        self.amps.resize(1 << self.num_qubits, Complex::zero());
    }

    fn check_qubit(&self, qubit: usize) {
        assert!(
            qubit < self.num_qubits,
            "qubit index {} out of range for a {}-qubit register",
            qubit,
            self.num_qubits
        );
    }

    /// Sum of squared amplitude magnitudes. 1 for a physical state.
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Rescale the amplitudes to unit norm.
    pub fn renormalize(&mut self) {
        let norm_sqr = self.norm_sqr();
        assert!(
            norm_sqr > 1e-12,
            "state collapsed to zero norm, cannot renormalize"
        );
        let inv = 1.0 / norm_sqr.sqrt();
        for amp in &mut self.amps {
            *amp *= inv;
        }
    }

    /// Periodic norm maintenance. Soft drift is renormalized away; hard
    /// drift means a gate was not unitary and the run cannot be trusted.
    fn track_drift(&mut self) {
        self.ops_since_check += 1;
        if self.ops_since_check < NORM_CHECK_INTERVAL {
            return;
        }
        self.ops_since_check = 0;
        let drift = (self.norm_sqr() - 1.0).abs();
        if drift > HARD_DRIFT_TOLERANCE {
            panic!("state norm drifted by {} after gate chain", drift);
        }
        if drift > SOFT_DRIFT_TOLERANCE {
            self.renormalize();
        }
    }

    /// Apply an arbitrary 2x2 unitary to one qubit.
    ///
    /// `matrix` is row-major: [m00, m01, m10, m11].
    pub fn apply_single(&mut self, qubit: usize, matrix: [Complex<f64>; 4]) {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a0 = self.amps[i];
                let a1 = self.amps[j];
                self.amps[i] = matrix[0] * a0 + matrix[1] * a1;
                self.amps[j] = matrix[2] * a0 + matrix[3] * a1;
            }
        }
        self.track_drift();
    }

    /// Hadamard gate.
    pub fn h(&mut self, qubit: usize) {
        let s = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        self.apply_single(qubit, [s, s, s, -s]);
    }

    /// Pauli-X (bit flip).
    pub fn x(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                self.amps.swap(i, i | mask);
            }
        }
        self.track_drift();
    }

    /// Pauli-Y (combined bit and phase flip).
    pub fn y(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        let i_pos = Complex::new(0.0, 1.0);
        let i_neg = Complex::new(0.0, -1.0);
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a0 = self.amps[i];
                let a1 = self.amps[j];
                self.amps[i] = i_neg * a1;
                self.amps[j] = i_pos * a0;
            }
        }
        self.track_drift();
    }

    /// Pauli-Z (phase flip).
    pub fn z(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
        self.track_drift();
    }

    /// Phase gate S = diag(1, i).
    pub fn s(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        let phase = Complex::new(0.0, 1.0);
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
        self.track_drift();
    }

    /// Inverse phase gate S† = diag(1, -i).
    pub fn sdg(&mut self, qubit: usize) {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        let phase = Complex::new(0.0, -1.0);
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
        self.track_drift();
    }

    /// Rotation about Y by `theta`.
    pub fn ry(&mut self, qubit: usize, theta: f64) {
        let c = Complex::new((theta / 2.0).cos(), 0.0);
        let s = Complex::new((theta / 2.0).sin(), 0.0);
        self.apply_single(qubit, [c, -s, s, c]);
    }

    /// Rotation about Z by `phi`.
    pub fn rz(&mut self, qubit: usize, phi: f64) {
        let e_neg = Complex::from_polar(1.0, -phi / 2.0);
        let e_pos = Complex::from_polar(1.0, phi / 2.0);
        let zero = Complex::zero();
        self.apply_single(qubit, [e_neg, zero, zero, e_pos]);
    }

    /// Controlled-X with `control` driving a bit flip on `target`.
    pub fn cx(&mut self, control: usize, target: usize) {
        self.check_qubit(control);
        self.check_qubit(target);
        assert!(control != target, "control and target must differ");
        let cmask = 1 << control;
        let tmask = 1 << target;
        for i in 0..self.amps.len() {
            if i & cmask != 0 && i & tmask == 0 {
                self.amps.swap(i, i | tmask);
            }
        }
        self.track_drift();
    }

    /// Controlled-Z between two qubits (symmetric).
    pub fn cz(&mut self, a: usize, b: usize) {
        self.check_qubit(a);
        self.check_qubit(b);
        assert!(a != b, "control and target must differ");
        let mask = (1 << a) | (1 << b);
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & mask == mask {
                *amp = -*amp;
            }
        }
        self.track_drift();
    }

    /// Apply one Pauli operator to one qubit.
    pub fn apply_pauli(&mut self, pauli: Pauli, qubit: usize) {
        match pauli {
            Pauli::I => {}
            Pauli::X => self.x(qubit),
            Pauli::Y => self.y(qubit),
            Pauli::Z => self.z(qubit),
        }
    }

    /// Classically-conditioned Pauli application: the gate runs only when
    /// the measured bits in `register` equal `pattern` (interpreted with the
    /// same least-significant-first order as [`ClassicalRegister::to_index`]).
    ///
    /// This is a synchronous branch on already-measured bits, nothing more.
    pub fn apply_pauli_when(
        &mut self,
        register: &ClassicalRegister,
        pattern: usize,
        pauli: Pauli,
        qubit: usize,
    ) {
        if register.to_index() == pattern {
            self.apply_pauli(pauli, qubit);
        }
    }

    /// Probability of observing |1⟩ on `qubit`, marginalized over the rest.
    pub fn prob_one(&self, qubit: usize) -> f64 {
        self.check_qubit(qubit);
        let mask = 1 << qubit;
        self.amps
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Projective measurement of `qubit` in the computational basis.
    ///
    /// Samples the outcome from the Born rule, zeroes the amplitudes of the
    /// discarded subspace and renormalizes the survivor.
    pub fn measure<R: Rng>(&mut self, qubit: usize, rng: &mut R) -> bool {
        let p_one = self.prob_one(qubit);
        let outcome = rng.gen::<f64>() < p_one;
        let mask = 1 << qubit;
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if (i & mask != 0) != outcome {
                *amp = Complex::zero();
            }
        }
        self.renormalize();
        outcome
    }
}

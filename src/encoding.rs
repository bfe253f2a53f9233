//! Logical basis selection and the five-qubit encoder/decoder.
//!
//! The logical qubit is prepared on data qubit 0 and spread over all five
//! data qubits by a fixed Clifford sequence. The sequence is derived from
//! the stabilizer tableau of the `[[5,1,3]]` code so that every generator
//! (see [`crate::syndrome::STABILIZER_GENERATORS`]) stabilizes the encoded
//! states with eigenvalue +1, with logical operators Z̄ = ZZZZZ and
//! X̄ = XXXXX. The decoder is the same sequence reversed with each gate
//! inverted, so encode-then-decode is the identity on the prepared state.

use num_complex::Complex;

use crate::register::QubitRegister;
use crate::state::QuantumState;

/// Rotations smaller than this are dropped during state preparation; they
/// would be a meaningless gate on an already-aligned state.
const ROTATION_EPSILON: f64 = 1e-12;

/// The four logical basis states, selected by the flag pair (x1, x2).
///
/// x1 chooses the computational (false) or conjugate (true) basis, x2 the
/// bit value within it. Every flag combination is a valid state, so an
/// invalid selection is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalBasis {
    /// (0,0): |0⟩, amplitudes (1, 0).
    Zero,
    /// (0,1): |1⟩, amplitudes (0, 1).
    One,
    /// (1,0): |+⟩, amplitudes (1/√2, 1/√2).
    Plus,
    /// (1,1): |−⟩, amplitudes (1/√2, −1/√2).
    Minus,
}

impl LogicalBasis {
    /// All four basis states, in flag order.
    pub const ALL: [LogicalBasis; 4] = [
        LogicalBasis::Zero,
        LogicalBasis::One,
        LogicalBasis::Plus,
        LogicalBasis::Minus,
    ];

    /// Select a basis state from the (x1, x2) flag pair.
    pub fn from_flags(x1: bool, x2: bool) -> Self {
        match (x1, x2) {
            (false, false) => LogicalBasis::Zero,
            (false, true) => LogicalBasis::One,
            (true, false) => LogicalBasis::Plus,
            (true, true) => LogicalBasis::Minus,
        }
    }

    /// The (x1, x2) flag pair of this state.
    pub fn flags(self) -> (bool, bool) {
        match self {
            LogicalBasis::Zero => (false, false),
            LogicalBasis::One => (false, true),
            LogicalBasis::Plus => (true, false),
            LogicalBasis::Minus => (true, true),
        }
    }

    /// Amplitude pair (α, β) of the state α|0⟩ + β|1⟩.
    pub fn amplitudes(self) -> (Complex<f64>, Complex<f64>) {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let (alpha, beta) = match self {
            LogicalBasis::Zero => (1.0, 0.0),
            LogicalBasis::One => (0.0, 1.0),
            LogicalBasis::Plus => (s, s),
            LogicalBasis::Minus => (s, -s),
        };
        (Complex::new(alpha, 0.0), Complex::new(beta, 0.0))
    }

    /// The bit a noiseless trial must report: x2.
    pub fn expected_bit(self) -> bool {
        self.flags().1
    }

    /// Whether readout needs a Hadamard to rotate the conjugate basis back
    /// to the computational one before the final measurement.
    pub fn is_superposed(self) -> bool {
        self.flags().0
    }
}

/// Prepare qubit 0 of `data` in the chosen logical state.
///
/// Uses θ = 2·arccos(|α|) about Y followed by φ = arg(β) − arg(α) about Z,
/// skipping any rotation below [`ROTATION_EPSILON`].
pub fn prepare_logical(state: &mut QuantumState, data: &QubitRegister, basis: LogicalBasis) {
    let (alpha, beta) = basis.amplitudes();
    let theta = 2.0 * alpha.norm().acos();
    let phi = beta.arg() - alpha.arg();
    let qubit = data.qubit(0);
    if theta.abs() > ROTATION_EPSILON {
        state.ry(qubit, theta);
    }
    if phi.abs() > ROTATION_EPSILON {
        state.rz(qubit, phi);
    }
}

/// One gate of the encoder sequence, indexed into the data register.
#[derive(Debug, Clone, Copy)]
enum CliffordOp {
    H(usize),
    X(usize),
    S(usize),
    Sdg(usize),
    Cx(usize, usize),
}

impl CliffordOp {
    fn apply(self, state: &mut QuantumState, data: &QubitRegister) {
        match self {
            CliffordOp::H(q) => state.h(data.qubit(q)),
            CliffordOp::X(q) => state.x(data.qubit(q)),
            CliffordOp::S(q) => state.s(data.qubit(q)),
            CliffordOp::Sdg(q) => state.sdg(data.qubit(q)),
            CliffordOp::Cx(c, t) => state.cx(data.qubit(c), data.qubit(t)),
        }
    }

    fn inverse(self) -> Self {
        match self {
            CliffordOp::S(q) => CliffordOp::Sdg(q),
            CliffordOp::Sdg(q) => CliffordOp::S(q),
            other => other,
        }
    }
}

/// Encoder gate sequence, in application order.
///
/// The leading three CX gates swap the prepared qubit 0 with qubit 4; the
/// remainder builds the code space one stabilizer generator at a time.
const ENCODER_OPS: [CliffordOp; 23] = [
    CliffordOp::Cx(0, 4),
    CliffordOp::Cx(4, 0),
    CliffordOp::Cx(0, 4),
    CliffordOp::S(4),
    CliffordOp::X(4),
    CliffordOp::H(3),
    CliffordOp::Cx(3, 4),
    CliffordOp::Cx(3, 0),
    CliffordOp::Sdg(4),
    CliffordOp::Sdg(3),
    CliffordOp::H(0),
    CliffordOp::H(2),
    CliffordOp::Cx(2, 4),
    CliffordOp::Cx(2, 3),
    CliffordOp::Cx(2, 0),
    CliffordOp::H(4),
    CliffordOp::H(2),
    CliffordOp::H(1),
    CliffordOp::Cx(1, 4),
    CliffordOp::Cx(1, 3),
    CliffordOp::Cx(1, 2),
    CliffordOp::H(3),
    CliffordOp::H(2),
];

/// Map the prepared qubit-0 state into the five-qubit code space.
pub fn apply_encoder(state: &mut QuantumState, data: &QubitRegister) {
    assert_eq!(data.len(), 5, "the code encodes into exactly 5 data qubits");
    for op in ENCODER_OPS {
        op.apply(state, data);
    }
}

/// Invert the encoder: reversed order, each gate inverted.
pub fn apply_decoder(state: &mut QuantumState, data: &QubitRegister) {
    assert_eq!(data.len(), 5, "the code decodes exactly 5 data qubits");
    for op in ENCODER_OPS.iter().rev() {
        op.inverse().apply(state, data);
    }
}

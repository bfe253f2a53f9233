//! # five-qubit-code-sim
//!
//! Monte Carlo simulation of the five-qubit perfect code `[[5,1,3]]`
//! protecting one logical qubit against random single-qubit Pauli noise.
//!
//! Each trial runs the full error-correction cycle on a small state-vector
//! simulator: encode the chosen logical basis state into five data qubits,
//! inject an independent X/Y/Z error on each qubit with probability p,
//! measure the four stabilizer generators through ancillas, apply the
//! correction selected by the 4-bit syndrome, decode, and read the logical
//! bit by majority vote over repeated shots. A sweep aggregates trials over
//! a grid of error probabilities into an empirical success curve.
//!
//! ## Physics
//!
//! - The code is stabilized by the cyclic generators IXZZX, XIXZZ, ZXIXZ,
//!   XZZXI, with logical operators Z̄ = ZZZZZ and X̄ = XXXXX.
//! - Any weight-1 Pauli error anticommutes with a unique subset of the
//!   generators, so the 4-bit syndrome identifies it exactly; the
//!   correction table is derived from that anticommutation pattern and is
//!   a bijection over the 15 nonzero syndromes.
//! - Weight-2 and higher errors are beyond the code's distance; as p grows
//!   they dominate and the success curve decays.
//!
//! ## Usage
//!
//! ```no_run
//! use five_qubit_code_sim::prelude::*;
//!
//! let config = SweepConfig::default();
//! let curve = run_sweep(&config);
//! for point in &curve.points {
//!     println!("p = {:.2}: success = {:.3}", point.p, point.success_probability);
//! }
//! ```

pub mod state;
pub mod register;
pub mod encoding;
pub mod noise;
pub mod syndrome;
pub mod correction;
pub mod simulation;

pub mod prelude {
    pub use crate::correction::{Correction, CorrectionTable};
    pub use crate::encoding::{apply_decoder, apply_encoder, prepare_logical, LogicalBasis};
    pub use crate::noise::RandomPauliChannel;
    pub use crate::register::{ClassicalRegister, QubitRegister};
    pub use crate::simulation::{
        run_sweep, run_trial, SuccessCurve, SweepConfig, SweepPoint, TrialRecord,
    };
    pub use crate::state::{Pauli, QuantumState};
    pub use crate::syndrome::{
        extract_syndrome, STABILIZER_GENERATORS, STABILIZER_LABELS,
    };
}

//! Monte Carlo trial driver and error-probability sweep.
//!
//! One trial runs the full cycle: prepare the logical basis state, encode,
//! inject one random Pauli realization, then for each shot extract the
//! syndrome with fresh ancillas, apply the conditioned correction, decode
//! and measure the logical qubit. The trial's bit is the majority vote over
//! shots. A sweep repeats independent trials over a grid of error
//! probabilities and reports the empirical success curve.
//!
//! Trials share nothing mutable: each owns its state vector and its own
//! seeded random stream, so the sweep parallelizes freely across trials.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::correction::CorrectionTable;
use crate::encoding::{apply_decoder, apply_encoder, prepare_logical, LogicalBasis};
use crate::noise::RandomPauliChannel;
use crate::register::QubitRegister;
use crate::state::QuantumState;
use crate::syndrome::{extract_syndrome, NUM_DATA_QUBITS, NUM_GENERATORS};

/// Outcome of a single trial: which state was prepared and what was read.
#[derive(Debug, Clone, Copy)]
pub struct TrialRecord {
    /// The prepared logical basis state.
    pub basis: LogicalBasis,
    /// Majority-vote logical bit across the trial's shots.
    pub bit: bool,
}

impl TrialRecord {
    /// Whether the observed bit matches the prepared state.
    pub fn is_success(&self) -> bool {
        self.bit == self.basis.expected_bit()
    }
}

/// One point of the success curve.
#[derive(Debug, Clone, Copy)]
pub struct SweepPoint {
    /// Physical per-qubit error probability.
    pub p: f64,
    /// Fraction of trials whose majority bit matched the prepared state.
    pub success_probability: f64,
}

/// Empirical success probability across the probability grid, in grid order.
#[derive(Debug, Clone)]
pub struct SuccessCurve {
    pub points: Vec<SweepPoint>,
}

/// Configuration for a full probability sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Logical basis state prepared in every trial.
    pub basis: LogicalBasis,
    /// Number of evenly spaced grid points over [p_min, p_max].
    pub grid_points: usize,
    /// Lower end of the probability grid.
    pub p_min: f64,
    /// Upper end of the probability grid.
    pub p_max: f64,
    /// Independent trials per grid point.
    pub trials: usize,
    /// Measurement shots per trial, combined by majority vote.
    pub shots: usize,
    /// Base seed; every trial derives its own stream from it.
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            basis: LogicalBasis::Zero,
            grid_points: 50,
            p_min: 0.0,
            p_max: 1.0,
            trials: 100,
            shots: 500,
            seed: 42,
        }
    }
}

impl SweepConfig {
    /// Check the configuration before any simulation starts.
    pub fn validate(&self) {
        assert!(self.grid_points >= 1, "at least one grid point required");
        assert!(self.trials >= 1, "at least one trial per point required");
        assert!(self.shots >= 1, "at least one shot per trial required");
        assert!(
            (0.0..=1.0).contains(&self.p_min) && (0.0..=1.0).contains(&self.p_max),
            "probability grid [{}, {}] outside [0, 1]",
            self.p_min,
            self.p_max
        );
        assert!(self.p_min <= self.p_max, "empty probability grid");
    }

    /// The i-th grid probability, endpoints included.
    fn grid_value(&self, i: usize) -> f64 {
        if self.grid_points == 1 {
            return self.p_min;
        }
        let step = (self.p_max - self.p_min) / (self.grid_points - 1) as f64;
        self.p_min + step * i as f64
    }
}

/// Run one encode → error → detect → correct → decode → measure trial.
///
/// The noise realization is sampled once and fixed for the trial; every
/// shot replays the detection and correction on a copy of the noisy state
/// with fresh ancillas, and the reported bit is the shot majority.
pub fn run_trial<R: Rng>(
    basis: LogicalBasis,
    p: f64,
    shots: usize,
    table: &CorrectionTable,
    rng: &mut R,
) -> TrialRecord {
    assert!(shots >= 1, "at least one shot required");
    let data = QubitRegister::range("data", 0, NUM_DATA_QUBITS);
    let ancilla = QubitRegister::range("ancilla", NUM_DATA_QUBITS, NUM_GENERATORS);

    let mut state = QuantumState::new(NUM_DATA_QUBITS);
    prepare_logical(&mut state, &data, basis);
    apply_encoder(&mut state, &data);

    let channel = RandomPauliChannel::new(p);
    channel.apply(&mut state, &data, rng);

    let mut ones = 0usize;
    for _ in 0..shots {
        let mut shot = state.clone();
        shot.add_qubits(NUM_GENERATORS);
        let syndrome = extract_syndrome(&mut shot, &data, &ancilla, rng);
        table.apply(&mut shot, &data, &syndrome);
        apply_decoder(&mut shot, &data);
        if basis.is_superposed() {
            shot.h(data.qubit(0));
        }
        if shot.measure(data.qubit(0), rng) {
            ones += 1;
        }
    }

    TrialRecord {
        basis,
        bit: 2 * ones > shots,
    }
}

/// Deterministic per-trial seed from the sweep seed and both loop indices.
fn trial_seed(seed: u64, point_index: usize, trial: usize) -> u64 {
    seed.wrapping_add((point_index as u64).wrapping_mul(1_000_003))
        .wrapping_add((trial as u64).wrapping_mul(7919))
}

#[cfg(feature = "parallel")]
fn count_successes(config: &SweepConfig, table: &CorrectionTable, point_index: usize) -> usize {
    let p = config.grid_value(point_index);
    (0..config.trials)
        .into_par_iter()
        .filter(|&trial| {
            let mut rng = StdRng::seed_from_u64(trial_seed(config.seed, point_index, trial));
            run_trial(config.basis, p, config.shots, table, &mut rng).is_success()
        })
        .count()
}

#[cfg(not(feature = "parallel"))]
fn count_successes(config: &SweepConfig, table: &CorrectionTable, point_index: usize) -> usize {
    let p = config.grid_value(point_index);
    (0..config.trials)
        .filter(|&trial| {
            let mut rng = StdRng::seed_from_u64(trial_seed(config.seed, point_index, trial));
            run_trial(config.basis, p, config.shots, table, &mut rng).is_success()
        })
        .count()
}

/// Run the full sweep and return the success curve, grid order preserved.
pub fn run_sweep(config: &SweepConfig) -> SuccessCurve {
    config.validate();
    let table = CorrectionTable::derive();

    let points = (0..config.grid_points)
        .map(|i| {
            let successes = count_successes(config, &table, i);
            SweepPoint {
                p: config.grid_value(i),
                success_probability: successes as f64 / config.trials as f64,
            }
        })
        .collect();

    SuccessCurve { points }
}

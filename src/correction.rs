//! Syndrome-to-correction lookup for the five-qubit code.
//!
//! The table is not hard-coded: it is derived once from the stabilizer
//! generators by computing, for every (qubit, Pauli) single-qubit error, the
//! pattern of generators the error anticommutes with. That pattern is the
//! syndrome the extraction circuit reports, so correcting means applying the
//! same Pauli back to the same qubit. Deriving the table also proves the
//! bijection invariant at construction time: the 15 nonzero syndromes map
//! one-to-one onto the 15 (qubit, Pauli) pairs, and the all-zero syndrome
//! means no correction.

use crate::register::{ClassicalRegister, QubitRegister};
use crate::state::{Pauli, QuantumState};
use crate::syndrome::{NUM_DATA_QUBITS, NUM_GENERATORS, STABILIZER_GENERATORS};

/// Number of distinct 4-bit syndrome patterns.
pub const TABLE_SIZE: usize = 1 << NUM_GENERATORS;

/// Action keyed by one syndrome pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// All-zero syndrome: leave the state alone.
    Identity,
    /// Apply this Pauli to this data-register qubit.
    Apply(Pauli, usize),
}

/// Fixed mapping from 4-bit syndrome index to correction action.
#[derive(Debug, Clone)]
pub struct CorrectionTable {
    entries: [Correction; TABLE_SIZE],
}

impl CorrectionTable {
    /// Build the table from the generators' anticommutation patterns.
    ///
    /// Panics if the generators fail to separate the single-qubit errors;
    /// that would be a defect in the stabilizer set, not a runtime
    /// condition.
    pub fn derive() -> Self {
        let mut building: [Option<Correction>; TABLE_SIZE] = [None; TABLE_SIZE];
        building[0] = Some(Correction::Identity);

        for qubit in 0..NUM_DATA_QUBITS {
            for error in Pauli::ERRORS {
                let index = syndrome_of(error, qubit);
                assert!(
                    building[index].is_none(),
                    "syndrome {:04b} assigned twice; generators do not separate errors",
                    index
                );
                building[index] = Some(Correction::Apply(error, qubit));
            }
        }

        let entries = building
            .map(|entry| entry.expect("15 errors + identity fill all 16 syndromes"));
        Self { entries }
    }

    /// Correction action for a syndrome index.
    pub fn lookup(&self, syndrome_index: usize) -> Correction {
        assert!(
            syndrome_index < TABLE_SIZE,
            "syndrome index {} out of range",
            syndrome_index
        );
        self.entries[syndrome_index]
    }

    /// Apply the correction selected by a measured syndrome register.
    ///
    /// The gate is classically conditioned: it executes only because the
    /// syndrome register equals the entry's own pattern. Returns the action
    /// taken so callers can log or assert on it.
    pub fn apply(
        &self,
        state: &mut QuantumState,
        data: &QubitRegister,
        syndrome: &ClassicalRegister,
    ) -> Correction {
        let pattern = syndrome.to_index();
        let correction = self.lookup(pattern);
        if let Correction::Apply(pauli, qubit) = correction {
            state.apply_pauli_when(syndrome, pattern, pauli, data.qubit(qubit));
        }
        correction
    }
}

/// Syndrome index raised by a single-qubit error: bit i set when the error
/// anticommutes with generator i, least-significant-first.
fn syndrome_of(error: Pauli, qubit: usize) -> usize {
    STABILIZER_GENERATORS
        .iter()
        .enumerate()
        .map(|(i, g)| (error.anticommutes_with(g[qubit]) as usize) << i)
        .sum()
}

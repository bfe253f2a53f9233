//! Random single-qubit Pauli channel.
//!
//! Each data qubit independently suffers X, Y or Z with probability p/3
//! each (total error probability p), applied by Monte Carlo sampling one
//! operator per qubit per trial. There is no correlation between qubits:
//! p = 0 never errs, p = 1 always applies some nontrivial Pauli, evenly
//! split across the three kinds.

use rand::Rng;
use smallvec::SmallVec;

use crate::register::QubitRegister;
use crate::state::{Pauli, QuantumState};

/// Symmetric depolarizing-style error channel with per-qubit probability p.
#[derive(Debug, Clone, Copy)]
pub struct RandomPauliChannel {
    p: f64,
}

/// Errors injected into one register by a single channel application.
pub type InjectedErrors = SmallVec<[(usize, Pauli); 5]>;

impl RandomPauliChannel {
    /// Channel with total per-qubit error probability `p` ∈ [0, 1].
    pub fn new(p: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&p),
            "error probability {} outside [0, 1]",
            p
        );
        Self { p }
    }

    /// Per-qubit error probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Draw one Pauli for one qubit: X below p/3, Y below 2p/3, Z below p,
    /// identity otherwise.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Pauli {
        let r: f64 = rng.gen();
        if r < self.p / 3.0 {
            Pauli::X
        } else if r < 2.0 * self.p / 3.0 {
            Pauli::Y
        } else if r < self.p {
            Pauli::Z
        } else {
            Pauli::I
        }
    }

    /// Sample and apply one Pauli per register qubit, independently.
    ///
    /// Returns the nontrivial errors that were injected, as (register
    /// position, Pauli) pairs, so callers can inspect the realization.
    pub fn apply<R: Rng>(
        &self,
        state: &mut QuantumState,
        register: &QubitRegister,
        rng: &mut R,
    ) -> InjectedErrors {
        let mut injected = InjectedErrors::new();
        for i in 0..register.len() {
            let pauli = self.sample(rng);
            if pauli != Pauli::I {
                state.apply_pauli(pauli, register.qubit(i));
                injected.push((i, pauli));
            }
        }
        injected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_probability_never_errs() {
        let channel = RandomPauliChannel::new(0.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            assert_eq!(channel.sample(&mut rng), Pauli::I);
        }
    }

    #[test]
    fn unit_probability_always_errs_evenly() {
        let channel = RandomPauliChannel::new(1.0);
        let mut rng = StdRng::seed_from_u64(12);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            match channel.sample(&mut rng) {
                Pauli::I => panic!("p = 1 must always inject an error"),
                Pauli::X => counts[0] += 1,
                Pauli::Y => counts[1] += 1,
                Pauli::Z => counts[2] += 1,
            }
        }
        for (i, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "Pauli kind {} drawn {}/3000 times, expected near-even split",
                i,
                count
            );
        }
    }

    #[test]
    fn moderate_probability_errs_at_expected_rate() {
        let channel = RandomPauliChannel::new(0.3);
        let mut rng = StdRng::seed_from_u64(13);
        let hits = (0..2000)
            .filter(|_| channel.sample(&mut rng) != Pauli::I)
            .count();
        assert!(
            (450..=750).contains(&hits),
            "p = 0.3 should err about 600/2000 times, got {}",
            hits
        );
    }

    #[test]
    fn apply_reports_what_it_injected() {
        let channel = RandomPauliChannel::new(1.0);
        let register = QubitRegister::range("data", 0, 5);
        let mut state = QuantumState::new(5);
        let mut rng = StdRng::seed_from_u64(14);
        let injected = channel.apply(&mut state, &register, &mut rng);
        assert_eq!(injected.len(), 5, "p = 1 errs on every qubit");
        for (i, (position, pauli)) in injected.iter().enumerate() {
            assert_eq!(*position, i);
            assert_ne!(*pauli, Pauli::I);
        }
    }

    #[test]
    fn apply_with_zero_probability_is_identity() {
        let channel = RandomPauliChannel::new(0.0);
        let register = QubitRegister::range("data", 0, 5);
        let mut state = QuantumState::new(5);
        state.h(0);
        let before = state.amplitudes().to_vec();
        let mut rng = StdRng::seed_from_u64(15);
        let injected = channel.apply(&mut state, &register, &mut rng);
        assert!(injected.is_empty());
        for (got, want) in state.amplitudes().iter().zip(&before) {
            assert!((got - want).norm() < 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn out_of_range_probability_is_fatal() {
        RandomPauliChannel::new(1.5);
    }
}

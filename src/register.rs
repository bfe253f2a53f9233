//! Qubit and classical registers.
//!
//! A [`QubitRegister`] is a named, ordered list of indices into the state
//! vector's tensor-factor ordering; it is immutable once built and lives for
//! one trial. A [`ClassicalRegister`] collects measurement outcomes,
//! write-once per bit.

use smallvec::SmallVec;

/// Ordered, immutable sequence of qubit indices.
#[derive(Debug, Clone)]
pub struct QubitRegister {
    name: &'static str,
    indices: SmallVec<[usize; 8]>,
}

impl QubitRegister {
    /// Register of `count` contiguous qubits starting at `start`.
    pub fn range(name: &'static str, start: usize, count: usize) -> Self {
        Self {
            name,
            indices: (start..start + count).collect(),
        }
    }

    /// Register name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of qubits in the register.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the register is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// State-vector index of the `i`-th qubit of this register.
    pub fn qubit(&self, i: usize) -> usize {
        assert!(
            i < self.indices.len(),
            "register {} has {} qubits, index {} out of range",
            self.name,
            self.indices.len(),
            i
        );
        self.indices[i]
    }

    /// Iterate over the underlying qubit indices in order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Write-once classical bits, populated by measurement events.
#[derive(Debug, Clone)]
pub struct ClassicalRegister {
    bits: SmallVec<[Option<bool>; 8]>,
}

impl ClassicalRegister {
    /// Empty register of `len` unset bits.
    pub fn new(len: usize) -> Self {
        Self {
            bits: smallvec::smallvec![None; len],
        }
    }

    /// Number of bits (set or not).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the register has no bits at all.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Record bit `i`. Writing a bit twice is a programming error.
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.bits.len(), "bit index {} out of range", i);
        assert!(self.bits[i].is_none(), "classical bit {} written twice", i);
        self.bits[i] = Some(value);
    }

    /// Value of bit `i`, if measured.
    pub fn get(&self, i: usize) -> Option<bool> {
        self.bits[i]
    }

    /// Value of bit `i`; reading an unmeasured bit is a programming error.
    pub fn value(&self, i: usize) -> bool {
        self.bits[i]
            .unwrap_or_else(|| panic!("classical bit {} read before measurement", i))
    }

    /// Whether every bit is set and equals the corresponding pattern bit.
    pub fn matches(&self, pattern: &[bool]) -> bool {
        self.bits.len() == pattern.len()
            && self
                .bits
                .iter()
                .zip(pattern)
                .all(|(bit, expected)| *bit == Some(*expected))
    }

    /// Interpret the bits as an integer, least-significant-first: bit 0 is
    /// the 1s place, bit 1 the 2s place, and so on. All bits must be set.
    pub fn to_index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .map(|(i, bit)| {
                let b = bit.unwrap_or_else(|| {
                    panic!("classical bit {} read before measurement", i)
                });
                (b as usize) << i
            })
            .sum()
    }
}

//! Shared data generators for all benchmarks
#![allow(dead_code)]

use bitfield_set::{BitField, IntegerSet};
use rand::{thread_rng, Rng};

/// Field lengths covering a partial word, a few words, and large fields
pub const SIZES: &[usize] = &[10, 100, 1_000, 10_000, 100_000];

/// Bit field of `len` bits with each bit set with probability `density`
pub fn random_field(len: usize, density: f64) -> BitField {
    let mut rng = thread_rng();
    let mut bf = BitField::new(len).unwrap();
    for i in 0..len {
        if rng.gen_bool(density) {
            bf.set_bit(i).unwrap();
        }
    }
    bf
}

/// Set over `[0, max_power)` with roughly `density * max_power` members
pub fn random_set(max_power: usize, density: f64) -> IntegerSet {
    IntegerSet::from_bitfield(random_field(max_power, density))
}

/// `count` random indices in `[0, len)`
pub fn random_indices(count: usize, len: usize) -> Vec<usize> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen_range(0..len)).collect()
}

/// Text form of a set's members followed by the `-1` terminator
pub fn set_input(set: &IntegerSet) -> String {
    let mut text: String = set.members().map(|e| format!("{e} ")).collect();
    text.push_str("-1");
    text
}

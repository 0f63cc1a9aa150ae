//! Seeded random sequences for tests, benchmarks, and fuzzing harnesses.

use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a random sequence of `length` symbols drawn uniformly from
/// `alpha`, using a seeded [`Xoshiro256PlusPlus`] generator so the output is
/// reproducible.
///
/// ## Panics
///
/// `alpha` must be non-empty.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Copies `sequence` while introducing roughly one edit per `1 / rate`
/// positions. Each edit is a substitution, a single-symbol insertion, or a
/// single-symbol deletion drawn with equal probability. Useful for building
/// query/reference pairs that align with gaps.
///
/// ## Panics
///
/// `alpha` must be non-empty.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rand_mutate(sequence: &[u8], alpha: &[u8], rate: f64, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let threshold = (rate.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u32;
    let mut out = Vec::with_capacity(sequence.len() + sequence.len() / 8);

    for &b in sequence {
        if rng.next_u32() >= threshold {
            out.push(b);
            continue;
        }
        let symbol = alpha[rng.next_u32() as usize % alpha.len()];
        match rng.next_u32() % 3 {
            0 => out.push(symbol),
            1 => out.extend([b, symbol]),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
        assert_eq!(random_sequence, rand_sequence(b"ATGC", LEN, 42));
    }

    #[test]
    fn mutate_test() {
        let seq = rand_sequence(b"ACGT", 1000, 7);
        assert_eq!(rand_mutate(&seq, b"ACGT", 0.0, 1), seq);

        let mutated = rand_mutate(&seq, b"ACGT", 0.1, 1);
        assert_ne!(mutated, seq);
        assert!(mutated.len() > 850 && mutated.len() < 1150);
        assert!(mutated.iter().all(|b| b"ACGT".contains(b)));
    }
}

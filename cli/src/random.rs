// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::ops::RangeInclusive;

use rand::Rng;

/// The largest alphabet that starts at `A`. Larger alphabets start at U+0001 instead.
const UPPERCASE_LETTERS: u32 = 26;

/// Generates a random text over the first `letters` characters of the alphabet, with a length
/// picked uniformly from `length`.
///
/// # Panics
///
/// Panics if `letters` is 0 or `length` is empty.
pub fn random_text<R>(rng: &mut R, length: RangeInclusive<usize>, letters: u32) -> String
where
    R: Rng,
{
    assert!(letters > 0, "alphabet must have at least one letter");

    let basis = if letters <= UPPERCASE_LETTERS { 'A' as u32 } else { 1 };
    let len = rng.random_range(length);

    (0..len)
        .map(|_| {
            char::from_u32(rng.random_range(basis..basis + letters))
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn uppercase_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = random_text(&mut rng, 50..=50, 3);

        assert_eq!(text.chars().count(), 50);
        assert!(text.chars().all(|c| ('A'..='C').contains(&c)));
    }

    #[test]
    fn length_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let len = random_text(&mut rng, 3..=7, 26).chars().count();
            assert!((3..=7).contains(&len));
        }
    }

    #[test]
    fn wide_alphabet_starts_at_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = random_text(&mut rng, 200..=200, 30);

        assert!(text.chars().all(|c| ('\u{1}'..='\u{1e}').contains(&c)));
    }

    #[test]
    #[should_panic]
    fn empty_alphabet() {
        let _ = random_text(&mut StdRng::seed_from_u64(4), 1..=1, 0);
    }
}

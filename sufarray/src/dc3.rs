// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use log::trace;

use crate::{arrays, encode::Symbol};

/// Computes the suffix array of `text` using the DC3 (skew) algorithm.
///
/// The algorithm is implemented as described in the [article] Simple Linear Work Suffix Array
/// Construction by Juha Kärkkäinen and Peter Sanders. It runs in *O*(*n*) time.
///
/// The suffixes starting at positions not divisible by 3 (the sample) are sorted first, by
/// recursing on a text that is at most 2/3 the size of the input. The remaining suffixes are then
/// sorted using the sample ranks, and both sorted lists are merged.
///
/// [article]: https://doi.org/10.1007/3-540-45061-0_73
pub(crate) fn suffix_array(text: &[Symbol]) -> Vec<usize> {
    let n = text.len();
    if n < 2 {
        return (0..n).collect();
    }

    let (dense, alphabet_size) = compress(text);

    skew(&dense, n, alphabet_size, 0)
}

/// Maps `text` onto `1..=alphabet_size`, preserving order, and appends three 0s.
///
/// The 0s are never part of the text. They make the triples of the last positions well-defined and
/// smaller than everything else.
fn compress(text: &[Symbol]) -> (Vec<usize>, usize) {
    let mut letters = text.to_vec();
    letters.sort_unstable();
    letters.dedup();
    let names = arrays::inverse_table(&letters);

    let mut dense = Vec::with_capacity(text.len() + 3);
    dense.extend(text.iter().map(|symbol| names[symbol] + 1));
    dense.extend([0; 3]);

    (dense, letters.len())
}

/// Stably sorts the positions in `from` into `to` by `keys[position]`.
///
/// Every key must be at most `alphabet_size`.
fn radix_pass(from: &[usize], to: &mut [usize], keys: &[usize], alphabet_size: usize) {
    let mut starts = vec![0; alphabet_size + 1];
    for &i in from {
        starts[keys[i]] += 1;
    }
    arrays::bucket_starts(&mut starts);

    for &i in from {
        let key = keys[i];
        to[starts[key]] = i;
        starts[key] += 1;
    }
}

/// Sorts the suffixes of `s[..n]`, where `s` holds `n` symbols in `1..=alphabet_size` followed by
/// three 0s.
///
/// `n` must be at least 2.
fn skew(s: &[usize], n: usize, alphabet_size: usize, depth: usize) -> Vec<usize> {
    assert!(n >= 2, "skew requires at least two symbols");
    assert_eq!(s.len(), n + 3, "text must be padded with three 0s");

    // Number of positions congruent to 0, 1 and 2 mod 3
    let n0 = (n + 2) / 3;
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n12 = n0 + n2;
    trace!("dc3 depth {depth}: {n} symbols over {alphabet_size} letters");

    // Step 1: sort the sample by its leading triples. If n % 3 == 1, a dummy sample position is
    // added at `n` so that the mod 1 half of the reduced text is always followed by a unique
    // smallest name.
    let mut sample = (0..n + n0 - n1).filter(|i| i % 3 != 0).collect::<Vec<_>>();
    let mut sample_order = vec![0; n12];
    radix_pass(&sample, &mut sample_order, &s[2..], alphabet_size);
    radix_pass(&sample_order, &mut sample, &s[1..], alphabet_size);
    radix_pass(&sample, &mut sample_order, s, alphabet_size);

    // Step 2: name the triples. The reduced text lists mod 1 positions before mod 2 positions.
    let mut ranks = vec![0; n12 + 3];
    let mut names = 0;
    let mut last = None;
    for &i in &sample_order {
        let triple = (s[i], s[i + 1], s[i + 2]);
        if last != Some(triple) {
            names += 1;
            last = Some(triple);
        }
        if i % 3 == 1 {
            ranks[i / 3] = names;
        } else {
            ranks[i / 3 + n0] = names;
        }
    }

    // Step 3: rank the sample, recursing if some triples are equal
    if names < n12 {
        sample_order = skew(&ranks, n12, names, depth + 1);
        for (rank, &i) in sample_order.iter().enumerate() {
            ranks[i] = rank + 1;
        }
    } else {
        for (i, &rank) in ranks[..n12].iter().enumerate() {
            sample_order[rank - 1] = i;
        }
    }

    // Step 4: sort the non-sample positions by their first symbol and the rank of the sample
    // position right after them. The sample order already sorts them by the latter.
    let non_sample = sample_order
        .iter()
        .filter(|&&i| i < n0)
        .map(|&i| 3 * i)
        .collect::<Vec<_>>();
    let mut non_sample_order = vec![0; n0];
    radix_pass(&non_sample, &mut non_sample_order, s, alphabet_size);

    // Step 5: merge
    let position = |t: usize| {
        let i = sample_order[t];
        if i < n0 { 3 * i + 1 } else { 3 * (i - n0) + 2 }
    };
    let mut suffix_array = Vec::with_capacity(n);
    // Skip the dummy, which always sorts first
    let mut t = n0 - n1;
    let mut p = 0;
    while t < n12 && p < n0 {
        let i = position(t);
        let j = non_sample_order[p];
        let sample_first = if sample_order[t] < n0 {
            (s[i], ranks[sample_order[t] + n0]) <= (s[j], ranks[j / 3])
        } else {
            (s[i], s[i + 1], ranks[sample_order[t] - n0 + 1])
                <= (s[j], s[j + 1], ranks[j / 3 + n0])
        };

        if sample_first {
            suffix_array.push(i);
            t += 1;
        } else {
            suffix_array.push(j);
            p += 1;
        }
    }
    suffix_array.extend((t..n12).map(position));
    suffix_array.extend_from_slice(&non_sample_order[p..]);

    suffix_array
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn naive(text: &[Symbol]) -> Vec<usize> {
        let mut suffix_array = (0..text.len()).collect::<Vec<_>>();
        suffix_array.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        suffix_array
    }

    #[test]
    fn abaab() {
        assert_eq!(
            suffix_array(&[97, 98, 97, 97, 98, -1]),
            vec![5, 2, 3, 0, 4, 1],
        );
    }

    #[test]
    fn compress_is_dense_and_padded() {
        let (dense, alphabet_size) = compress(&[50, -2, 7, 50, -1]);

        assert_eq!(dense, vec![4, 1, 3, 4, 2, 0, 0, 0]);
        assert_eq!(alphabet_size, 4);
    }

    #[test]
    fn every_length_mod_three() {
        // Covers the dummy sample position and both kinds of merge comparison
        for len in 2..=12 {
            let text = (0..len).map(|i| [2, 1, 2, 2][i % 4]).collect::<Vec<_>>();
            assert_eq!(suffix_array(&text), naive(&text), "length {len}");
        }
    }

    #[test]
    fn recursion_on_repetitive_text() {
        let text = "abcabcabcabcabcabcabcab"
            .chars()
            .map(|c| c as Symbol)
            .collect::<Vec<_>>();

        assert_eq!(suffix_array(&text), naive(&text));
    }

    #[test]
    fn unary_text() {
        assert_eq!(suffix_array(&[5; 7]), vec![6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(suffix_array(&[5, 5, 5, 5, -1]), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn tiny() {
        assert!(suffix_array(&[]).is_empty());
        assert_eq!(suffix_array(&[-1]), vec![0]);
        assert_eq!(suffix_array(&[2, 1]), vec![1, 0]);
        assert_eq!(suffix_array(&[1, 2]), vec![0, 1]);
    }

    #[test]
    fn random_texts_match_naive() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.random_range(1..300);
            let letters = rng.random_range(1..6);
            let text = (0..len)
                .map(|_| rng.random_range(0..letters))
                .collect::<Vec<Symbol>>();

            assert_eq!(suffix_array(&text), naive(&text), "text {text:?}");
        }
    }
}

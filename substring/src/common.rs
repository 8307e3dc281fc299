// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::ops::Range;

use log::debug;
use sufarray::{BuildError, SuffixArray};

/// An occurrence of a longest common substring of two texts.
///
/// Positions count characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CommonSubstring {
    rank: usize,
    first: usize,
    second: usize,
    len: usize,
}

impl CommonSubstring {
    /// Returns the rank in the generalized suffix array of the two texts at which the match was
    /// found.
    ///
    /// The match is the common prefix of the suffixes at ranks `rank` and `rank + 1`.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the starting position of the match in the first text.
    #[must_use]
    pub fn first_position(&self) -> usize {
        self.first
    }

    /// Returns the starting position of the match in the second text.
    #[must_use]
    pub fn second_position(&self) -> usize {
        self.second
    }

    /// Returns the length of the match in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the match has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts the matched substring from the first text it was found in.
    #[must_use]
    pub fn text(&self, first: &str) -> String {
        first.chars().skip(self.first).take(self.len).collect()
    }
}

/// The LCP array of two texts indexed together, with the document of every suffix.
struct Pair {
    suffix_array: SuffixArray,
    first_len: usize,
}

impl Pair {
    fn new(first: &str, second: &str) -> Result<Self, BuildError> {
        let suffix_array = SuffixArray::new(&[first, second])?;

        Ok(Self {
            suffix_array,
            first_len: first.chars().count(),
        })
    }

    /// Ranks that have a successor, skipping the two separator suffixes, which always sort first
    fn ranks(&self) -> Range<usize> {
        2..self.suffix_array.len().saturating_sub(1)
    }

    fn lcp(&self, rank: usize) -> usize {
        self.suffix_array.lcp()[rank]
    }

    fn in_first(&self, rank: usize) -> bool {
        self.suffix_array[rank] < self.first_len
    }

    /// Returns `true` if the suffixes at `rank` and `rank + 1` come from different texts.
    fn crosses(&self, rank: usize) -> bool {
        self.in_first(rank) != self.in_first(rank + 1)
    }

    /// Returns the first rank with the greatest crossing LCP value, and that value.
    fn longest(&self) -> Option<(usize, usize)> {
        let mut best = None;
        let mut best_len = 0;
        for rank in self.ranks() {
            if self.lcp(rank) > best_len && self.crosses(rank) {
                best = Some(rank);
                best_len = self.lcp(rank);
            }
        }

        best.map(|rank| (rank, best_len))
    }

    fn occurrence(&self, rank: usize, len: usize) -> CommonSubstring {
        let (a, b) = (self.suffix_array[rank], self.suffix_array[rank + 1]);
        let (first, second) = if self.in_first(rank) { (a, b) } else { (b, a) };

        CommonSubstring {
            rank,
            first,
            // The second text starts after the first text and its separator
            second: second - self.first_len - 1,
            len,
        }
    }
}

/// Finds a longest common substring of `first` and `second`.
///
/// Returns `None` if the texts have no character in common. If several distinct substrings are
/// equally long, the lexicographically smallest is returned.
///
/// # Errors
///
/// Never fails in practice; errors from building the underlying suffix array are propagated.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sufarray::BuildError> {
/// let found = substring::longest_common_substring_match("abcdef", "zcdefg")?.unwrap();
///
/// assert_eq!(found.len(), 4);
/// assert_eq!(found.first_position(), 2);
/// assert_eq!(found.second_position(), 1);
/// assert_eq!(found.text("abcdef"), "cdef");
/// # Ok(())
/// # }
/// ```
pub fn longest_common_substring_match(
    first: &str,
    second: &str,
) -> Result<Option<CommonSubstring>, BuildError> {
    let pair = Pair::new(first, second)?;
    let found = pair
        .longest()
        .map(|(rank, len)| pair.occurrence(rank, len));
    debug!("longest common substring: {found:?}");

    Ok(found)
}

/// Returns a longest common substring of `first` and `second`, or an empty string if there is
/// none.
///
/// # Errors
///
/// Never fails in practice; errors from building the underlying suffix array are propagated.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sufarray::BuildError> {
/// assert_eq!(substring::longest_common_substring("abcdef", "zcdefg")?, "cdef");
/// assert_eq!(substring::longest_common_substring("xx", "yy")?, "");
/// # Ok(())
/// # }
/// ```
pub fn longest_common_substring(first: &str, second: &str) -> Result<String, BuildError> {
    Ok(longest_common_substring_match(first, second)?
        .map(|found| found.text(first))
        .unwrap_or_default())
}

/// Finds every distinct longest common substring of `first` and `second`.
///
/// One occurrence is reported per distinct substring, in lexicographic order of the substrings.
/// Returns an empty vector if the texts have no character in common.
///
/// # Errors
///
/// Never fails in practice; errors from building the underlying suffix array are propagated.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sufarray::BuildError> {
/// let first = "xabyxcd";
/// let found = substring::longest_common_substrings(first, "cdab")?;
/// let texts = found.iter().map(|m| m.text(first)).collect::<Vec<_>>();
///
/// assert_eq!(texts, ["ab", "cd"]);
/// # Ok(())
/// # }
/// ```
pub fn longest_common_substrings(
    first: &str,
    second: &str,
) -> Result<Vec<CommonSubstring>, BuildError> {
    let pair = Pair::new(first, second)?;
    let Some((_, len)) = pair.longest() else {
        return Ok(Vec::new());
    };

    // Consecutive ranks joined by LCP values of at least `len` share the same first `len`
    // characters. Report one crossing per such block.
    let mut found = Vec::new();
    let mut reported = false;
    for rank in pair.ranks() {
        if pair.lcp(rank) < len {
            reported = false;
        } else if !reported && pair.crosses(rank) {
            found.push(pair.occurrence(rank, len));
            reported = true;
        }
    }
    debug!("{} longest common substrings of length {len}", found.len());

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdef() {
        assert_eq!(longest_common_substring("abcdef", "zcdefg").unwrap(), "cdef");
    }

    #[test]
    fn nothing_in_common() {
        assert_eq!(longest_common_substring("xx", "yy").unwrap(), "");
        assert_eq!(longest_common_substring_match("xx", "yy").unwrap(), None);
        assert!(longest_common_substrings("xx", "yy").unwrap().is_empty());
    }

    #[test]
    fn empty_texts() {
        assert_eq!(longest_common_substring("", "").unwrap(), "");
        assert_eq!(longest_common_substring("abc", "").unwrap(), "");
        assert_eq!(longest_common_substring("", "abc").unwrap(), "");
    }

    #[test]
    fn whole_text_in_common() {
        let found = longest_common_substring_match("abc", "abc").unwrap().unwrap();

        assert_eq!(found.len(), 3);
        assert_eq!(found.first_position(), 0);
        assert_eq!(found.second_position(), 0);
    }

    #[test]
    fn positions_in_both_texts() {
        let found = longest_common_substring_match("zzzhello", "helloyy").unwrap().unwrap();

        assert_eq!(found.text("zzzhello"), "hello");
        assert_eq!(found.first_position(), 3);
        assert_eq!(found.second_position(), 0);
    }

    #[test]
    fn repeated_occurrences_are_reported_once() {
        // "ab" occurs twice in each text
        let first = "abab";
        let found = longest_common_substrings(first, "xabxab").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text(first), "ab");
    }

    #[test]
    fn ties_are_all_reported() {
        let first = "abxcd";
        let found = longest_common_substrings(first, "cdyab").unwrap();
        let texts = found.iter().map(|m| m.text(first)).collect::<Vec<_>>();

        assert_eq!(texts, ["ab", "cd"]);
        assert!(found.iter().all(|m| m.len() == 2));
    }

    #[test]
    fn three_way_tie_in_one_block() {
        // "a" occurs in both texts several times, and is the only common substring
        let found = longest_common_substrings("aaxa", "yaya").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text("aaxa"), "a");
    }

    #[test]
    fn non_ascii_positions_count_characters() {
        let found = longest_common_substring_match("ééabc", "abcé").unwrap().unwrap();

        assert_eq!(found.text("ééabc"), "abc");
        assert_eq!(found.first_position(), 2);
        assert_eq!(found.second_position(), 0);
    }
}

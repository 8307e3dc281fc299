// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{ops::Deref, slice};

use log::debug;

use crate::{
    BuildError,
    algorithm::{self, Algorithm, SelectorConfig},
    arrays,
    encode::{self, Symbol, Text},
    lcp,
};

/// A suffix array over an encoded text, along with its rank and LCP arrays.
///
/// All arrays are computed once, when the suffix array is built. The suffix array dereferences to
/// the sorted starting positions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuffixArray {
    text: Vec<Symbol>,
    inner: Vec<usize>,
    rank: Vec<usize>,
    lcp: Vec<usize>,
    algorithm: Algorithm,
}

impl SuffixArray {
    /// Creates a new `SuffixArray` for `text`, letting the text pick the algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is an empty document collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sufarray::BuildError> {
    /// let sa = SuffixArray::new("abaab")?;
    ///
    /// assert_eq!(*sa, [5, 2, 3, 0, 4, 1]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new<'a>(text: impl Into<Text<'a>>) -> Result<Self, BuildError> {
        Self::with_config(text, &BuildConfig::new())
    }

    /// Creates a new `SuffixArray` for `text` using `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is an empty document collection.
    pub fn with_algorithm<'a>(
        text: impl Into<Text<'a>>,
        algorithm: Algorithm,
    ) -> Result<Self, BuildError> {
        Self::with_config(text, BuildConfig::new().algorithm(algorithm))
    }

    /// Creates a new `SuffixArray` for `text` using the algorithm registered as `name`.
    ///
    /// Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidAlgorithm`] if no algorithm is registered as `name`, or an
    /// error if `text` is an empty document collection.
    pub fn with_algorithm_name<'a>(
        text: impl Into<Text<'a>>,
        name: &str,
    ) -> Result<Self, BuildError> {
        Self::with_algorithm(text, name.parse()?)
    }

    /// Creates a new `SuffixArray` for `text` with the given configuration.
    ///
    /// This operation is *O*(*n*) on top of the cost of the chosen algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is an empty document collection, or if encoding is disabled and
    /// `text` is not already a symbol sequence.
    pub fn with_config<'a>(
        text: impl Into<Text<'a>>,
        config: &BuildConfig,
    ) -> Result<Self, BuildError> {
        let encoded = if config.transform {
            encode::encode(text.into())?
        } else {
            encode::passthrough(text.into())?
        };

        let (inner, algorithm) = algorithm::run(
            config.algorithm,
            &encoded.symbols,
            encoded.alphabet_size,
            &config.selector,
        );
        let rank = arrays::inverse(&inner);
        let lcp = lcp::kasai(&encoded.symbols, &inner, &rank);
        debug!("built suffix array of {} suffixes", inner.len());

        Ok(Self {
            text: encoded.symbols,
            inner,
            rank,
            lcp,
            algorithm,
        })
    }

    /// Returns the encoded text the suffix array was built over.
    #[must_use]
    pub fn text(&self) -> &[Symbol] {
        &self.text
    }

    /// Returns the rank array, i.e., the sorted index of the suffix starting at each position.
    #[must_use]
    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    /// Returns the LCP array, indexed by rank.
    ///
    /// Entry `r` is the length of the longest common prefix of the suffixes at ranks `r` and
    /// `r + 1`. The last entry is 0.
    #[must_use]
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Returns the algorithm that sorted the suffixes.
    ///
    /// This is the algorithm picked by the selector when [`Algorithm::Default`] was requested, or
    /// [`Algorithm::Default`] itself if the text was a single repeated symbol and no sort was
    /// needed.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the `index`-th smallest suffix, rendering separators as `$`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sufarray::BuildError> {
    /// let sa = SuffixArray::new("abaab")?;
    ///
    /// assert_eq!(sa.suffix(1), "aab$");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn suffix(&self, index: usize) -> String {
        self.text[self.inner[index]..]
            .iter()
            .map(|&symbol| encode::render(symbol))
            .collect()
    }

    /// Returns `true` if and only if `pattern` is contained in the text.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is the length of `pattern`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sufarray::BuildError> {
    /// let sa = SuffixArray::new("Hello, world!")?;
    ///
    /// assert!(sa.contains("world"));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        let pattern = pattern.chars().map(|c| c as Symbol).collect::<Vec<_>>();

        self.contains_symbols(&pattern)
    }

    /// Returns `true` if and only if the symbol sequence `pattern` is contained in the text.
    #[must_use]
    pub fn contains_symbols(&self, pattern: &[Symbol]) -> bool {
        self.inner
            .binary_search_by(|&suffix| {
                self.text[suffix..]
                    .iter()
                    .take(pattern.len())
                    .cmp(pattern.iter())
            })
            .is_ok()
    }
}

impl Deref for SuffixArray {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'a> IntoIterator for &'a SuffixArray {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Configuration for building a suffix array.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BuildConfig {
    algorithm: Algorithm,
    transform: bool,
    selector: SelectorConfig,
}

impl BuildConfig {
    /// Creates a new configuration that encodes the text and lets it pick the algorithm
    pub const fn new() -> Self {
        Self {
            algorithm: Algorithm::Default,
            transform: true,
            selector: SelectorConfig::new(),
        }
    }

    /// Sets the algorithm used to sort the suffixes.
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets whether the text is encoded before sorting.
    ///
    /// Disable this when the text is already a symbol sequence. Texts of any other kind are then
    /// rejected.
    pub fn transform(&mut self, transform: bool) -> &mut Self {
        self.transform = transform;
        self
    }

    /// Sets the thresholds used to pick an algorithm for [`Algorithm::Default`].
    pub fn selector(&mut self, selector: SelectorConfig) -> &mut Self {
        self.selector = selector;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a suffix array for `text` using the algorithm registered as `name`.
///
/// When `transform` is `false`, `text` must already be a symbol sequence.
///
/// # Errors
///
/// Returns [`BuildError::InvalidAlgorithm`] if no algorithm is registered as `name`, and
/// [`BuildError::InvalidInput`] if `text` cannot be encoded.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sufarray::BuildError> {
/// let sa = sufarray::build_suffix_array("abaab", "radix sort", true)?;
///
/// assert_eq!(*sa, [5, 2, 3, 0, 4, 1]);
/// # Ok(())
/// # }
/// ```
pub fn build_suffix_array<'a>(
    text: impl Into<Text<'a>>,
    name: &str,
    transform: bool,
) -> Result<SuffixArray, BuildError> {
    let algorithm = name.parse()?;

    SuffixArray::with_config(
        text,
        BuildConfig::new().algorithm(algorithm).transform(transform),
    )
}

// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array construction over sequences of symbols.
//!
//! Texts are encoded into flat [`Symbol`] sequences, sorted by one of several construction
//! algorithms, and paired with their rank and LCP arrays. Several documents can be indexed
//! together in a generalized suffix array, with each document terminated by its own separator.
//!
//! # Examples
//!
//! ```
//! use sufarray::{Algorithm, SuffixArray};
//!
//! # fn main() -> Result<(), sufarray::BuildError> {
//! let sa = SuffixArray::with_algorithm("abaab", Algorithm::Dc3)?;
//!
//! assert_eq!(*sa, [5, 2, 3, 0, 4, 1]);
//! assert_eq!(sa.suffix(1), "aab$");
//! assert_eq!(sa.lcp(), [0, 1, 2, 0, 1, 0]);
//! # Ok(())
//! # }
//! ```

mod algorithm;
pub mod arrays;
mod brute;
mod comparison;
mod dc3;
mod doubling;
pub mod encode;
mod error;
pub mod lcp;
mod suffix_array;

pub use algorithm::{Algorithm, SelectorConfig};
pub use encode::{Symbol, Text};
pub use error::{BuildError, InputError};
pub use suffix_array::{BuildConfig, SuffixArray, build_suffix_array};

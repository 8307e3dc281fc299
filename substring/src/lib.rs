// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Longest common prefix and longest common substring queries.
//!
//! This crate answers substring questions about one or two texts using the suffix arrays built by
//! [`sufarray`]. Two texts are compared by indexing them together in a generalized suffix array
//! and scanning its LCP array for neighbors that come from different texts.
//!
//! # Examples
//!
//! Finding the longest substring two texts have in common:
//!
//! ```
//! # fn main() -> Result<(), sufarray::BuildError> {
//! let common = substring::longest_common_substring("the quick brown fox", "a quick brown dog")?;
//!
//! assert_eq!(common, " quick brown ");
//! # Ok(())
//! # }
//! ```
//!
//! Computing the LCP array of a text:
//!
//! ```
//! # fn main() -> Result<(), sufarray::BuildError> {
//! let lcp = substring::lcp_array("abaab", "dc3")?;
//!
//! assert_eq!(lcp, [0, 1, 2, 0, 1, 0]);
//! # Ok(())
//! # }
//! ```

mod common;
mod prefix;

pub use common::{
    CommonSubstring, longest_common_substring, longest_common_substring_match,
    longest_common_substrings,
};
pub use prefix::{longest_common_prefix_array, longest_common_prefix_array as lcp_array};

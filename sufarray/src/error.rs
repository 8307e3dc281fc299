// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::algorithm::Algorithm;

/// An error indicating that building a suffix array failed.
///
/// # Examples
///
/// ```
/// use sufarray::{BuildError, SuffixArray};
///
/// let result = SuffixArray::with_algorithm_name("abaab", "bogo sort");
///
/// assert!(matches!(result, Err(BuildError::InvalidAlgorithm(_))));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The requested algorithm name is not in the registry
    InvalidAlgorithm(String),
    /// The text cannot be encoded
    InvalidInput(InputError),
}

/// The reason a text was rejected by the encoder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputError {
    /// A document collection with no documents in it
    EmptyDocuments,
    /// Encoding was suppressed, but the text is not a sequence of symbols
    NotEncoded,
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BuildError::InvalidAlgorithm(name) => {
                write!(f, "invalid algorithm '{name}', expected one of [")?;
                for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{algorithm}'")?;
                }
                write!(f, "]")
            }
            BuildError::InvalidInput(e) => write!(f, "invalid input: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::InvalidInput(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for BuildError {
    fn from(value: InputError) -> Self {
        BuildError::InvalidInput(value)
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InputError::EmptyDocuments => write!(f, "document collection is empty"),
            InputError::NotEncoded => {
                write!(f, "text must already be a symbol sequence when encoding is disabled")
            }
        }
    }
}

impl Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_algorithm_lists_choices() {
        let message = BuildError::InvalidAlgorithm("quick".to_owned()).to_string();

        assert_eq!(
            message,
            "invalid algorithm 'quick', expected one of \
             ['brute', 'counting sort', 'radix sort', 'dc3', 'default']",
        );
    }

    #[test]
    fn invalid_input_has_source() {
        let e = BuildError::from(InputError::EmptyDocuments);

        assert_eq!(e.to_string(), "invalid input: document collection is empty");
        assert!(e.source().is_some());
    }
}

// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Conversion of texts into symbol sequences.

use std::collections::BTreeSet;

use crate::error::InputError;

/// One element of an encoded text.
///
/// Non-negative values are character ordinals. Negative values are document separators, which
/// sort below every character and strictly decrease from one document to the next.
pub type Symbol = i32;

/// The separator appended after the first (or only) document
pub const SENTINEL: Symbol = -1;

/// A text accepted by the encoder.
#[derive(Clone, Copy, Debug)]
pub enum Text<'a> {
    /// A single document
    Single(&'a str),
    /// Several documents, each terminated by its own separator
    Documents(&'a [&'a str]),
    /// An already encoded sequence, used as is
    Symbols(&'a [Symbol]),
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(value: &'a str) -> Self {
        Text::Single(value)
    }
}

impl<'a> From<&'a String> for Text<'a> {
    fn from(value: &'a String) -> Self {
        Text::Single(value)
    }
}

impl<'a> From<&'a [&'a str]> for Text<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Text::Documents(value)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Text<'a> {
    fn from(value: &'a [&'a str; N]) -> Self {
        Text::Documents(value)
    }
}

impl<'a> From<&'a [Symbol]> for Text<'a> {
    fn from(value: &'a [Symbol]) -> Self {
        Text::Symbols(value)
    }
}

impl<'a> From<&'a Vec<Symbol>> for Text<'a> {
    fn from(value: &'a Vec<Symbol>) -> Self {
        Text::Symbols(value)
    }
}

/// A flat symbol sequence produced by [`encode()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoded {
    /// The encoded symbols
    pub symbols: Vec<Symbol>,
    /// The number of distinct non-separator symbols
    pub alphabet_size: usize,
}

impl Encoded {
    fn new(symbols: Vec<Symbol>) -> Self {
        let alphabet_size = alphabet_size(&symbols);

        Self {
            symbols,
            alphabet_size,
        }
    }
}

/// Encodes `text` into a flat symbol sequence.
///
/// A single document is mapped to its character ordinals followed by [`SENTINEL`]. Each document
/// of a collection is followed by its own separator, starting at `-1` and decreasing by one per
/// document. Symbol sequences are passed through unchanged.
///
/// # Errors
///
/// Returns [`InputError::EmptyDocuments`] if `text` is a collection with no documents.
///
/// # Examples
///
/// ```
/// use sufarray::encode::{Text, encode};
///
/// let encoded = encode(Text::Documents(&["ab", "b"])).unwrap();
///
/// assert_eq!(encoded.symbols, vec![97, 98, -1, 98, -2]);
/// assert_eq!(encoded.alphabet_size, 2);
/// ```
pub fn encode(text: Text) -> Result<Encoded, InputError> {
    let symbols = match text {
        Text::Single(document) => {
            let mut symbols = ordinals(document).collect::<Vec<_>>();
            symbols.push(SENTINEL);
            symbols
        }
        Text::Documents([]) => return Err(InputError::EmptyDocuments),
        Text::Documents(documents) => {
            let len = documents.iter().map(|d| d.chars().count() + 1).sum();
            let mut symbols = Vec::with_capacity(len);
            let mut separator = SENTINEL;
            for document in documents {
                symbols.extend(ordinals(document));
                symbols.push(separator);
                separator -= 1;
            }
            symbols
        }
        Text::Symbols(symbols) => symbols.to_vec(),
    };

    Ok(Encoded::new(symbols))
}

/// Wraps an already encoded text without converting it.
///
/// # Errors
///
/// Returns [`InputError::NotEncoded`] unless `text` is [`Text::Symbols`].
pub fn passthrough(text: Text) -> Result<Encoded, InputError> {
    match text {
        Text::Symbols(symbols) => Ok(Encoded::new(symbols.to_vec())),
        _ => Err(InputError::NotEncoded),
    }
}

/// Renders a symbol for display, using `$` for separators.
pub fn render(symbol: Symbol) -> char {
    if symbol < 0 {
        '$'
    } else {
        char::from_u32(symbol as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

fn ordinals(document: &str) -> impl Iterator<Item = Symbol> + '_ {
    // Every scalar value is at most 0x10FFFF, which fits in a Symbol
    document.chars().map(|c| c as Symbol)
}

fn alphabet_size(symbols: &[Symbol]) -> usize {
    symbols
        .iter()
        .filter(|&&s| s >= 0)
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_document_is_terminated() {
        let encoded = encode(Text::Single("abaab")).unwrap();

        assert_eq!(encoded.symbols, vec![97, 98, 97, 97, 98, -1]);
        assert_eq!(encoded.alphabet_size, 2);
    }

    #[test]
    fn empty_document_is_only_a_sentinel() {
        let encoded = encode(Text::Single("")).unwrap();

        assert_eq!(encoded.symbols, vec![SENTINEL]);
        assert_eq!(encoded.alphabet_size, 0);
    }

    #[test]
    fn separators_decrease_per_document() {
        let encoded = encode(Text::Documents(&["x", "", "yz"])).unwrap();

        assert_eq!(encoded.symbols, vec![120, -1, -2, 121, 122, -3]);
        assert_eq!(encoded.alphabet_size, 3);
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert_eq!(
            encode(Text::Documents(&[])),
            Err(InputError::EmptyDocuments),
        );
    }

    #[test]
    fn symbols_pass_through() {
        let symbols = [3, 1, 4, 1, 5, -1];
        let encoded = encode(Text::from(&symbols[..])).unwrap();

        assert_eq!(encoded.symbols, symbols);
        assert_eq!(encoded.alphabet_size, 4);
    }

    #[test]
    fn passthrough_requires_symbols() {
        assert_eq!(passthrough(Text::Single("a")), Err(InputError::NotEncoded));
        assert_eq!(passthrough(Text::Symbols(&[7, 7])).unwrap().alphabet_size, 1);
    }

    #[test]
    fn non_ascii_characters_use_scalar_values() {
        let encoded = encode(Text::Single("é€")).unwrap();

        assert_eq!(encoded.symbols, vec![0xE9, 0x20AC, -1]);
    }

    #[test]
    fn render_separators_as_dollar() {
        assert_eq!(render(-1), '$');
        assert_eq!(render(-42), '$');
        assert_eq!(render(97), 'a');
    }
}

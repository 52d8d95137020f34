use thiserror::Error as ThisError;

use crate::error::{Error, ErrorKind};

/// The kinds of problems that can make text undecodable for a
/// [`BaseEncoding`](crate::BaseEncoding).
///
/// Indexes count characters from the start of the input, separators included.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum MalformedInputKind {
    /// A character outside the alphabet (and outside the padding and separator, if any) was
    /// found.
    #[error("invalid character {c:?} encountered at index {index}")]
    #[non_exhaustive]
    InvalidCharacter {
        /// The invalid character.
        c: char,

        /// The index at which the invalid character was encountered.
        index: usize,
    },

    /// The number of encoded characters cannot be produced by this encoding.
    #[error("invalid input length {length}")]
    #[non_exhaustive]
    InvalidLength {
        /// The number of characters, not counting separators.
        length: usize,
    },

    /// Padding appeared somewhere other than at the end of the final chunk, or did not fill it
    /// exactly.
    #[error("unexpected padding at index {index}")]
    #[non_exhaustive]
    InvalidPadding {
        /// The index of the offending character.
        index: usize,
    },

    /// The last character of the input carries bits that no encoder would have set.
    #[error("non-zero trailing bits in character at index {index}")]
    #[non_exhaustive]
    TrailingBits {
        /// The index of the final data character.
        index: usize,
    },
}

impl Error {
    pub(crate) fn invalid_character(c: char, index: usize) -> Self {
        ErrorKind::MalformedInput {
            kind: MalformedInputKind::InvalidCharacter { c, index },
        }
        .into()
    }

    pub(crate) fn invalid_length(length: usize) -> Self {
        ErrorKind::MalformedInput {
            kind: MalformedInputKind::InvalidLength { length },
        }
        .into()
    }

    pub(crate) fn invalid_padding(index: usize) -> Self {
        ErrorKind::MalformedInput {
            kind: MalformedInputKind::InvalidPadding { index },
        }
        .into()
    }

    pub(crate) fn trailing_bits(index: usize) -> Self {
        ErrorKind::MalformedInput {
            kind: MalformedInputKind::TrailingBits { index },
        }
        .into()
    }
}

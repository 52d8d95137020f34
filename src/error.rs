mod malformed;

use thiserror::Error;

pub use malformed::MalformedInputKind;

pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur in the `base-encoding` crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The types of errors that can occur in the `base-encoding` crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested sub-range does not lie within the input buffer.
    #[error(
        "range of {length} bytes at offset {offset} is out of bounds for a buffer of length \
         {buffer_len}"
    )]
    #[non_exhaustive]
    OutOfRange {
        /// The requested start of the range.
        offset: usize,

        /// The requested length of the range.
        length: usize,

        /// The length of the buffer the range was applied to.
        buffer_len: usize,
    },

    /// The text passed to a decoder was not valid for its encoding.
    #[error("malformed input: {kind}")]
    #[non_exhaustive]
    MalformedInput {
        /// The kind of problem found in the input.
        kind: MalformedInputKind,
    },

    /// A builder method was given options the encoding cannot support.
    #[error("invalid configuration: {message}")]
    #[non_exhaustive]
    InvalidConfiguration { message: String },

    /// A [`std::io::Error`] occurred in a stream adapter.
    #[error("an IO error occurred: {0}")]
    Io(std::io::Error),
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        ErrorKind::Io(value).into()
    }
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value.kind {
            ErrorKind::Io(inner) => inner,
            kind => std::io::Error::new(std::io::ErrorKind::InvalidData, Error::from(kind)),
        }
    }
}

impl Error {
    pub(crate) fn out_of_range(offset: usize, length: usize, buffer_len: usize) -> Self {
        ErrorKind::OutOfRange {
            offset,
            length,
            buffer_len,
        }
        .into()
    }

    pub(crate) fn invalid_configuration(message: impl ToString) -> Self {
        ErrorKind::InvalidConfiguration {
            message: message.to_string(),
        }
        .into()
    }

    /// Whether this error was caused by a sub-range outside the input buffer.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfRange { .. })
    }

    /// Whether this error was caused by text that could not be decoded.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedInput { .. })
    }
}

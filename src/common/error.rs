use std::{borrow::Cow, convert, fmt, io, result};
use thiserror::Error as ThisError;

/// A list specifying general categories of LZO error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller passed a value the operation cannot accept,
    /// e.g. an out-of-range compression level or a missing size hint.
    InvalidArgument,
    /// The compressed data is malformed, truncated or does not match
    /// the declared length.
    CorruptData,
    /// The compressor reported an internal fault.
    CompressionFailed,
    /// The operation is not defined for the selected algorithm.
    UnsupportedOperation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> result::Result<(), fmt::Error> {
        f.write_str(match self {
            Self::InvalidArgument => "invalid argument",
            Self::CorruptData => "corrupt data",
            Self::CompressionFailed => "compression failed",
            Self::UnsupportedOperation => "unsupported operation",
        })
    }
}

/// The error type for LZO operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the corresponding `ErrorKind` for this error.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl convert::From<Error> for io::Error {
    fn from(err: Error) -> Self {
        Self::new(io::ErrorKind::Other, err)
    }
}

/// A specialized [`Result`] type for LZO operations.
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::CorruptData, "header too short");
        assert_eq!(err.kind(), ErrorKind::CorruptData);
        assert_eq!(err.message(), "header too short");
        assert_eq!(err.to_string(), "corrupt data: header too short");
    }

    #[test]
    fn converts_into_io_error() {
        let err = Error::new(ErrorKind::InvalidArgument, format!("level {}", 42));
        let io: io::Error = err.clone().into();
        assert_eq!(io.kind(), io::ErrorKind::Other);
        assert_eq!(io.to_string(), err.to_string());
    }
}

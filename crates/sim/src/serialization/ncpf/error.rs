use std::io;
use thiserror::Error;

/// Errors raised while reading `.ncpf` data.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    #[error("unsupported SimpleLibrary version {0}")]
    UnsupportedVersion(u16),

    #[error("unknown type tag {0}")]
    UnknownTypeTag(u8),

    #[error("type tag 0 is only valid as an object or list terminator")]
    UnexpectedEndTag,

    #[error("negative length {0}")]
    NegativeLength(i64),

    #[error("string is not valid modified UTF-8")]
    InvalidString,

    #[error("number lists are not supported in version 0 documents")]
    NumberListUnsupported,

    #[error("float {0} cannot be represented as a JSON number")]
    NonFiniteFloat(f64),

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error("list of {0} elements exceeds the decoder limit")]
    TooLong(usize),

    #[error("file has no configuration document")]
    MissingConfiguration,

    #[error("configuration does not match the NCPF 11 layout: {0}")]
    Model(#[from] serde_json::Error),
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::UnexpectedEof,
            _ => DecodeError::Io(err),
        }
    }
}

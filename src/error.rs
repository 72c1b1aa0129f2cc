use thiserror::Error;

/// Errors that this crate throws.
#[derive(Debug, Error)]
pub enum Error {
    /// The sink (or the device behind it) failed to take the bytes
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
    /// A value handed to the library is out of its accepted range
    #[error("invalid value for {name}: {value}")]
    InvalidParameter {
        /// Which parameter was rejected
        name: &'static str,
        /// Printable form of the offending value
        value: String
    },
    /// A markup line too short to carry style, justification and separator
    #[error("malformed markup line {0:?}, expected at least 3 characters")]
    MalformedLine(String),
    /// Text contains characters that code page 437 cannot represent
    #[error("CP437 error: {0}")]
    Encoding(String)
}

impl Error {
    pub(crate) fn invalid<V: std::fmt::Display>(name: &'static str, value: V) -> Error {
        Error::InvalidParameter {
            name,
            value: value.to_string()
        }
    }
}

use std::fmt;

/// Custom error types for IGC parsing
#[derive(Debug)]
pub enum IgcError {
    /// I/O errors
    Io(std::io::Error),
    /// Filename does not carry a valid YYMMDD date prefix
    DateParse(String),
    /// A 'B' record does not match the fixed-width track layout
    MalformedTrackLine(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for IgcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgcError::Io(err) => write!(f, "I/O error: {}", err),
            IgcError::DateParse(msg) => write!(f, "Invalid log date: {}", msg),
            IgcError::MalformedTrackLine(msg) => write!(f, "Malformed track line: {}", msg),
            IgcError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for IgcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IgcError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IgcError {
    fn from(err: std::io::Error) -> Self {
        IgcError::Io(err)
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for IgcError {
    fn from(err: csv::Error) -> Self {
        IgcError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IgcError>;

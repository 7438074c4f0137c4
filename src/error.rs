use std::io;
use std::path::PathBuf;
use hex::FromHexError;

#[derive(Debug)]
pub enum GuidError {
    Generation(String),
    Read(io::Error),
    FileNotFound(PathBuf),
    UnsupportedRadix(u32),
}

impl GuidError {
    /// True for every failure raised while producing a key, including I/O
    /// failures hit while digesting a stream.
    pub fn is_generation_error(&self) -> bool {
        matches!(self, GuidError::Generation(_) | GuidError::Read(_))
    }
}

impl From<io::Error> for GuidError {
    fn from(err: io::Error) -> Self {
        GuidError::Read(err)
    }
}

impl From<FromHexError> for GuidError {
    fn from(err: FromHexError) -> Self {
        GuidError::Generation(format!("malformed hex digits: {}", err))
    }
}

impl From<base64::DecodeError> for GuidError {
    fn from(err: base64::DecodeError) -> Self {
        GuidError::Generation(format!("malformed base64 digits: {}", err))
    }
}

impl std::fmt::Display for GuidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuidError::Generation(msg) => write!(f, "GUID generation failed: {}", msg),
            GuidError::Read(err) => write!(f, "GUID generation failed while reading input: {}", err),
            GuidError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            GuidError::UnsupportedRadix(radix) => write!(f, "Unsupported radix: {} (expected 2..=36)", radix),
        }
    }
}

impl std::error::Error for GuidError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuidError::Read(err) => Some(err),
            _ => None,
        }
    }
}

use std::path::PathBuf;

/// Broad classification of a [`CheckError`], used by the CLI for
/// machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Verification,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Format => "format",
            ErrorKind::Verification => "verification",
        }
    }
}

/// All errors that can be returned while checking an executable.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A file could not be opened, stat'ed, or read.
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The public key file does not contain a PEM block.
    #[error("unable to decode public key PEM in '{}'", .path.display())]
    PemDecode { path: PathBuf },

    /// The PEM payload is not a SubjectPublicKeyInfo structure.
    #[error("unable to parse public key in '{}': {reason}", .path.display())]
    KeyParse { path: PathBuf, reason: String },

    /// The SubjectPublicKeyInfo names an algorithm other than ed25519.
    #[error("public key in '{}' is not an ed25519 key", .path.display())]
    NotEd25519 { path: PathBuf },

    /// The key is tagged ed25519 but its bytes are not a valid point.
    #[error("invalid ed25519 public key material in '{}': {reason}", .path.display())]
    InvalidKey { path: PathBuf, reason: String },

    #[error(
        "ed25519 signature '{}' must be 64 bytes long and was {len}",
        .path.display()
    )]
    SignatureLength { path: PathBuf, len: u64 },

    /// Key and signature are well-formed but the signature does not cover
    /// the executable content.
    #[error("unable to verify signature for '{}'", .executable.display())]
    Verification { executable: PathBuf },
}

impl CheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Io { .. } => ErrorKind::Io,
            CheckError::PemDecode { .. }
            | CheckError::KeyParse { .. }
            | CheckError::NotEd25519 { .. }
            | CheckError::InvalidKey { .. }
            | CheckError::SignatureLength { .. } => ErrorKind::Format,
            CheckError::Verification { .. } => ErrorKind::Verification,
        }
    }
}

pub type Result<T, E = CheckError> = std::result::Result<T, E>;

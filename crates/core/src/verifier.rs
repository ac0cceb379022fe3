//! Executable signature verification.

use std::path::{Path, PathBuf};

use ed25519_dalek::{Signature, VerifyingKey, SIGNATURE_LENGTH};
use serde::Serialize;

use crate::error::{CheckError, Result};
use crate::key::{key_fingerprint, load_public_key};
use crate::signature::{read_signature, signature_path};

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verified {
    pub executable: PathBuf,
    pub signature: PathBuf,
    /// Size of the executable in bytes.
    pub size: u64,
    /// Fingerprint of the key that verified the signature.
    pub signer: String,
}

/// Verify that `signature` covers `content` under `key`.
///
/// Returns `false` on mismatch; the caller decides how to report it.
pub fn verify_bytes(
    key: &VerifyingKey,
    content: &[u8],
    signature: &[u8; SIGNATURE_LENGTH],
) -> bool {
    let signature = Signature::from_bytes(signature);
    key.verify_strict(content, &signature).is_ok()
}

/// Verify the detached signature of `executable` with the PEM key at
/// `public_key`.
///
/// Steps, each failing immediately:
/// 1. Load the public key.
/// 2. Read the executable content.
/// 3. Read the 64-byte `<executable>.ed25519` signature.
/// 4. Check the signature over the content.
pub fn verify(executable: &Path, public_key: &Path) -> Result<Verified> {
    let key = load_public_key(public_key)?;

    let content = std::fs::read(executable).map_err(|e| CheckError::io(executable, e))?;

    let signature = read_signature(executable)?;

    if !verify_bytes(&key, &content, &signature) {
        return Err(CheckError::Verification {
            executable: executable.to_path_buf(),
        });
    }

    Ok(Verified {
        executable: executable.to_path_buf(),
        signature: signature_path(executable),
        size: content.len() as u64,
        signer: key_fingerprint(&key),
    })
}

/// Checks executables against one configured public key file.
///
/// The key is re-read for every executable.
#[derive(Debug, Clone)]
pub struct Checker {
    public_key: PathBuf,
}

impl Checker {
    pub fn new(public_key: impl Into<PathBuf>) -> Self {
        Checker {
            public_key: public_key.into(),
        }
    }

    pub fn public_key(&self) -> &Path {
        &self.public_key
    }

    pub fn check(&self, executable: &Path) -> Result<Verified> {
        verify(executable, &self.public_key)
    }

    /// Check each executable in order, stopping at the first failure.
    pub fn check_all<I, P>(&self, executables: I) -> Result<Vec<Verified>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        executables
            .into_iter()
            .map(|exe| self.check(exe.as_ref()))
            .collect()
    }
}

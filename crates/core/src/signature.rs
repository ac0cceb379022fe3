//! Detached signature files.
//!
//! A signature is stored as exactly 64 raw bytes next to the file it
//! covers, under the same name with `.ed25519` appended.

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};

use ed25519_dalek::SIGNATURE_LENGTH;

use crate::error::{CheckError, Result};

/// File name suffix of a detached signature.
pub const SIGNATURE_EXTENSION: &str = ".ed25519";

/// Path of the detached signature for `executable`.
///
/// The suffix is appended to the whole file name, so `app.exe` maps to
/// `app.exe.ed25519`.
pub fn signature_path(executable: &Path) -> PathBuf {
    let mut name = OsString::from(executable.as_os_str());
    name.push(SIGNATURE_EXTENSION);
    PathBuf::from(name)
}

/// Read and size-check the detached signature for `executable`.
pub fn read_signature(executable: &Path) -> Result<[u8; SIGNATURE_LENGTH]> {
    let path = signature_path(executable);
    let mut file = std::fs::File::open(&path).map_err(|e| CheckError::io(&path, e))?;

    let size = file
        .metadata()
        .map_err(|e| CheckError::io(&path, e))?
        .len();
    if size != SIGNATURE_LENGTH as u64 {
        return Err(CheckError::SignatureLength { path, len: size });
    }

    // The file can change between stat and read.
    let mut buf = Vec::with_capacity(SIGNATURE_LENGTH);
    file.read_to_end(&mut buf)
        .map_err(|e| CheckError::io(&path, e))?;

    buf.try_into().map_err(|buf: Vec<u8>| CheckError::SignatureLength {
        path,
        len: buf.len() as u64,
    })
}

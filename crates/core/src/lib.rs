//! sigcheck-core: detached ed25519 signature checks for executables.
//!
//! An executable `app` is signed by a 64-byte raw signature stored in
//! `app.ed25519`. The verifying key is read from a PEM-encoded X.509
//! SubjectPublicKeyInfo file.
//!
//! - [`verify()`] -- check one executable against a key file
//! - [`Checker`] -- check a sequence of executables, first failure wins
//! - [`CheckError`] -- I/O, format and verification failures

pub mod error;
pub mod key;
pub mod signature;
pub mod verifier;

pub use error::{CheckError, ErrorKind};
pub use key::{key_fingerprint, load_public_key, parse_public_key_pem};
pub use signature::{read_signature, signature_path, SIGNATURE_EXTENSION};
pub use verifier::{verify, verify_bytes, Checker, Verified};

/// Public key file used when none is given on the command line.
pub const DEFAULT_PUBLIC_KEY: &str = "ed25519.pem";

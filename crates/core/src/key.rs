//! Public key loading.
//!
//! The key file is PEM armor around a DER-encoded X.509
//! SubjectPublicKeyInfo, the form written by `openssl pkey -pubout`.

use std::path::Path;

use ed25519_dalek::pkcs8::spki::SubjectPublicKeyInfoRef;
use ed25519_dalek::pkcs8::ALGORITHM_OID;
use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};

use crate::error::{CheckError, Result};

/// Read a PEM public key file and return the VerifyingKey.
pub fn load_public_key(path: &Path) -> Result<VerifyingKey> {
    let contents = std::fs::read(path).map_err(|e| CheckError::io(path, e))?;
    parse_public_key_pem(&contents, path)
}

/// Decode the first PEM block in `contents` as an ed25519 SPKI public key.
///
/// `path` is only used to label errors.
pub fn parse_public_key_pem(contents: &[u8], path: &Path) -> Result<VerifyingKey> {
    let block = pem::parse(contents).map_err(|_| CheckError::PemDecode {
        path: path.to_path_buf(),
    })?;

    let spki = SubjectPublicKeyInfoRef::try_from(block.contents()).map_err(|e| {
        CheckError::KeyParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    if spki.algorithm.oid != ALGORITHM_OID {
        return Err(CheckError::NotEd25519 {
            path: path.to_path_buf(),
        });
    }

    VerifyingKey::try_from(spki).map_err(|e| CheckError::InvalidKey {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Short hex fingerprint of a verifying key: the first 16 hex characters of
/// SHA-256 over the key bytes.
pub fn key_fingerprint(key: &VerifyingKey) -> String {
    let digest = Sha256::digest(key.to_bytes());
    format!("{:x}", digest)[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ed25519_dalek::pkcs8::spki::der::pem::LineEnding;
    use ed25519_dalek::pkcs8::spki::EncodePublicKey;
    use ed25519_dalek::SigningKey;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    fn generate_pem() -> (VerifyingKey, String) {
        let mut rng = rand::rngs::OsRng;
        let vk = SigningKey::generate(&mut rng).verifying_key();
        let pem = vk
            .to_public_key_pem(LineEnding::LF)
            .expect("encode public key PEM");
        (vk, pem)
    }

    #[test]
    fn test_parse_generated_pem() {
        let (vk, pem) = generate_pem();
        let parsed = parse_public_key_pem(pem.as_bytes(), Path::new("mem.pem")).unwrap();
        assert_eq!(parsed.to_bytes(), vk.to_bytes());
    }

    #[test]
    fn test_load_openssl_key() {
        let key = load_public_key(&fixture("ed25519.pub.pem")).expect("openssl ed25519 key");
        assert_eq!(key.to_bytes().len(), 32);
    }

    #[test]
    fn test_leading_text_before_pem_block_is_ignored() {
        let (vk, pem) = generate_pem();
        let contents = format!("comment line\n{}", pem);
        let parsed = parse_public_key_pem(contents.as_bytes(), Path::new("mem.pem")).unwrap();
        assert_eq!(parsed, vk);
    }

    #[test]
    fn test_non_pem_blob_is_format_error() {
        let err = parse_public_key_pem(b"\x00\x01not a pem file", Path::new("blob.pem"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(
            err.to_string().contains("unable to decode public key PEM"),
            "got: {}",
            err
        );
    }

    #[test]
    fn test_rsa_key_is_not_ed25519() {
        let err = load_public_key(&fixture("rsa.pub.pem")).unwrap_err();
        assert!(matches!(err, CheckError::NotEd25519 { .. }), "got: {:?}", err);
        assert!(err.to_string().contains("not an ed25519 key"));
    }

    #[test]
    fn test_pem_with_garbage_payload_is_parse_error() {
        let garbage = pem::Pem::new("PUBLIC KEY", vec![0xde, 0xad, 0xbe, 0xef]);
        let encoded = pem::encode(&garbage);
        let err = parse_public_key_pem(encoded.as_bytes(), Path::new("bad.pem")).unwrap_err();
        assert!(matches!(err, CheckError::KeyParse { .. }), "got: {:?}", err);
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_missing_key_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_public_key(&tmp.path().join("absent.pem")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let (vk, _) = generate_pem();
        let fp = key_fingerprint(&vk);
        assert_eq!(fp.len(), 16);
        assert_eq!(fp, key_fingerprint(&vk));
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

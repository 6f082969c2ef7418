use std::path::Path;

use sha2::Digest;

use crate::error::{IngestError, Result};

/// Size and content hash of a source asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFingerprint {
    pub bytes: u64,
    pub sha256: String,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

impl SourceFingerprint {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.len() as u64,
            sha256: sha256_hex(bytes),
        }
    }

    pub fn of_file(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
        Ok(Self::of_bytes(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_known_input() {
        let fingerprint = SourceFingerprint::of_bytes(b"abc");
        assert_eq!(fingerprint.bytes, 3);
        assert_eq!(
            fingerprint.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

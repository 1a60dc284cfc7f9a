//! Cryptographic hashing utilities
//!
//! Provides the 256-bit block digest type used throughout the checkpoint
//! subsystem, plus the SHA-256 helpers callers use to derive it from raw
//! header bytes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes double SHA-256 hash (SHA-256 of SHA-256)
/// Used for block hashes in Bitcoin-style blockchains
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Errors from parsing a block hash
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("invalid hash length: expected 64 hex chars, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

// =============================================================================
// Block Hash
// =============================================================================

/// A 256-bit block digest
///
/// Displayed and parsed as 64 lowercase hex characters; an optional `0x`
/// prefix is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(HashError::InvalidLength(s.len()));
        }
        let raw = hex::decode(s).map_err(|e| HashError::InvalidHex(e.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Compute the digest of a serialized block header (double SHA-256)
    pub fn of_header(header: &[u8]) -> Self {
        Self(double_sha256(header))
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for BlockHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "000000008afd70438709390e1a1b4e64c81437ffb244d785b7d6029d7b1ac95e";

    #[test]
    fn test_sha256() {
        let hash = sha256(b"hello world");
        assert_eq!(
            hex::encode(hash),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_double_sha256() {
        let hash = double_sha256(b"hello world");
        assert_eq!(hash.len(), 32);
        assert_ne!(hash, sha256(b"hello world"));
    }

    #[test]
    fn test_hex_round_trip() {
        let hash = BlockHash::from_hex(GENESIS).unwrap();
        assert_eq!(hash.to_string(), GENESIS);
    }

    #[test]
    fn test_accepts_0x_prefix() {
        let plain = BlockHash::from_hex(GENESIS).unwrap();
        let prefixed = BlockHash::from_hex(&format!("0x{}", GENESIS)).unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            BlockHash::from_hex("abcd"),
            Err(HashError::InvalidLength(4))
        );
        let bad = "zz".repeat(32);
        assert!(matches!(
            BlockHash::from_hex(&bad),
            Err(HashError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_of_header() {
        let hash = BlockHash::of_header(b"header bytes");
        assert_eq!(*hash.as_bytes(), double_sha256(b"header bytes"));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let hash = BlockHash::from_hex(GENESIS).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", GENESIS));
        let back: BlockHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}

//! The closed set of supported signing algorithms.
//!
//! The enum below is the single source of truth for which algorithms the
//! codec accepts. Each variant carries its digest primitive and its class
//! (shared-secret MAC or asymmetric signature) through exhaustive matches,
//! so a variant without signer and verifier behavior fails to compile
//! rather than surfacing as a runtime dispatch error.

use std::fmt;
use std::str::FromStr;

use crate::error::JwtError;

/// Digest primitive an algorithm is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

/// Whether an algorithm is a shared-secret MAC or an asymmetric signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmClass {
    /// HMAC over a caller-supplied secret; sign and verify share the key.
    Mac,
    /// RSA PKCS#1 v1.5; signs with a private key, verifies with a public key.
    RsaSign,
}

/// Supported JWS algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSA PKCS#1 v1.5 with SHA-256
    RS256,
}

impl Algorithm {
    /// Every supported algorithm, in allow-list order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
    ];

    /// The standard name carried in the `alg` header field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
        }
    }

    /// The digest primitive backing this algorithm.
    #[must_use]
    pub fn digest(self) -> Digest {
        match self {
            Algorithm::HS256 | Algorithm::RS256 => Digest::Sha256,
            Algorithm::HS384 => Digest::Sha384,
            Algorithm::HS512 => Digest::Sha512,
        }
    }

    /// The primitive class this algorithm dispatches to.
    #[must_use]
    pub fn class(self) -> AlgorithmClass {
        match self {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => AlgorithmClass::Mac,
            Algorithm::RS256 => AlgorithmClass::RsaSign,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            "RS256" => Ok(Algorithm::RS256),
            other => Err(JwtError::unsupported_algorithm(other)),
        }
    }
}

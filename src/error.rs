//! Error taxonomy for token encoding and decoding.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type JwtResult<T> = Result<T, JwtError>;

/// Failures produced while encoding or decoding a token.
///
/// Every error is terminal for the call that produced it. The codec keeps no
/// state between calls, so there is no recovery path inside the crate; the
/// caller decides whether to retry with different inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// No token was supplied to decode.
    #[error("no token supplied")]
    MissingToken,

    /// The token does not have exactly three segments, or a segment failed
    /// to decode or parse.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Base64url input contained invalid characters or impossible padding.
    #[error("malformed base64url encoding")]
    MalformedEncoding,

    /// The named algorithm is not in the supported set.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The signature did not verify against the supplied key.
    #[error("signature verification failed")]
    SignatureInvalid,

    /// The `nbf` claim is in the future.
    #[error("token not yet active")]
    TokenNotYetActive,

    /// The `exp` claim is in the past.
    #[error("token expired")]
    TokenExpired,

    /// An empty key was supplied to encode.
    #[error("key is required")]
    MissingKey,

    /// Key material could not be used: undecodable PEM, or a key the
    /// crypto provider rejected.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Header or payload failed to serialize or deserialize.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create a malformed token error.
    #[inline]
    #[must_use]
    pub fn malformed_token(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create an invalid key error.
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create an unsupported algorithm error.
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a serialization error.
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }
}

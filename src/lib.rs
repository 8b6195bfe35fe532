//! Compact JSON Web Token encoding and decoding.
//!
//! Produces and consumes tokens of the form
//! `header.payload.signature`, each segment base64url-encoded, for the
//! HS256, HS384, HS512 and RS256 algorithms. Keys are caller-supplied:
//! raw secret bytes for the HMAC algorithms, PEM text for RSA.
//!
//! All operations are synchronous, stateless pure functions (aside from
//! reading the wall clock for the `exp`/`nbf` checks) and are safe to call
//! concurrently from any number of threads.
//!
//! ```
//! use minijwt::{decode, encode, Algorithm};
//! use serde_json::json;
//!
//! let secret = b"fe1a1915a379f3be5394b64d14794932";
//! let token = encode(&json!({ "foo": "bar" }), secret, Algorithm::HS256)?;
//! let payload = decode(&token, secret)?;
//! assert_eq!(payload["foo"], "bar");
//! # Ok::<(), minijwt::JwtError>(())
//! ```

mod algorithm;
mod claims;
mod codec;
pub mod encoding;
mod error;
mod sign;

pub use algorithm::{Algorithm, AlgorithmClass, Digest};
pub use claims::Claims;
pub use codec::{
    decode, decode_as, decode_unverified, decode_with_options, encode, encode_with_options,
    DecodeOptions, EncodeOptions,
};
pub use error::{JwtError, JwtResult};

/// Crate version from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

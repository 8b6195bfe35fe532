//! Typed standard claims.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Registered JWT claims plus arbitrary custom fields.
///
/// A convenience payload type for [`encode`](crate::encode) and
/// [`decode_as`](crate::decode_as); the decoder itself only enforces `exp`
/// and `nbf`, everything else is carried opaquely. Absent fields are
/// omitted from the serialized payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Audience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expiry (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not-before (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Issued-at (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// JWT ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Custom claims, flattened into the payload root.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Claims {
    /// Create an empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject (`sub`) claim.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer (`iss`) claim.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the audience (`aud`) claim.
    #[must_use]
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.aud = Some(aud.into());
        self
    }

    /// Set the expiry (`exp`) claim, unix seconds.
    #[must_use]
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set the not-before (`nbf`) claim, unix seconds.
    #[must_use]
    pub fn not_before(mut self, nbf: i64) -> Self {
        self.nbf = Some(nbf);
        self
    }

    /// Set the issued-at (`iat`) claim, unix seconds.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the JWT ID (`jti`) claim.
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Add a custom claim.
    #[must_use]
    pub fn claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let claims = Claims::new().subject("user-1");
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "sub": "user-1" }));
    }

    #[test]
    fn custom_claims_flatten_into_root() {
        let claims = Claims::new()
            .subject("user-1")
            .expires_at(2_000_000_000)
            .claim("role", Value::String("admin".into()));
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["exp"], 2_000_000_000);

        let back: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(back, claims);
    }
}

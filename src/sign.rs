//! Algorithm-dispatched signing and verification primitives.
//!
//! MAC algorithms re-derive the signature and compare in constant time;
//! RS256 goes through the `rsa` crate's PKCS#1 v1.5 signer and verifier
//! with keys supplied as PEM text (PKCS#8 or PKCS#1, either marker).

use hmac::{Hmac, Mac};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::sha2::Sha256 as RsaSha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::algorithm::{Algorithm, AlgorithmClass};
use crate::error::{JwtError, JwtResult};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the raw signature bytes for `signing_input`.
pub(crate) fn sign(algorithm: Algorithm, signing_input: &str, key: &[u8]) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::HS256 => sign_hs256(signing_input, key),
        Algorithm::HS384 => sign_hs384(signing_input, key),
        Algorithm::HS512 => sign_hs512(signing_input, key),
        Algorithm::RS256 => sign_rs256(signing_input, key),
    }
}

/// Check `signature` against `signing_input` under `key`.
///
/// Returns `Ok(false)` on a well-formed but non-matching signature; key
/// material that cannot be used at all is an error.
pub(crate) fn verify(
    algorithm: Algorithm,
    signing_input: &str,
    key: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    match algorithm.class() {
        AlgorithmClass::Mac => {
            let expected = sign(algorithm, signing_input, key)?;
            // Constant-time: the comparison must not leak how many leading
            // bytes of the forged signature were correct.
            Ok(expected.as_slice().ct_eq(signature).into())
        }
        AlgorithmClass::RsaSign => verify_rs256(signing_input, key, signature),
    }
}

fn sign_hs256(signing_input: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(signing_input.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs384(signing_input: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(signing_input.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs512(signing_input: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(signing_input.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_rs256(signing_input: &str, key: &[u8]) -> JwtResult<Vec<u8>> {
    let private_key = rsa_private_key_from_pem(key)?;
    let signing_key = SigningKey::<RsaSha256>::new(private_key);
    let signature = signing_key.sign(signing_input.as_bytes());
    Ok(signature.to_bytes().as_ref().to_vec())
}

fn verify_rs256(signing_input: &str, key: &[u8], signature: &[u8]) -> JwtResult<bool> {
    let public_key = rsa_public_key_from_pem(key)?;
    let verifying_key = VerifyingKey::<RsaSha256>::new(public_key);
    let Ok(signature) = Signature::try_from(signature) else {
        return Ok(false);
    };
    Ok(verifying_key.verify(signing_input.as_bytes(), &signature).is_ok())
}

fn rsa_private_key_from_pem(key: &[u8]) -> JwtResult<RsaPrivateKey> {
    let pem = std::str::from_utf8(key)
        .map_err(|_| JwtError::invalid_key("RSA private key must be PEM text"))?;
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| JwtError::InvalidKey(format!("invalid RSA private key: {e}")))
}

fn rsa_public_key_from_pem(key: &[u8]) -> JwtResult<RsaPublicKey> {
    let pem = std::str::from_utf8(key)
        .map_err(|_| JwtError::invalid_key("RSA public key must be PEM text"))?;
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| JwtError::InvalidKey(format!("invalid RSA public key: {e}")))
}

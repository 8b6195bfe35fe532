//! URL-safe base64 for token segments (RFC 7515).
//!
//! Encoding strips the trailing `=` padding; decoding accepts either the
//! stripped form or a padded one, which covers peers that normalize by
//! re-padding to a multiple of four before decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::JwtError;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64url-encode `input` without padding.
#[inline]
#[must_use]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Decode base64url `input`.
///
/// # Errors
/// Returns [`JwtError::MalformedEncoding`] on characters outside the
/// URL-safe alphabet or on a length no padding could make valid.
#[inline]
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, JwtError> {
    URL_SAFE_LENIENT
        .decode(input)
        .map_err(|_| JwtError::MalformedEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn arbitrary_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let text = encode(&bytes);
            prop_assert!(!text.contains(['+', '/', '=']));
            prop_assert_eq!(decode(&text).unwrap(), bytes);
        }

        #[test]
        fn stripped_text_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let text = encode(&bytes);
            prop_assert_eq!(encode(decode(&text).unwrap()), text);
        }
    }

    #[test]
    fn uses_url_safe_substitutions() {
        // 0xfb 0xff encodes to "+/8=" under the standard alphabet.
        assert_eq!(encode([0xfb, 0xff]), "-_8");
    }

    #[test]
    fn accepts_padded_input() {
        assert_eq!(decode("aGk=").unwrap(), b"hi");
        assert_eq!(decode("aGk").unwrap(), b"hi");
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(decode("ab*c"), Err(JwtError::MalformedEncoding));
        assert_eq!(decode("a+b/"), Err(JwtError::MalformedEncoding));
    }

    #[test]
    fn rejects_impossible_padding() {
        // Length 1 mod 4 cannot be produced by stripping padding.
        assert_eq!(decode("abcde"), Err(JwtError::MalformedEncoding));
        assert_eq!(decode("a"), Err(JwtError::MalformedEncoding));
    }
}

//! HS256 token codec.
//!
//! Tokens use the compact three-segment form `header.payload.signature`, each
//! segment Base64url-encoded. Decoding pins the algorithm to HS256: a token
//! whose header declares anything else (another HMAC size, an asymmetric
//! scheme, or `none`) is rejected before its payload is trusted.
//!
//! Expiry is checked against an explicit clock reading so that a token is
//! rejected as soon as `now >= exp`, with no leeway.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::{Claims, ISSUER};
use crate::error::AuthError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Serializes and signs `claims` with `secret`.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if `exp` is not after `iat` or encoding fails.
pub fn encode_token(claims: &Claims, secret: &[u8]) -> Result<String, AuthError> {
    if claims.exp <= claims.iat {
        return Err(AuthError::Signing(
            "expiry must be later than issue time".to_string(),
        ));
    }

    encode(
        &Header::new(ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Verifies `token` against `secret` and returns its claims.
pub fn decode_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    decode_token_at(token, secret, Utc::now().timestamp())
}

/// Same as [`decode_token`] with the current time supplied by the caller.
///
/// # Errors
///
/// - [`AuthError::WrongSigningMethod`] when the header names another algorithm
/// - [`AuthError::InvalidSignature`] when the MAC does not match
/// - [`AuthError::WrongIssuer`] when `iss` is not [`ISSUER`]
/// - [`AuthError::Expired`] when `now >= exp`
/// - [`AuthError::MalformedToken`] for anything that does not parse into [`Claims`]
pub fn decode_token_at(token: &str, secret: &[u8], now: i64) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.algorithms = vec![ALGORITHM];
    validation.leeway = 0;
    // exp is compared against `now` below
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "iss"]);
    validation.set_issuer(&[ISSUER]);

    let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(map_jwt_error)?;

    if now >= claims.exp {
        return Err(AuthError::Expired);
    }

    Ok(claims)
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::MissingAlgorithm => AuthError::WrongSigningMethod,
        ErrorKind::InvalidIssuer => AuthError::WrongIssuer,
        ErrorKind::MissingRequiredClaim(claim) => {
            AuthError::MalformedToken(format!("missing required claim: {}", claim))
        }
        ErrorKind::InvalidToken => AuthError::MalformedToken("malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::MalformedToken("invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::MalformedToken("invalid token json".to_string()),
        ErrorKind::Utf8(_) => AuthError::MalformedToken("invalid utf-8 in token".to_string()),
        _ => AuthError::MalformedToken(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::Principal;

    const SECRET: &[u8] = b"test-access-secret-at-least-32-bytes-long";
    const NOW: i64 = 1_700_000_000;

    fn claims() -> Claims {
        Claims::new(&Principal::new(42, "kasir@rekap.id"), NOW, 3600)
    }

    #[test]
    fn test_encode_produces_three_segments() {
        let token = encode_token(&claims(), SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_decode_roundtrip() {
        let token = encode_token(&claims(), SECRET).unwrap();
        let decoded = decode_token_at(&token, SECRET, NOW + 10).unwrap();
        assert_eq!(decoded, claims());
    }

    #[test]
    fn test_encode_rejects_non_positive_lifetime() {
        let mut bad = claims();
        bad.exp = bad.iat;
        assert!(matches!(
            encode_token(&bad, SECRET),
            Err(AuthError::Signing(_))
        ));
    }

    #[test]
    fn test_decode_wrong_secret() {
        let token = encode_token(&claims(), SECRET).unwrap();
        let result = decode_token_at(&token, b"another-secret-entirely-different", NOW);
        assert_eq!(result, Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_at_boundary() {
        let token = encode_token(&claims(), SECRET).unwrap();

        assert!(decode_token_at(&token, SECRET, NOW + 3599).is_ok());
        assert_eq!(
            decode_token_at(&token, SECRET, NOW + 3600),
            Err(AuthError::Expired)
        );
        assert_eq!(
            decode_token_at(&token, SECRET, NOW + 7200),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn test_decode_with_wall_clock_rejects_old_token() {
        let issued = Utc::now().timestamp() - 2 * 3600;
        let old = Claims::new(&Principal::new(1, "old@rekap.id"), issued, 3600);
        let token = encode_token(&old, SECRET).unwrap();

        assert_eq!(decode_token(&token, SECRET), Err(AuthError::Expired));
    }

    #[test]
    fn test_decode_wrong_issuer() {
        let mut foreign = claims();
        foreign.iss = "someone-else".to_string();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &foreign,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            decode_token_at(&token, SECRET, NOW),
            Err(AuthError::WrongIssuer)
        );
    }

    #[test]
    fn test_decode_rejects_other_hmac_algorithm() {
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims(),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            decode_token_at(&token, SECRET, NOW),
            Err(AuthError::WrongSigningMethod)
        );
    }

    #[test]
    fn test_decode_rejects_unsigned_token() {
        // {"alg":"none","typ":"JWT"} . valid-looking claims . empty signature
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.\
                     eyJ1c2VyX2lkIjoxLCJlbWFpbCI6ImludHJ1ZGVyQHJla2FwLmlkIiwiZXhwIjo0MTAyNDQ0ODAwLCJpYXQiOjE3MDAwMDAwMDAsImlzcyI6InJla2FwLWxhdW5kcnktYXBpIn0.";

        assert!(decode_token_at(token, SECRET, NOW).is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_token_at("not-a-token", SECRET, NOW),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(matches!(
            decode_token_at("", SECRET, NOW),
            Err(AuthError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_any_tampered_character_fails() {
        let token = encode_token(&claims(), SECRET).unwrap();
        let header_len = token.find('.').unwrap() + 1;

        for (i, c) in token.char_indices().skip(header_len) {
            if c == '.' {
                continue;
            }
            let replacement = if c == 'A' { 'B' } else { 'A' };
            let mut tampered = token.clone();
            tampered.replace_range(i..i + 1, &replacement.to_string());

            assert!(
                decode_token_at(&tampered, SECRET, NOW).is_err(),
                "tampering position {} still validated",
                i
            );
        }
    }
}

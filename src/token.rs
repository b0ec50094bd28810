//! Bearer credential codec for the admin routes.
//!
//! A credential is the base64 encoding of `"<epochMillis>:<password>"`. The
//! encoding is reversible on purpose: there is no signing key and no
//! server-side session state, the shared admin password is the only secret.
//! Decoding an intercepted credential reveals its issuance time but does not
//! allow forging a fresh one without the password.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use subtle::ConstantTimeEq;

use crate::error::AuthError;

/// Credentials stay valid this long after issuance.
pub const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Current wall-clock time as epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Encodes a credential from an issuance timestamp and the admin password.
pub fn issue(password: &str, issued_ms: i64) -> String {
    STANDARD.encode(format!("{issued_ms}:{password}"))
}

/// Decodes a credential and checks it against the configured admin password.
///
/// The password comparison is constant-time. A credential aged exactly
/// [`TOKEN_TTL_MS`] is still accepted; one millisecond past that expires.
pub fn validate(token: &str, expected_password: &str, now_ms: i64) -> Result<(), AuthError> {
    let decoded = STANDARD
        .decode(token)
        .map_err(|_| AuthError::InvalidFormat)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::InvalidFormat)?;
    let (timestamp, password) = decoded.split_once(':').ok_or(AuthError::InvalidFormat)?;
    let issued_ms: i64 = timestamp.parse().map_err(|_| AuthError::InvalidFormat)?;

    if !bool::from(password.as_bytes().ct_eq(expected_password.as_bytes())) {
        return Err(AuthError::WrongPassword);
    }

    if now_ms - issued_ms > TOKEN_TTL_MS {
        return Err(AuthError::Expired);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "hunter2";

    #[test]
    fn fresh_token_validates() {
        let now = 1_700_000_000_000;
        let token = issue(PASSWORD, now);
        assert_eq!(validate(&token, PASSWORD, now), Ok(()));
    }

    #[test]
    fn token_is_plain_base64_with_no_signature() {
        // The credential decodes back to "<millis>:<password>" with nothing
        // appended; no signing key is involved anywhere in the scheme.
        let token = issue(PASSWORD, 42);
        let decoded = STANDARD.decode(&token).expect("decode issued token");
        assert_eq!(decoded, b"42:hunter2");
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let issued = 1_700_000_000_000;
        let token = issue(PASSWORD, issued);

        // Exactly 24h old still passes; one millisecond more expires.
        assert_eq!(validate(&token, PASSWORD, issued + TOKEN_TTL_MS), Ok(()));
        assert_eq!(
            validate(&token, PASSWORD, issued + TOKEN_TTL_MS + 1),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn wrong_password_fails_regardless_of_timestamp() {
        let now = 1_700_000_000_000;
        for issued in [now, now - TOKEN_TTL_MS, now + 60_000, 0] {
            let token = issue("not-the-password", issued);
            assert_eq!(
                validate(&token, PASSWORD, now),
                Err(AuthError::WrongPassword)
            );
        }
    }

    #[test]
    fn passwords_containing_colons_round_trip() {
        let now = 1_700_000_000_000;
        let token = issue("a:b:c", now);
        assert_eq!(validate(&token, "a:b:c", now), Ok(()));
    }

    #[test]
    fn malformed_tokens_are_rejected_as_format_errors() {
        let now = 1_700_000_000_000;

        // Not base64 at all.
        assert_eq!(
            validate("!!!", PASSWORD, now),
            Err(AuthError::InvalidFormat)
        );
        // Valid base64 but no separator.
        assert_eq!(
            validate(&STANDARD.encode("no-separator"), PASSWORD, now),
            Err(AuthError::InvalidFormat)
        );
        // Non-numeric timestamp.
        assert_eq!(
            validate(&STANDARD.encode("soon:hunter2"), PASSWORD, now),
            Err(AuthError::InvalidFormat)
        );
        // Not UTF-8 after decoding.
        assert_eq!(
            validate(&STANDARD.encode([0xff, 0xfe, 0x3a, 0x61]), PASSWORD, now),
            Err(AuthError::InvalidFormat)
        );
    }
}

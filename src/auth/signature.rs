//! HMAC-SHA256 signature generation for OKX API authentication.
//!
//! OKX private endpoints require a signature computed as:
//! ```text
//! Base64(HMAC-SHA256(timestamp + method + requestPath + body, secret_key))
//! ```
//!
//! `requestPath` includes the query string for GET requests and `body` is the
//! exact JSON payload for POST requests (empty for GET). The result is sent in
//! the `OK-ACCESS-SIGN` header.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::OkxError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for OKX's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret key
/// * `timestamp` - The `OK-ACCESS-TIMESTAMP` value sent with the request
/// * `method` - Uppercase HTTP method (`GET` or `POST`)
/// * `request_path` - The path including any query string (e.g., "/api/v5/asset/balances?ccy=BTC")
/// * `body` - The JSON body sent on the wire, or `""` when there is none
///
/// # Returns
///
/// Base64-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use okx_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "secret", "passphrase");
/// let signature = sign_request(
///     &credentials,
///     "2020-01-01T00:00:00.000Z",
///     "GET",
///     "/api/v5/test",
///     "",
/// )?;
/// assert_eq!(signature, "VVAd6PvC7IPW5R4uvPnqCnfmGGVDwKsMMT6Y+sbz3g0=");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    timestamp: &str,
    method: &str,
    request_path: &str,
    body: &str,
) -> Result<String, OkxError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| OkxError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(timestamp.as_bytes());
    hmac.update(method.as_bytes());
    hmac.update(request_path.as_bytes());
    hmac.update(body.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64.encode(hmac_result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("key", "secret", "pass")
    }

    #[test]
    fn test_signature_fixed_vector() {
        let signature = sign_request(
            &credentials(),
            "2020-01-01T00:00:00.000Z",
            "GET",
            "/api/v5/test",
            "",
        )
        .unwrap();

        assert_eq!(signature, "VVAd6PvC7IPW5R4uvPnqCnfmGGVDwKsMMT6Y+sbz3g0=");
    }

    #[test]
    fn test_signature_fixed_vector_with_body() {
        let signature = sign_request(
            &credentials(),
            "2020-01-01T00:00:00.000Z",
            "POST",
            "/api/v5/asset/transfer",
            r#"{"amt":"1.5","ccy":"USDT"}"#,
        )
        .unwrap();

        assert_eq!(signature, "0f6gWfR6cu5XjpUgqakSlP+ROnsUmLwcJcmiPeikOsI=");
    }

    #[test]
    fn test_signature_length() {
        let signature = sign_request(
            &credentials(),
            "2024-03-01T12:00:00.123Z",
            "GET",
            "/api/v5/asset/balances",
            "",
        )
        .unwrap();

        // HMAC-SHA256 produces 32 bytes, base64 encoded = 44 chars (with padding)
        assert!(BASE64.decode(&signature).is_ok());
        assert_eq!(signature.len(), 44);
    }

    #[test]
    fn test_signature_changes_with_timestamp() {
        let sig1 = sign_request(&credentials(), "2024-03-01T12:00:00.000Z", "GET", "/api/v5/test", "")
            .unwrap();
        let sig2 = sign_request(&credentials(), "2024-03-01T12:00:00.001Z", "GET", "/api/v5/test", "")
            .unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_path() {
        let sig1 = sign_request(
            &credentials(),
            "2024-03-01T12:00:00.000Z",
            "GET",
            "/api/v5/asset/balances",
            "",
        )
        .unwrap();
        let sig2 = sign_request(
            &credentials(),
            "2024-03-01T12:00:00.000Z",
            "GET",
            "/api/v5/asset/balances?ccy=BTC",
            "",
        )
        .unwrap();

        assert_ne!(sig1, sig2);
    }
}

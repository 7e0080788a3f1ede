use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;

fn decode_claims(token: &str) -> Option<Value> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&decoded).ok()
}

/// Expiry from the token's `exp` claim, in unix seconds.
pub fn expires_at(token: &str) -> Option<i64> {
    decode_claims(token)?.get("exp").and_then(Value::as_i64)
}

/// Opaque or claim-less tokens are left for the server to judge.
pub fn is_expired(token: &str, now_unix: i64) -> bool {
    expires_at(token).is_some_and(|exp| exp <= now_unix)
}

pub fn is_expired_now(token: &str) -> bool {
    is_expired(token, chrono::Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(claims: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn reads_exp_claim() {
        let token = token_with(json!({ "sub": "u1", "exp": 1_700_000_000 }));
        assert_eq!(expires_at(&token), Some(1_700_000_000));
        assert!(is_expired(&token, 1_700_000_000));
        assert!(!is_expired(&token, 1_699_999_999));
    }

    #[test]
    fn opaque_tokens_are_not_judged_expired() {
        assert_eq!(expires_at("not-a-jwt"), None);
        assert!(!is_expired("not-a-jwt", i64::MAX));
        let no_exp = token_with(json!({ "sub": "u1" }));
        assert!(!is_expired(&no_exp, i64::MAX));
    }
}

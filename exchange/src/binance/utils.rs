// binance http工具

use crate::binance::errors::{BinanceError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<String>>()
        .join("&")
}

pub fn hmac_sha256(key: &str, data: &str) -> Result<String> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key.as_bytes()).map_err(|e| BinanceError::ClientError {
            message: format!("invalid hmac key: {}", e),
        })?;
    mac.update(data.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// An encoded parameter string together with the signature computed over it.
///
/// `body()` is what goes on the wire, so the signed bytes and the transmitted
/// bytes can never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    pub query: String,
    pub signature: String,
}

impl SignedParams {
    pub fn body(&self) -> String {
        if self.query.is_empty() {
            format!("signature={}", self.signature)
        } else {
            format!("{}&signature={}", self.query, self.signature)
        }
    }
}

pub fn sign_params(secret: &str, params: &[(&str, String)]) -> Result<SignedParams> {
    let query = encode_params(params);
    let signature = hmac_sha256(secret, &query)?;
    Ok(SignedParams { query, signature })
}

/// Cuts `text` to at most `max_chars` characters for logging.
pub fn truncate_for_log(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

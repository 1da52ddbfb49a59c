//! Shareable-link codec.
//!
//! A share token is the persona's JSON encoded with the URL-safe base64
//! alphabet (no padding). It carries the whole persona, photo included, so a
//! recipient can rebuild the dossier without any history or server lookup.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;
use url::Url;

use crate::error::Result;
use crate::persona::Persona;

/// Query parameter that carries the share token.
pub const SHARE_PARAM: &str = "p";

/// Any reason a token could not be turned back into a persona.
///
/// Callers treat every kind the same way: ignore the token and fall back to
/// the default view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("share token is not valid base64: {0}")]
    Encoding(String),

    #[error("share token is not valid UTF-8")]
    Utf8,

    #[error("share token does not contain a persona: {0}")]
    Structure(String),

    #[error("shared persona is invalid: {0}")]
    Schema(String),
}

/// Encodes a persona into a URL-safe token.
pub fn encode_token(persona: &Persona) -> Result<String> {
    let json = serde_json::to_string(persona)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decodes a token produced by [`encode_token`].
pub fn decode_token(token: &str) -> std::result::Result<Persona, DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim().trim_end_matches('='))
        .map_err(|e| DecodeError::Encoding(e.to_string()))?;
    let json = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;
    let persona: Persona =
        serde_json::from_str(&json).map_err(|e| DecodeError::Structure(e.to_string()))?;
    persona
        .validate()
        .map_err(|e| DecodeError::Schema(e.to_string()))?;
    Ok(persona)
}

/// Builds the shareable address for a persona.
///
/// Any query or fragment already on `base` is dropped; only the share parameter
/// remains.
pub fn share_url(base: &Url, persona: &Persona) -> Result<Url> {
    let token = encode_token(persona)?;
    let mut url = strip_share(base);
    url.query_pairs_mut().append_pair(SHARE_PARAM, &token);
    Ok(url)
}

/// Extracts the share token from an address, if one is present and non-empty.
pub fn token_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Returns the address without query or fragment.
pub fn strip_share(url: &Url) -> Url {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.set_fragment(None);
    clean
}

//! One-shot messages carried across a redirect in a signed cookie.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

pub const FLASH_COOKIE: &str = "newscheck_flash";

fn mac(secret: &str, message: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(message.as_bytes());
    Some(mac)
}

/// `Set-Cookie` value carrying `message`.
pub fn set_cookie(secret: &str, message: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    let tag = mac(secret, message)
        .map(|m| URL_SAFE_NO_PAD.encode(m.finalize().into_bytes()))
        .unwrap_or_default();
    format!(
        "{}={}.{}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encoded,
        tag
    )
}

/// `Set-Cookie` value that drops the flash once it has been shown.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE)
}

/// The flashed message, if the request carries one with a valid signature.
pub fn read(headers: &HeaderMap, secret: &str) -> Option<String> {
    let value = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .map(|(_, value)| value)?;

    let (encoded, signature) = value.rsplit_once('.')?;
    let tag = URL_SAFE_NO_PAD.decode(signature).ok()?;
    let message = form_urlencoded::parse(format!("m={}", encoded).as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())?;

    // verify_slice compares in constant time
    mac(secret, &message)?.verify_slice(&tag).ok()?;
    Some(message)
}

use crate::{Error, Result};

/// Accept anything that looks like an HTTP(S) URL and hand it back unchanged.
///
/// Only the `http` prefix is checked; no parsing happens here, so no
/// network activity can be triggered by a rejected value.
pub fn validate_url(raw: &str) -> Result<&str> {
    if raw.is_empty() || !raw.starts_with("http") {
        return Err(Error::InvalidInput(format!("not an http(s) URL: {:?}", raw)));
    }
    Ok(raw)
}

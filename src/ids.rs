//! Identifier helpers
//!
//! Account ids are carried in URLs base64-encoded so raw backend ids do not
//! show up in links. This is obfuscation only; anyone can decode them.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::{HorizonError, HorizonResult};

/// Standard alphabet that decodes with or without trailing `=`
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode an id for use in a URL segment or query value
pub fn encrypt_id(id: &str) -> String {
    STANDARD.encode(id.as_bytes())
}

/// Reverse [`encrypt_id`]
///
/// # Errors
///
/// `InvalidId` if `encoded` is not valid base64 or does not decode to UTF-8.
/// Padding is optional.
pub fn decrypt_id(encoded: &str) -> HorizonResult<String> {
    let bytes = LENIENT
        .decode(encoded.trim())
        .map_err(|e| HorizonError::InvalidId(format!("Invalid id encoding: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| HorizonError::InvalidId(format!("Decoded id is not UTF-8: {}", e)))
}

/// Last `/`-separated segment of a URL
///
/// `https://bank.example/customers/cus_123` gives `cus_123`. A trailing
/// slash gives an empty string.
pub fn extract_customer_id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}

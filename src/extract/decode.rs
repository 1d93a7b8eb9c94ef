//! Decoding data-URI payloads into map JSON text.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::percent_decode_str;

use super::annotation::PayloadEncoding;
use crate::error::{ExorcistError, Result};

/// Decode an inline payload to the JSON text it carries.
pub fn decode_payload(payload: &str, encoding: PayloadEncoding) -> Result<String> {
    match encoding {
        PayloadEncoding::Base64 => decode_base64(payload),
        PayloadEncoding::Percent => percent_decode_str(payload)
            .decode_utf8()
            .map(std::borrow::Cow::into_owned)
            .map_err(|e| ExorcistError::Decode(format!("percent-encoded payload: {e}"))),
    }
}

/// Padding optional, non-zero trailing bits ignored.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Bundlers disagree on padding and alphabet, accept both.
fn decode_base64(payload: &str) -> Result<String> {
    let bytes = STANDARD_LENIENT
        .decode(payload)
        .or_else(|_| URL_SAFE_LENIENT.decode(payload))
        .map_err(|e| ExorcistError::Decode(format!("base64 payload: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ExorcistError::Decode(format!("base64 payload: {e}")))
}

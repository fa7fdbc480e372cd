use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    engine::general_purpose::URL_SAFE_NO_PAD,
    Engine,
};

use crate::error::Result;

/// Tokens in the wild carry both padded and unpadded signature segments, so
/// decoding is indifferent to trailing `=` while encoding never emits it.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes with the unpadded URL-safe base64 alphabet used by the JOSE
/// compact serialization.
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode a base64url string, padded or not. Any character outside the
/// URL-safe alphabet or a malformed length is a decode error.
pub fn decode<T: AsRef<[u8]>>(data: T) -> Result<Vec<u8>> {
    Ok(URL_SAFE_LENIENT.decode(data)?)
}

//! Utility functions for Distinguished Encoding Rules.


use rasn::{Decode, Encode};
use rasn::ber::de::{Decoder, DecoderOptions};
use rasn::types::Any;

use crate::error::{FormatError, KeyConstructionError};


/// Decodes a DER value that must span the whole input and be in canonical form.
///
/// `rasn::der::decode` stops after the first complete value and accepts INTEGERs with redundant
/// leading bytes. Both are rejected here; the value must encode back to exactly the input.
pub fn decode_exact<T: Decode + Encode>(der: &[u8]) -> Result<T, FormatError> {
    let mut decoder = Decoder::new(der, DecoderOptions::der());
    let value = T::decode(&mut decoder)
        .map_err(FormatError::Der)?;
    let trailing = der.len() - decoder.decoded_len();
    if trailing > 0 {
        return Err(FormatError::TrailingData { bytes: trailing });
    }
    match rasn::der::encode(&value) {
        Ok(encoded) if encoded == der => Ok(value),
        _ => Err(FormatError::NonCanonical),
    }
}


/// Encodes a value as DER for use in a field of type ANY.
pub fn encode_any<T: Encode>(value: &T) -> Result<Any, KeyConstructionError> {
    rasn::der::encode(value)
        .map(Any::new)
        .map_err(KeyConstructionError::Der)
}


/// Returns whether the value is a DER NULL.
pub fn is_null(value: &Any) -> bool {
    decode_exact::<()>(value.as_bytes()).is_ok()
}

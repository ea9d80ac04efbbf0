//! Conversion between unsigned big integers and big-endian byte strings.
//!
//! Numeric libraries generally strip leading zero bytes when serializing. Consumers of key
//! components (fingerprints, wire formats) are sensitive to those bytes, so serialization here
//! always produces an explicit width.


use crypto_bigint::BoxedUint;
use num_bigint::{BigInt, BigUint};
use rasn::types::Integer;

use crate::error::Error;


/// Bytes per precision unit; a multiple of the limb size on all targets.
const PRECISION_BYTES: usize = 8;


/// Parses an unsigned integer from big-endian bytes.
///
/// Leading zero bytes are accepted and do not change the value. The precision of the returned
/// integer is derived from the length of the slice, so equal-length slices produce integers of
/// equal precision.
pub fn boxed_uint_from_be_slice(slice: &[u8]) -> BoxedUint {
    // round up to whole limbs (and at least one; zero-width integers are not representable)
    let padded_len = slice.len().max(1).div_ceil(PRECISION_BYTES) * PRECISION_BYTES;
    let mut padded = vec![0u8; padded_len];
    padded[padded_len - slice.len()..].copy_from_slice(slice);

    let bits = u32::try_from(8 * padded_len)
        .expect("slice length overflows bit count");
    BoxedUint::from_be_slice(&padded, bits)
        .expect("precision derived from slice length")
}


/// Parses an unsigned integer from big-endian bytes at the smallest precision that holds it.
///
/// Unlike [`boxed_uint_from_be_slice`], the precision does not depend on leading zero bytes, so
/// equal values always compare equal.
pub fn boxed_uint_from_significant_be_slice(slice: &[u8]) -> BoxedUint {
    boxed_uint_from_be_slice(trim_leading_zeros(slice))
}


/// The number of bytes in the shortest big-endian encoding of the value.
///
/// Zero has a natural length of zero bytes.
pub fn natural_byte_len(value: &BoxedUint) -> usize {
    let bits: usize = value.bits().try_into().unwrap();
    (bits + 7) / 8
}


/// The default output width: one byte more than the whole bytes needed for the bit length.
///
/// For a non-negative value, this is also the length of the content octets of its DER INTEGER
/// encoding, since a set top bit always gains a leading zero byte.
pub fn minimal_safe_width(value: &BoxedUint) -> usize {
    let bits: usize = value.bits().try_into().unwrap();
    bits / 8 + 1
}


/// Serializes the value into exactly `width` big-endian bytes, padding with leading zeros.
///
/// If `width` is `None`, [`minimal_safe_width`] is used. A width smaller than the value's natural
/// length is an error; the value is never truncated.
pub fn to_be_bytes_padded(value: &BoxedUint, width: Option<usize>) -> Result<Vec<u8>, Error> {
    let width = width.unwrap_or_else(|| minimal_safe_width(value));
    let natural_len = natural_byte_len(value);
    if natural_len > width {
        return Err(Error::Encoding { width, required: natural_len });
    }

    // to_be_bytes returns the full precision; only the tail is significant
    let full = value.to_be_bytes();
    let significant = &full[full.len() - natural_len..];

    let mut ret = vec![0u8; width];
    ret[width - natural_len..].copy_from_slice(significant);
    Ok(ret)
}


/// Converts the value into an ASN.1 INTEGER.
pub fn boxed_uint_to_integer(value: &BoxedUint) -> Integer {
    let magnitude = BigUint::from_bytes_be(&value.to_be_bytes());
    Integer::from(BigInt::from(magnitude))
}


/// Converts an ASN.1 INTEGER into an unsigned integer at significant precision.
///
/// Returns `None` if the value is negative.
pub fn integer_to_boxed_uint(value: &Integer) -> Option<BoxedUint> {
    let magnitude = BigInt::from(value.clone()).to_biguint()?;
    Some(boxed_uint_from_significant_be_slice(&magnitude.to_bytes_be()))
}


/// Strips the leading zero bytes from a big-endian byte string.
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first_nonzero = bytes.iter()
        .position(|b| *b != 0x00)
        .unwrap_or(bytes.len());
    &bytes[first_nonzero..]
}


#[cfg(test)]
mod tests {
    use super::{
        boxed_uint_from_be_slice, boxed_uint_from_significant_be_slice, boxed_uint_to_integer,
        integer_to_boxed_uint, minimal_safe_width, natural_byte_len, to_be_bytes_padded, trim_leading_zeros,
    };
    use crate::error::Error;
    use hex_literal::hex;
    use rasn::types::Integer;

    #[test]
    fn natural_lengths() {
        assert_eq!(natural_byte_len(&boxed_uint_from_be_slice(&[])), 0);
        assert_eq!(natural_byte_len(&boxed_uint_from_be_slice(&[0x00, 0x00])), 0);
        assert_eq!(natural_byte_len(&boxed_uint_from_be_slice(&[0x01])), 1);
        assert_eq!(natural_byte_len(&boxed_uint_from_be_slice(&hex!("00 00 80 00"))), 2);
        assert_eq!(natural_byte_len(&boxed_uint_from_be_slice(&[0xFF; 33])), 33);
    }

    #[test]
    fn minimal_width_leaves_room_for_sign() {
        // 0x7F fits in one byte, 0x80 needs a leading zero
        assert_eq!(minimal_safe_width(&boxed_uint_from_be_slice(&[0x7F])), 1);
        assert_eq!(minimal_safe_width(&boxed_uint_from_be_slice(&[0x80])), 2);
        assert_eq!(minimal_safe_width(&boxed_uint_from_be_slice(&[0x00])), 1);
        assert_eq!(minimal_safe_width(&boxed_uint_from_be_slice(&hex!("01 00 01"))), 3);

        assert_eq!(to_be_bytes_padded(&boxed_uint_from_be_slice(&[0x80]), None).unwrap(), vec![0x00, 0x80]);
        assert_eq!(to_be_bytes_padded(&boxed_uint_from_be_slice(&[0x00]), None).unwrap(), vec![0x00]);
        assert_eq!(
            to_be_bytes_padded(&boxed_uint_from_be_slice(&hex!("00 00 01 00 01")), None).unwrap(),
            hex!("01 00 01").to_vec(),
        );
    }

    #[test]
    fn significant_precision_ignores_zeros() {
        let plain = boxed_uint_from_significant_be_slice(&hex!("C5 3A"));
        let padded = boxed_uint_from_significant_be_slice(&hex!("00 00 00 00 00 00 00 00 00 C5 3A"));
        assert_eq!(plain.bits_precision(), padded.bits_precision());
        assert_eq!(plain, padded);
    }

    #[test]
    fn explicit_width_pads_exactly() {
        let value = boxed_uint_from_be_slice(&hex!("12 34 56"));
        for width in 3..=70 {
            let bytes = to_be_bytes_padded(&value, Some(width)).unwrap();
            assert_eq!(bytes.len(), width);
            assert!(bytes[..width - 3].iter().all(|b| *b == 0x00));
            assert_eq!(&bytes[width - 3..], &hex!("12 34 56"));
        }
    }

    #[test]
    fn explicit_width_keeps_limb_padding_out() {
        // 66 bytes is not a multiple of the limb size
        let mut input = [0xAB; 66];
        input[0] = 0x01;
        let value = boxed_uint_from_be_slice(&input);
        assert_eq!(to_be_bytes_padded(&value, Some(66)).unwrap(), input.to_vec());
    }

    #[test]
    fn zero_pads_to_width() {
        let zero = boxed_uint_from_be_slice(&[0x00]);
        assert_eq!(to_be_bytes_padded(&zero, Some(4)).unwrap(), vec![0u8; 4]);
        assert_eq!(to_be_bytes_padded(&zero, Some(0)).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn never_truncates() {
        let value = boxed_uint_from_be_slice(&hex!("01 02 03 04"));
        match to_be_bytes_padded(&value, Some(3)) {
            Err(Error::Encoding { width, required }) => {
                assert_eq!(width, 3);
                assert_eq!(required, 4);
            },
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn integer_conversion() {
        let modulus = boxed_uint_from_be_slice(&hex!("00 00 00 C5 3A 1B 2C 3D 4E 5F 61 07"));
        let integer = boxed_uint_to_integer(&modulus);
        assert_eq!(rasn::der::encode(&integer).unwrap(), hex!("02 0A 00 C5 3A 1B 2C 3D 4E 5F 61 07"));
        assert_eq!(integer_to_boxed_uint(&integer).unwrap(), boxed_uint_from_significant_be_slice(&hex!("C5 3A 1B 2C 3D 4E 5F 61 07")));

        assert_eq!(boxed_uint_to_integer(&boxed_uint_from_be_slice(&[0x00])), Integer::from(0));
        assert_eq!(integer_to_boxed_uint(&Integer::from(65537)).unwrap(), boxed_uint_from_significant_be_slice(&hex!("01 00 01")));
        assert_eq!(integer_to_boxed_uint(&Integer::from(-1)), None);
    }

    #[test]
    fn trims_zeros() {
        assert_eq!(trim_leading_zeros(&hex!("00 00 01 00")), &hex!("01 00"));
        assert_eq!(trim_leading_zeros(&hex!("00 00")), &[] as &[u8]);
        assert_eq!(trim_leading_zeros(&hex!("80")), &hex!("80"));
    }
}

//! RSA public keys.


use crypto_bigint::BoxedUint;
use tracing::{debug, instrument};

use crate::asn1::{self, SubjectPublicKeyInfo};
use crate::bignum::{
    boxed_uint_from_significant_be_slice, boxed_uint_to_integer, integer_to_boxed_uint, to_be_bytes_padded,
};
use crate::der_util::{decode_exact, encode_any, is_null};
use crate::error::{Error, FormatError, KeyConstructionError};
use crate::oids;


/// The components of an RSA public key.
///
/// The public key is encoded as `RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent
/// INTEGER }` as specified in RFC 8017 Appendix A.1.1.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RsaPublicKey {
    modulus: BoxedUint,
    public_exponent: BoxedUint,
}
impl RsaPublicKey {
    /// Assembles a key from big-endian modulus and exponent bytes.
    pub fn from_be_components(exponent: &[u8], modulus: &[u8]) -> Result<Self, Error> {
        if exponent.is_empty() {
            return Err(KeyConstructionError::EmptyField { field: "exponent" }.into());
        }
        if modulus.is_empty() {
            return Err(KeyConstructionError::EmptyField { field: "modulus" }.into());
        }
        Ok(Self {
            modulus: boxed_uint_from_significant_be_slice(modulus),
            public_exponent: boxed_uint_from_significant_be_slice(exponent),
        })
    }

    pub fn modulus(&self) -> &BoxedUint { &self.modulus }
    pub fn public_exponent(&self) -> &BoxedUint { &self.public_exponent }

    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        let rsa_public_key = asn1::RsaPublicKey::new(
            boxed_uint_to_integer(&self.modulus),
            boxed_uint_to_integer(&self.public_exponent),
        );
        let public_key_bytes = rasn::der::encode(&rsa_public_key)
            .map_err(KeyConstructionError::Der)?;
        SubjectPublicKeyInfo::from_parts(oids::RSA_ENCRYPTION, Some(encode_any(&())?), public_key_bytes)
            .to_der()
    }

    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let spki = SubjectPublicKeyInfo::from_der_expecting(der, oids::RSA_ENCRYPTION)?;
        Self::from_spki(&spki)
    }

    pub(crate) fn from_spki(spki: &SubjectPublicKeyInfo) -> Result<Self, Error> {
        // the parameters must be NULL; some encoders omit them entirely
        if let Some(parameters) = &spki.algorithm.parameters {
            if !is_null(parameters) {
                return Err(FormatError::InvalidParameters.into());
            }
        }

        let rsa_public_key: asn1::RsaPublicKey = decode_exact(spki.public_key_bytes()?)?;
        let modulus = integer_to_boxed_uint(&rsa_public_key.modulus)
            .ok_or(FormatError::InvalidInteger { field: "modulus" })?;
        let public_exponent = integer_to_boxed_uint(&rsa_public_key.public_exponent)
            .ok_or(FormatError::InvalidInteger { field: "exponent" })?;
        Ok(Self {
            modulus,
            public_exponent,
        })
    }

    /// Serializes the components in minimal safe width.
    pub fn to_parts(&self) -> Result<RsaParts, Error> {
        Ok(RsaParts {
            exponent: to_be_bytes_padded(&self.public_exponent, None)?,
            modulus: to_be_bytes_padded(&self.modulus, None)?,
        })
    }
}


/// The serialized components of an RSA public key.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RsaParts {
    pub exponent: Vec<u8>,
    pub modulus: Vec<u8>,
}
impl RsaParts {
    /// Returns the components in the order exponent, modulus.
    pub fn into_vec(self) -> Vec<Vec<u8>> {
        vec![self.exponent, self.modulus]
    }
}


/// Builds a DER-encoded RSA public key from big-endian exponent and modulus bytes.
#[instrument(skip_all)]
pub fn build(exponent: &[u8], modulus: &[u8]) -> Result<Vec<u8>, Error> {
    let key = RsaPublicKey::from_be_components(exponent, modulus)?;
    let der = key.to_der()?;
    debug!(modulus_bits = key.modulus.bits(), der_len = der.len(), "built RSA public key");
    Ok(der)
}


/// Decomposes a DER-encoded RSA public key into its exponent and modulus.
#[instrument(skip_all)]
pub fn decompose(der: &[u8]) -> Result<RsaParts, Error> {
    let key = RsaPublicKey::from_der(der)?;
    let parts = key.to_parts()?;
    debug!(exponent_len = parts.exponent.len(), modulus_len = parts.modulus.len(), "decomposed RSA public key");
    Ok(parts)
}

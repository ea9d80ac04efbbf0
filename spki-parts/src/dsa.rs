//! DSA public keys.


use crypto_bigint::BoxedUint;
use rasn::types::Integer;
use tracing::{debug, instrument, trace};

use crate::asn1::{DssParms, SubjectPublicKeyInfo};
use crate::bignum::{
    boxed_uint_from_significant_be_slice, boxed_uint_to_integer, integer_to_boxed_uint, to_be_bytes_padded,
};
use crate::der_util::{decode_exact, encode_any};
use crate::error::{Error, FormatError, KeyConstructionError};
use crate::oids;


/// The components of a DSA public key.
///
/// The domain parameters are encoded in the algorithm parameters as `Dss-Parms ::= SEQUENCE { p
/// INTEGER, q INTEGER, g INTEGER }`; the public value is encoded as a bare INTEGER. Both are
/// specified in RFC 3279 § 2.3.2.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DsaPublicKey {
    /// The prime modulus.
    p: BoxedUint,

    /// The prime order of the subgroup.
    q: BoxedUint,

    /// The generator of the subgroup.
    g: BoxedUint,

    /// The public value `g**x mod p`.
    public_value: BoxedUint,
}
impl DsaPublicKey {
    pub fn from_be_components(p: &[u8], q: &[u8], g: &[u8], y: &[u8]) -> Result<Self, Error> {
        for (field, value) in [("p", p), ("q", q), ("g", g), ("y", y)] {
            if value.is_empty() {
                return Err(KeyConstructionError::EmptyField { field }.into());
            }
        }
        Ok(Self {
            p: boxed_uint_from_significant_be_slice(p),
            q: boxed_uint_from_significant_be_slice(q),
            g: boxed_uint_from_significant_be_slice(g),
            public_value: boxed_uint_from_significant_be_slice(y),
        })
    }

    pub fn p(&self) -> &BoxedUint { &self.p }
    pub fn q(&self) -> &BoxedUint { &self.q }
    pub fn g(&self) -> &BoxedUint { &self.g }
    pub fn public_value(&self) -> &BoxedUint { &self.public_value }

    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        let dss_parms = DssParms::new(
            boxed_uint_to_integer(&self.p),
            boxed_uint_to_integer(&self.q),
            boxed_uint_to_integer(&self.g),
        );
        let public_key_bytes = rasn::der::encode(&boxed_uint_to_integer(&self.public_value))
            .map_err(KeyConstructionError::Der)?;
        SubjectPublicKeyInfo::from_parts(oids::DSA, Some(encode_any(&dss_parms)?), public_key_bytes)
            .to_der()
    }

    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let spki = SubjectPublicKeyInfo::from_der_expecting(der, oids::DSA)?;
        Self::from_spki(&spki)
    }

    pub(crate) fn from_spki(spki: &SubjectPublicKeyInfo) -> Result<Self, Error> {
        // parameters may be inherited from a CA certificate, but there is nothing to inherit here
        let parameters = spki.algorithm.parameters.as_ref()
            .ok_or(FormatError::MissingParameters)?;
        let dss_parms: DssParms = decode_exact(parameters.as_bytes())
            .map_err(|_| FormatError::InvalidParameters)?;
        let public_value: Integer = decode_exact(spki.public_key_bytes()?)?;

        let unsigned = |value: &Integer, field: &'static str| integer_to_boxed_uint(value)
            .ok_or(FormatError::InvalidInteger { field });
        Ok(Self {
            p: unsigned(&dss_parms.p, "p")?,
            q: unsigned(&dss_parms.q, "q")?,
            g: unsigned(&dss_parms.g, "g")?,
            public_value: unsigned(&public_value, "y")?,
        })
    }

    /// Serializes the components in minimal safe width.
    pub fn to_parts(&self) -> Result<DsaParts, Error> {
        let parts = DsaParts {
            p: to_be_bytes_padded(&self.p, None)?,
            q: to_be_bytes_padded(&self.q, None)?,
            g: to_be_bytes_padded(&self.g, None)?,
            y: to_be_bytes_padded(&self.public_value, None)?,
        };
        trace!(p_len = parts.p.len(), q_len = parts.q.len(), g_len = parts.g.len(), y_len = parts.y.len());
        Ok(parts)
    }
}


/// The serialized components of a DSA public key.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DsaParts {
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub g: Vec<u8>,
    pub y: Vec<u8>,
}
impl DsaParts {
    /// Returns the components in the order p, q, g, y.
    pub fn into_vec(self) -> Vec<Vec<u8>> {
        vec![self.p, self.q, self.g, self.y]
    }
}


/// Builds a DER-encoded DSA public key from big-endian domain parameters and public value.
#[instrument(skip_all)]
pub fn build(p: &[u8], q: &[u8], g: &[u8], y: &[u8]) -> Result<Vec<u8>, Error> {
    let key = DsaPublicKey::from_be_components(p, q, g, y)?;
    let der = key.to_der()?;
    debug!(p_bits = key.p.bits(), q_bits = key.q.bits(), der_len = der.len(), "built DSA public key");
    Ok(der)
}


/// Decomposes a DER-encoded DSA public key into p, q, g and y.
#[instrument(skip_all)]
pub fn decompose(der: &[u8]) -> Result<DsaParts, Error> {
    let key = DsaPublicKey::from_der(der)?;
    let parts = key.to_parts()?;
    debug!("decomposed DSA public key");
    Ok(parts)
}

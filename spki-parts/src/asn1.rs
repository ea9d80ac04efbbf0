//! ASN.1 structures shared by all public key types.


use rasn::{AsnType, Decode, Encode};
use rasn::types::{Any, BitString, Integer, ObjectIdentifier, Oid};

use crate::der_util::decode_exact;
use crate::error::{Error, FormatError, KeyConstructionError};


/// The outer structure of a DER-encoded public key.
///
/// The content of `subject_public_key` depends on `algorithm`: an `RSAPublicKey` SEQUENCE, a DSA
/// public value INTEGER, or an elliptic curve point.
///
/// Specified in RFC 5280 § 4.1.
#[derive(AsnType, Clone, Debug, Decode, Encode, Eq, PartialEq)]
pub struct SubjectPublicKeyInfo {
    pub algorithm: AlgorithmIdentifier,
    pub subject_public_key: BitString,
}
impl SubjectPublicKeyInfo {
    pub fn new(
        algorithm: AlgorithmIdentifier,
        subject_public_key: BitString,
    ) -> Self {
        Self {
            algorithm,
            subject_public_key,
        }
    }

    /// Assembles a public key structure from the algorithm, its parameters and the raw key bytes.
    pub fn from_parts(algorithm: &'static Oid, parameters: Option<Any>, public_key: Vec<u8>) -> Self {
        Self::new(
            AlgorithmIdentifier::new(ObjectIdentifier::from(algorithm), parameters),
            BitString::from_vec(public_key),
        )
    }

    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        rasn::der::encode(self)
            .map_err(|e| KeyConstructionError::Der(e).into())
    }

    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        Ok(decode_exact(der)?)
    }

    /// Decodes the structure and ensures it describes a key of the given algorithm.
    pub fn from_der_expecting(der: &[u8], algorithm: &'static Oid) -> Result<Self, Error> {
        let spki = Self::from_der(der)?;
        if &*spki.algorithm.algorithm != algorithm {
            return Err(FormatError::UnexpectedAlgorithm {
                expected: algorithm,
                obtained: spki.algorithm.algorithm,
            }.into());
        }
        Ok(spki)
    }

    /// Returns the public key bytes.
    ///
    /// All supported key types encode their public key as whole bytes; a bit string with unused
    /// bits is rejected.
    pub fn public_key_bytes(&self) -> Result<&[u8], FormatError> {
        let bits = self.subject_public_key.len();
        if bits % 8 != 0 {
            return Err(FormatError::UnalignedBitString { bits });
        }
        Ok(self.subject_public_key.as_raw_slice())
    }
}


/// An identifier identifying a specific cryptographic algorithm and, optionally, parameters for it.
///
/// `parameters` is kept as raw DER since its type depends on `algorithm`: NULL for RSA,
/// `Dss-Parms` for DSA, and a named curve OID for elliptic curve keys.
///
/// Specified in RFC 5280 § 4.1.1.2.
#[derive(AsnType, Clone, Debug, Decode, Encode, Eq, Hash, PartialEq)]
pub struct AlgorithmIdentifier {
    pub algorithm: ObjectIdentifier,
    pub parameters: Option<Any>,
}
impl AlgorithmIdentifier {
    pub fn new(
        algorithm: ObjectIdentifier,
        parameters: Option<Any>,
    ) -> Self {
        Self {
            algorithm,
            parameters,
        }
    }
}


/// The public key of an RSA key pair.
///
/// Specified in RFC 8017 Appendix A.1.1.
#[derive(AsnType, Clone, Debug, Decode, Encode, Eq, Hash, PartialEq)]
pub struct RsaPublicKey {
    pub modulus: Integer,
    pub public_exponent: Integer,
}
impl RsaPublicKey {
    pub fn new(
        modulus: Integer,
        public_exponent: Integer,
    ) -> Self {
        Self {
            modulus,
            public_exponent,
        }
    }
}


/// The domain parameters of a DSA key.
///
/// Specified in RFC 3279 § 2.3.2.
#[derive(AsnType, Clone, Debug, Decode, Encode, Eq, Hash, PartialEq)]
pub struct DssParms {
    pub p: Integer,
    pub q: Integer,
    pub g: Integer,
}
impl DssParms {
    pub fn new(
        p: Integer,
        q: Integer,
        g: Integer,
    ) -> Self {
        Self {
            p,
            q,
            g,
        }
    }
}


/// The domain parameters of an elliptic curve key.
///
/// Only `namedCurve` is supported for keys; the other alternatives are decoded so they can be
/// reported as such. Specified in RFC 5480 § 2.1.1.
#[derive(AsnType, Clone, Debug, Decode, Encode, Eq, Hash, PartialEq)]
#[rasn(choice)]
pub enum EcParameters {
    NamedCurve(ObjectIdentifier),
    ImplicitCurve(()),
    SpecifiedCurve(Vec<Any>),
}

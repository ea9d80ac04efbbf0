//! Elliptic curve (ECDSA) public keys on named curves.
//!
//! Public points are encoded as specified in SEC 1 § 2.3.3 inside a public key structure with
//! the `namedCurve` parameter of RFC 5480 § 2.1.1.


use rasn::types::ObjectIdentifier;
use tracing::{debug, instrument, trace};

use crate::asn1::{EcParameters, SubjectPublicKeyInfo};
use crate::bignum::to_be_bytes_padded;
use crate::crypt::elliptic::AffinePoint;
use crate::curve::{curve_name_to_identifier, identifier_to_coordinate_width, identifier_to_curve_name, NamedCurve};
use crate::der_util::{decode_exact, encode_any};
use crate::error::{Error, FormatError, KeyConstructionError, UnsupportedCurveError};
use crate::oids;


const POINT_UNCOMPRESSED: u8 = 0x04;
const POINT_COMPRESSED_EVEN: u8 = 0x02;
const POINT_COMPRESSED_ODD: u8 = 0x03;


/// An elliptic curve public key: a validated point on a named curve.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EcdsaPublicKey {
    curve: NamedCurve,
    point: AffinePoint,
}
impl EcdsaPublicKey {
    /// Assembles a key from big-endian affine coordinates, validating the point.
    pub fn from_be_coordinates(curve: NamedCurve, x: &[u8], y: &[u8]) -> Result<Self, Error> {
        if x.is_empty() {
            return Err(KeyConstructionError::EmptyField { field: "x" }.into());
        }
        if y.is_empty() {
            return Err(KeyConstructionError::EmptyField { field: "y" }.into());
        }
        let point = curve.parameters().point_from_be_coordinates(x, y)
            .ok_or(Error::InvalidPoint { curve })?;
        Ok(Self { curve, point })
    }

    pub fn curve(&self) -> NamedCurve { self.curve }
    pub fn point(&self) -> &AffinePoint { &self.point }

    /// Encodes the point in uncompressed form: `0x04 || x || y`, both coordinates at full width.
    pub fn to_encoded_point(&self) -> Result<Vec<u8>, Error> {
        let width = self.curve.coordinate_width();
        let mut ret = Vec::with_capacity(1 + 2*width);
        ret.push(POINT_UNCOMPRESSED);
        ret.extend(to_be_bytes_padded(self.point.x(), Some(width))?);
        ret.extend(to_be_bytes_padded(self.point.y(), Some(width))?);
        Ok(ret)
    }

    /// Decodes a point in uncompressed or compressed form, validating it against the curve.
    pub fn from_encoded_point(curve: NamedCurve, bytes: &[u8]) -> Result<Self, Error> {
        let width = curve.coordinate_width();
        let parameters = curve.parameters();
        let (&tag, coordinates) = bytes.split_first()
            .ok_or(FormatError::PointLength { expected: 1 + 2*width, obtained: 0 })?;

        let point = match tag {
            POINT_UNCOMPRESSED => {
                if coordinates.len() != 2*width {
                    return Err(FormatError::PointLength { expected: 1 + 2*width, obtained: bytes.len() }.into());
                }
                let (x, y) = coordinates.split_at(width);
                parameters.point_from_be_coordinates(x, y)
            },
            POINT_COMPRESSED_EVEN|POINT_COMPRESSED_ODD => {
                if coordinates.len() != width {
                    return Err(FormatError::PointLength { expected: 1 + width, obtained: bytes.len() }.into());
                }
                trace!(curve = curve.name(), "decompressing point");
                parameters.decompress_point(coordinates, tag == POINT_COMPRESSED_ODD)
            },
            // 0x00 is the point at infinity, 0x06/0x07 are hybrid encodings
            other => return Err(FormatError::PointEncoding { tag: other }.into()),
        };
        let point = point.ok_or(FormatError::PointNotOnCurve)?;
        Ok(Self { curve, point })
    }

    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        let parameters = encode_any(&EcParameters::NamedCurve(ObjectIdentifier::from(self.curve.identifier())))?;
        SubjectPublicKeyInfo::from_parts(oids::EC_PUBLIC_KEY, Some(parameters), self.to_encoded_point()?)
            .to_der()
    }

    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let spki = SubjectPublicKeyInfo::from_der_expecting(der, oids::EC_PUBLIC_KEY)?;
        Self::from_spki(&spki)
    }

    pub(crate) fn from_spki(spki: &SubjectPublicKeyInfo) -> Result<Self, Error> {
        let parameters = spki.algorithm.parameters.as_ref()
            .ok_or(FormatError::MissingParameters)?;

        let identifier = match decode_exact(parameters.as_bytes()) {
            Ok(EcParameters::NamedCurve(identifier)) => identifier,
            Ok(EcParameters::ImplicitCurve(())|EcParameters::SpecifiedCurve(_))
                => return Err(UnsupportedCurveError::ExplicitParameters.into()),
            Err(_) => return Err(FormatError::InvalidParameters.into()),
        };
        let curve = NamedCurve::from_identifier(&identifier)
            .ok_or_else(|| UnsupportedCurveError::Identifier(identifier.clone()))?;
        Self::from_encoded_point(curve, spki.public_key_bytes()?)
    }

    /// Serializes the curve name and both coordinates at the curve's fixed width.
    pub fn to_parts(&self) -> Result<EcdsaParts, Error> {
        let identifier = self.curve.identifier();
        let width = identifier_to_coordinate_width(identifier);
        Ok(EcdsaParts {
            curve_name: identifier_to_curve_name(identifier).to_owned(),
            x: to_be_bytes_padded(self.point.x(), Some(width))?,
            y: to_be_bytes_padded(self.point.y(), Some(width))?,
        })
    }
}


/// The serialized components of an elliptic curve public key.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EcdsaParts {
    pub curve_name: String,
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}
impl EcdsaParts {
    /// Returns the curve name and the coordinates in the order x, y.
    pub fn into_named_vec(self) -> (String, Vec<Vec<u8>>) {
        (self.curve_name, vec![self.x, self.y])
    }
}


/// Builds a DER-encoded elliptic curve public key from big-endian affine coordinates.
///
/// `curve_name` must be one of `"P-256"`, `"P-384"` or `"P-521"`.
#[instrument(skip(x, y))]
pub fn build(x: &[u8], y: &[u8], curve_name: &str) -> Result<Vec<u8>, Error> {
    let identifier = curve_name_to_identifier(curve_name)?;
    let curve = NamedCurve::from_identifier(identifier)
        .ok_or_else(|| UnsupportedCurveError::Name(curve_name.to_owned()))?;
    let key = EcdsaPublicKey::from_be_coordinates(curve, x, y)?;
    let der = key.to_der()?;
    debug!(der_len = der.len(), "built ECDSA public key");
    Ok(der)
}


/// Decomposes a DER-encoded elliptic curve public key into curve name and fixed-width
/// coordinates.
#[instrument(skip_all)]
pub fn decompose(der: &[u8]) -> Result<EcdsaParts, Error> {
    let key = EcdsaPublicKey::from_der(der)?;
    let parts = key.to_parts()?;
    debug!(curve = %parts.curve_name, coordinate_len = parts.x.len(), "decomposed ECDSA public key");
    Ok(parts)
}

//! The supported named curves and their symbolic names.
//!
//! The mapping is a closed table; names or identifiers outside of it are never mapped to a
//! default curve.


use std::fmt;
use std::sync::OnceLock;

use rasn::types::Oid;

use crate::crypt::elliptic::PrimeWeierstrassCurve;
use crate::crypt::elliptic::curves::{get_nist_p256, get_nist_p384, get_nist_p521};
use crate::error::{Error, UnsupportedCurveError};
use crate::oids;


#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NamedCurve {
    P256,
    P384,
    P521,
}
impl NamedCurve {
    pub const ALL: [NamedCurve; 3] = [Self::P256, Self::P384, Self::P521];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "P-256" => Some(Self::P256),
            "P-384" => Some(Self::P384),
            "P-521" => Some(Self::P521),
            _ => None,
        }
    }

    pub fn from_identifier(identifier: &Oid) -> Option<Self> {
        Self::ALL.into_iter()
            .find(|curve| curve.identifier() == identifier)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }

    /// The object identifier of the curve as used in the `namedCurve` parameter.
    pub fn identifier(&self) -> &'static Oid {
        match self {
            Self::P256 => oids::PRIME256V1,
            Self::P384 => oids::SECP384R1,
            Self::P521 => oids::SECP521R1,
        }
    }

    /// The length in bytes of each canonically encoded coordinate.
    pub fn coordinate_width(&self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }

    /// The domain parameters of the curve.
    pub fn parameters(&self) -> &'static PrimeWeierstrassCurve {
        let [p256, p384, p521] = curve_parameters();
        match self {
            Self::P256 => p256,
            Self::P384 => p384,
            Self::P521 => p521,
        }
    }
}
impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


fn curve_parameters() -> &'static [PrimeWeierstrassCurve; 3] {
    static CURVES: OnceLock<[PrimeWeierstrassCurve; 3]> = OnceLock::new();
    CURVES.get_or_init(|| {
        tracing::debug!("initializing curve parameters");
        [get_nist_p256(), get_nist_p384(), get_nist_p521()]
    })
}


/// Builds the curve parameter table if it has not been built yet.
pub(crate) fn init_curve_parameters() {
    curve_parameters();
}


/// Resolves a curve name to its identifier.
pub fn curve_name_to_identifier(name: &str) -> Result<&'static Oid, Error> {
    NamedCurve::from_name(name)
        .map(|curve| curve.identifier())
        .ok_or_else(|| UnsupportedCurveError::Name(name.to_owned()).into())
}


/// Resolves a curve identifier to its name, returning an empty string for unknown identifiers.
pub fn identifier_to_curve_name(identifier: &Oid) -> &'static str {
    NamedCurve::from_identifier(identifier)
        .map(|curve| curve.name())
        .unwrap_or("")
}


/// Returns the coordinate width of the curve with the given identifier, or 0 if it is unknown.
pub fn identifier_to_coordinate_width(identifier: &Oid) -> usize {
    NamedCurve::from_identifier(identifier)
        .map(|curve| curve.coordinate_width())
        .unwrap_or(0)
}

//! Errors returned when building or decomposing public keys.


use std::fmt;

use rasn::types::{ObjectIdentifier, Oid};

use crate::curve::NamedCurve;


/// The category of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    Encoding,
    KeyConstruction,
    Format,
    UnsupportedCurve,
    InvalidPoint,
}


#[derive(Debug)]
pub enum Error {
    /// A value does not fit into the requested number of bytes.
    Encoding {
        width: usize,
        required: usize,
    },

    /// A key could not be assembled from its components.
    KeyConstruction(KeyConstructionError),

    /// The input is not a valid DER-encoded public key of the expected type.
    Format(FormatError),

    /// The curve is not one of the supported named curves.
    UnsupportedCurve(UnsupportedCurveError),

    /// The coordinates do not describe a point on the curve.
    InvalidPoint {
        curve: NamedCurve,
    },
}
impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::KeyConstruction(_) => ErrorKind::KeyConstruction,
            Self::Format(_) => ErrorKind::Format,
            Self::UnsupportedCurve(_) => ErrorKind::UnsupportedCurve,
            Self::InvalidPoint { .. } => ErrorKind::InvalidPoint,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Encoding { width, required }
                => write!(f, "value requires {} bytes but only {} are available", required, width),
            Self::KeyConstruction(e)
                => write!(f, "failed to construct key: {}", e),
            Self::Format(e)
                => write!(f, "invalid public key: {}", e),
            Self::UnsupportedCurve(e)
                => write!(f, "unsupported curve: {}", e),
            Self::InvalidPoint { curve }
                => write!(f, "coordinates do not describe a point on curve {}", curve.name()),
        }
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding { .. } => None,
            Self::KeyConstruction(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::UnsupportedCurve(_) => None,
            Self::InvalidPoint { .. } => None,
        }
    }
}
impl From<KeyConstructionError> for Error {
    fn from(value: KeyConstructionError) -> Self { Self::KeyConstruction(value) }
}
impl From<FormatError> for Error {
    fn from(value: FormatError) -> Self { Self::Format(value) }
}
impl From<UnsupportedCurveError> for Error {
    fn from(value: UnsupportedCurveError) -> Self { Self::UnsupportedCurve(value) }
}


#[derive(Debug)]
pub enum KeyConstructionError {
    EmptyField { field: &'static str },
    Der(rasn::error::EncodeError),
}
impl fmt::Display for KeyConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::EmptyField { field }
                => write!(f, "field {} is empty", field),
            Self::Der(e)
                => write!(f, "DER encoding failed: {}", e),
        }
    }
}
impl std::error::Error for KeyConstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyField { .. } => None,
            // rasn errors do not implement std::error::Error; Display carries their message
            Self::Der(_) => None,
        }
    }
}


#[derive(Debug)]
pub enum FormatError {
    Der(rasn::error::DecodeError),
    UnexpectedAlgorithm {
        expected: &'static Oid,
        obtained: ObjectIdentifier,
    },
    UnknownAlgorithm { obtained: ObjectIdentifier },
    MissingParameters,
    InvalidParameters,
    InvalidInteger { field: &'static str },
    UnalignedBitString { bits: usize },
    TrailingData { bytes: usize },
    NonCanonical,
    PointEncoding { tag: u8 },
    PointLength { expected: usize, obtained: usize },
    PointNotOnCurve,
}
impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Der(e)
                => write!(f, "DER decoding failed: {}", e),
            Self::UnexpectedAlgorithm { expected, obtained }
                => write!(f, "expected algorithm {:?}, obtained {:?}", expected, obtained),
            Self::UnknownAlgorithm { obtained }
                => write!(f, "unknown algorithm {:?}", obtained),
            Self::MissingParameters
                => write!(f, "algorithm parameters are missing"),
            Self::InvalidParameters
                => write!(f, "algorithm parameters are malformed"),
            Self::InvalidInteger { field }
                => write!(f, "field {} is not a valid non-negative INTEGER", field),
            Self::UnalignedBitString { bits }
                => write!(f, "public key BIT STRING has {} bits, which is not a whole number of bytes", bits),
            Self::TrailingData { bytes }
                => write!(f, "{} bytes of trailing data", bytes),
            Self::NonCanonical
                => write!(f, "value is not in canonical DER form"),
            Self::PointEncoding { tag }
                => write!(f, "unsupported point encoding 0x{:02X}", tag),
            Self::PointLength { expected, obtained }
                => write!(f, "point encoding is {} bytes long, expected {}", obtained, expected),
            Self::PointNotOnCurve
                => write!(f, "encoded point is not on the curve"),
        }
    }
}
impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}


#[derive(Debug)]
pub enum UnsupportedCurveError {
    Name(String),
    Identifier(ObjectIdentifier),
    ExplicitParameters,
}
impl fmt::Display for UnsupportedCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Name(name)
                => write!(f, "curve name {:?} is not supported", name),
            Self::Identifier(oid)
                => write!(f, "curve identifier {:?} is not supported", oid),
            Self::ExplicitParameters
                => write!(f, "only named curves are supported"),
        }
    }
}
impl std::error::Error for UnsupportedCurveError {
}

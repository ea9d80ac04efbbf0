//! Public keys of any supported algorithm.


use tracing::{debug, instrument};

use crate::asn1::SubjectPublicKeyInfo;
use crate::dsa::DsaPublicKey;
use crate::ecdsa::EcdsaPublicKey;
use crate::error::{Error, FormatError};
use crate::oids;
use crate::rsa::RsaPublicKey;


#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Dsa(DsaPublicKey),
    Ecdsa(EcdsaPublicKey),
}
impl PublicKey {
    /// A short name of the key's algorithm.
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Self::Rsa(_) => "RSA",
            Self::Dsa(_) => "DSA",
            Self::Ecdsa(_) => "ECDSA",
        }
    }

    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        match self {
            Self::Rsa(key) => key.to_der(),
            Self::Dsa(key) => key.to_der(),
            Self::Ecdsa(key) => key.to_der(),
        }
    }

    /// Decodes a public key, choosing the algorithm according to its algorithm identifier.
    #[instrument(skip_all)]
    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let spki = SubjectPublicKeyInfo::from_der(der)?;
        let algorithm = &*spki.algorithm.algorithm;
        let key = if algorithm == oids::RSA_ENCRYPTION {
            Self::Rsa(RsaPublicKey::from_spki(&spki)?)
        } else if algorithm == oids::DSA {
            Self::Dsa(DsaPublicKey::from_spki(&spki)?)
        } else if algorithm == oids::EC_PUBLIC_KEY {
            Self::Ecdsa(EcdsaPublicKey::from_spki(&spki)?)
        } else {
            return Err(FormatError::UnknownAlgorithm { obtained: spki.algorithm.algorithm.clone() }.into());
        };
        debug!(algorithm = key.algorithm_name(), "decoded public key");
        Ok(key)
    }
}
impl From<RsaPublicKey> for PublicKey {
    fn from(value: RsaPublicKey) -> Self { Self::Rsa(value) }
}
impl From<DsaPublicKey> for PublicKey {
    fn from(value: DsaPublicKey) -> Self { Self::Dsa(value) }
}
impl From<EcdsaPublicKey> for PublicKey {
    fn from(value: EcdsaPublicKey) -> Self { Self::Ecdsa(value) }
}

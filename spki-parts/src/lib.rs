//! Conversion between the numeric components of RSA, DSA and elliptic curve public keys and their
//! DER-encoded `SubjectPublicKeyInfo` representation.


pub mod asn1;
pub mod bignum;
pub mod crypt;
pub mod curve;
pub mod der_util;
pub mod dsa;
pub mod ecdsa;
pub mod error;
pub mod key;
pub mod oids;
pub mod rsa;


use std::fmt::Write;

pub use crate::curve::NamedCurve;
pub use crate::dsa::{DsaParts, DsaPublicKey};
pub use crate::ecdsa::{EcdsaParts, EcdsaPublicKey};
pub use crate::error::{Error, ErrorKind};
pub use crate::key::PublicKey;
pub use crate::rsa::{RsaParts, RsaPublicKey};


/// Prepares the process-wide curve parameter table.
///
/// Calling this is optional; the table is otherwise built on first use. Repeated calls have no
/// further effect.
pub fn init() {
    curve::init_curve_parameters();
}


/// Formats a buffer as a classic hexdump: offset, sixteen bytes in hex, then printable ASCII.
pub fn hexdump(buf: &[u8]) -> String {
    let mut ret = String::new();
    for (line_index, line) in buf.chunks(16).enumerate() {
        write!(ret, "{:08X}  ", line_index * 16).unwrap();

        for i in 0..16 {
            match line.get(i) {
                Some(b) => write!(ret, " {:02X}", b).unwrap(),
                None => ret.push_str("   "),
            }
        }

        ret.push_str(" |");
        for &b in line {
            if b >= b' ' && b <= b'~' {
                ret.push(char::from(b));
            } else {
                ret.push('.');
            }
        }
        ret.push_str("|\n");
    }
    ret
}

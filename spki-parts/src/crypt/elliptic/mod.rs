//! Elliptic-curve arithmetic needed to validate and decode public points.


pub mod curves;


use std::ops::{Add, Mul};

use crypto_bigint::{BoxedUint, Integer, NonZero};
use crypto_bigint::modular::{BoxedMontyForm, BoxedMontyParams};
use subtle::{Choice, ConstantTimeEq};

use crate::bignum::{boxed_uint_from_be_slice, natural_byte_len, to_be_bytes_padded, trim_leading_zeros};


/// A point in affine coordinates.
///
/// Coordinates of points produced by a [`PrimeWeierstrassCurve`] have the same precision as the
/// curve's prime.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AffinePoint {
    x: BoxedUint,
    y: BoxedUint,
}
impl AffinePoint {
    pub const fn new(x: BoxedUint, y: BoxedUint) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BoxedUint { &self.x }
    pub fn y(&self) -> &BoxedUint { &self.y }
}


#[derive(Clone, Debug)]
struct MontyKnowledge {
    params: BoxedMontyParams,
    a: BoxedMontyForm,
    b: BoxedMontyForm,
}


/// An elliptic curve of the form `y**2 ≡ x**3 + ax + b` modulo a prime number.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrimeWeierstrassCurve {
    /// The prime (modulus) of the curve.
    prime: BoxedUint,

    /// Coefficient `a` in the curve's formula.
    coefficient_a: BoxedUint,

    /// Coefficient `b` in the curve's formula.
    coefficient_b: BoxedUint,

    /// The coordinates of the generator point of the curve.
    generator: AffinePoint,
}
impl PrimeWeierstrassCurve {
    /// Creates a curve from its domain parameters.
    ///
    /// All values must be encoded in the byte length of the prime. Panics if the prime is even or
    /// the generator is not on the curve; the parameters are compile-time constants, so this
    /// indicates a typo rather than bad input.
    pub fn new(
        prime: BoxedUint,
        coefficient_a: BoxedUint,
        coefficient_b: BoxedUint,
        generator: AffinePoint,
    ) -> Self {
        if !bool::from(prime.is_odd()) {
            panic!("prime is not odd");
        }

        let curve = Self {
            prime,
            coefficient_a,
            coefficient_b,
            generator,
        };
        if !bool::from(curve.is_on_curve_affine(&curve.generator)) {
            panic!("generator is not on curve");
        }
        curve
    }

    pub fn prime(&self) -> &BoxedUint { &self.prime }
    pub fn coefficient_a(&self) -> &BoxedUint { &self.coefficient_a }
    pub fn coefficient_b(&self) -> &BoxedUint { &self.coefficient_b }
    pub fn generator(&self) -> &AffinePoint { &self.generator }

    /// The number of bytes of a canonically encoded coordinate on this curve.
    pub fn coordinate_len_bytes(&self) -> usize {
        natural_byte_len(&self.prime)
    }

    /// Returns important curve parameters for operations in Montgomery form.
    fn monty_knowledge(&self) -> MontyKnowledge {
        let odd_prime = self.prime.to_odd()
            .expect("prime checked to be odd on construction");
        let monty_params = BoxedMontyParams::new(odd_prime);
        MontyKnowledge {
            params: monty_params.clone(),
            a: BoxedMontyForm::new(self.coefficient_a.clone(), monty_params.clone()),
            b: BoxedMontyForm::new(self.coefficient_b.clone(), monty_params),
        }
    }

    /// Parses a big-endian coordinate into the precision of the prime.
    ///
    /// Returns `None` if the value is not smaller than the prime.
    fn coordinate_from_be_slice(&self, bytes: &[u8]) -> Option<BoxedUint> {
        let significant = trim_leading_zeros(bytes);
        let coordinate_len = self.coordinate_len_bytes();
        if significant.len() > coordinate_len {
            return None;
        }
        let significant_value = boxed_uint_from_be_slice(significant);
        let padded = to_be_bytes_padded(&significant_value, Some(coordinate_len)).ok()?;
        let value = boxed_uint_from_be_slice(&padded);
        if value >= self.prime {
            return None;
        }
        Some(value)
    }

    /// Returns a small value in the precision of the prime.
    fn small_constant(&self, value: u8) -> BoxedUint {
        let mut bytes = vec![0u8; self.coordinate_len_bytes()];
        if let Some(last) = bytes.last_mut() {
            *last = value;
        }
        boxed_uint_from_be_slice(&bytes)
    }

    /// Computes `x**3 + ax + b` in Montgomery form.
    fn internal_curve_rhs(monty: &MontyKnowledge, x: &BoxedMontyForm) -> BoxedMontyForm {
        let x_cubed = x.square().mul(x);
        let ax = (&monty.a).mul(x);
        (&x_cubed).add(&ax).add(&monty.b)
    }

    /// Checks whether the point satisfies the curve equation.
    pub fn is_on_curve_affine(&self, point: &AffinePoint) -> Choice {
        let monty = self.monty_knowledge();
        let x = BoxedMontyForm::new(point.x.clone(), monty.params.clone());
        let y = BoxedMontyForm::new(point.y.clone(), monty.params.clone());
        let rhs = Self::internal_curve_rhs(&monty, &x);
        y.square().retrieve().ct_eq(&rhs.retrieve())
    }

    /// Constructs a point from big-endian affine coordinates, validating it against the curve.
    ///
    /// Leading zero bytes in either coordinate are ignored. Returns `None` if a coordinate is not
    /// a field element (not smaller than the prime) or the point does not satisfy the curve
    /// equation.
    pub fn point_from_be_coordinates(&self, x: &[u8], y: &[u8]) -> Option<AffinePoint> {
        let x = self.coordinate_from_be_slice(x)?;
        let y = self.coordinate_from_be_slice(y)?;
        let point = AffinePoint::new(x, y);
        if bool::from(self.is_on_curve_affine(&point)) {
            Some(point)
        } else {
            None
        }
    }

    /// Recovers the full point from its x coordinate and the parity of its y coordinate.
    ///
    /// Only curves whose prime is congruent to 3 modulo 4 are supported, which is true for all
    /// NIST prime curves. Returns `None` if x is not the x coordinate of any point on the curve.
    pub fn decompress_point(&self, x: &[u8], y_is_odd: bool) -> Option<AffinePoint> {
        let one = self.small_constant(0x01);
        let three = self.small_constant(0x03);
        let four = self.small_constant(0x04);
        let four_non_zero = Option::<NonZero<BoxedUint>>::from(NonZero::new(four))?;
        if !bool::from(self.prime.rem(&four_non_zero).ct_eq(&three)) {
            panic!("can only decompress points if p == 3 (mod 4)");
        }

        let x = self.coordinate_from_be_slice(x)?;
        let monty = self.monty_knowledge();
        let x_monty = BoxedMontyForm::new(x.clone(), monty.params.clone());
        let rhs = Self::internal_curve_rhs(&monty, &x_monty);

        // square root candidate: rhs ** ((p + 1) / 4)
        let exponent = (self.prime() + &one) / &four_non_zero;
        let root = rhs.pow(&exponent);
        if root.square() != rhs {
            // rhs is not a quadratic residue
            return None;
        }

        let root = root.retrieve();
        let y = if bool::from(root.is_odd()) == y_is_odd {
            root
        } else if bool::from(root.is_zero()) {
            // zero has no odd counterpart
            return None;
        } else {
            self.prime() - &root
        };
        Some(AffinePoint::new(x, y))
    }
}


#[cfg(test)]
mod tests {
    use super::curves::{get_nist_p256, get_nist_p521};
    use crate::bignum::to_be_bytes_padded;
    use crypto_bigint::Integer;
    use hex_literal::hex;

    #[test]
    fn generator_is_on_curve() {
        let curve = get_nist_p256();
        assert!(bool::from(curve.is_on_curve_affine(curve.generator())));
        assert_eq!(curve.coordinate_len_bytes(), 32);
        assert_eq!(get_nist_p521().coordinate_len_bytes(), 66);
    }

    #[test]
    fn rejects_points_off_curve() {
        let curve = get_nist_p256();
        assert!(curve.point_from_be_coordinates(&[0x00], &[0x00]).is_none());

        let gx = to_be_bytes_padded(curve.generator().x(), Some(32)).unwrap();
        let mut gy = to_be_bytes_padded(curve.generator().y(), Some(32)).unwrap();
        assert!(curve.point_from_be_coordinates(&gx, &gy).is_some());
        gy[31] ^= 0x01;
        assert!(curve.point_from_be_coordinates(&gx, &gy).is_none());
    }

    #[test]
    fn rejects_coordinates_not_reduced() {
        let curve = get_nist_p256();
        // p itself reduces to zero but is not a field element
        let prime_bytes = to_be_bytes_padded(curve.prime(), Some(32)).unwrap();
        let gy = to_be_bytes_padded(curve.generator().y(), Some(32)).unwrap();
        assert!(curve.coordinate_from_be_slice(&prime_bytes).is_none());
        assert!(curve.point_from_be_coordinates(&prime_bytes, &gy).is_none());

        // too long after stripping zeros
        assert!(curve.point_from_be_coordinates(&[0x01; 33], &gy).is_none());
    }

    #[test]
    fn decompresses_both_parities() {
        let curve = get_nist_p256();
        let gx = to_be_bytes_padded(curve.generator().x(), Some(32)).unwrap();
        let gy_is_odd = bool::from(curve.generator().y().is_odd());

        let same = curve.decompress_point(&gx, gy_is_odd).unwrap();
        assert_eq!(&same, curve.generator());

        let negated = curve.decompress_point(&gx, !gy_is_odd).unwrap();
        assert_eq!(negated.x(), curve.generator().x());
        assert_eq!(negated.y(), &(curve.prime() - curve.generator().y()));
    }

    #[test]
    fn known_multiples() {
        // 2G on P-256
        let p256 = get_nist_p256();
        let x = hex!("7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978");
        let y = hex!("07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1");
        let point = p256.point_from_be_coordinates(&x, &y).unwrap();
        assert_eq!(p256.decompress_point(&x, true), Some(point));

        // 3G on P-521
        let p521 = get_nist_p521();
        let x = hex!("
            01A73D352443DE29195DD91D6A64B5959479B52A6E5B123D9AB9E5AD7A112D7A
            8DD1AD3F164A3A4832051DA6BD16B59FE21BAEB490862C32EA05A5919D2EDE37
            AD7D
        ");
        let y = hex!("
            013E9B03B97DFA62DDD9979F86C6CAB814F2F1557FA82A9D0317D2F8AB1FA355
            CEEC2E2DD4CF8DC575B02D5ACED1DEC3C70CF105C9BC93A590425F588CA1EE86
            C0E5
        ");
        let point = p521.point_from_be_coordinates(&x, &y).unwrap();
        assert_eq!(to_be_bytes_padded(point.y(), Some(66)).unwrap(), y.to_vec());
        assert_eq!(p521.decompress_point(&x, true), Some(point));
        assert!(p521.point_from_be_coordinates(&x, &x).is_none());
    }
}

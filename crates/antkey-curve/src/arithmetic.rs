//! Jacobian-coordinate point arithmetic
//!
//! Formulas operate on projective (X, Y, Z) triples so that only the final
//! conversion back to affine coordinates pays for a modular inverse.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::params::{CurveError, CurveParams};
use crate::point::{AffinePoint, JacobianPoint};

/// Euclidean remainder, always in `[0, m)`
fn fmod(a: &BigInt, m: &BigInt) -> BigInt {
    let r = a % m;
    if r.sign() == Sign::Minus {
        r + m
    } else {
        r
    }
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Returns 0 for a ≡ 0 (mod m); every other input to a prime modulus is
/// invertible.
pub fn mod_inv(a: &BigInt, m: &BigInt) -> BigInt {
    let a = fmod(a, m);
    if a.is_zero() {
        return BigInt::zero();
    }
    let mut lm = BigInt::from(1u32);
    let mut hm = BigInt::zero();
    let mut low = a;
    let mut high = m.clone();
    while low > BigInt::from(1u32) {
        let r = &high / &low;
        let nm = &hm - &lm * &r;
        let new = &high - &low * &r;
        hm = lm;
        high = low;
        lm = nm;
        low = new;
    }
    fmod(&lm, m)
}

impl CurveParams {
    /// Lifts an affine point into Jacobian coordinates with Z = 1
    pub fn to_jacobian(&self, p: &AffinePoint) -> JacobianPoint {
        match p {
            AffinePoint::Infinity => JacobianPoint::infinity(),
            AffinePoint::Point { x, y } => {
                JacobianPoint::new(x.clone(), y.clone(), BigInt::from(1u32))
            }
        }
    }

    /// Point doubling
    pub fn jacobian_double(&self, p: &JacobianPoint) -> JacobianPoint {
        if p.is_infinity() {
            return JacobianPoint::new(BigInt::zero(), BigInt::zero(), BigInt::zero());
        }
        let ysq = fmod(&(&p.y * &p.y), &self.p);
        let s = fmod(&(&p.x * &ysq * 4u32), &self.p);
        let zsq = fmod(&(&p.z * &p.z), &self.p);
        let m = fmod(&(&p.x * &p.x * 3u32 + &self.a * &zsq * &zsq), &self.p);
        let nx = fmod(&(&m * &m - &s * 2u32), &self.p);
        let ny = fmod(&(&m * (&s - &nx) - &ysq * &ysq * 8u32), &self.p);
        let nz = fmod(&(&p.y * &p.z * 2u32), &self.p);
        JacobianPoint::new(nx, ny, nz)
    }

    /// Point addition
    ///
    /// Handles the degenerate cases explicitly: an infinity operand yields
    /// the other operand, adding a point to its negation yields infinity,
    /// and adding a point to itself delegates to doubling.
    pub fn jacobian_add(&self, p: &JacobianPoint, q: &JacobianPoint) -> JacobianPoint {
        if p.is_infinity() {
            return q.clone();
        }
        if q.is_infinity() {
            return p.clone();
        }
        let u1 = fmod(&(&p.x * &q.z * &q.z), &self.p);
        let u2 = fmod(&(&q.x * &p.z * &p.z), &self.p);
        let s1 = fmod(&(&p.y * &q.z * &q.z * &q.z), &self.p);
        let s2 = fmod(&(&q.y * &p.z * &p.z * &p.z), &self.p);
        if u1 == u2 {
            if s1 != s2 {
                return JacobianPoint::infinity();
            }
            return self.jacobian_double(p);
        }
        let h = fmod(&(&u2 - &u1), &self.p);
        let r = fmod(&(&s2 - &s1), &self.p);
        let h2 = fmod(&(&h * &h), &self.p);
        let h3 = fmod(&(&h * &h2), &self.p);
        let u1h2 = fmod(&(&u1 * &h2), &self.p);
        let nx = fmod(&(&r * &r - &h3 - &u1h2 * 2u32), &self.p);
        let ny = fmod(&(&r * (&u1h2 - &nx) - &s1 * &h3), &self.p);
        let nz = fmod(&(&h * &p.z * &q.z), &self.p);
        JacobianPoint::new(nx, ny, nz)
    }

    /// Scalar multiplication by iterative double-and-add, most significant
    /// bit first.
    ///
    /// Any integer is accepted as the scalar: it is reduced into `[0, N)`
    /// by Euclidean remainder before use (so negative and oversized
    /// multiplicands are defined behavior, not errors). An infinity base
    /// point or a zero reduced scalar yields infinity.
    pub fn jacobian_multiply(&self, p: &JacobianPoint, k: &BigInt) -> JacobianPoint {
        let k = fmod(k, &self.n);
        if p.is_infinity() || k.is_zero() {
            return JacobianPoint::infinity();
        }
        let (_, bytes) = k.to_bytes_be();
        let mut acc = JacobianPoint::infinity();
        for byte in bytes {
            for shift in (0..8).rev() {
                acc = self.jacobian_double(&acc);
                if (byte >> shift) & 1 == 1 {
                    acc = self.jacobian_add(&acc, p);
                }
            }
        }
        acc
    }

    /// Converts back to affine coordinates via the modular inverse of Z.
    ///
    /// Fails only for a finite-coordinate triple whose Z ≡ 0 (mod p); such
    /// a point cannot come out of [`jacobian_multiply`](Self::jacobian_multiply).
    pub fn to_affine(&self, p: &JacobianPoint) -> Result<AffinePoint, CurveError> {
        if p.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }
        let z = fmod(&p.z, &self.p);
        if z.is_zero() {
            return Err(CurveError::InfinityNotRepresentable);
        }
        let zinv = mod_inv(&z, &self.p);
        let zinv2 = fmod(&(&zinv * &zinv), &self.p);
        let zinv3 = fmod(&(&zinv2 * &zinv), &self.p);
        Ok(AffinePoint::new(
            fmod(&(&p.x * &zinv2), &self.p),
            fmod(&(&p.y * &zinv3), &self.p),
        ))
    }

    /// Affine-in, affine-out scalar multiplication.
    ///
    /// This is the entry point the key-derivation layers use; the Jacobian
    /// representation stays internal to this crate.
    pub fn fast_multiply(&self, g: &AffinePoint, k: &BigInt) -> Result<AffinePoint, CurveError> {
        self.to_affine(&self.jacobian_multiply(&self.to_jacobian(g), k))
    }
}

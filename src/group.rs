//! Group, scalar and pairing primitives backing the scheme, plus the fixed-width
//! big-endian codec shared by every wire-encoded type.
//!
//! The rest of the crate never names `ark_bn254` directly; it goes through the
//! aliases and helpers here. This keeps the algebra in `params.rs`/`keys.rs`/
//! `ciphertext.rs` readable as group theory rather than as arkworks API calls.

use ark_bn254::{Bn254, Fq, Fq12, Fq2, Fq6, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup, Group as _};
use ark_ff::{BigInteger, PrimeField, Zero};
use rand_core::{CryptoRng, RngCore};

use crate::error::HibeError;

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = PairingOutput<Bn254>;
pub type Scalar = Fr;

/// Byte width of one base-field element, the wire codec's atomic unit.
pub const UNIT: usize = 32;
/// `G1` affine coordinates are two base-field elements.
pub const G1_UNITS: usize = 2;
/// `G2` affine coordinates are two degree-2 extension-field elements.
pub const G2_UNITS: usize = 4;
/// `GT` elements are degree-12 extension-field elements.
pub const GT_UNITS: usize = 12;

pub const G1_BYTES: usize = G1_UNITS * UNIT;
pub const G2_BYTES: usize = G2_UNITS * UNIT;
pub const GT_BYTES: usize = GT_UNITS * UNIT;

/// Draws a uniform scalar in `[1, p-1]` using a caller-provided CSPRNG.
///
/// Draws a 64-byte buffer via the RNG's fallible `try_fill_bytes` and reduces
/// it mod the field order, so an RNG failure surfaces as
/// [`HibeError::RandomnessFailure`] instead of a panic. The wide buffer keeps
/// the mod-order reduction's bias negligible. The loop only guards against
/// the negligible chance of drawing zero.
pub fn rand_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, HibeError> {
    loop {
        let mut buf = [0u8; 64];
        rng.try_fill_bytes(&mut buf)?;
        let s = Scalar::from_be_bytes_mod_order(&buf);
        if !s.is_zero() {
            return Ok(s);
        }
    }
}

pub fn rand_g1<R: RngCore + CryptoRng>(rng: &mut R) -> Result<G1, HibeError> {
    let x = rand_scalar(rng)?;
    Ok(G1::generator() * x)
}

pub fn rand_g2<R: RngCore + CryptoRng>(rng: &mut R) -> Result<G2, HibeError> {
    let x = rand_scalar(rng)?;
    Ok(G2::generator() * x)
}

pub fn pair(a: &G1, b: &G2) -> Gt {
    Bn254::pairing((*a).into_affine(), (*b).into_affine())
}

fn fq_to_bytes_be(f: &Fq) -> [u8; UNIT] {
    let mut out = [0u8; UNIT];
    let be = f.into_bigint().to_bytes_be();
    out[UNIT - be.len()..].copy_from_slice(&be);
    out
}

fn fq_from_bytes_be(bytes: &[u8]) -> Fq {
    Fq::from_be_bytes_mod_order(bytes)
}

fn fq2_to_bytes_be(f: &Fq2, out: &mut Vec<u8>) {
    out.extend_from_slice(&fq_to_bytes_be(&f.c0));
    out.extend_from_slice(&fq_to_bytes_be(&f.c1));
}

fn fq2_from_bytes_be(bytes: &[u8]) -> Fq2 {
    Fq2::new(
        fq_from_bytes_be(&bytes[0..UNIT]),
        fq_from_bytes_be(&bytes[UNIT..2 * UNIT]),
    )
}

/// Serialises a `G1` element as its affine `(x, y)` coordinates, big-endian,
/// two units wide. The identity element is encoded as `(0, 0)`.
pub fn g1_to_bytes(p: &G1) -> [u8; G1_BYTES] {
    let mut out = [0u8; G1_BYTES];
    let affine = (*p).into_affine();
    let (x, y) = affine.xy().unwrap_or((Fq::from(0u64), Fq::from(0u64)));
    out[0..UNIT].copy_from_slice(&fq_to_bytes_be(&x));
    out[UNIT..G1_BYTES].copy_from_slice(&fq_to_bytes_be(&y));
    out
}

pub fn g1_from_bytes(bytes: &[u8]) -> Result<G1, HibeError> {
    if bytes.len() != G1_BYTES {
        return Err(HibeError::DecodeError);
    }
    let x = fq_from_bytes_be(&bytes[0..UNIT]);
    let y = fq_from_bytes_be(&bytes[UNIT..G1_BYTES]);
    if x.is_zero() && y.is_zero() {
        return Ok(G1::zero());
    }
    let affine = G1Affine::new_unchecked(x, y);
    if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
        return Err(HibeError::DecodeError);
    }
    Ok(affine.into_group())
}

/// Serialises a `G2` element as its affine `(x, y)` coordinates, each a
/// degree-2 extension-field element, big-endian, four units wide.
pub fn g2_to_bytes(p: &G2) -> [u8; G2_BYTES] {
    let mut out = Vec::with_capacity(G2_BYTES);
    let affine = (*p).into_affine();
    let (x, y) = affine
        .xy()
        .unwrap_or((Fq2::new(Fq::from(0u64), Fq::from(0u64)), Fq2::new(Fq::from(0u64), Fq::from(0u64))));
    fq2_to_bytes_be(&x, &mut out);
    fq2_to_bytes_be(&y, &mut out);
    let mut fixed = [0u8; G2_BYTES];
    fixed.copy_from_slice(&out);
    fixed
}

pub fn g2_from_bytes(bytes: &[u8]) -> Result<G2, HibeError> {
    if bytes.len() != G2_BYTES {
        return Err(HibeError::DecodeError);
    }
    let x = fq2_from_bytes_be(&bytes[0..2 * UNIT]);
    let y = fq2_from_bytes_be(&bytes[2 * UNIT..G2_BYTES]);
    if x.is_zero() && y.is_zero() {
        return Ok(G2::zero());
    }
    let affine = G2Affine::new_unchecked(x, y);
    if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
        return Err(HibeError::DecodeError);
    }
    Ok(affine.into_group())
}

/// Serialises a `GT` element by flattening its degree-12 tower
/// representation into twelve big-endian base-field units, in
/// `c0.c0.c0, c0.c0.c1, c0.c1.c0, c0.c1.c1, c0.c2.c0, c0.c2.c1,
/// c1.c0.c0, ..., c1.c2.c1` order.
pub fn gt_to_bytes(e: &Gt) -> [u8; GT_BYTES] {
    let f: Fq12 = e.0;
    let mut out = Vec::with_capacity(GT_BYTES);
    for c6 in [f.c0, f.c1] {
        for c2 in [c6.c0, c6.c1, c6.c2] {
            out.extend_from_slice(&fq_to_bytes_be(&c2.c0));
            out.extend_from_slice(&fq_to_bytes_be(&c2.c1));
        }
    }
    let mut fixed = [0u8; GT_BYTES];
    fixed.copy_from_slice(&out);
    fixed
}

pub fn gt_from_bytes(bytes: &[u8]) -> Result<Gt, HibeError> {
    if bytes.len() != GT_BYTES {
        return Err(HibeError::DecodeError);
    }
    let mut coeffs = [Fq::from(0u64); 12];
    for (i, c) in coeffs.iter_mut().enumerate() {
        *c = fq_from_bytes_be(&bytes[i * UNIT..(i + 1) * UNIT]);
    }
    let c00 = Fq2::new(coeffs[0], coeffs[1]);
    let c01 = Fq2::new(coeffs[2], coeffs[3]);
    let c02 = Fq2::new(coeffs[4], coeffs[5]);
    let c10 = Fq2::new(coeffs[6], coeffs[7]);
    let c11 = Fq2::new(coeffs[8], coeffs[9]);
    let c12 = Fq2::new(coeffs[10], coeffs[11]);
    let c0 = Fq6::new(c00, c01, c02);
    let c1 = Fq6::new(c10, c11, c12);
    Ok(PairingOutput(Fq12::new(c0, c1)))
}

pub fn scalar_to_bytes(s: &Scalar) -> [u8; UNIT] {
    let mut out = [0u8; UNIT];
    let be = s.into_bigint().to_bytes_be();
    out[UNIT - be.len()..].copy_from_slice(&be);
    out
}

pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar, HibeError> {
    if bytes.len() != UNIT {
        return Err(HibeError::DecodeError);
    }
    Ok(Scalar::from_be_bytes_mod_order(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn g1_round_trip() {
        let mut rng = thread_rng();
        let p = rand_g1(&mut rng).unwrap();
        let bytes = g1_to_bytes(&p);
        let q = g1_from_bytes(&bytes).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn g2_round_trip() {
        let mut rng = thread_rng();
        let p = rand_g2(&mut rng).unwrap();
        let bytes = g2_to_bytes(&p);
        let q = g2_from_bytes(&bytes).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn gt_round_trip() {
        let mut rng = thread_rng();
        let a = rand_g1(&mut rng).unwrap();
        let b = rand_g2(&mut rng).unwrap();
        let e = pair(&a, &b);
        let bytes = gt_to_bytes(&e);
        let e2 = gt_from_bytes(&bytes).unwrap();
        assert_eq!(e, e2);
    }

    #[test]
    fn scalar_round_trip() {
        let mut rng = thread_rng();
        let s = rand_scalar(&mut rng).unwrap();
        let bytes = scalar_to_bytes(&s);
        let s2 = scalar_from_bytes(&bytes).unwrap();
        assert_eq!(s, s2);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(g1_from_bytes(&[0u8; 10]).is_err());
        assert!(g2_from_bytes(&[0u8; 10]).is_err());
        assert!(gt_from_bytes(&[0u8; 10]).is_err());
    }
}

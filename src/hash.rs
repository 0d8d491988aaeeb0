//! Hashing arbitrary bytes into the scalar field and into `GT`.
//!
//! Offered to callers for deriving identity components or other
//! group-valued material from application data; the scheme itself never
//! calls these.

use std::sync::OnceLock;

use ark_ec::Group as _;
use ark_ff::{BigInteger, PrimeField};
use sha2::{Digest, Sha256};

use crate::group::{self, Gt, Scalar, G1, G2};

static BASE_PAIRING: OnceLock<Gt> = OnceLock::new();

/// Hashes `bytes` to a scalar in `[1, p-1]`.
///
/// SHA-256's digest is interpreted as a raw 256-bit big-endian integer,
/// reduced modulo `p - 1` on that raw value, then incremented by one so the
/// result is never zero. The reduction introduces a slight bias towards
/// small values; this is preserved intentionally rather than replaced with a
/// rejection-sampling loop. The reduction must happen before the digest is
/// ever interpreted as a field element: `Scalar`'s own decoding reduces
/// modulo `p`, which is not the same operation and would corrupt digests
/// that fall in `[p, 2^256)`, the common case for a 256-bit digest against
/// this curve's ~254-bit `p`.
pub fn hash_to_zp(bytes: &[u8]) -> Scalar {
    let digest = Sha256::digest(bytes);
    let mut x = [0u8; 32];
    x.copy_from_slice(&digest);
    reduce_digest(x)
}

/// Reduces a raw 256-bit big-endian integer modulo `p - 1`, then adds one.
fn reduce_digest(mut x: [u8; 32]) -> Scalar {
    let modulus = pad32(Scalar::MODULUS.to_bytes_be());
    let p_minus_one = decrement_be(modulus);

    while be_ge(&x, &p_minus_one) {
        be_sub_assign(&mut x, &p_minus_one);
    }

    Scalar::from_be_bytes_mod_order(&x) + Scalar::from(1u64)
}

/// Left-pads `be` with zero bytes to a fixed 32-byte big-endian array.
fn pad32(be: Vec<u8>) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[32 - be.len()..].copy_from_slice(&be);
    out
}

/// Subtracts one from a 32-byte big-endian integer.
fn decrement_be(mut x: [u8; 32]) -> [u8; 32] {
    for byte in x.iter_mut().rev() {
        if *byte == 0 {
            *byte = 0xff;
        } else {
            *byte -= 1;
            break;
        }
    }
    x
}

/// `a >= b` for two 32-byte big-endian integers.
fn be_ge(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a >= b
}

/// `a -= b` for two 32-byte big-endian integers. Caller must ensure `a >= b`.
fn be_sub_assign(a: &mut [u8; 32], b: &[u8; 32]) {
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let diff = a[i] as i16 - b[i] as i16 - borrow;
        if diff < 0 {
            a[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            a[i] = diff as u8;
            borrow = 0;
        }
    }
}

/// Hashes `bytes` to a non-identity element of `GT`.
///
/// Computed as `hash_to_zp(bytes) * e(G1_generator, G2_generator)`, reusing
/// a process-wide cache of the base pairing.
pub fn hash_to_gt(bytes: &[u8]) -> Gt {
    let base = *BASE_PAIRING.get_or_init(|| group::pair(&G1::generator(), &G2::generator()));
    base * hash_to_zp(bytes)
}

//! Ciphertexts, and the `encrypt`/`decrypt` operations.

use rand_core::{CryptoRng, RngCore};

use crate::error::HibeError;
use crate::group::{self, Gt, Scalar, G1, G2};
use crate::keys::PrivateKey;
use crate::params::Params;

/// A message encrypted to a specific identity. Opaque without a matching
/// [`PrivateKey`].
#[derive(Clone, Copy)]
pub struct Ciphertext {
    a: Gt,
    b: G2,
    c: G1,
}

impl Ciphertext {
    /// Marshals this ciphertext as `a || b || c`, big-endian, fixed size.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::group::GT_BYTES + crate::group::G2_BYTES + crate::group::G1_BYTES);
        out.extend_from_slice(&group::gt_to_bytes(&self.a));
        out.extend_from_slice(&group::g2_to_bytes(&self.b));
        out.extend_from_slice(&group::g1_to_bytes(&self.c));
        out
    }

    /// Inverse of [`Ciphertext::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Ciphertext, HibeError> {
        let expected = crate::group::GT_BYTES + crate::group::G2_BYTES + crate::group::G1_BYTES;
        if bytes.len() != expected {
            return Err(HibeError::DecodeError);
        }
        let mut pos = 0;
        let a = group::gt_from_bytes(&bytes[pos..pos + crate::group::GT_BYTES])?;
        pos += crate::group::GT_BYTES;
        let b = group::g2_from_bytes(&bytes[pos..pos + crate::group::G2_BYTES])?;
        pos += crate::group::G2_BYTES;
        let c = group::g1_from_bytes(&bytes[pos..pos + crate::group::G1_BYTES])?;
        Ok(Ciphertext { a, b, c })
    }
}

/// Encrypts `msg` to `identity` under `params`.
///
/// `identity` must be non-empty and no longer than `params.depth()`.
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    params: &Params,
    identity: &[Scalar],
    msg: &Gt,
) -> Result<Ciphertext, HibeError> {
    let f = params.identity_point(identity)?;
    let s = group::rand_scalar(rng)?;

    let a = *msg + params.base_pairing() * s;
    let b = params.g * s;
    let c = f * s;

    Ok(Ciphertext { a, b, c })
}

/// Decrypts `ciphertext` with `key`.
///
/// `key` must have been issued for the same identity `ciphertext` was
/// encrypted to; this is not and cannot be checked here (the scheme is
/// CPA-secure only). A mismatched key or a tampered ciphertext yields an
/// unspecified `GT` element rather than an error.
pub fn decrypt(key: &PrivateKey, ciphertext: &Ciphertext) -> Gt {
    let num = group::pair(&ciphertext.c, &key.a1);
    let den = group::pair(&key.a0, &ciphertext.b);
    ciphertext.a + num - den
}

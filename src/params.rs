//! Public parameters and master key, and the `setup` operation that produces them.

use std::sync::OnceLock;

use rand_core::{CryptoRng, RngCore};

use crate::error::HibeError;
use crate::group::{self, Gt, Scalar, G1, G2};

/// Public parameters shared by every identity in a hierarchy of depth `l`.
///
/// Cloning a `Params` does not carry over the cached pairing; the clone
/// recomputes it lazily on first use.
pub struct Params {
    pub(crate) g: G2,
    pub(crate) g1: G2,
    pub(crate) g2: G1,
    pub(crate) g3: G1,
    pub(crate) h: Vec<G1>,
    pairing: OnceLock<Gt>,
}

impl Clone for Params {
    fn clone(&self) -> Self {
        Params {
            g: self.g,
            g1: self.g1,
            g2: self.g2,
            g3: self.g3,
            h: self.h.clone(),
            pairing: OnceLock::new(),
        }
    }
}

/// Master secret held by the authority. Can derive a private key for any
/// identity via [`crate::keygen_from_master`]. Never marshalled; an authority
/// that needs to persist it does so by whatever means it persists other
/// secrets.
#[derive(Clone, Copy)]
pub struct MasterKey(pub(crate) G1);

impl Params {
    /// Maximum hierarchy depth these parameters support.
    pub fn depth(&self) -> usize {
        self.h.len()
    }

    /// The pairing `e(g2, g1)`, computed once and cached for the lifetime of
    /// this value.
    pub(crate) fn base_pairing(&self) -> Gt {
        *self.pairing.get_or_init(|| group::pair(&self.g2, &self.g1))
    }

    /// `g3 + sum(identity[j] * h[j])`, the point both key generation and
    /// encryption anchor to a given identity. Validates the identity length
    /// against the hierarchy depth.
    pub(crate) fn identity_point(&self, identity: &[Scalar]) -> Result<G1, HibeError> {
        if identity.is_empty() || identity.len() > self.h.len() {
            return Err(HibeError::InvalidIdentity);
        }
        let mut f = self.g3;
        for (ij, hj) in identity.iter().zip(self.h.iter()) {
            f += *hj * *ij;
        }
        Ok(f)
    }

    /// Marshals these parameters as `g || g1 || g2 || g3 || h_1 || ... || h_l`,
    /// big-endian, no framing.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::group::G2_BYTES * 2 + crate::group::G1_BYTES * (2 + self.h.len()));
        out.extend_from_slice(&group::g2_to_bytes(&self.g));
        out.extend_from_slice(&group::g2_to_bytes(&self.g1));
        out.extend_from_slice(&group::g1_to_bytes(&self.g2));
        out.extend_from_slice(&group::g1_to_bytes(&self.g3));
        for hi in &self.h {
            out.extend_from_slice(&group::g1_to_bytes(hi));
        }
        out
    }

    /// Inverse of [`Params::to_bytes`]. The depth `l` is recovered from the
    /// trailing element count; it is not encoded explicitly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Params, HibeError> {
        let fixed = crate::group::G2_BYTES * 2 + crate::group::G1_BYTES * 2;
        if bytes.len() < fixed {
            return Err(HibeError::DecodeError);
        }
        let tail = bytes.len() - fixed;
        if tail % crate::group::G1_BYTES != 0 {
            return Err(HibeError::DecodeError);
        }

        let mut pos = 0;
        let g = group::g2_from_bytes(&bytes[pos..pos + crate::group::G2_BYTES])?;
        pos += crate::group::G2_BYTES;
        let g1 = group::g2_from_bytes(&bytes[pos..pos + crate::group::G2_BYTES])?;
        pos += crate::group::G2_BYTES;
        let g2 = group::g1_from_bytes(&bytes[pos..pos + crate::group::G1_BYTES])?;
        pos += crate::group::G1_BYTES;
        let g3 = group::g1_from_bytes(&bytes[pos..pos + crate::group::G1_BYTES])?;
        pos += crate::group::G1_BYTES;

        let l = tail / crate::group::G1_BYTES;
        let mut h = Vec::with_capacity(l);
        for _ in 0..l {
            h.push(group::g1_from_bytes(&bytes[pos..pos + crate::group::G1_BYTES])?);
            pos += crate::group::G1_BYTES;
        }

        Ok(Params {
            g,
            g1,
            g2,
            g3,
            h,
            pairing: OnceLock::new(),
        })
    }
}

/// Generates fresh public parameters and a matching master key for a
/// hierarchy of at most `l` levels.
pub fn setup<R: RngCore + CryptoRng>(rng: &mut R, l: usize) -> Result<(Params, MasterKey), HibeError> {
    if l == 0 {
        return Err(HibeError::InvalidIdentity);
    }

    let g = group::rand_g2(rng)?;
    let alpha = group::rand_scalar(rng)?;
    let g1 = g * alpha;
    let g2 = group::rand_g1(rng)?;
    let g3 = group::rand_g1(rng)?;

    let mut h = Vec::with_capacity(l);
    for _ in 0..l {
        h.push(group::rand_g1(rng)?);
    }

    let master = MasterKey(g2 * alpha);
    let params = Params {
        g,
        g1,
        g2,
        g3,
        h,
        pairing: OnceLock::new(),
    };

    Ok((params, master))
}

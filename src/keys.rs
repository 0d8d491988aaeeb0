//! Private keys and the two ways to obtain one: from the master key, or by
//! delegation from an ancestor's private key.

use rand_core::{CryptoRng, RngCore};

use crate::error::HibeError;
use crate::group::{self, Scalar, G1, G2};
use crate::params::{MasterKey, Params};

/// A private key for one identity in the hierarchy.
///
/// `b` holds one delegation helper per remaining level; its length is the
/// number of further levels this key can delegate to.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) a0: G1,
    pub(crate) a1: G2,
    pub(crate) b: Vec<G1>,
}

impl PrivateKey {
    /// Number of levels below this key's identity that remain delegatable.
    pub fn depth_left(&self) -> usize {
        self.b.len()
    }

    /// Marshals this key as `a0 || a1 || b_{k+1} || ... || b_l`, big-endian,
    /// no framing.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::group::G1_BYTES * (1 + self.b.len()) + crate::group::G2_BYTES);
        out.extend_from_slice(&group::g1_to_bytes(&self.a0));
        out.extend_from_slice(&group::g2_to_bytes(&self.a1));
        for bi in &self.b {
            out.extend_from_slice(&group::g1_to_bytes(bi));
        }
        out
    }

    /// Inverse of [`PrivateKey::to_bytes`]. `depth_left` is recovered from
    /// the trailing element count.
    pub fn from_bytes(bytes: &[u8]) -> Result<PrivateKey, HibeError> {
        let fixed = crate::group::G1_BYTES + crate::group::G2_BYTES;
        if bytes.len() < fixed {
            return Err(HibeError::DecodeError);
        }
        let tail = bytes.len() - fixed;
        if tail % crate::group::G1_BYTES != 0 {
            return Err(HibeError::DecodeError);
        }

        let mut pos = 0;
        let a0 = group::g1_from_bytes(&bytes[pos..pos + crate::group::G1_BYTES])?;
        pos += crate::group::G1_BYTES;
        let a1 = group::g2_from_bytes(&bytes[pos..pos + crate::group::G2_BYTES])?;
        pos += crate::group::G2_BYTES;

        let remaining = tail / crate::group::G1_BYTES;
        let mut b = Vec::with_capacity(remaining);
        for _ in 0..remaining {
            b.push(group::g1_from_bytes(&bytes[pos..pos + crate::group::G1_BYTES])?);
            pos += crate::group::G1_BYTES;
        }

        Ok(PrivateKey { a0, a1, b })
    }
}

/// Derives a private key for `identity` directly from the master key.
///
/// `identity` must be non-empty and no longer than `params.depth()`.
pub fn keygen_from_master<R: RngCore + CryptoRng>(
    rng: &mut R,
    params: &Params,
    master: &MasterKey,
    identity: &[Scalar],
) -> Result<PrivateKey, HibeError> {
    let f = params.identity_point(identity)?;
    let r = group::rand_scalar(rng)?;

    let a0 = master.0 + f * r;
    let a1 = params.g * r;
    let b = params.h[identity.len()..]
        .iter()
        .map(|hj| *hj * r)
        .collect();

    Ok(PrivateKey { a0, a1, b })
}

/// Delegates `parent`'s key to a strictly longer `identity`.
///
/// `identity` must share `parent`'s identity as a prefix; since a
/// [`PrivateKey`] does not itself record the identity it was issued for,
/// this is enforced only by construction (the caller passes the correct
/// suffix via `parent.b`) and by length (`identity.len()` must exceed the
/// depth the parent key was issued at, i.e. `parent.depth_left()` must be
/// able to reach it).
pub fn keygen_from_parent<R: RngCore + CryptoRng>(
    rng: &mut R,
    params: &Params,
    parent: &PrivateKey,
    identity: &[Scalar],
) -> Result<PrivateKey, HibeError> {
    let parent_depth = params.depth() - parent.depth_left();
    if identity.len() <= parent_depth || identity.len() > params.depth() {
        return Err(HibeError::InvalidIdentity);
    }

    let f = params.identity_point(identity)?;
    let suffix = &identity[parent_depth..];

    let mut a0 = parent.a0;
    for (ij, bj) in suffix.iter().zip(parent.b.iter()) {
        a0 += *bj * *ij;
    }

    let r_prime = group::rand_scalar(rng)?;
    a0 += f * r_prime;
    let a1 = parent.a1 + params.g * r_prime;

    let b = params.h[identity.len()..]
        .iter()
        .zip(&parent.b[suffix.len()..])
        .map(|(hj, bj)| *bj + *hj * r_prime)
        .collect();

    Ok(PrivateKey { a0, a1, b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::setup;
    use rand::thread_rng;

    #[test]
    fn depth_accounting() {
        let mut rng = thread_rng();
        let (params, master) = setup(&mut rng, 4).unwrap();
        let id = vec![Scalar::from(1u64), Scalar::from(2u64)];
        let key = keygen_from_master(&mut rng, &params, &master, &id).unwrap();
        assert_eq!(key.depth_left(), 2);

        let child_id = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)];
        let child = keygen_from_parent(&mut rng, &params, &key, &child_id).unwrap();
        assert_eq!(child.depth_left(), 1);
    }

    #[test]
    fn keygen_from_master_rejects_empty_identity() {
        let mut rng = thread_rng();
        let (params, master) = setup(&mut rng, 4).unwrap();
        assert!(keygen_from_master(&mut rng, &params, &master, &[]).is_err());
    }

    #[test]
    fn keygen_from_master_rejects_overlong_identity() {
        let mut rng = thread_rng();
        let (params, master) = setup(&mut rng, 2).unwrap();
        let id = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)];
        assert!(keygen_from_master(&mut rng, &params, &master, &id).is_err());
    }

    #[test]
    fn keygen_from_parent_rejects_non_extension() {
        let mut rng = thread_rng();
        let (params, master) = setup(&mut rng, 4).unwrap();
        let id = vec![Scalar::from(1u64), Scalar::from(2u64)];
        let key = keygen_from_master(&mut rng, &params, &master, &id).unwrap();
        assert!(keygen_from_parent(&mut rng, &params, &key, &id).is_err());
    }

    #[test]
    fn key_round_trip() {
        let mut rng = thread_rng();
        let (params, master) = setup(&mut rng, 3).unwrap();
        let id = vec![Scalar::from(1u64)];
        let key = keygen_from_master(&mut rng, &params, &master, &id).unwrap();
        let bytes = key.to_bytes();
        let restored = PrivateKey::from_bytes(&bytes).unwrap();
        assert_eq!(restored.to_bytes(), bytes);
        assert_eq!(restored.depth_left(), 2);
    }
}

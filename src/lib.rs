//! Hierarchical Identity Based Encryption on the [BN254 pairing-friendly elliptic curve](https://github.com/arkworks-rs/curves).
//!
//! A trusted authority runs [`setup`] once to produce public [`Params`] and a
//! [`MasterKey`]. From there:
//!
//! * [`keygen_from_master`] derives a [`PrivateKey`] for any identity directly
//!   from the master key.
//! * [`keygen_from_parent`] lets the holder of a key delegate a key for any
//!   descendant identity, without involving the authority again.
//! * [`encrypt`] encrypts a [`Gt`] message to an identity using only `Params`.
//! * [`decrypt`] recovers the message with a matching [`PrivateKey`].
//!
//! The scheme is CPA-secure only; `decrypt` never fails; a mismatched key or
//! tampered ciphertext simply yields an unspecified element of `GT`.

mod ciphertext;
mod error;
mod group;
mod hash;
mod keys;
mod params;

pub use ciphertext::{decrypt, encrypt, Ciphertext};
pub use error::HibeError;
pub use group::{Gt, Scalar};
pub use hash::{hash_to_gt, hash_to_zp};
pub use keys::{keygen_from_master, keygen_from_parent, PrivateKey};
pub use params::{setup, MasterKey, Params};

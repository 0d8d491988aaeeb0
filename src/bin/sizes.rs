//! This binary prints the marshalled sizes of the public parameters, a
//! private key, and a ciphertext for a representative hierarchy depth.
//!
//! The master key is never marshalled by this crate and so has no byte size
//! to report.

use hibe::{encrypt, hash_to_gt, keygen_from_master, setup, Scalar};

fn main() {
    let mut rng = rand::thread_rng();
    let l = 10;

    let (params, master) = setup(&mut rng, l).unwrap();
    let id = vec![Scalar::from(1u64), Scalar::from(2u64)];
    let key = keygen_from_master(&mut rng, &params, &master, &id).unwrap();

    let msg = hash_to_gt(b"hibe sizes diagnostic");
    let ct = encrypt(&mut rng, &params, &id, &msg).unwrap();

    println!("Sizes in bytes (l = {l}):\n");
    println!("Params:\t{}", params.to_bytes().len());
    println!("PrivateKey (depth 2):\t{}", key.to_bytes().len());
    println!("Ciphertext:\t{}", ct.to_bytes().len());
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha3::{
    Sha3_256,
    Sha3_512,
    Digest
};
use crate::curve::*;
use crate::errors::SignatureError;

///Hash bytes to bytes (SHA3-256).
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::default();
    hasher.update(msg);
    return hasher.finalize().into();
}

///Hash bytes to 64 bytes (SHA3-512).
pub fn h_wide(msg: &[u8]) -> [u8; 64] {
    let mut hasher = Sha3_512::default();
    hasher.update(msg);
    return hasher.finalize().into();
}

///Hash bytes to elliptic curve point.
///
///The first 32 bytes of the SHA3-512 digest are reduced modulo `n` to `k`, and `k * G` is returned.
///The discrete log of the result with respect to `G` is therefore `k`, which anyone can compute.
///Existing signatures depend on this exact construction.
pub fn h_point(msg: &[u8]) -> Result<ProjectivePoint, SignatureError> {
    let wide = h_wide(msg);
    let mut head = [0u8; 32];
    head.copy_from_slice(&wide[..32]);

    let k = reduce_scalar(&head);
    if bool::from(k.is_zero()) {
        return Err(SignatureError::CryptoOperation("hash to point reached the point at infinity".to_string()))
    }
    return Ok(G * k);
}

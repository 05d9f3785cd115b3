/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{thread_rng, RngCore, CryptoRng};
use zeroize::Zeroize;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::SignatureError;
use crate::signature::get_key_image;

///A key image: the linking tag of a ring signature.
///
///Two key images computed over the same ring (in the same order) and the same case identifier
///are equal if and only if they were computed from the same private key.
pub type KeyImage = CurvePoint;

///A private key and its public key.
///
///The private key is cleared from memory when the `KeyPair` is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: Scalar,
    pub public_key: CurvePoint

} impl KeyPair {
    ///Generate a new random key pair.
    pub fn generate() -> Self {
        return Self::generate_with(&mut thread_rng())
    }

    ///Generate a new random key pair from the given generator.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let private_key = random_scalar_with(rng);
            //never None for a non-zero scalar
            if let Some(public_key) = from_projective(&(G * private_key)) {
                return Self{private_key, public_key}
            }
        }
    }

    ///Rebuild a key pair from its private key.
    pub fn from_private_key(private_key: Scalar) -> Result<Self, SignatureError> {
        if bool::from(private_key.is_zero()) {
            return Err(SignatureError::InputValidation("private key must not be zero".to_string()))
        }
        let public_key = base_mul(&private_key)?;
        return Ok(Self{private_key, public_key})
    }

    ///Return the key image of this key pair for a given ring and case identifier.
    pub fn key_image(&self, ring: &Ring, case_id: &[u8]) -> Result<KeyImage, SignatureError> {
        return get_key_image(&self.private_key, ring, case_id)
    }

} impl Drop for KeyPair {
    fn drop(&mut self) {
        //clear the private key from memory
        self.private_key.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for KeyPair {}

///A Ring represents the ordered public keys which a ring signature is made over.
///
///This is a wrapper type for `Vec<CurvePoint>`.
///The internal `Vec` can be accessed with `ring.0`.
///
///The order of the members is part of the ring:
///the same keys in a different order give different signatures and different key images.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ring(pub Vec<CurvePoint>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Creates a ring from public keys, keeping their order.
    pub fn from_public_keys(public_keys: Vec<CurvePoint>) -> Self {
        return Self(public_keys);
    }

    ///Appends a public key to the ring.
    pub fn push(&mut self, value: CurvePoint) {
        self.0.push(value);
    }

    ///Inserts a public key at position `index` within the ring, shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, element: CurvePoint) {
        self.0.insert(index, element);
    }

    pub fn len(&self) -> usize {
        return self.0.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }

    ///Returns the index of `public_key` within the ring, if it is a member.
    pub fn position(&self, public_key: &CurvePoint) -> Option<usize> {
        return self.0.iter().position(|member| member == public_key);
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Ring {}

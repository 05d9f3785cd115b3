/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use log::{debug, trace};
use rand::{thread_rng, RngCore, CryptoRng};
use zeroize::Zeroize;

use crate::internal_common::*;
use super::signature_utils::*;

///The smallest ring which can be signed over.
pub const MIN_RING_SIZE: usize = 2;

///A linkable ring signature.
///
///LSAG stands for "Linkable Spontaneous Anonymous Group (signature)"
///
///`checksum` is the first challenge of the ring (`c_0`),
///and `signatures` holds one response scalar per ring member, in ring order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingSignature {
    pub key_image: KeyImage,
    pub checksum: [u8; 32],
    pub signatures: Vec<Scalar>

} impl RingSignature {
    ///Create a signature given a ring, a private key, the index of its public key within the ring,
    ///a message, and a case identifier.
    ///
    ///It is up to the caller to make sure that `ring.0[signer_index]` is the public key of `private_key`.
    ///If it is not, a signature is still returned, but it will not verify.
    ///
    ///Return a signature if signing was successful,
    ///or `SignatureError` if an error occurred.
    pub fn sign(
        ring: &Ring, private_key: &Scalar, signer_index: usize, msg: &[u8], case_id: &[u8]
    ) -> Result<Self, SignatureError> {
        return Self::sign_with_rng(&mut thread_rng(), ring, private_key, signer_index, msg, case_id)
    }

    ///Same as `sign`, except the signer's position in the ring is found automatically.
    ///
    ///Returns `SignatureError::SignerNotInRing` if the public key of `private_key` is not in the ring.
    pub fn sign_for_key(
        ring: &Ring, private_key: &Scalar, msg: &[u8], case_id: &[u8]
    ) -> Result<Self, SignatureError> {
        let public_key = base_mul(private_key)?;
        let signer_index = match ring.position(&public_key) {
            Some(index) => index,
            None => return Err(SignatureError::SignerNotInRing)
        };
        return Self::sign(ring, private_key, signer_index, msg, case_id)
    }

    ///Same as `sign`, using `rng` for the nonce and the decoy responses.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R, ring: &Ring, private_key: &Scalar, signer_index: usize, msg: &[u8], case_id: &[u8]
    ) -> Result<Self, SignatureError> {
        let n = ring.len();
        if n < MIN_RING_SIZE {
            return Err(SignatureError::InputValidation(format!("ring size must be at least {}, got {}", MIN_RING_SIZE, n)))
        }
        if signer_index >= n {
            return Err(SignatureError::InputValidation(format!("signer index {} is out of range for a ring of size {}", signer_index, n)))
        }
        let j = signer_index;
        trace!("signing over a ring of {} keys", n);

        let ring_points = decode_ring(ring)?;
        let ring_digest = ring_digest(ring);
        let message_digest = h_bytes(msg);

        let h = key_image_base(&ring_digest, case_id)?;
        let (key_image_point, key_image) = key_image_from_base(private_key, &h)?;
        let encoded_key_image = key_image.encode();

        let mut c: Vec<[u8; 32]> = vec!([0u8; 32]; n);
        let mut s: Vec<Scalar> = vec!(Scalar::ZERO; n);

        //compute starting values
        let mut u = random_scalar_with(rng);
        c[(j + 1) % n] = challenge(&ring_digest, &encoded_key_image, &message_digest, &(G * u), &(h * u))?;

        //travel around the ring, starting just after the signer
        for step in 1..n {
            let i = (j + step) % n;
            s[i] = random_scalar_with(rng);
            let c_i = reduce_scalar(&c[i]);

            //(s[i] * G) + (c[i] * ring[i])
            let left = (G * s[i]) + (ring_points[i] * c_i);
            //(s[i] * h) + (c[i] * key_image)
            let right = (h * s[i]) + (key_image_point * c_i);

            c[(i + 1) % n] = challenge(&ring_digest, &encoded_key_image, &message_digest, &left, &right)?;
        }
        //close the ring
        s[j] = u - (*private_key * reduce_scalar(&c[j]));

        u.zeroize();

        return Ok(Self{
            key_image,
            checksum: c[0],
            signatures: s
        })
    }

    ///Given a signature, the ring, the message, and the case identifier, check if it's valid.
    ///
    ///Returns `Ok(true)` if the signature is valid, `Ok(false)` if it is not,
    ///or `Err(SignatureError)` if the inputs are malformed.
    ///
    ///Note that this will fail unless the ring is in the **exact** same order as when it was signed.
    pub fn verify(
        signature: &RingSignature, ring: &Ring, msg: &[u8], case_id: &[u8]
    ) -> Result<bool, SignatureError> {
        let RingSignature{
            key_image,
            checksum,
            signatures: s
        } = signature;

        let n = ring.len();
        if n < MIN_RING_SIZE {
            return Err(SignatureError::InputValidation(format!("ring size must be at least {}, got {}", MIN_RING_SIZE, n)))
        }
        if s.len() != n {
            return Err(SignatureError::InputValidation(format!("{} scalars for a ring of size {}", s.len(), n)))
        }

        let ring_points = decode_ring(ring)?;
        if !validate(key_image) {
            return Err(SignatureError::InvalidKeyImage)
        }
        let key_image_point = to_projective(key_image).ok_or(SignatureError::InvalidKeyImage)?;
        let encoded_key_image = key_image.encode();

        let ring_digest = ring_digest(ring);
        let message_digest = h_bytes(msg);
        let h = key_image_base(&ring_digest, case_id)?;

        //travel around the ring
        let mut c = *checksum;
        for i in 0..n {
            let c_i = reduce_scalar(&c);
            let left = (G * s[i]) + (ring_points[i] * c_i);
            let right = (h * s[i]) + (key_image_point * c_i);

            c = match challenge(&ring_digest, &encoded_key_image, &message_digest, &left, &right) {
                Ok(next) => next,
                Err(_) => {
                    //only reachable with deliberately crafted responses
                    debug!("ring signature commitment {} is the point at infinity", i);
                    return Ok(false)
                }
            };
        }

        //check if we end up back where we started
        if c != *checksum {
            debug!("ring signature checksum mismatch: computed {}, expected {}", hex::encode(c), hex::encode(checksum));
            return Ok(false)
        }
        return Ok(true)
    }

    ///Encode as `checksum || s_0 || ... || s_(n-1)`.
    ///
    ///The key image is not included; it is transmitted separately.
    pub fn to_wire_bytes(&self) -> Vec<u8> {
        let mut encoded: Vec<u8> = Vec::with_capacity(32 * (self.signatures.len() + 1));
        encoded.extend_from_slice(&self.checksum);
        for scalar in &self.signatures {
            encoded.extend_from_slice(&encode_scalar(scalar));
        }
        return encoded
    }

    ///Decode `checksum || s_0 || ... || s_(n-1)`, the inverse of `to_wire_bytes`.
    ///
    ///The ring size is inferred from the length of `bytes`.
    pub fn from_wire_bytes(key_image: KeyImage, bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() < 2 * COORDINATE_LENGTH || bytes.len() % COORDINATE_LENGTH != 0 {
            return Err(SerializationError::DecodingError)
        }
        let mut checksum = [0u8; 32];
        checksum.copy_from_slice(&bytes[..COORDINATE_LENGTH]);

        let mut signatures: Vec<Scalar> = Vec::with_capacity(bytes.len() / COORDINATE_LENGTH - 1);
        for chunk in bytes[COORDINATE_LENGTH..].chunks(COORDINATE_LENGTH) {
            signatures.push(decode_scalar(chunk)?);
        }
        return Ok(Self{key_image, checksum, signatures})
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RingSignature {}

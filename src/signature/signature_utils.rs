/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///concatenate the 64-byte encodings of all ring members, in ring order
pub(crate) fn encode_ring(ring: &Ring) -> Vec<u8> {
    let mut encoded: Vec<u8> = Vec::with_capacity(ring.len() * POINT_LENGTH);
    for member in &ring.0 {
        encoded.extend_from_slice(&member.encode());
    }
    return encoded
}

///hash of all ring members, in ring order
pub(crate) fn ring_digest(ring: &Ring) -> [u8; 32] {
    return h_bytes(&encode_ring(ring))
}

///the base point `h` which key images are computed over
pub(crate) fn key_image_base(ring_digest: &[u8; 32], case_id: &[u8]) -> Result<ProjectivePoint, SignatureError> {
    return h_point(&[ring_digest.as_slice(), case_id].concat())
}

///convert the ring to projective points, checking that every member is on the curve
pub(crate) fn decode_ring(ring: &Ring) -> Result<Vec<ProjectivePoint>, SignatureError> {
    let mut points: Vec<ProjectivePoint> = Vec::with_capacity(ring.len());
    for (i, member) in ring.0.iter().enumerate() {
        if !validate(member) {
            return Err(SignatureError::InvalidPublicKey(i))
        }
        match to_projective(member) {
            Some(point) => points.push(point),
            None => return Err(SignatureError::InvalidPublicKey(i))
        }
    }
    return Ok(points)
}

///`private_key * h`, as both a projective point and affine coordinates
pub(crate) fn key_image_from_base(private_key: &Scalar, base: &ProjectivePoint) -> Result<(ProjectivePoint, KeyImage), SignatureError> {
    let point = base * private_key;
    let key_image = from_projective(&point).ok_or(SignatureError::InvalidKeyImage)?;
    if !validate(&key_image) {
        return Err(SignatureError::InvalidKeyImage)
    }
    return Ok((point, key_image))
}

///Given a private key, the ring, and a case identifier, return the key image.
///
///`key_image = private_key * h_point(ring_digest || case_id)`
///
///The ring is hashed in the order given; reordering it changes the key image.
pub fn get_key_image(private_key: &Scalar, ring: &Ring, case_id: &[u8]) -> Result<KeyImage, SignatureError> {
    let base = key_image_base(&ring_digest(ring), case_id)?;
    let (_, key_image) = key_image_from_base(private_key, &base)?;
    return Ok(key_image)
}

///The challenge hash of one step around the ring.
///
///`H(ring_digest || key_image || left || right || message_digest)`, points as 64-byte `x || y`
pub(crate) fn challenge(
    ring_digest: &[u8; 32], encoded_key_image: &[u8; POINT_LENGTH], message_digest: &[u8; 32], left: &ProjectivePoint, right: &ProjectivePoint
) -> Result<[u8; 32], SignatureError> {
    let left = encode_point(left)?;
    let right = encode_point(right)?;
    return Ok(h_bytes(&[
        ring_digest.as_slice(), encoded_key_image, &left, &right, message_digest
    ].concat()))
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Text encodings for keys, key images, and signatures.
//!
//!Keys are armored PEM-style around their raw bytes
//!(a 32-byte big-endian scalar, or a 64-byte `x || y` point),
//!and the armored text is base64 encoded again for transport.
//!Key images are sent as 128 hex characters,
//!and signatures as base64 of `checksum || s_0 || ... || s_(n-1)`.

use base64::{
    Engine as _,
    engine::general_purpose::STANDARD
};

use pem::{EncodeConfig, LineEnding, Pem};

use crate::internal_common::*;
use crate::signature::RingSignature;

const PUBLIC_LABEL: &str = "PUBLIC KEY";
const PRIVATE_LABEL: &str = "PRIVATE KEY";

///Wrap raw key bytes as `-----BEGIN <label>-----` / base64 body / `-----END <label>-----`.
///
///Lines are `\n` separated and there is no trailing newline.
fn to_pem(bytes: &[u8], label: &str) -> String {
    let armored = pem::encode_config(
        &Pem::new(label, bytes.to_vec()),
        EncodeConfig{line_ending: LineEnding::LF}
    );
    return armored.trim_end().to_string()
}

///Extract the raw key bytes from PEM-style text. Either label is accepted.
fn from_pem(armored: &str) -> Result<Vec<u8>, SerializationError> {
    let parsed = pem::parse(armored.trim()).map_err(|_| SerializationError::DecodingError)?;
    if parsed.tag() != PUBLIC_LABEL && parsed.tag() != PRIVATE_LABEL {
        return Err(SerializationError::DecodingError)
    }
    return Ok(parsed.into_contents())
}

///Base64 encode text for transport.
pub fn to_transport(text: &str) -> String {
    return STANDARD.encode(text.as_bytes())
}

///Inverse of `to_transport`.
pub fn from_transport(encoded: &str) -> Result<String, SerializationError> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|_| SerializationError::DecodingError)?;
    return String::from_utf8(bytes).map_err(|_| SerializationError::DecodingError)
}

///Armor a public key.
pub fn public_key_to_pem(public_key: &CurvePoint) -> String {
    return to_pem(&public_key.encode(), PUBLIC_LABEL)
}

///Armor a private key.
pub fn private_key_to_pem(private_key: &Scalar) -> String {
    return to_pem(&encode_scalar(private_key), PRIVATE_LABEL)
}

///Read an armored public key. The point must be on the curve.
pub fn public_key_from_pem(pem: &str) -> Result<CurvePoint, SerializationError> {
    let point = CurvePoint::decode(&from_pem(pem)?)?;
    if !validate(&point) {
        return Err(SerializationError::DecodingError)
    }
    return Ok(point)
}

///Read an armored private key. The scalar must be canonical and non-zero.
pub fn private_key_from_pem(pem: &str) -> Result<Scalar, SerializationError> {
    let scalar = decode_scalar(&from_pem(pem)?)?;
    if bool::from(scalar.is_zero()) {
        return Err(SerializationError::DecodingError)
    }
    return Ok(scalar)
}

///Public key in transport form: base64 of the armored key.
pub fn encode_public_key(public_key: &CurvePoint) -> String {
    return to_transport(&public_key_to_pem(public_key))
}

///Inverse of `encode_public_key`.
pub fn decode_public_key(encoded: &str) -> Result<CurvePoint, SerializationError> {
    return public_key_from_pem(&from_transport(encoded)?)
}

///Private key in transport form: base64 of the armored key.
pub fn encode_private_key(private_key: &Scalar) -> String {
    return to_transport(&private_key_to_pem(private_key))
}

///Inverse of `encode_private_key`.
pub fn decode_private_key(encoded: &str) -> Result<Scalar, SerializationError> {
    return private_key_from_pem(&from_transport(encoded)?)
}

///Decode a list of transport-form public keys into a ring, keeping their order.
pub fn decode_ring(encoded: &[String]) -> Result<Ring, SerializationError> {
    let mut ring = Ring::new();
    for key in encoded {
        ring.push(decode_public_key(key)?);
    }
    return Ok(ring)
}

///Key image as 128 lowercase hex characters (`x || y`).
pub fn encode_key_image(key_image: &KeyImage) -> String {
    return hex::encode(key_image.encode())
}

///Inverse of `encode_key_image`.
///
///Only the format is checked here; whether the point is on the curve is checked during verification.
pub fn decode_key_image(encoded: &str) -> Result<KeyImage, SerializationError> {
    if encoded.len() != 2 * POINT_LENGTH {
        return Err(SerializationError::DecodingError)
    }
    let bytes = hex::decode(encoded).map_err(|_| SerializationError::DecodingError)?;
    return CurvePoint::decode(&bytes)
}

///Signature in transport form: base64 of `checksum || s_0 || ... || s_(n-1)`.
pub fn encode_signature(signature: &RingSignature) -> String {
    return STANDARD.encode(signature.to_wire_bytes())
}

///Inverse of `encode_signature`, given the transport form of the key image.
pub fn decode_signature(encoded_key_image: &str, encoded: &str) -> Result<RingSignature, SerializationError> {
    let key_image = decode_key_image(encoded_key_image)?;
    let bytes = STANDARD.decode(encoded.trim()).map_err(|_| SerializationError::DecodingError)?;
    return RingSignature::from_wire_bytes(key_image, &bytes)
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants (secp256k1)
//!
//! This is the only module which talks to `k256` directly for group operations.
//! Everything else in the crate works on `CurvePoint` (plain affine coordinates)
//! and `Scalar`, going through the functions below.

use crate::errors::{SerializationError, SignatureError};
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;
use serde::{Serialize, Deserialize};

use k256::{
    AffinePoint,
    EncodedPoint,
    FieldBytes,
    NonZeroScalar,
    U256,
    elliptic_curve::{
        PrimeField,
        ops::Reduce,
        sec1::{FromEncodedPoint, ToEncodedPoint}
    }
};
pub use k256::{Scalar, ProjectivePoint};
use rand::{thread_rng, RngCore, CryptoRng};

///Byte width of a single field element or scalar.
pub const COORDINATE_LENGTH: usize = 32;
///Byte width of an encoded point: `x || y`, both big-endian.
pub const POINT_LENGTH: usize = 2 * COORDINATE_LENGTH;

///The field prime `p`, big-endian.
pub const FIELD_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f
];

///The group order `n`, big-endian.
pub const GROUP_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41
];

///The basepoint of the elliptic curve, as a projective point for arithmetic.
///To access the affine coordinates, use `G_POINT`.
pub const G: ProjectivePoint = ProjectivePoint::GENERATOR;

///The basepoint of the elliptic curve, as affine coordinates.
pub const G_POINT: CurvePoint = CurvePoint {
    x: [
        0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac,
        0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
        0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9,
        0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98
    ],
    y: [
        0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65,
        0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
        0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19,
        0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8
    ]
};

///An affine point given by its raw big-endian coordinates.
///
///A `CurvePoint` is not guaranteed to be on the curve:
///values decoded from untrusted input must go through `validate` (or `to_projective`)
///before they are used. All points produced by this crate are valid.
///
///secp256k1 has cofactor 1, so every point on the curve is in the prime-order subgroup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    pub x: [u8; 32],
    pub y: [u8; 32]

} impl CurvePoint {
    ///Create a point from raw coordinates. No validation is done.
    pub fn from_coordinates(x: [u8; 32], y: [u8; 32]) -> Self {
        return Self{x, y}
    }

    ///Return `x || y`, 64 bytes.
    pub fn encode(&self) -> [u8; POINT_LENGTH] {
        let mut encoded = [0u8; POINT_LENGTH];
        encoded[..COORDINATE_LENGTH].copy_from_slice(&self.x);
        encoded[COORDINATE_LENGTH..].copy_from_slice(&self.y);
        return encoded
    }

    ///Split 64 bytes into coordinates. No validation is done beyond the length.
    pub fn decode(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != POINT_LENGTH {
            return Err(SerializationError::DecodingError)
        }
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[..COORDINATE_LENGTH]);
        y.copy_from_slice(&bytes[COORDINATE_LENGTH..]);
        return Ok(Self{x, y})
    }

    ///Shorthand for `validate(self)`.
    pub fn is_valid(&self) -> bool {
        return validate(self)
    }
}

///Check that `0 <= x, y < p` and that `y^2 = x^3 + 7 (mod p)`.
pub fn validate(point: &CurvePoint) -> bool {
    //big-endian byte arrays compare the same way as the integers they encode
    if point.x >= FIELD_PRIME || point.y >= FIELD_PRIME {
        return false
    }
    return to_projective(point).is_some()
}

///Convert to a projective point, or `None` if the point is not on the curve.
pub fn to_projective(point: &CurvePoint) -> Option<ProjectivePoint> {
    let encoded = EncodedPoint::from_affine_coordinates(
        &FieldBytes::from(point.x), &FieldBytes::from(point.y), false
    );
    let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
    return affine.map(ProjectivePoint::from)
}

///Convert a projective point to affine coordinates, or `None` for the point at infinity.
pub fn from_projective(point: &ProjectivePoint) -> Option<CurvePoint> {
    let encoded = point.to_affine().to_encoded_point(false);
    return match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => {
            let mut point = CurvePoint{x: [0u8; 32], y: [0u8; 32]};
            point.x.copy_from_slice(x);
            point.y.copy_from_slice(y);
            Some(point)
        },
        _ => None
    }
}

///Encode a projective point to the 64-byte hashing form.
///The point at infinity has no such encoding.
pub fn encode_point(point: &ProjectivePoint) -> Result<[u8; POINT_LENGTH], SignatureError> {
    return match from_projective(point) {
        Some(point) => Ok(point.encode()),
        None => Err(SignatureError::CryptoOperation("point at infinity has no affine encoding".to_string()))
    }
}

///`P + Q`
pub fn add(p: &CurvePoint, q: &CurvePoint) -> Result<CurvePoint, SignatureError> {
    let (p, q) = match (to_projective(p), to_projective(q)) {
        (Some(p), Some(q)) => (p, q),
        _ => return Err(SignatureError::CryptoOperation("point addition on invalid point".to_string()))
    };
    return from_projective(&(p + q))
        .ok_or(SignatureError::CryptoOperation("point addition produced the point at infinity".to_string()))
}

///`k * P`
pub fn scalar_mul(point: &CurvePoint, k: &Scalar) -> Result<CurvePoint, SignatureError> {
    let point = to_projective(point)
        .ok_or(SignatureError::CryptoOperation("scalar multiplication on invalid point".to_string()))?;
    return from_projective(&(point * k))
        .ok_or(SignatureError::CryptoOperation("scalar multiplication produced the point at infinity".to_string()))
}

///`k * G`, for `k != 0`
pub fn base_mul(k: &Scalar) -> Result<CurvePoint, SignatureError> {
    return from_projective(&(G * k))
        .ok_or(SignatureError::CryptoOperation("scalar multiplication produced the point at infinity".to_string()))
}

///Reduce 32 big-endian bytes modulo `n`.
pub fn reduce_scalar(bytes: &[u8; 32]) -> Scalar {
    return <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*bytes))
}

///Encode a scalar as 32 big-endian bytes.
pub fn encode_scalar(scalar: &Scalar) -> [u8; 32] {
    return scalar.to_bytes().into()
}

///Decode 32 big-endian bytes into a scalar.
///Values `>= n` are rejected rather than reduced.
pub fn decode_scalar(bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let bytes = <[u8; COORDINATE_LENGTH]>::try_from(bytes).map_err(|_| SerializationError::DecodingError)?;
    let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(bytes)).into();
    return scalar.ok_or(SerializationError::DecodingError)
}

///return a random scalar, uniform in `[1, n-1]`
pub fn random_scalar() -> Scalar {
    return random_scalar_with(&mut thread_rng())
}

///return a random scalar in `[1, n-1]` from the given generator
pub fn random_scalar_with<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    return *NonZeroScalar::random(rng)
}

///return a random point on the curve
pub fn random_point() -> CurvePoint {
    loop {
        if let Ok(point) = base_mul(&random_scalar()) {
            return point
        }
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for CurvePoint {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.encode().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let point = Self::decode(bytes)?;
        if !validate(&point) {
            return Err(SerializationError::DecodingError)
        }
        return Ok(point)
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Ring signature errors
///
///Note that an invalid signature is not an error:
///verification returns `Ok(false)` for a well-formed signature which does not verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The inputs are inconsistent: ring too small, signer index out of range,
    ///or the number of scalars does not match the ring.
    InputValidation(String),
    ///The ring member at this index is not a valid curve point.
    InvalidPublicKey(usize),
    ///The key image is not a valid curve point.
    InvalidKeyImage,
    ///The public key of the signing key is not in the ring.
    SignerNotInRing,
    ///Unexpected arithmetic failure, such as reaching the point at infinity.
    CryptoOperation(String)

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self{
            Self::InputValidation(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidPublicKey(index) => write!(f, "Invalid public key at index {}.", index),
            Self::InvalidKeyImage => write!(f, "The key image is not a valid curve point."),
            Self::SignerNotInRing => write!(f, "Private key does not match any public key in the ring."),
            Self::CryptoOperation(msg) => write!(f, "Cryptographic operation failed: {}", msg),
        }
    }

} impl Error for SignatureError {}

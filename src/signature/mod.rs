/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Linkable ring signatures
//!
//!Given a ring of public keys and the private key of one of them,
//!create a ring signature which proves that:
//! 1. some member of the ring authorized the signature, without revealing which one
//! 2. the key image (accessible with `signature.key_image`) is correct for the ring and case identifier
//!
//!Key images are scoped: the same private key gives the same key image for the same ring and case identifier,
//!and unrelated key images otherwise.
//!Keeping track of which key images were already used is left to the caller.

mod lsag;
mod signature_utils;

pub use lsag::{RingSignature, MIN_RING_SIZE};
pub use signature_utils::get_key_image;

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Linkable ring signatures over secp256k1.
//!
//! A member of a fixed, public set of authority keys signs a value (typically a freshly
//! generated one-time voting key) so that
//! anyone can check that *some* member of the set signed it,
//! nobody learns *which* member signed it,
//! and signing twice with the same key under the same case identifier is detectable
//! through the key image.


//internal modules
mod types;
pub use types::*;
mod tobytes;
#[cfg(feature = "to_bytes")]
pub use tobytes::ToBytes;


//uncommon public modules
pub mod hashes;
pub mod armor;


//"normal" public modules
pub mod errors;
pub mod curve;

pub mod signature;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, types, to/from bytes, and elliptic curve primitives/functions are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need,
    //! such as tests, examples, and mockups.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, tobytes::*, curve::*
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as the hash functions.

    pub use crate::{
        common::*, hashes::*
    };
}

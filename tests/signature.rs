// SPDX short identifier: Unlicense

use rand::{thread_rng, Rng, SeedableRng, rngs::StdRng};

use ringvote::{
    common::*,
    signature::{
        RingSignature,
        get_key_image
    }
};

const RING_SIZES: [usize; 8] = [2, 3, 4, 8, 11, 16, 25, 32];
const CASE_ID: &[u8] = b"election-2025";

fn random_ring(size: usize) -> (Vec<KeyPair>, Ring) {
    let keys: Vec<KeyPair> = (0..size).map(|_| KeyPair::generate()).collect();
    let ring = Ring::from_public_keys(keys.iter().map(|key| key.public_key).collect());
    return (keys, ring)
}

#[test]
fn lsag_test() {
    for x in RING_SIZES {
        let (keys, ring) = random_ring(x);
        let j = thread_rng().gen::<usize>() % x;
        let my_key = &keys[j];

        //sign
        let sig = RingSignature::sign(
            &ring, &my_key.private_key, j, b"abcdef", CASE_ID).unwrap();
        assert!(sig.signatures.len() == x);

        //sanity check the key image
        assert!(sig.key_image == get_key_image(&my_key.private_key, &ring, CASE_ID).unwrap());

        //verify
        assert!(RingSignature::verify(&sig, &ring, b"abcdef", CASE_ID).unwrap());

        //wrong message
        assert!(!RingSignature::verify(&sig, &ring, b"123456", CASE_ID).unwrap());

        //wrong case
        assert!(!RingSignature::verify(&sig, &ring, b"abcdef", b"election-2026").unwrap());

        //wrong order
        let mut reordered = ring.clone();
        reordered.0.reverse();
        assert!(!RingSignature::verify(&sig, &reordered, b"abcdef", CASE_ID).unwrap());
    }
}

#[test]
fn tamper_test() {
    let (keys, ring) = random_ring(5);
    let sig = RingSignature::sign(&ring, &keys[3].private_key, 3, b"VOTE", CASE_ID).unwrap();
    assert!(RingSignature::verify(&sig, &ring, b"VOTE", CASE_ID).unwrap());

    //every byte of the message
    let msg = b"VOTE".to_vec();
    for i in 0..msg.len() {
        let mut bad_msg = msg.clone();
        bad_msg[i] ^= 1;
        assert!(!RingSignature::verify(&sig, &ring, &bad_msg, CASE_ID).unwrap());
    }

    //every byte of the case identifier
    for i in 0..CASE_ID.len() {
        let mut bad_case = CASE_ID.to_vec();
        bad_case[i] ^= 1;
        assert!(!RingSignature::verify(&sig, &ring, b"VOTE", &bad_case).unwrap());
    }

    //every byte of the checksum
    for i in 0..32 {
        let mut bad = sig.clone();
        bad.checksum[i] ^= 1;
        assert!(!RingSignature::verify(&bad, &ring, b"VOTE", CASE_ID).unwrap());
    }

    //every response scalar
    for i in 0..ring.len() {
        let mut bad = sig.clone();
        bad.signatures[i] += Scalar::ONE;
        assert!(!RingSignature::verify(&bad, &ring, b"VOTE", CASE_ID).unwrap());
    }

    //every ring member
    for i in 0..ring.len() {
        let mut bad_ring = ring.clone();
        bad_ring.0[i] = random_point();
        assert!(!RingSignature::verify(&sig, &bad_ring, b"VOTE", CASE_ID).unwrap());
    }

    //a different, valid key image
    let mut bad = sig.clone();
    bad.key_image = random_point();
    assert!(!RingSignature::verify(&bad, &ring, b"VOTE", CASE_ID).unwrap());
}

#[test]
fn linkability_test() {
    let (keys, ring) = random_ring(4);
    let key = &keys[1];

    //same key, same ring, same case: same key image
    let sig1 = RingSignature::sign(&ring, &key.private_key, 1, b"first", CASE_ID).unwrap();
    let sig2 = RingSignature::sign(&ring, &key.private_key, 1, b"second", CASE_ID).unwrap();
    assert!(sig1.key_image == sig2.key_image);
    assert!(sig1.checksum != sig2.checksum);

    //can't mix signatures
    assert!(!RingSignature::verify(&sig2, &ring, b"first", CASE_ID).unwrap());

    //signing the same message twice still links, but uses fresh randomness
    let sig3 = RingSignature::sign(&ring, &key.private_key, 1, b"first", CASE_ID).unwrap();
    assert!(sig3.key_image == sig1.key_image);
    assert!(sig3.signatures != sig1.signatures);

    //same key, different case: unlinkable
    let sig4 = RingSignature::sign(&ring, &key.private_key, 1, b"first", b"election-2026").unwrap();
    assert!(sig4.key_image != sig1.key_image);

    //different key, same case: different key image
    let sig5 = RingSignature::sign(&ring, &keys[2].private_key, 2, b"first", CASE_ID).unwrap();
    assert!(sig5.key_image != sig1.key_image);
}

#[test]
fn two_member_vote_test() {
    let a = KeyPair::generate();
    let b = KeyPair::generate();
    let ring = Ring::from_public_keys(vec!(a.public_key, b.public_key));

    let sig = RingSignature::sign(&ring, &a.private_key, 0, b"VOTE", CASE_ID).unwrap();
    assert!(RingSignature::verify(&sig, &ring, b"VOTE", CASE_ID).unwrap());

    let mut bad = sig.clone();
    bad.checksum[0] ^= 0xff;
    assert!(!RingSignature::verify(&bad, &ring, b"VOTE", CASE_ID).unwrap());
}

#[test]
fn wrong_signer_index_test() {
    //signing with a key which is not at the given index succeeds, but does not verify
    let (keys, ring) = random_ring(3);
    let sig = RingSignature::sign(&ring, &keys[0].private_key, 1, b"VOTE", CASE_ID).unwrap();
    assert!(!RingSignature::verify(&sig, &ring, b"VOTE", CASE_ID).unwrap());

    //a key from outside the ring
    let outsider = KeyPair::generate();
    let sig = RingSignature::sign(&ring, &outsider.private_key, 0, b"VOTE", CASE_ID).unwrap();
    assert!(!RingSignature::verify(&sig, &ring, b"VOTE", CASE_ID).unwrap());
}

#[test]
fn sign_for_key_test() {
    let (keys, ring) = random_ring(6);
    let sig = RingSignature::sign_for_key(&ring, &keys[4].private_key, b"VOTE", CASE_ID).unwrap();
    assert!(RingSignature::verify(&sig, &ring, b"VOTE", CASE_ID).unwrap());
    assert!(sig.key_image == keys[4].key_image(&ring, CASE_ID).unwrap());

    let outsider = KeyPair::generate();
    assert!(RingSignature::sign_for_key(&ring, &outsider.private_key, b"VOTE", CASE_ID)
        == Err(SignatureError::SignerNotInRing));
}

#[test]
fn seeded_rng_test() {
    let (keys, ring) = random_ring(4);
    let sig1 = RingSignature::sign_with_rng(
        &mut StdRng::seed_from_u64(7), &ring, &keys[0].private_key, 0, b"VOTE", CASE_ID).unwrap();
    let sig2 = RingSignature::sign_with_rng(
        &mut StdRng::seed_from_u64(7), &ring, &keys[0].private_key, 0, b"VOTE", CASE_ID).unwrap();
    assert!(sig1 == sig2);
    assert!(RingSignature::verify(&sig1, &ring, b"VOTE", CASE_ID).unwrap());

    let sig3 = RingSignature::sign_with_rng(
        &mut StdRng::seed_from_u64(8), &ring, &keys[0].private_key, 0, b"VOTE", CASE_ID).unwrap();
    assert!(sig3 != sig1);
    assert!(sig3.key_image == sig1.key_image);
}

#[test]
fn malformed_input_test() {
    let (keys, ring) = random_ring(3);

    //ring too small
    let single = Ring::from_public_keys(vec!(keys[0].public_key));
    assert!(matches!(
        RingSignature::sign(&single, &keys[0].private_key, 0, b"VOTE", CASE_ID),
        Err(SignatureError::InputValidation(_))
    ));
    assert!(matches!(
        RingSignature::sign(&Ring::new(), &keys[0].private_key, 0, b"VOTE", CASE_ID),
        Err(SignatureError::InputValidation(_))
    ));

    //index out of range
    assert!(matches!(
        RingSignature::sign(&ring, &keys[0].private_key, 3, b"VOTE", CASE_ID),
        Err(SignatureError::InputValidation(_))
    ));

    //invalid ring member
    let mut bad_ring = ring.clone();
    bad_ring.0[2].y[31] ^= 1;
    assert!(RingSignature::sign(&bad_ring, &keys[0].private_key, 0, b"VOTE", CASE_ID)
        == Err(SignatureError::InvalidPublicKey(2)));

    let sig = RingSignature::sign(&ring, &keys[0].private_key, 0, b"VOTE", CASE_ID).unwrap();
    assert!(RingSignature::verify(&sig, &bad_ring, b"VOTE", CASE_ID)
        == Err(SignatureError::InvalidPublicKey(2)));

    //scalar count mismatch
    let mut short = sig.clone();
    short.signatures.pop();
    assert!(matches!(
        RingSignature::verify(&short, &ring, b"VOTE", CASE_ID),
        Err(SignatureError::InputValidation(_))
    ));
    let mut long = sig.clone();
    long.signatures.push(random_scalar());
    assert!(matches!(
        RingSignature::verify(&long, &ring, b"VOTE", CASE_ID),
        Err(SignatureError::InputValidation(_))
    ));

    //ring of one, with one scalar
    let mut one = sig.clone();
    one.signatures.truncate(1);
    assert!(matches!(
        RingSignature::verify(&one, &single, b"VOTE", CASE_ID),
        Err(SignatureError::InputValidation(_))
    ));

    //key image off the curve
    let mut bad_image = sig.clone();
    bad_image.key_image.x[0] ^= 1;
    assert!(RingSignature::verify(&bad_image, &ring, b"VOTE", CASE_ID)
        == Err(SignatureError::InvalidKeyImage));
}

#[test]
fn serialization_test() {
    for x in RING_SIZES {
        let (keys, ring) = random_ring(x);
        let sig = RingSignature::sign(&ring, &keys[x - 1].private_key, x - 1, b"abcdef", CASE_ID).unwrap();

        //wire form: checksum || scalars
        let wire = sig.to_wire_bytes();
        assert!(wire.len() == 32 * (x + 1));
        assert!(wire[..32] == sig.checksum);
        let decoded = RingSignature::from_wire_bytes(sig.key_image, &wire).unwrap();
        assert!(decoded == sig);
        assert!(RingSignature::verify(&decoded, &ring, b"abcdef", CASE_ID).unwrap());

        #[cfg(feature = "to_bytes")]
        {
            let serialized = sig.to_bytes().unwrap();
            let deserialized = RingSignature::from_bytes(&serialized).unwrap();
            assert!(deserialized == sig);
            assert!(RingSignature::verify(&deserialized, &ring, b"abcdef", CASE_ID).unwrap());
        }
    }

    let key_image = random_point();
    //too short, or not a multiple of 32 bytes
    assert!(RingSignature::from_wire_bytes(key_image, &[0u8; 32]).is_err());
    assert!(RingSignature::from_wire_bytes(key_image, &[0u8; 65]).is_err());
    //non-canonical scalar
    let mut wire = vec!(0u8; 32);
    wire.extend_from_slice(&GROUP_ORDER);
    assert!(RingSignature::from_wire_bytes(key_image, &wire).is_err());
}

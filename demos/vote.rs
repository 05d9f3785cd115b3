// SPDX short identifier: Unlicense

use ringvote::{
    armor,
    KeyPair,
    Ring,
    signature::RingSignature,
};

const AUTHORITIES: usize = 5;

fn main() {
    //The election authorities each hold a key pair.
    //Their public keys, in one fixed order, form the ring.
    //The order must be the same every time the ring is used:
    //reordering the ring changes every key image.
    let authorities: Vec<KeyPair> = (0..AUTHORITIES).map(|_| KeyPair::generate()).collect();
    let ring = Ring::from_public_keys(authorities.iter().map(|key| key.public_key).collect());

    //Scope key images to this election.
    let case_id = b"election-2025";

    //A voter generates a fresh one-time voting key,
    //and one of the authorities attests to it without revealing which one.
    let voting_key = KeyPair::generate();
    let message = armor::encode_public_key(&voting_key.public_key);

    let signer = &authorities[3];
    let signature = RingSignature::sign_for_key(
        &ring,
        &signer.private_key,
        message.as_bytes(),
        case_id
    ).expect("Real software should have proper error handling.");

    //What goes over the wire
    let encoded_signature = armor::encode_signature(&signature);
    let encoded_key_image = armor::encode_key_image(&signature.key_image);
    println!("signature: {encoded_signature}");
    println!("key image: {encoded_key_image}");

    //Anyone holding the ring can check the attestation
    let received = armor::decode_signature(&encoded_key_image, &encoded_signature)
        .expect("Real software should have proper error handling.");
    assert!(RingSignature::verify(&received, &ring, message.as_bytes(), case_id)
        .expect("Real software should have proper error handling."));

    //The same authority attesting to a second voting key is detectable:
    //the key image repeats. Recording used key images is up to the application.
    let second_key = KeyPair::generate();
    let second_message = armor::encode_public_key(&second_key.public_key);
    let second = RingSignature::sign_for_key(&ring, &signer.private_key, second_message.as_bytes(), case_id)
        .expect("Real software should have proper error handling.");
    assert!(second.key_image == signature.key_image);

    //In a different election, the key images are unrelated.
    let other = RingSignature::sign_for_key(&ring, &signer.private_key, message.as_bytes(), b"election-2026")
        .expect("Real software should have proper error handling.");
    assert!(other.key_image != signature.key_image);
}

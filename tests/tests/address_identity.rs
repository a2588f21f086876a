//! Address derivation and identity-type scenarios

use rand::rngs::OsRng;
use sigsuite_api::{is_hex_address, Address, Hash, ADDRESS_LENGTH};
use sigsuite_sign::address::address_from_public_key;
use sigsuite_sign::keys::{generate_keypair, PrivateKey, PublicKey};
use sigsuite_tests::{unhex, P256_PRIV_HEX, P256_PUB_HEX};

#[test]
fn address_is_stable_for_a_fixed_key() {
    let public = PublicKey::from_raw_bytes(&unhex(P256_PUB_HEX)).unwrap();
    let first = address_from_public_key(&public).unwrap();
    let second = address_from_public_key(&public).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), ADDRESS_LENGTH);
}

#[test]
fn address_matches_key_derived_from_private_scalar() {
    let private = PrivateKey::from_scalar_bytes(&unhex(P256_PRIV_HEX)).unwrap();
    let from_private = address_from_public_key(&private.public_key()).unwrap();
    let from_public =
        address_from_public_key(&PublicKey::from_raw_bytes(&unhex(P256_PUB_HEX)).unwrap())
            .unwrap();
    assert_eq!(from_private, from_public);
}

#[test]
fn fresh_keys_get_fresh_addresses() {
    let (_, public_a) = generate_keypair(&mut OsRng);
    let (_, public_b) = generate_keypair(&mut OsRng);
    assert_ne!(
        address_from_public_key(&public_a).unwrap(),
        address_from_public_key(&public_b).unwrap()
    );
}

#[test]
fn strict_and_lenient_hex_parsing_disagree_on_short_input() {
    // user-supplied short hex is accepted leniently and left-padded
    let lenient = Address::from_hex("0x01").unwrap();
    assert_eq!(lenient.as_bytes()[ADDRESS_LENGTH - 1], 0x01);

    // while the strict validator refuses the same text
    assert!(!is_hex_address("0x01"));
    assert!(Address::from_exact_hex("0x01").is_err());
}

#[test]
fn derived_address_survives_a_hex_round_trip() {
    let (_, public) = generate_keypair(&mut OsRng);
    let address = address_from_public_key(&public).unwrap();
    let text = address.hex();
    assert!(is_hex_address(&text));
    assert_eq!(Address::from_hex(&text).unwrap(), address);
    assert_eq!(Address::from_exact_hex(&text).unwrap(), address);
}

#[test]
fn hash_and_address_display_canonically() {
    let hash = Hash::from_bytes(&[0xAB; 32]);
    let text = format!("{hash}");
    assert!(text.starts_with("0x"));
    assert_eq!(text, text.to_lowercase());
    assert_eq!(text.len(), 2 + 2 * ADDRESS_LENGTH);
}

//! Property tests for the hex codec and fixed-width containers

use proptest::prelude::*;
use sigsuite_api::hex;
use sigsuite_api::{FixedBytes, Hash};

proptest! {
    #[test]
    fn encode_decode_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = hex::encode(&bytes);
        prop_assert!(encoded.starts_with("0x"));
        prop_assert_eq!(hex::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn decode_tolerates_missing_prefix_and_odd_length(digits in "[0-9a-f]{0,65}") {
        let decoded = hex::decode(&digits).unwrap();
        // decoding is canonicalizing: re-encoding the bytes reproduces the
        // digits up to the implied leading zero
        let re_encoded = hex::encode(&decoded);
        let expected = if digits.len() % 2 == 1 {
            format!("0x0{}", digits)
        } else {
            format!("0x{}", digits)
        };
        prop_assert_eq!(re_encoded, expected);
    }

    #[test]
    fn fixed_bytes_always_hold_their_width(bytes in proptest::collection::vec(any::<u8>(), 0..80)) {
        let value = Hash::from_bytes(&bytes);
        prop_assert_eq!(value.as_bytes().len(), 32);

        if bytes.len() > 32 {
            // crop-from-left keeps exactly the trailing 32 bytes
            prop_assert_eq!(value.as_bytes().as_slice(), &bytes[bytes.len() - 32..]);
        } else {
            // left-padding preserves the payload at the tail
            prop_assert_eq!(&value.as_bytes()[32 - bytes.len()..], bytes.as_slice());
            prop_assert!(value.as_bytes()[..32 - bytes.len()].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn fixed_bytes_hex_round_trips(bytes in proptest::collection::vec(any::<u8>(), 32..=32)) {
        let value = FixedBytes::<32>::from_exact_bytes(&bytes).unwrap();
        prop_assert_eq!(FixedBytes::<32>::from_exact_hex(&value.hex()).unwrap(), value);
    }
}

#[test]
fn malformed_digits_never_produce_output() {
    for input in ["0xG0", "zz", "0x0g", "0x#"] {
        assert!(hex::decode(input).is_err());
    }
}

#[test]
fn single_zero_byte_decodes() {
    assert_eq!(hex::decode("0x00").unwrap(), vec![0u8]);
}

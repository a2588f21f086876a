use super::*;
use crate::hash::Hasher as _;
use sigsuite_params::hash::{SHA3_256_OUTPUT_SIZE, SHA3_512_OUTPUT_SIZE};

struct Case {
    input: &'static [&'static [u8]],
    expected: &'static str,
}

const SHA3_256_CASES: &[Case] = &[
    Case {
        input: &[b""],
        expected: "0xa7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    },
    Case {
        input: &[b"asdf"],
        expected: "0xdd2781f4c51bccdbe23e4d398b8a82261f585c278dbb4b84989fea70e76723a9",
    },
    Case {
        input: &[b"asdf", b"qwer"],
        expected: "0x06b7857261bcda1d351383b80bc2fb08d5957b61495ac73d7bd788f8f77e7c18",
    },
];

const SHA3_512_CASES: &[Case] = &[
    Case {
        input: &[b""],
        expected: "0xa69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    },
    Case {
        input: &[b"asdf"],
        expected: "0x8d88cf5b20f53acd7ae1479b5b36dc2021753b049902c77247bb27b131b300bd3ca8beef28756dce27b8990867c4577a2535e7e3b75141399ca1a94cc84b0eb9",
    },
    Case {
        input: &[b"asdf", b"qwer"],
        expected: "0x5bf3ca908fcf1ad5f52f09a5ea48567c69905cfd315d98717e93708713042e6bd8c63d9465d572132ccb79a50d76ec851afd495931a1a33a07063803ee919a46",
    },
];

#[test]
fn sha3_256_known_answers() {
    for case in SHA3_256_CASES {
        assert_eq!(Sha3_256Hasher.hash_hex(case.input), case.expected);
    }
}

#[test]
fn sha3_512_known_answers() {
    for case in SHA3_512_CASES {
        assert_eq!(Sha3_512Hasher.hash_hex(case.input), case.expected);
    }
}

#[test]
fn raw_bytes_match_hex_output() {
    for case in SHA3_256_CASES {
        let raw = Sha3_256Hasher.hash(case.input);
        assert_eq!(raw.len(), SHA3_256_OUTPUT_SIZE);
        assert_eq!(format!("0x{}", hex::encode(&raw)), case.expected);
    }
    for case in SHA3_512_CASES {
        assert_eq!(Sha3_512Hasher.hash(case.input).len(), SHA3_512_OUTPUT_SIZE);
    }
}

#[test]
fn zero_chunks_digest_the_empty_input() {
    assert_eq!(Sha3_256Hasher.hash(&[]), Sha3_256Hasher.hash(&[b""]));
}

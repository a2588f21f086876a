//! Cross-crate scenarios for the ECDSA and Ed25519 suites

use sigsuite_api::{CryptoSuite as _, Signer as _, Verifier as _};
use sigsuite_sign::ecdsa::{
    p256_sha3_256_det_signer, p256_sha3_256_indet_signer, p256_sha3_256_verifier,
    p256_shake256_det_signer, p256_shake256_indet_signer, p256_shake256_verifier, EcdsaSigner,
    EcdsaVerifier,
};
use sigsuite_api::Result;
use sigsuite_tests::{unhex, P256_PRIV_HEX, P256_PUB_HEX};

type SignerNew = fn(&[u8]) -> Result<EcdsaSigner>;
type VerifierNew = fn(&[u8]) -> Result<EcdsaVerifier>;

struct SuiteCase {
    signer_new: SignerNew,
    verifier_new: VerifierNew,
    deterministic: bool,
}

const SUITE_CASES: &[SuiteCase] = &[
    SuiteCase {
        signer_new: p256_sha3_256_det_signer,
        verifier_new: p256_sha3_256_verifier,
        deterministic: true,
    },
    SuiteCase {
        signer_new: p256_sha3_256_indet_signer,
        verifier_new: p256_sha3_256_verifier,
        deterministic: false,
    },
    SuiteCase {
        signer_new: p256_shake256_det_signer,
        verifier_new: p256_shake256_verifier,
        deterministic: true,
    },
    SuiteCase {
        signer_new: p256_shake256_indet_signer,
        verifier_new: p256_shake256_verifier,
        deterministic: false,
    },
];

const MESSAGES: &[&[u8]] = &[b"", &[1, 2]];

#[test]
fn constructor_pairs_sign_and_verify() {
    for case in SUITE_CASES {
        let signer = (case.signer_new)(&unhex(P256_PRIV_HEX)).unwrap();
        let verifier = (case.verifier_new)(&unhex(P256_PUB_HEX)).unwrap();

        assert!(
            signer.suite_type().starts_with(verifier.suite_type()),
            "suite types diverge: signer={} verifier={}",
            signer.suite_type(),
            verifier.suite_type()
        );

        for message in MESSAGES {
            let first = signer.sign(message).unwrap();
            let second = signer.sign(message).unwrap();

            assert!(signer.verify(message, &first));
            assert!(signer.verify(message, &second));
            assert!(verifier.verify(message, &first));
            assert!(verifier.verify(message, &second));

            assert_eq!(first == second, case.deterministic);
        }
    }
}

#[test]
fn suite_types_carry_determinism_tags() {
    let det = p256_sha3_256_det_signer(&unhex(P256_PRIV_HEX)).unwrap();
    let indet = p256_sha3_256_indet_signer(&unhex(P256_PRIV_HEX)).unwrap();
    assert_eq!(det.suite_type(), "ecdsa_P256_sha3-256_det");
    assert_eq!(indet.suite_type(), "ecdsa_P256_sha3-256_indet");
}

#[test]
fn cross_suite_verification_fails_closed() {
    // same key, different digest configuration: the digests differ, so
    // verification fails naturally rather than erroring
    let signer = p256_sha3_256_det_signer(&unhex(P256_PRIV_HEX)).unwrap();
    let shake_verifier = p256_shake256_verifier(&unhex(P256_PUB_HEX)).unwrap();
    let signature = signer.sign(b"message").unwrap();
    assert!(!shake_verifier.verify(b"message", &signature));
}

#[test]
fn ecdsa_and_ed25519_speak_the_same_capability_surface() {
    use sigsuite_sign::eddsa::{ed25519_signer, generate_ed25519_keypair};

    let (_, ed_priv) = generate_ed25519_keypair().unwrap();
    let ecdsa_signer = p256_sha3_256_det_signer(&unhex(P256_PRIV_HEX)).unwrap();
    let ed_signer = ed25519_signer(&ed_priv).unwrap();

    let signers: Vec<Box<dyn sigsuite_api::Signer>> =
        vec![Box::new(ecdsa_signer), Box::new(ed_signer)];
    for signer in &signers {
        let signature = signer.sign(b"message").unwrap();
        assert!(signer.verify(b"message", &signature));
        assert!(!signer.verify(b"tampered", &signature));
    }
}

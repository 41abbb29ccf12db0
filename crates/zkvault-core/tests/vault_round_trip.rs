use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::SecretString;

use zkvault_core::crypto::{derive_key, derive_key_with_params, KdfParams, Salt};
use zkvault_core::vault::{decrypt, encrypt, encrypt_envelope, EncryptedEnvelope};
use zkvault_core::{DerivedKey, SessionKeyHolder, VaultError};

const PASSWORD: &str = "Tr0ub4dor&3";
const PLAINTEXT: &str = "CONFIDENTIAL-FINDING-42";

fn password() -> SecretString {
    SecretString::from(PASSWORD.to_string())
}

fn salt_b64() -> String {
    let bytes: Vec<u8> = (0x01..=0x10).collect();
    STANDARD.encode(bytes)
}

fn scenario_key() -> DerivedKey {
    derive_key(&password(), &salt_b64()).expect("derive should succeed")
}

#[test]
fn test_concrete_scenario_round_trip() {
    let key = scenario_key();
    let envelope = encrypt(PLAINTEXT, &key).expect("encrypt should succeed");

    let value: serde_json::Value = serde_json::from_str(&envelope).expect("envelope is JSON");
    assert!(value["iv"].is_string());
    assert!(value["ciphertext"].is_string());

    assert_eq!(decrypt(&envelope, &key).expect("decrypt should succeed"), PLAINTEXT);

    // A fresh derivation from the same password and salt opens the same envelope
    let rederived = scenario_key();
    assert_eq!(
        decrypt(&envelope, &rederived).expect("decrypt with re-derived key"),
        PLAINTEXT
    );
}

#[test]
fn test_different_salt_cannot_decrypt() {
    let key = scenario_key();
    let envelope = encrypt(PLAINTEXT, &key).expect("encrypt should succeed");

    let other_salt = STANDARD.encode([0xEEu8; 16]);
    let other_key = derive_key(&password(), &other_salt).expect("derive should succeed");

    let result = decrypt(&envelope, &other_key);
    assert!(matches!(result, Err(VaultError::Decryption)));
}

#[test]
fn test_different_password_cannot_decrypt() {
    let key = scenario_key();
    let envelope = encrypt(PLAINTEXT, &key).expect("encrypt should succeed");

    let wrong = SecretString::from("tr0ub4dor&3".to_string());
    let wrong_key = derive_key(&wrong, &salt_b64()).expect("derive should succeed");

    assert!(matches!(decrypt(&envelope, &wrong_key), Err(VaultError::Decryption)));
}

#[test]
fn test_every_single_bit_flip_is_detected() {
    let key = scenario_key();
    let envelope = encrypt_envelope("tamper me", &key).expect("encrypt should succeed");
    let nonce = STANDARD.decode(&envelope.iv).unwrap();
    let ciphertext = STANDARD.decode(&envelope.ciphertext).unwrap();

    for byte in 0..nonce.len() {
        for bit in 0..8 {
            let mut flipped = nonce.clone();
            flipped[byte] ^= 1 << bit;
            let tampered = EncryptedEnvelope {
                iv: STANDARD.encode(&flipped),
                ciphertext: envelope.ciphertext.clone(),
            };
            let json = tampered.to_json().unwrap();
            assert!(
                matches!(decrypt(&json, &key), Err(VaultError::Decryption)),
                "iv byte {} bit {} not detected",
                byte,
                bit
            );
        }
    }

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut flipped = ciphertext.clone();
            flipped[byte] ^= 1 << bit;
            let tampered = EncryptedEnvelope {
                iv: envelope.iv.clone(),
                ciphertext: STANDARD.encode(&flipped),
            };
            let json = tampered.to_json().unwrap();
            assert!(
                matches!(decrypt(&json, &key), Err(VaultError::Decryption)),
                "ciphertext byte {} bit {} not detected",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_malformed_envelopes_fail_uniformly() {
    let key = scenario_key();
    let cases = [
        "definitely not json",
        "{}",
        r#"{"iv":"AAAAAAAAAAAAAAAA"}"#,
        r#"{"ciphertext":"AAAAAAAAAAAAAAAAAAAAAA=="}"#,
        r#"{"iv":"%%%","ciphertext":"AAAAAAAAAAAAAAAAAAAAAA=="}"#,
        r#"{"iv":"AAAAAAAAAAAAAAAA","ciphertext":"%%%"}"#,
    ];
    for case in cases {
        let err = decrypt(case, &key).expect_err("malformed envelope must fail");
        assert!(matches!(err, VaultError::Decryption), "case {:?}", case);
        assert_eq!(err.to_string(), "Decryption failed");
    }
}

#[test]
fn test_session_holder_login_logout_cycle() {
    let mut holder = SessionKeyHolder::new();
    holder
        .unlock(&password(), &salt_b64(), &KdfParams::default())
        .expect("unlock should succeed");
    let envelope = holder.encrypt(PLAINTEXT).expect("encrypt should succeed");

    holder.clear();
    assert!(matches!(holder.decrypt(&envelope), Err(VaultError::Locked)));

    // Logging in again with the same credentials restores access
    holder
        .unlock(&password(), &salt_b64(), &KdfParams::default())
        .expect("unlock should succeed");
    assert_eq!(holder.decrypt(&envelope).unwrap(), PLAINTEXT);
}

#[test]
fn test_argon2id_keys_are_deterministic() {
    let salt = Salt::from_base64(&salt_b64()).unwrap();
    let params = KdfParams::argon2id();
    let first = derive_key_with_params(&password(), &salt, &params).unwrap();
    let second = derive_key_with_params(&password(), &salt, &params).unwrap();

    let envelope = encrypt(PLAINTEXT, &first).unwrap();
    assert_eq!(decrypt(&envelope, &second).unwrap(), PLAINTEXT);

    // PBKDF2 and Argon2id keys are not interchangeable
    assert!(decrypt(&envelope, &scenario_key()).is_err());
}

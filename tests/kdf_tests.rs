//! tests/kdf_tests.rs
//! PBKDF2-HMAC-SHA256 with the embedded salt: known answers and determinism

mod common;
use common::TEST_PASSWORD;

use filecrypt_rs::consts::{KDF_ITERATIONS, KDF_SALT, KEY_LENGTH};
use filecrypt_rs::{derive_key, derive_key_into, FilecryptError, PasswordString};

const SECRET123_KEY32: &str = "1cb80e753f6564b35846f45d3ba6d78d173903ae987d34afecf56cba56a4c96b";
const SECRET123_KEY16: &str = "1cb80e753f6564b35846f45d3ba6d78d";

#[test]
fn parameters_are_pinned() {
    // Changing any of these breaks every existing encrypted file.
    assert_eq!(KDF_ITERATIONS, 10_000);
    assert_eq!(&KDF_SALT, b"filecrypt.salt.1");
    assert_eq!(KEY_LENGTH, 32);
}

#[test]
fn known_answer_vectors() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());

    let key32 = derive_key(&password, 32).unwrap();
    assert_eq!(hex::encode(key32.expose_secret()), SECRET123_KEY32);

    let key16 = derive_key(&password, 16).unwrap();
    assert_eq!(hex::encode(key16.expose_secret()), SECRET123_KEY16);
}

#[test]
fn derive_twice_is_identical() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let a = derive_key(&password, 32).unwrap();
    let b = derive_key(&password, 32).unwrap();
    assert_eq!(a.expose_secret(), b.expose_secret());
    assert_eq!(a.expose_secret().len(), 32);
}

#[test]
fn derive_into_matches_derive() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let mut out = [0u8; 24];
    derive_key_into(&password, &mut out).unwrap();

    let key = derive_key(&password, 24).unwrap();
    assert_eq!(&out[..], &key.expose_secret()[..]);
}

#[test]
fn different_passwords_different_keys() {
    let cases = ["pw1", "pw2", "Secret124", "secret123", "パスワード", " Secret123"];
    let reference = derive_key(&PasswordString::new(TEST_PASSWORD.to_string()), 32).unwrap();

    for pw in cases {
        let key = derive_key(&PasswordString::new(pw.to_string()), 32).unwrap();
        assert_ne!(key.expose_secret(), reference.expose_secret(), "{pw}");
    }
}

#[test]
fn invalid_inputs() {
    let empty = PasswordString::new(String::new());
    assert!(matches!(
        derive_key(&empty, 32),
        Err(FilecryptError::InvalidArgument(_))
    ));

    let password = PasswordString::new(TEST_PASSWORD.to_string());
    assert!(matches!(
        derive_key(&password, 31),
        Err(FilecryptError::Crypto(_))
    ));
}

#[test]
fn derive_across_threads_is_identical() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let password = PasswordString::new(TEST_PASSWORD.to_string());
                hex::encode(derive_key(&password, 32).unwrap().expose_secret())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), SECRET123_KEY32);
    }
}

//! DES known-answer vectors run through [`Key`] and the ECB adapter.

use des::cipher::KeyInit;
use des::Des;
use zmk_core::{BlockCipher, BlockMode, EcbEncryptor, Key};

/// (key, plaintext, ciphertext)
const VECTORS: [([u8; 8], [u8; 8], [u8; 8]); 4] = [
    // FIPS 81 appendix B, first block of "Now is the time for all ".
    (
        [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF],
        *b"Now is t",
        [0x3F, 0xA4, 0x0E, 0x8A, 0x98, 0x4D, 0x48, 0x15],
    ),
    // Classic worked example.
    (
        [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1],
        [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF],
        [0x85, 0xE8, 0x13, 0x54, 0x0F, 0x0A, 0xB4, 0x05],
    ),
    // NBS SP 500-20 variable plaintext, round 1.
    (
        [0x01; 8],
        [0x80, 0, 0, 0, 0, 0, 0, 0],
        [0x95, 0xF8, 0xA5, 0xE5, 0xDD, 0x31, 0xD9, 0x00],
    ),
    // Parity-adjusted zero key over the zero block.
    (
        [0x01; 8],
        [0x00; 8],
        [0x8C, 0xA6, 0x4D, 0xE9, 0xC1, 0xB1, 0x23, 0xA7],
    ),
];

#[test]
fn des_vectors_encrypt() {
    for (i, (key, plain, cipher)) in VECTORS.iter().enumerate() {
        let key = Key::from_bytes(*key);
        assert_eq!(key.encrypt(plain).unwrap(), cipher, "vector #{i}");
    }
}

#[test]
fn des_vectors_decrypt() {
    for (i, (key, plain, cipher)) in VECTORS.iter().enumerate() {
        let key = Key::from_bytes(*key);
        assert_eq!(key.decrypt(cipher).unwrap().as_slice(), plain, "vector #{i}");
    }
}

#[test]
fn des_vectors_concatenated_encrypt_blockwise() {
    let (key, _, _) = VECTORS[0];
    let key = Key::from_bytes(key);

    let mut plaintext = Vec::new();
    let mut expected = Vec::new();
    for (_, plain, _) in &VECTORS {
        plaintext.extend_from_slice(plain);
        expected.extend_from_slice(&key.encrypt(plain).unwrap());
    }

    assert_eq!(key.encrypt(&plaintext).unwrap(), expected);
}

#[test]
fn ecb_adapter_is_usable_through_a_trait_object() {
    let (key, plain, cipher) = VECTORS[0];
    let des = Des::new_from_slice(&key).unwrap();
    let dyn_cipher: &dyn BlockCipher = &des;

    let mut out = [0u8; 8];
    EcbEncryptor::new(dyn_cipher).crypt_blocks(&mut out, &plain);
    assert_eq!(out, cipher);
}

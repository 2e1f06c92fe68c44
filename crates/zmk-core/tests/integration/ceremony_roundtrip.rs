//! Key ceremony: custodians enter components, the ZMK is formed and used to
//! exchange working keys with another zone.

use data_encoding::HEXUPPER;
use rand::rngs::OsRng;
use rand::RngCore;
use zmk_core::{
    form_double_length_zmk, form_single_length_zmk, load_component, Component, DoubleLengthKey,
    DoubleLengthZmk, Key, ZmkError,
};

/// Random component rendered as hex, the way a custodian receives it.
fn random_component_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    HEXUPPER.encode(&bytes)
}

/// Three custodians, double-length ZMK, wrapped double-length working key.
#[test]
fn three_custodian_double_length_ceremony() {
    let hexes: Vec<String> = (0..3).map(|_| random_component_hex(16)).collect();
    let components: Vec<Component> = hexes.iter().map(|h| load_component(h).unwrap()).collect();

    // Each custodian checks their share before combining.
    for component in &components {
        let kcv = component.key_check_value().unwrap();
        assert_eq!(
            kcv,
            DoubleLengthZmk::new(component.expose()).unwrap().key_check_value()
        );
    }

    let zmk = form_double_length_zmk(&components).unwrap();

    // Both zones form the same ZMK regardless of entry order.
    let reversed: Vec<&Component> = components.iter().rev().collect();
    let peer_zmk = form_double_length_zmk(reversed).unwrap();
    assert_eq!(zmk.key_check_value(), peer_zmk.key_check_value());

    // Zone A wraps a working key; zone B unwraps it and checks the KCV.
    let mut working = [0u8; 16];
    OsRng.fill_bytes(&mut working);
    let working_key = DoubleLengthKey::from_bytes(working);

    let wrapped = zmk.encrypt_key(working_key.expose()).unwrap();
    let unwrapped = peer_zmk.decrypt_key(&wrapped).unwrap();
    let received = DoubleLengthKey::new(&unwrapped).unwrap();

    assert_eq!(received, working_key);
    assert_eq!(received.key_check_value(), working_key.key_check_value());
}

/// Two custodians, single-length ZMK, wrapped single-length working key.
#[test]
fn two_custodian_single_length_ceremony() {
    let a = load_component(&random_component_hex(8)).unwrap();
    let b = load_component(&random_component_hex(8)).unwrap();
    let zmk = form_single_length_zmk([&a, &b]).unwrap();

    let working_key = Key::from_bytes([0x4A, 0x2B, 0x3C, 0x4D, 0x5E, 0x6F, 0x70, 0x81]);
    let wrapped = zmk.encrypt_key(working_key.expose()).unwrap();
    assert_ne!(wrapped.as_slice(), working_key.expose());

    let unwrapped = zmk.decrypt_key(&wrapped).unwrap();
    assert_eq!(Key::new(&unwrapped).unwrap(), working_key);
}

/// Leaving out one custodian yields a different key.
#[test]
fn missing_component_forms_unrelated_zmk() {
    let components: Vec<Component> = (0..3)
        .map(|_| load_component(&random_component_hex(16)).unwrap())
        .collect();

    let full = form_double_length_zmk(&components).unwrap();
    let partial = form_double_length_zmk(&components[..2]).unwrap();
    assert_ne!(full, partial);
    assert_ne!(full.key_check_value(), partial.key_check_value());

    // A key wrapped under the full ZMK does not unwrap under the partial one.
    let clear = [0x11u8; 16];
    let wrapped = full.encrypt_key(&clear).unwrap();
    assert_ne!(partial.decrypt_key(&wrapped).unwrap().as_slice(), &clear);
}

/// A mistyped component is caught at load or at forming, never silently.
#[test]
fn bad_custodian_input_is_rejected() {
    assert!(matches!(
        load_component("0123456789ABCDEF0123456789ABCDE"),
        Err(ZmkError::HexDecode(_))
    ));

    let good = load_component(&random_component_hex(16)).unwrap();
    let short = load_component(&random_component_hex(8)).unwrap();
    assert_eq!(
        form_double_length_zmk([&good, &short]).err(),
        Some(ZmkError::InvalidComponentSize(8))
    );
}

/// Components can be read straight out of a ceremony document.
#[test]
fn components_from_json_document() {
    let doc = format!(
        r#"{{"components": ["{}", "{}"]}}"#,
        random_component_hex(16),
        random_component_hex(16)
    );

    #[derive(serde::Deserialize)]
    struct Ceremony {
        components: Vec<Component>,
    }

    let ceremony: Ceremony = serde_json::from_str(&doc).unwrap();
    assert_eq!(ceremony.components.len(), 2);
    let zmk = form_double_length_zmk(&ceremony.components).unwrap();
    assert_eq!(zmk.key_check_value().len(), 16);
}

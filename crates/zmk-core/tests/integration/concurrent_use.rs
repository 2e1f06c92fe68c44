//! Shared ZMKs and keys used from several threads without locking.

use std::sync::Arc;
use std::thread;

use zmk_core::{Component, DoubleLengthKey, DoubleLengthZmk, Key, SingleLengthZmk};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn key_types_are_send_and_sync() {
    assert_send_sync::<Key>();
    assert_send_sync::<DoubleLengthKey>();
    assert_send_sync::<SingleLengthZmk>();
    assert_send_sync::<DoubleLengthZmk>();
    assert_send_sync::<Component>();
}

#[test]
fn shared_zmk_gives_identical_results_across_threads() {
    let zmk = Arc::new(DoubleLengthZmk::from_bytes([
        0x3b, 0x38, 0x98, 0x37, 0x15, 0x20, 0xf7, 0x5e, 0x92, 0x2f, 0xb5, 0x10, 0xc7, 0x1f, 0x43,
        0x6e,
    ]));
    let expected_kcv = zmk.key_check_value();
    let expected_wrap = zmk.encrypt_key(&[0x42; 16]).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let zmk = Arc::clone(&zmk);
            thread::spawn(move || {
                let mut results = Vec::new();
                for _ in 0..100 {
                    results.push((zmk.key_check_value(), zmk.encrypt_key(&[0x42; 16]).unwrap()));
                }
                results
            })
        })
        .collect();

    for handle in handles {
        for (kcv, wrapped) in handle.join().unwrap() {
            assert_eq!(kcv, expected_kcv);
            assert_eq!(wrapped, expected_wrap);
        }
    }
}

// tests/core/buffer.rs
use std::borrow::Cow;

use hash_bytes::buffer::{concat_bytes, equals_bytes, try_concat_bytes, wrap_hash};
use hash_bytes::codec::bytes_to_hex;
use hash_bytes::error::BytesError;
use hash_bytes::input::Input;
use sha2::{Digest, Sha256};

#[test]
fn test_concat_bytes_preserves_order_and_length() {
    let a = [1u8, 2, 3];
    let b = [4u8, 5];
    let out = concat_bytes(&[&a[..], &b[..]]);

    assert_eq!(out.len(), a.len() + b.len());
    assert_eq!(&out[..a.len()], &a);
    assert_eq!(&out[a.len()..], &b);
}

#[test]
fn test_concat_bytes_single_argument_is_not_copied() {
    let a = vec![9u8, 8, 7];
    let out = concat_bytes(&[&a[..]]);

    assert!(matches!(out, Cow::Borrowed(_)));
    assert!(std::ptr::eq(out.as_ptr(), a.as_ptr()));
}

#[test]
fn test_concat_bytes_many_and_none() {
    let parts: [&[u8]; 4] = [b"ab", b"", b"c", b"def"];
    assert_eq!(&*concat_bytes(&parts), b"abcdef");
    assert!(concat_bytes(&[]).is_empty());
}

#[test]
fn test_try_concat_bytes_rejects_text() {
    let ok = try_concat_bytes(&[Input::Bytes(b"ab"), Input::Bytes(b"cd")]).unwrap();
    assert_eq!(&*ok, b"abcd");

    let err = try_concat_bytes(&[Input::Bytes(b"ab"), Input::Text("cd")]).unwrap_err();
    assert!(matches!(err, BytesError::TypeValidation(_)));
}

#[test]
fn test_equals_bytes() {
    assert!(equals_bytes(&[1, 2, 3], &[1, 2, 3]));
    assert!(!equals_bytes(&[1, 2, 3], &[1, 2, 4]));
    assert!(!equals_bytes(&[1, 2, 3], &[1, 2]));
    assert!(equals_bytes(&[], &[]));

    let a: Vec<u8> = (0..=255).collect();
    assert!(equals_bytes(&a, &a));
}

#[test]
fn test_wrap_hash_forwards_bytes_to_sha256() {
    let sha256 = wrap_hash(|msg: &[u8]| Sha256::digest(msg));
    let digest = sha256.call(b"abc").unwrap();

    assert_eq!(
        bytes_to_hex(&digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_wrap_hash_forwards_bytes_to_blake3() {
    let hash = wrap_hash(|msg: &[u8]| blake3::hash(msg));
    let data = vec![0x42u8; 100];

    assert_eq!(hash.call(&data).unwrap(), blake3::hash(&data));
}

#[test]
fn test_wrap_hash_rejects_text_without_calling_inner() {
    let calls = std::cell::Cell::new(0);
    let hash = wrap_hash(|msg: &[u8]| {
        calls.set(calls.get() + 1);
        Sha256::digest(msg)
    });

    let err = hash.call("abc").unwrap_err();
    assert!(matches!(err, BytesError::TypeValidation(_)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_wrap_hash_with_lengths() {
    let hash = wrap_hash(|msg: &[u8]| blake3::hash(msg)).with_lengths(&[32]);

    assert!(hash.call(&[0u8; 32]).is_ok());
    assert_eq!(
        hash.call(&[0u8; 31]).unwrap_err(),
        BytesError::InvalidLength {
            expected: vec![32],
            actual: 31
        }
    );
}

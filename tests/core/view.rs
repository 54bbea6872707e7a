// tests/core/view.rs
use hash_bytes::consts::ENDIAN_PROBE_WORD;
use hash_bytes::error::BytesError;
use hash_bytes::view::{create_view, rotr, u32_view, u8_view, Endianness};

#[repr(align(4))]
struct Aligned([u8; 8]);

#[test]
fn test_host_is_little_endian() {
    assert_eq!(Endianness::host(), Endianness::Little);
    assert!(Endianness::host().ensure_supported().is_ok());
}

#[test]
fn test_big_endian_probe_is_rejected() {
    let big = Endianness::from_probe(ENDIAN_PROBE_WORD.to_be_bytes());
    assert_eq!(big, Endianness::Big);
    assert!(big.ensure_supported().unwrap_err().is_platform_unsupported());
}

#[test]
fn test_u8_view_shares_storage() {
    let buf = vec![1u8, 2, 3];
    let view = u8_view(&buf);
    assert!(std::ptr::eq(view.as_ptr(), buf.as_ptr()));
    assert_eq!(view.len(), 3);
}

#[test]
fn test_u32_view_drops_trailing_bytes() {
    let buf = [1u8, 0, 0, 0, 2, 0, 0, 0, 9, 9, 9];
    let view = u32_view(&buf);

    assert_eq!(view.len(), 2);
    assert_eq!(view.as_bytes().len(), 8);
    assert_eq!(view.get(0), Some(u32::from_ne_bytes([1, 0, 0, 0])));
    assert_eq!(view.get(1), Some(u32::from_ne_bytes([2, 0, 0, 0])));
    assert_eq!(view.get(2), None);
    assert_eq!(view.to_vec(), vec![1u32, 2]);
    assert_eq!(view.iter().len(), 2);
}

#[test]
fn test_u32_view_short_buffers() {
    assert!(u32_view(&[]).is_empty());
    assert!(u32_view(&[1, 2, 3]).is_empty());
    assert_eq!(u32_view(&[1, 2, 3]).get(0), None);
}

#[test]
fn test_u32_view_as_words_when_aligned() {
    let buf = Aligned([0x44, 0x33, 0x22, 0x11, 0xff, 0, 0, 0]);
    let view = u32_view(&buf.0);

    let words = view.as_words().expect("aligned buffer");
    assert_eq!(words, &[0x1122_3344u32, 0xff]);
    assert!(std::ptr::eq(words.as_ptr() as *const u8, buf.0.as_ptr()));

    // Shifted by one byte the buffer is never 4-byte aligned
    assert!(u32_view(&buf.0[1..]).as_words().is_none());
}

#[test]
fn test_rotr_known_values() {
    assert_eq!(rotr(0x1234_5678, 8), 0x7812_3456);
    assert_eq!(rotr(0x0000_0001, 1), 0x8000_0000);
    assert_eq!(rotr(0xdead_beef, 0), 0xdead_beef);
}

#[test]
fn test_rotr_shift_is_modulo_32() {
    for w in [0u32, 1, 0xdead_beef, u32::MAX, 0x8000_0001] {
        assert_eq!(rotr(w, 32), rotr(w, 0));
        assert_eq!(rotr(w, 35), rotr(w, 3));
    }
}

#[test]
fn test_rotr_inverse() {
    for w in [1u32, 0x0123_4567, 0xdead_beef, u32::MAX - 7] {
        assert_eq!(rotr(w, 0), w);
        for s in 0..32 {
            assert_eq!(rotr(rotr(w, s), 32 - s), w);
        }
    }
}

#[test]
fn test_byte_view_reads_in_both_orders() {
    let mut buf = [0x11u8, 0x22, 0x33, 0x44, 0x55];
    let view = create_view(&mut buf);

    assert_eq!(view.len(), 5);
    assert_eq!(view.get_u32(0, Endianness::Little).unwrap(), 0x4433_2211);
    assert_eq!(view.get_u32(0, Endianness::Big).unwrap(), 0x1122_3344);
    assert_eq!(view.get_u32(1, Endianness::Big).unwrap(), 0x2233_4455);
}

#[test]
fn test_byte_view_writes_through_to_buffer() {
    let mut buf = [0u8; 16];
    {
        let mut view = create_view(&mut buf);
        view.set_u32(0, 0xdead_beef, Endianness::Big).unwrap();
        view.set_u32(4, 0xdead_beef, Endianness::Little).unwrap();
        view.set_u64(8, 0x0102_0304_0506_0708, Endianness::Big).unwrap();

        assert_eq!(view.get_u32(0, Endianness::Big).unwrap(), 0xdead_beef);
        assert_eq!(view.get_u32(4, Endianness::Little).unwrap(), 0xdead_beef);
        assert_eq!(
            view.get_u64(8, Endianness::Big).unwrap(),
            0x0102_0304_0506_0708
        );
    }

    assert_eq!(&buf[..4], &[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(&buf[4..8], &[0xef, 0xbe, 0xad, 0xde]);
    assert_eq!(&buf[8..], &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_byte_view_rejects_out_of_range_offsets() {
    let mut buf = [0u8; 6];
    let mut view = create_view(&mut buf);

    assert_eq!(
        view.get_u32(3, Endianness::Little),
        Err(BytesError::ViewOutOfRange {
            offset: 3,
            width: 4,
            len: 6
        })
    );
    assert!(view.get_u64(0, Endianness::Big).is_err());
    assert!(view.set_u32(usize::MAX, 1, Endianness::Big).is_err());
    assert!(view.get_u32(2, Endianness::Big).is_ok());

    // Failed writes leave the buffer untouched
    assert!(view.set_u32(4, u32::MAX, Endianness::Little).is_err());
    assert_eq!(view.as_bytes(), &[0u8; 6]);
}

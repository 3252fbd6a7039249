// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use evcompat_ffi::*;

const EFAULT: i32 = -14;
const EINVAL: i32 = -22;

#[test]
fn test_event_sizes() {
    assert_eq!(evcompat_event_size(0, false), 24);
    assert_eq!(evcompat_event_size(0, true), 16);
    assert_eq!(evcompat_event_size(1, true), 8);
    assert_eq!(evcompat_event_size(2, false), 16);
    assert_eq!(evcompat_event_size(3, false), 0);
    assert_eq!(evcompat_event_size(-1, false), 0);
}

#[test]
fn test_configure_is_once() {
    // Either this test configured first, or another test already used the
    // default translator. Both leave the same configuration in place.
    let first = evcompat_configure(true, false);
    assert!(first == 0 || first == -16);
    assert_eq!(evcompat_configure(false, false), -16);
    assert_eq!(evcompat_event_size(0, true), 16);
}

#[test]
fn test_raw_roundtrip() {
    let event = InputValue { type_: 3, code: 0x35, value: -812 };
    let mut buf = [0u8; 8];
    let mut out = InputValue::default();

    unsafe {
        assert_eq!(evcompat_event_to_user(buf.as_mut_ptr(), &event, 1, 1, false), 0);
        assert_eq!(evcompat_event_from_user(buf.as_ptr(), &mut out, 1, false), 0);
    }
    assert_eq!(out, event);
}

#[test]
fn test_legacy_compat_writes_narrow_event() {
    let event = InputValue { type_: 1, code: 30, value: 1 };
    let mut buf = [0xeeu8; 24];

    unsafe {
        assert_eq!(evcompat_value_to_user(buf.as_mut_ptr(), &event, 0, true), 0);
    }
    assert_eq!(&buf[8..10], &1u16.to_ne_bytes());
    assert_eq!(&buf[10..12], &30u16.to_ne_bytes());
    assert_eq!(&buf[12..16], &1i32.to_ne_bytes());
    assert!(buf[16..].iter().all(|b| *b == 0xee));
}

#[test]
fn test_composite_writes_timestamp() {
    let event = InputValue { type_: 0, code: 0, value: 0 };
    let mut buf = [0u8; 16];

    unsafe {
        assert_eq!(evcompat_event_to_user(buf.as_mut_ptr(), &event, 1, 2, false), 0);
    }
    let nanos = i64::from_ne_bytes(buf[8..16].try_into().unwrap());
    assert!(nanos > 0);
}

#[test]
fn test_null_buffers_fault() {
    let event = InputValue::default();
    let mut out = InputValue::default();

    unsafe {
        assert_eq!(evcompat_event_from_user(std::ptr::null(), &mut out, 0, false), EFAULT);
        assert_eq!(evcompat_event_to_user(std::ptr::null_mut(), &event, 0, 1, false), EFAULT);
        let null_out = std::ptr::null_mut();
        assert_eq!(evcompat_event_from_user([0u8; 8].as_ptr(), null_out, 1, false), EFAULT);
    }
}

#[test]
fn test_unknown_interface_is_invalid() {
    let event = InputValue::default();
    let mut out = InputValue::default();
    let mut buf = [0u8; 24];

    unsafe {
        assert_eq!(evcompat_event_from_user(buf.as_ptr(), &mut out, 3, false), EINVAL);
        assert_eq!(evcompat_event_to_user(buf.as_mut_ptr(), &event, 0, -1, false), EINVAL);
    }
    assert_eq!(buf, [0u8; 24]);
}

#[test]
fn test_compat_custom_effect_is_widened() {
    let mut narrow = [0u8; 44];
    narrow[0..2].copy_from_slice(&0x51u16.to_ne_bytes());
    narrow[16..18].copy_from_slice(&0x5du16.to_ne_bytes());
    narrow[36..40].copy_from_slice(&4u32.to_ne_bytes());
    narrow[40..44].copy_from_slice(&0x1234u32.to_ne_bytes());
    let mut native = [0xffu8; 48];

    unsafe {
        assert_eq!(evcompat_ff_effect_from_user(narrow.as_ptr(), 44, native.as_mut_ptr(), true), 0);
    }
    assert_eq!(&native[..40], &narrow[..40]);
    assert_eq!(&native[40..48], &0x1234u64.to_ne_bytes());
}

#[test]
fn test_effect_size_mismatch_is_invalid() {
    let buf = [0u8; 48];
    let mut native = [0u8; 48];

    unsafe {
        let out = native.as_mut_ptr();
        assert_eq!(evcompat_ff_effect_from_user(buf.as_ptr(), 48, out, true), EINVAL);
        assert_eq!(evcompat_ff_effect_from_user(buf.as_ptr(), 44, out, false), EINVAL);
        assert_eq!(evcompat_ff_effect_from_user(std::ptr::null(), 48, out, false), EFAULT);
    }
}

#[test]
fn test_native_effect_is_copied_verbatim() {
    let mut buf = [0u8; 48];
    buf[0..2].copy_from_slice(&0x7au16.to_ne_bytes());
    for (i, b) in buf[16..].iter_mut().enumerate() {
        *b = 0x10 + i as u8;
    }
    let mut native = [0u8; 48];

    unsafe {
        assert_eq!(evcompat_ff_effect_from_user(buf.as_ptr(), 48, native.as_mut_ptr(), false), 0);
    }
    assert_eq!(native, buf);
}

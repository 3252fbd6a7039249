// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::boundary::UserMemory;
use crate::config::CompatConfig;
use crate::error::Fault;
use crate::tests::{memory, StepClock, Unmapped, BASE};
use crate::translate::Translator;
use crate::types::event::{CallerWidth, ClockDomain, EventRecord, FramingMode};
use crate::types::time::TimeVal;
use crate::wire::event::{encode_legacy_compat, encode_legacy_native, encode_value};

fn translator() -> Translator<StepClock> {
    Translator::with_clock(
        CompatConfig {
            compat_support: true,
            compat_64bit_time: false,
        },
        StepClock::new(1_000_000_000, 1_000),
    )
}

#[test]
fn test_raw_and_composite_roundtrip() {
    let t = translator();
    let records = [
        EventRecord::new(0, 0, 0),
        EventRecord::new(1, 30, 1),
        EventRecord::new(3, 0x35, -4096),
        EventRecord::new(u16::MAX, u16::MAX, i32::MIN),
    ];

    for mode in [FramingMode::Raw, FramingMode::Composite] {
        for width in [CallerWidth::Native, CallerWidth::Compat] {
            for record in &records {
                let mut mem = memory(16, width, 0);
                t.event_to_user(&mut mem, BASE, record, mode, ClockDomain::Monotonic).unwrap();
                let decoded = t.event_from_user(&mem, BASE, mode).unwrap();
                assert_eq!(&decoded, record, "{:?}/{:?} must roundtrip", mode, width);
            }
        }
    }
}

#[test]
fn test_composite_reads_only_the_record() {
    let t = translator();
    // Exactly one record of caller memory: a read of the timestamp would fault.
    let mut mem = memory(8, CallerWidth::Native, 0);
    mem.as_bytes_mut().copy_from_slice(&encode_value(&EventRecord::new(4, 4, 9)));

    let decoded = t.event_from_user(&mem, BASE, FramingMode::Composite).unwrap();
    assert_eq!(decoded, EventRecord::new(4, 4, 9));
}

#[test]
fn test_legacy_native_drops_sender_time() {
    let t = translator();
    let record = EventRecord::new(1, 272, 1);

    let a = encode_legacy_native(TimeVal { sec: 0, usec: 0 }, &record);
    let b = encode_legacy_native(TimeVal { sec: -99, usec: 123_456_789 }, &record);
    assert_ne!(a, b);

    let mem_a = UserMemory::from_bytes(BASE, a.to_vec(), CallerWidth::Native);
    let mem_b = UserMemory::from_bytes(BASE, b.to_vec(), CallerWidth::Native);

    let da = t.event_from_user(&mem_a, BASE, FramingMode::Legacy).unwrap();
    let db = t.event_from_user(&mem_b, BASE, FramingMode::Legacy).unwrap();
    assert_eq!(da, record);
    assert_eq!(da, db);
}

#[test]
fn test_legacy_compat_drops_sender_time() {
    let t = translator();
    let record = EventRecord::new(2, 8, -3);

    let a = encode_legacy_compat(TimeVal { sec: 1, usec: 2 }, &record);
    let b = encode_legacy_compat(TimeVal { sec: 0x7fff_ffff, usec: 999_999 }, &record);

    let mem_a = UserMemory::from_bytes(BASE, a.to_vec(), CallerWidth::Compat);
    let mem_b = UserMemory::from_bytes(BASE, b.to_vec(), CallerWidth::Compat);

    assert_eq!(t.event_from_user(&mem_a, BASE, FramingMode::Legacy).unwrap(), record);
    assert_eq!(t.event_from_user(&mem_b, BASE, FramingMode::Legacy).unwrap(), record);
}

#[test]
fn test_legacy_layout_follows_caller_width() {
    let t = translator();
    // 16 bytes is a whole compat event but only part of a native one.
    let compat = memory(16, CallerWidth::Compat, 0);
    let native = memory(16, CallerWidth::Native, 0);

    assert!(t.event_from_user(&compat, BASE, FramingMode::Legacy).is_ok());
    assert_eq!(t.event_from_user(&native, BASE, FramingMode::Legacy), Err(Fault::Unreachable));
}

#[test]
fn test_legacy_compat_honours_64bit_time() {
    let t = Translator::with_clock(
        CompatConfig {
            compat_support: true,
            compat_64bit_time: true,
        },
        StepClock::new(0, 1),
    );
    let record = EventRecord::new(5, 6, 7);
    let bytes = encode_legacy_native(TimeVal { sec: 3, usec: 4 }, &record);
    let mem = UserMemory::from_bytes(BASE, bytes.to_vec(), CallerWidth::Compat);

    assert_eq!(t.event_from_user(&mem, BASE, FramingMode::Legacy).unwrap(), record);
}

#[test]
fn test_unreachable_is_propagated() {
    let t = translator();
    for width in [CallerWidth::Native, CallerWidth::Compat] {
        let mem = Unmapped { width };
        for mode in [FramingMode::Legacy, FramingMode::Raw, FramingMode::Composite] {
            assert_eq!(t.event_from_user(&mem, BASE, mode), Err(Fault::Unreachable));
        }
    }
}

#[test]
fn test_unknown_mode_is_rejected() {
    let t = translator();
    let mem = memory(24, CallerWidth::Native, 0);

    assert_eq!(t.event_from_user(&mem, BASE, 3u32), Err(Fault::UnsupportedMode(3)));
    assert_eq!(t.event_from_user(&mem, BASE, u32::MAX), Err(Fault::UnsupportedMode(u32::MAX)));
    // Raw numbers inside the enumeration are accepted.
    assert!(t.event_from_user(&mem, BASE, 1u32).is_ok());
}

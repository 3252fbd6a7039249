// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Event wire forms.
//!
//! Layouts:
//! ```text
//! value          [type u16][code u16][value i32]                      8 bytes
//! legacy native  [tv_sec i64][tv_usec i64][value ...]                24 bytes
//! legacy compat  [tv_sec i32][tv_usec i32][value ...]                16 bytes
//! composite      [value ...][ns i64]                                 16 bytes
//! ```

use byteorder::{ByteOrder, NativeEndian};

use crate::layout::{LEGACY_COMPAT_SIZE, LEGACY_NATIVE_SIZE, TIMESTAMP_SIZE, VALUE_SIZE};
use crate::types::event::EventRecord;
use crate::types::time::TimeVal;

pub fn decode_value(buf: &[u8; VALUE_SIZE]) -> EventRecord {
    EventRecord {
        ev_type: NativeEndian::read_u16(&buf[0..2]),
        code: NativeEndian::read_u16(&buf[2..4]),
        value: NativeEndian::read_i32(&buf[4..8]),
    }
}

pub fn encode_value(record: &EventRecord) -> [u8; VALUE_SIZE] {
    let mut buf = [0u8; VALUE_SIZE];
    NativeEndian::write_u16(&mut buf[0..2], record.ev_type);
    NativeEndian::write_u16(&mut buf[2..4], record.code);
    NativeEndian::write_i32(&mut buf[4..8], record.value);
    buf
}

fn value_tail(buf: &[u8]) -> [u8; VALUE_SIZE] {
    let mut value = [0u8; VALUE_SIZE];
    value.copy_from_slice(&buf[buf.len() - VALUE_SIZE..]);
    value
}

pub fn decode_legacy_native(buf: &[u8; LEGACY_NATIVE_SIZE]) -> (TimeVal, EventRecord) {
    let time = TimeVal {
        sec: NativeEndian::read_i64(&buf[0..8]),
        usec: NativeEndian::read_i64(&buf[8..16]),
    };
    (time, decode_value(&value_tail(buf)))
}

pub fn encode_legacy_native(time: TimeVal, record: &EventRecord) -> [u8; LEGACY_NATIVE_SIZE] {
    let mut buf = [0u8; LEGACY_NATIVE_SIZE];
    NativeEndian::write_i64(&mut buf[0..8], time.sec);
    NativeEndian::write_i64(&mut buf[8..16], time.usec);
    buf[16..].copy_from_slice(&encode_value(record));
    buf
}

pub fn decode_legacy_compat(buf: &[u8; LEGACY_COMPAT_SIZE]) -> (TimeVal, EventRecord) {
    let time = TimeVal {
        sec: i64::from(NativeEndian::read_i32(&buf[0..4])),
        usec: i64::from(NativeEndian::read_i32(&buf[4..8])),
    };
    (time, decode_value(&value_tail(buf)))
}

/// Seconds are truncated to the 32-bit field, as a 32-bit caller's
/// `time_t` would be.
pub fn encode_legacy_compat(time: TimeVal, record: &EventRecord) -> [u8; LEGACY_COMPAT_SIZE] {
    let mut buf = [0u8; LEGACY_COMPAT_SIZE];
    NativeEndian::write_i32(&mut buf[0..4], time.sec as i32);
    NativeEndian::write_i32(&mut buf[4..8], time.usec as i32);
    buf[8..].copy_from_slice(&encode_value(record));
    buf
}

pub fn encode_nanos(nanos: i64) -> [u8; TIMESTAMP_SIZE] {
    let mut buf = [0u8; TIMESTAMP_SIZE];
    NativeEndian::write_i64(&mut buf, nanos);
    buf
}

pub fn decode_nanos(buf: &[u8; TIMESTAMP_SIZE]) -> i64 {
    NativeEndian::read_i64(buf)
}

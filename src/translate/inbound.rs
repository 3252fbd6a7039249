// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Caller buffer → [`EventRecord`].

use tracing::{debug, trace};

use crate::boundary::{Boundary, UserAddr};
use crate::error::Result;
use crate::layout::{
    EventLayout, LayoutSelector, LEGACY_COMPAT_SIZE, LEGACY_NATIVE_SIZE, VALUE_SIZE,
};
use crate::types::event::{EventRecord, IntoFramingMode};
use crate::wire::event as wire;

/// Reads one event from `addr`.
///
/// Legacy timestamps are read with the struct but never used. Raw and
/// composite framings read only the leading record; a sender's composite
/// timestamp is not consumed.
pub fn decode_event<B: Boundary + ?Sized>(
    selector: &LayoutSelector,
    boundary: &B,
    addr: UserAddr,
    mode: impl IntoFramingMode,
) -> Result<EventRecord> {
    let mode = mode.into_framing_mode()?;
    let width = boundary.caller_width();
    let layout = selector.event_layout(mode, width);
    trace!(?mode, ?width, ?layout, %addr, "decoding event");

    let record = match layout {
        EventLayout::LegacyCompat => {
            let mut buf = [0u8; LEGACY_COMPAT_SIZE];
            read(boundary, addr, &mut buf)?;
            let (_sender_time, record) = wire::decode_legacy_compat(&buf);
            record
        }
        EventLayout::LegacyNative => {
            let mut buf = [0u8; LEGACY_NATIVE_SIZE];
            read(boundary, addr, &mut buf)?;
            let (_sender_time, record) = wire::decode_legacy_native(&buf);
            record
        }
        EventLayout::Value | EventLayout::Composite => {
            let mut buf = [0u8; VALUE_SIZE];
            read(boundary, addr, &mut buf)?;
            wire::decode_value(&buf)
        }
    };

    Ok(record)
}

fn read<B: Boundary + ?Sized>(boundary: &B, addr: UserAddr, buf: &mut [u8]) -> Result<()> {
    boundary.read(addr, buf).map_err(|e| {
        debug!(%addr, len = buf.len(), "inbound event copy failed");
        e
    })
}

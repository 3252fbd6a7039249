// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! [`EventRecord`] → caller buffer.

use tracing::{debug, trace};

use crate::boundary::{Boundary, UserAddr};
use crate::clock::{resolve_clock, Clock};
use crate::error::Result;
use crate::layout::{EventLayout, LayoutSelector, VALUE_SIZE};
use crate::types::event::{ClockDomain, EventRecord, IntoFramingMode};
use crate::wire::event as wire;

/// Writes one event to `addr`, stamping it from `domain` where the framing
/// carries time.
///
/// The composite framing is two writes: the record, then the timestamp right
/// after it. If the second write fails the first has already landed and the
/// call still fails; readers depend on that ordering, so it is not rolled
/// back.
pub fn encode_event<B, C>(
    selector: &LayoutSelector,
    clock: &C,
    boundary: &mut B,
    addr: UserAddr,
    record: &EventRecord,
    mode: impl IntoFramingMode,
    domain: ClockDomain,
) -> Result<()>
where
    B: Boundary + ?Sized,
    C: Clock + ?Sized,
{
    let mode = mode.into_framing_mode()?;
    let width = boundary.caller_width();
    let layout = selector.event_layout(mode, width);
    trace!(?mode, ?width, ?layout, ?domain, %addr, "encoding event");

    match layout {
        EventLayout::LegacyCompat => {
            let time = resolve_clock(clock, domain).to_timeval();
            write(boundary, addr, &wire::encode_legacy_compat(time, record))
        }
        EventLayout::LegacyNative => {
            let time = resolve_clock(clock, domain).to_timeval();
            write(boundary, addr, &wire::encode_legacy_native(time, record))
        }
        EventLayout::Value => write(boundary, addr, &wire::encode_value(record)),
        EventLayout::Composite => {
            write(boundary, addr, &wire::encode_value(record))?;
            let nanos = resolve_clock(clock, domain).as_nanos();
            write(boundary, addr.offset(VALUE_SIZE), &wire::encode_nanos(nanos)).map_err(|e| {
                debug!(%addr, "composite timestamp not delivered after record element");
                e
            })
        }
    }
}

/// [`encode_event`] for callers that have no clock preference; legacy
/// framings are stamped from the wall clock.
pub fn encode_value<B, C>(
    selector: &LayoutSelector,
    clock: &C,
    boundary: &mut B,
    addr: UserAddr,
    record: &EventRecord,
    mode: impl IntoFramingMode,
) -> Result<()>
where
    B: Boundary + ?Sized,
    C: Clock + ?Sized,
{
    encode_event(selector, clock, boundary, addr, record, mode, ClockDomain::Real)
}

fn write<B: Boundary + ?Sized>(boundary: &mut B, addr: UserAddr, bytes: &[u8]) -> Result<()> {
    boundary.write(addr, bytes).map_err(|e| {
        debug!(%addr, len = bytes.len(), "outbound event copy failed");
        e
    })
}

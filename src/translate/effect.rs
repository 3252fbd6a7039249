// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Caller buffer → [`EffectDescriptor`].

use tracing::{debug, trace};

use crate::boundary::{Boundary, UserAddr};
use crate::error::{Fault, Result};
use crate::layout::{EffectLayout, LayoutSelector, EFFECT_COMPAT_SIZE, EFFECT_NATIVE_SIZE};
use crate::types::effect::EffectDescriptor;
use crate::wire::effect as wire;

/// Reads one effect of `declared_size` bytes from `addr`.
///
/// The size must match the caller's layout exactly; nothing is read
/// otherwise. Narrow effects are widened after the copy, and only a custom
/// periodic effect has its sample reference widened.
pub fn decode_effect<B: Boundary + ?Sized>(
    selector: &LayoutSelector,
    boundary: &B,
    addr: UserAddr,
    declared_size: usize,
) -> Result<EffectDescriptor> {
    match checked_layout(selector, boundary, addr, declared_size)? {
        EffectLayout::Compat => {
            let mut buf = [0u8; EFFECT_COMPAT_SIZE];
            read(boundary, addr, &mut buf)?;
            Ok(wire::decode_compat(&buf))
        }
        EffectLayout::Native => {
            let mut buf = [0u8; EFFECT_NATIVE_SIZE];
            read(boundary, addr, &mut buf)?;
            Ok(wire::decode_native(&buf))
        }
    }
}

/// Reads one effect and returns it in the native layout.
///
/// A native caller's bytes are returned exactly as copied. A narrow effect
/// is decoded and re-encoded with its sample reference widened.
pub fn effect_to_native<B: Boundary + ?Sized>(
    selector: &LayoutSelector,
    boundary: &B,
    addr: UserAddr,
    declared_size: usize,
) -> Result<[u8; EFFECT_NATIVE_SIZE]> {
    match checked_layout(selector, boundary, addr, declared_size)? {
        EffectLayout::Compat => {
            let mut buf = [0u8; EFFECT_COMPAT_SIZE];
            read(boundary, addr, &mut buf)?;
            Ok(wire::encode_native(&wire::decode_compat(&buf)))
        }
        EffectLayout::Native => {
            let mut buf = [0u8; EFFECT_NATIVE_SIZE];
            read(boundary, addr, &mut buf)?;
            Ok(buf)
        }
    }
}

fn checked_layout<B: Boundary + ?Sized>(
    selector: &LayoutSelector,
    boundary: &B,
    addr: UserAddr,
    declared_size: usize,
) -> Result<EffectLayout> {
    let width = boundary.caller_width();
    let layout = selector.effect_layout(width);
    trace!(?width, ?layout, declared_size, %addr, "decoding effect");

    if declared_size != layout.size() {
        debug!(expected = layout.size(), found = declared_size, "effect size rejected");
        return Err(Fault::InvalidSize {
            expected: layout.size(),
            found: declared_size,
        });
    }
    Ok(layout)
}

fn read<B: Boundary + ?Sized>(boundary: &B, addr: UserAddr, buf: &mut [u8]) -> Result<()> {
    boundary.read(addr, buf).map_err(|e| {
        debug!(%addr, len = buf.len(), "effect copy failed");
        e
    })
}

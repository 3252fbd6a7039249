// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wire layout selection.
//!
//! Sizes are fixed per (framing, width) pair. Native layouts follow the
//! 64-bit ABI, narrow layouts the 32-bit one, both in host byte order.

use crate::config::CompatConfig;
use crate::types::event::{CallerWidth, FramingMode};

/// `{type u16, code u16, value i32}`.
pub const VALUE_SIZE: usize = 8;
/// Trailing nanosecond element of the composite framing.
pub const TIMESTAMP_SIZE: usize = 8;
/// `{tv_sec i64, tv_usec i64}` + value.
pub const LEGACY_NATIVE_SIZE: usize = 16 + VALUE_SIZE;
/// `{tv_sec i32, tv_usec i32}` + value.
pub const LEGACY_COMPAT_SIZE: usize = 8 + VALUE_SIZE;
pub const COMPOSITE_SIZE: usize = VALUE_SIZE + TIMESTAMP_SIZE;

/// Effect header (type, id, direction, trigger, replay) padded to the union.
pub const EFFECT_HEADER_SIZE: usize = 16;
/// Periodic payload with a 64-bit sample reference.
pub const EFFECT_UNION_NATIVE_SIZE: usize = 32;
/// Periodic payload with a 32-bit sample reference.
pub const EFFECT_UNION_COMPAT_SIZE: usize = 28;
pub const EFFECT_NATIVE_SIZE: usize = EFFECT_HEADER_SIZE + EFFECT_UNION_NATIVE_SIZE;
pub const EFFECT_COMPAT_SIZE: usize = EFFECT_HEADER_SIZE + EFFECT_UNION_COMPAT_SIZE;

const _: () = assert!(EFFECT_COMPAT_SIZE <= EFFECT_NATIVE_SIZE);
const _: () = assert!(LEGACY_COMPAT_SIZE <= LEGACY_NATIVE_SIZE);

/// Concrete layout of one event element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventLayout {
    LegacyNative,
    LegacyCompat,
    Value,
    Composite,
}

impl EventLayout {
    pub fn size(&self) -> usize {
        match self {
            EventLayout::LegacyNative => LEGACY_NATIVE_SIZE,
            EventLayout::LegacyCompat => LEGACY_COMPAT_SIZE,
            EventLayout::Value => VALUE_SIZE,
            EventLayout::Composite => COMPOSITE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectLayout {
    Native,
    Compat,
}

impl EffectLayout {
    pub fn size(&self) -> usize {
        match self {
            EffectLayout::Native => EFFECT_NATIVE_SIZE,
            EffectLayout::Compat => EFFECT_COMPAT_SIZE,
        }
    }
}

/// Pure mapping from caller width and framing to a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutSelector {
    config: CompatConfig,
}

impl LayoutSelector {
    pub fn new(config: CompatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompatConfig {
        &self.config
    }

    /// Whether this caller gets narrow layouts at all. A build without the
    /// `compat` feature treats every caller as native, whatever the config says.
    pub fn is_compat(&self, width: CallerWidth) -> bool {
        cfg!(feature = "compat") && self.config.compat_support && width == CallerWidth::Compat
    }

    pub fn event_layout(&self, mode: FramingMode, width: CallerWidth) -> EventLayout {
        match mode {
            FramingMode::Legacy => {
                if self.is_compat(width) && !self.config.compat_64bit_time {
                    EventLayout::LegacyCompat
                } else {
                    EventLayout::LegacyNative
                }
            }
            FramingMode::Raw => EventLayout::Value,
            FramingMode::Composite => EventLayout::Composite,
        }
    }

    pub fn wire_size(&self, mode: FramingMode, width: CallerWidth) -> usize {
        self.event_layout(mode, width).size()
    }

    /// Stride for a raw interface number; 0 when the number is unknown.
    pub fn event_size(&self, mode: u32, width: CallerWidth) -> usize {
        FramingMode::from_raw(mode)
            .map(|mode| self.wire_size(mode, width))
            .unwrap_or(0)
    }

    pub fn effect_layout(&self, width: CallerWidth) -> EffectLayout {
        if self.is_compat(width) {
            EffectLayout::Compat
        } else {
            EffectLayout::Native
        }
    }
}

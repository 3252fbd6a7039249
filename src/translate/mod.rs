// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Translators, and the [`Translator`] a device layer holds per deployment.
pub mod inbound;
pub mod outbound;
pub mod effect;

use crate::boundary::{Boundary, UserAddr};
use crate::clock::{Clock, SystemClock};
use crate::config::CompatConfig;
use crate::error::Result;
use crate::layout::{LayoutSelector, EFFECT_NATIVE_SIZE};
use crate::types::effect::EffectDescriptor;
use crate::types::event::{
    CallerWidth, ClockDomain, EventRecord, FramingMode, IntoFramingMode,
};

/// Layout rules plus a clock. Holds no per-call state, so one instance can
/// serve any number of callers concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct Translator<C = SystemClock> {
    selector: LayoutSelector,
    clock: C,
}

impl Translator<SystemClock> {
    pub fn new(config: CompatConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Translator<C> {
    pub fn with_clock(config: CompatConfig, clock: C) -> Self {
        Self {
            selector: LayoutSelector::new(config),
            clock,
        }
    }

    pub fn selector(&self) -> &LayoutSelector {
        &self.selector
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn wire_size(&self, mode: FramingMode, width: CallerWidth) -> usize {
        self.selector.wire_size(mode, width)
    }

    pub fn event_from_user<B: Boundary + ?Sized>(
        &self,
        boundary: &B,
        addr: UserAddr,
        mode: impl IntoFramingMode,
    ) -> Result<EventRecord> {
        inbound::decode_event(&self.selector, boundary, addr, mode)
    }

    pub fn event_to_user<B: Boundary + ?Sized>(
        &self,
        boundary: &mut B,
        addr: UserAddr,
        record: &EventRecord,
        mode: impl IntoFramingMode,
        domain: ClockDomain,
    ) -> Result<()> {
        outbound::encode_event(
            &self.selector,
            &self.clock,
            boundary,
            addr,
            record,
            mode,
            domain,
        )
    }

    pub fn value_to_user<B: Boundary + ?Sized>(
        &self,
        boundary: &mut B,
        addr: UserAddr,
        record: &EventRecord,
        mode: impl IntoFramingMode,
    ) -> Result<()> {
        outbound::encode_value(&self.selector, &self.clock, boundary, addr, record, mode)
    }

    pub fn ff_effect_from_user<B: Boundary + ?Sized>(
        &self,
        boundary: &B,
        addr: UserAddr,
        declared_size: usize,
    ) -> Result<EffectDescriptor> {
        effect::decode_effect(&self.selector, boundary, addr, declared_size)
    }

    /// The effect as the host's native `ff_effect` bytes.
    pub fn ff_effect_native_from_user<B: Boundary + ?Sized>(
        &self,
        boundary: &B,
        addr: UserAddr,
        declared_size: usize,
    ) -> Result<[u8; EFFECT_NATIVE_SIZE]> {
        effect::effect_to_native(&self.selector, boundary, addr, declared_size)
    }
}

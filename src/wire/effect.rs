// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Effect wire forms.
//!
//! Both layouts share the 16-byte header and every union field up to the
//! periodic sample reference at union offset 24, which is a `u64` in the
//! native layout and a `u32` in the narrow one.
//!
//! Decoding is two-step: the tag (and for periodic effects the waveform) is
//! read first, and only the variant it names is parsed. The sample reference
//! is read last and only for custom periodic effects.

use byteorder::{ByteOrder, NativeEndian};

use crate::config::{FF_CONSTANT, FF_PERIODIC, FF_RAMP, FF_RUMBLE};
use crate::layout::{EFFECT_COMPAT_SIZE, EFFECT_HEADER_SIZE, EFFECT_NATIVE_SIZE};
use crate::types::effect::{
    ConditionEffect, ConditionKind, ConstantEffect, EffectDescriptor, EffectKind, Envelope,
    PeriodicEffect, RampEffect, Replay, RumbleEffect, SampleRef, Trigger, Waveform,
    OPAQUE_PAYLOAD_SIZE,
};

const _: () = assert!(EFFECT_HEADER_SIZE + OPAQUE_PAYLOAD_SIZE == EFFECT_NATIVE_SIZE);

const CONDITION_SIZE: usize = 12;
const PERIODIC_CUSTOM_LEN: usize = 20;
const PERIODIC_CUSTOM_DATA: usize = 24;

pub fn decode_native(buf: &[u8; EFFECT_NATIVE_SIZE]) -> EffectDescriptor {
    decode_with(buf, |u| {
        SampleRef(NativeEndian::read_u64(&u[PERIODIC_CUSTOM_DATA..PERIODIC_CUSTOM_DATA + 8]))
    })
}

pub fn decode_compat(buf: &[u8; EFFECT_COMPAT_SIZE]) -> EffectDescriptor {
    decode_with(buf, |u| {
        let narrow = NativeEndian::read_u32(&u[PERIODIC_CUSTOM_DATA..PERIODIC_CUSTOM_DATA + 4]);
        SampleRef::widen(narrow)
    })
}

/// `sample_ref` sees the union bytes and is called at most once, after the
/// waveform has been checked.
fn decode_with(buf: &[u8], sample_ref: impl FnOnce(&[u8]) -> SampleRef) -> EffectDescriptor {
    let effect_type = NativeEndian::read_u16(&buf[0..2]);
    let u = &buf[EFFECT_HEADER_SIZE..];

    let kind = match effect_type {
        FF_RUMBLE => EffectKind::Rumble(RumbleEffect {
            strong_magnitude: NativeEndian::read_u16(&u[0..2]),
            weak_magnitude: NativeEndian::read_u16(&u[2..4]),
        }),
        FF_PERIODIC => {
            let waveform = Waveform::from_raw(NativeEndian::read_u16(&u[0..2]));
            let custom_data = match waveform {
                Waveform::Custom => Some(sample_ref(u)),
                _ => None,
            };
            EffectKind::Periodic(PeriodicEffect {
                waveform,
                period: NativeEndian::read_u16(&u[2..4]),
                magnitude: NativeEndian::read_i16(&u[4..6]),
                offset: NativeEndian::read_i16(&u[6..8]),
                phase: NativeEndian::read_u16(&u[8..10]),
                envelope: read_envelope(&u[10..18]),
                custom_len: NativeEndian::read_u32(
                    &u[PERIODIC_CUSTOM_LEN..PERIODIC_CUSTOM_LEN + 4],
                ),
                custom_data,
            })
        }
        FF_CONSTANT => EffectKind::Constant(ConstantEffect {
            level: NativeEndian::read_i16(&u[0..2]),
            envelope: read_envelope(&u[2..10]),
        }),
        FF_RAMP => EffectKind::Ramp(RampEffect {
            start_level: NativeEndian::read_i16(&u[0..2]),
            end_level: NativeEndian::read_i16(&u[2..4]),
            envelope: read_envelope(&u[4..12]),
        }),
        other => match ConditionKind::from_raw(other) {
            Some(kind) => EffectKind::Condition(
                kind,
                [
                    read_condition(&u[0..CONDITION_SIZE]),
                    read_condition(&u[CONDITION_SIZE..2 * CONDITION_SIZE]),
                ],
            ),
            None => {
                let mut payload = [0u8; OPAQUE_PAYLOAD_SIZE];
                let len = u.len().min(OPAQUE_PAYLOAD_SIZE);
                payload[..len].copy_from_slice(&u[..len]);
                EffectKind::Opaque {
                    effect_type: other,
                    payload,
                }
            }
        },
    };

    EffectDescriptor {
        id: NativeEndian::read_i16(&buf[2..4]),
        direction: NativeEndian::read_u16(&buf[4..6]),
        trigger: Trigger {
            button: NativeEndian::read_u16(&buf[6..8]),
            interval: NativeEndian::read_u16(&buf[8..10]),
        },
        replay: Replay {
            length: NativeEndian::read_u16(&buf[10..12]),
            delay: NativeEndian::read_u16(&buf[12..14]),
        },
        kind,
    }
}

fn read_envelope(b: &[u8]) -> Envelope {
    Envelope {
        attack_length: NativeEndian::read_u16(&b[0..2]),
        attack_level: NativeEndian::read_u16(&b[2..4]),
        fade_length: NativeEndian::read_u16(&b[4..6]),
        fade_level: NativeEndian::read_u16(&b[6..8]),
    }
}

fn read_condition(b: &[u8]) -> ConditionEffect {
    ConditionEffect {
        right_saturation: NativeEndian::read_u16(&b[0..2]),
        left_saturation: NativeEndian::read_u16(&b[2..4]),
        right_coeff: NativeEndian::read_i16(&b[4..6]),
        left_coeff: NativeEndian::read_i16(&b[6..8]),
        deadband: NativeEndian::read_u16(&b[8..10]),
        center: NativeEndian::read_i16(&b[10..12]),
    }
}

fn write_envelope(b: &mut [u8], e: &Envelope) {
    NativeEndian::write_u16(&mut b[0..2], e.attack_length);
    NativeEndian::write_u16(&mut b[2..4], e.attack_level);
    NativeEndian::write_u16(&mut b[4..6], e.fade_length);
    NativeEndian::write_u16(&mut b[6..8], e.fade_level);
}

fn write_condition(b: &mut [u8], c: &ConditionEffect) {
    NativeEndian::write_u16(&mut b[0..2], c.right_saturation);
    NativeEndian::write_u16(&mut b[2..4], c.left_saturation);
    NativeEndian::write_i16(&mut b[4..6], c.right_coeff);
    NativeEndian::write_i16(&mut b[6..8], c.left_coeff);
    NativeEndian::write_u16(&mut b[8..10], c.deadband);
    NativeEndian::write_i16(&mut b[10..12], c.center);
}

/// Native form, as handed to the host. Padding and unused payload bytes are
/// zero; a periodic effect without samples gets a null reference.
pub fn encode_native(effect: &EffectDescriptor) -> [u8; EFFECT_NATIVE_SIZE] {
    let mut buf = [0u8; EFFECT_NATIVE_SIZE];
    NativeEndian::write_u16(&mut buf[0..2], effect.effect_type());
    NativeEndian::write_i16(&mut buf[2..4], effect.id);
    NativeEndian::write_u16(&mut buf[4..6], effect.direction);
    NativeEndian::write_u16(&mut buf[6..8], effect.trigger.button);
    NativeEndian::write_u16(&mut buf[8..10], effect.trigger.interval);
    NativeEndian::write_u16(&mut buf[10..12], effect.replay.length);
    NativeEndian::write_u16(&mut buf[12..14], effect.replay.delay);

    let u = &mut buf[EFFECT_HEADER_SIZE..];
    match &effect.kind {
        EffectKind::Rumble(r) => {
            NativeEndian::write_u16(&mut u[0..2], r.strong_magnitude);
            NativeEndian::write_u16(&mut u[2..4], r.weak_magnitude);
        }
        EffectKind::Periodic(p) => {
            NativeEndian::write_u16(&mut u[0..2], p.waveform.raw());
            NativeEndian::write_u16(&mut u[2..4], p.period);
            NativeEndian::write_i16(&mut u[4..6], p.magnitude);
            NativeEndian::write_i16(&mut u[6..8], p.offset);
            NativeEndian::write_u16(&mut u[8..10], p.phase);
            write_envelope(&mut u[10..18], &p.envelope);
            let len = &mut u[PERIODIC_CUSTOM_LEN..PERIODIC_CUSTOM_LEN + 4];
            NativeEndian::write_u32(len, p.custom_len);
            let data = p.custom_data.map(|r| r.0).unwrap_or(0);
            NativeEndian::write_u64(&mut u[PERIODIC_CUSTOM_DATA..PERIODIC_CUSTOM_DATA + 8], data);
        }
        EffectKind::Constant(c) => {
            NativeEndian::write_i16(&mut u[0..2], c.level);
            write_envelope(&mut u[2..10], &c.envelope);
        }
        EffectKind::Condition(_, axes) => {
            write_condition(&mut u[0..CONDITION_SIZE], &axes[0]);
            write_condition(&mut u[CONDITION_SIZE..2 * CONDITION_SIZE], &axes[1]);
        }
        EffectKind::Ramp(r) => {
            NativeEndian::write_i16(&mut u[0..2], r.start_level);
            NativeEndian::write_i16(&mut u[2..4], r.end_level);
            write_envelope(&mut u[4..12], &r.envelope);
        }
        EffectKind::Opaque { payload, .. } => {
            u.copy_from_slice(payload);
        }
    }
    buf
}

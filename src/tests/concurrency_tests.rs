// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::thread;

use crate::config::{CompatConfig, FF_CUSTOM, FF_PERIODIC};
use crate::layout::EFFECT_COMPAT_SIZE;
use crate::tests::{memory, DomainClock, BASE};
use crate::translate::Translator;
use crate::types::event::{CallerWidth, ClockDomain, EventRecord, FramingMode};

#[test]
fn test_shared_translator_is_deterministic_across_threads() {
    let t = Translator::with_clock(
        CompatConfig {
            compat_support: true,
            compat_64bit_time: false,
        },
        DomainClock,
    );
    let record = EventRecord::new(3, 0x36, 512);

    let mut effect = memory(EFFECT_COMPAT_SIZE, CallerWidth::Compat, 0);
    effect.as_bytes_mut()[0..2].copy_from_slice(&FF_PERIODIC.to_ne_bytes());
    effect.as_bytes_mut()[16..18].copy_from_slice(&FF_CUSTOM.to_ne_bytes());
    effect.as_bytes_mut()[40..44].copy_from_slice(&0xbeefu32.to_ne_bytes());

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let mut out = memory(16, CallerWidth::Compat, 0);
                    let mode = FramingMode::Legacy;
                    t.event_to_user(&mut out, BASE, &record, mode, ClockDomain::Monotonic)
                        .unwrap();
                    let decoded = t.event_from_user(&out, BASE, FramingMode::Legacy).unwrap();
                    let desc = t.ff_effect_from_user(&effect, BASE, EFFECT_COMPAT_SIZE).unwrap();
                    (out.as_bytes().to_vec(), decoded, desc)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
    assert_eq!(results[0].1, record);
}

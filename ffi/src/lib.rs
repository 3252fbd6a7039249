// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! C ABI for evcompat.
//!
//! Every entry point returns 0 on success or a negative errno. The caller's
//! width is passed per call; the compat configuration is fixed the first
//! time the translator is used.
use std::os::raw::c_int;
use std::ptr;
use std::sync::OnceLock;

use evcompat::boundary::{Boundary, UserAddr};
use evcompat::config::CompatConfig;
use evcompat::layout::EFFECT_NATIVE_SIZE;
use evcompat::types::{CallerWidth, ClockDomain, EventRecord};
use evcompat::{Fault, Result, Translator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EBUSY: c_int = 16;

static TRANSLATOR: OnceLock<Translator> = OnceLock::new();

fn translator() -> &'static Translator {
    TRANSLATOR.get_or_init(|| Translator::new(CompatConfig::default()))
}

/// `struct input_value`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputValue {
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

impl From<EventRecord> for InputValue {
    fn from(r: EventRecord) -> Self {
        Self {
            type_: r.ev_type,
            code: r.code,
            value: r.value,
        }
    }
}

impl From<InputValue> for EventRecord {
    fn from(v: InputValue) -> Self {
        EventRecord::new(v.type_, v.code, v.value)
    }
}

/// Caller memory reached through raw pointers. Null is the only address
/// known to be unreachable; anything else is trusted to be mapped.
struct RawUser {
    width: CallerWidth,
}

impl RawUser {
    fn new(compat: bool) -> Self {
        let width = if compat { CallerWidth::Compat } else { CallerWidth::Native };
        Self { width }
    }

    fn ptr(addr: UserAddr) -> Result<usize> {
        match usize::try_from(addr.0) {
            Ok(0) | Err(_) => Err(Fault::Unreachable),
            Ok(p) => Ok(p),
        }
    }
}

impl Boundary for RawUser {
    fn read(&self, addr: UserAddr, dst: &mut [u8]) -> Result<()> {
        let src = Self::ptr(addr)? as *const u8;
        // SAFETY: the host guarantees a non-null buffer spans the element being read.
        unsafe { ptr::copy_nonoverlapping(src, dst.as_mut_ptr(), dst.len()) };
        Ok(())
    }

    fn write(&mut self, addr: UserAddr, src: &[u8]) -> Result<()> {
        let dst = Self::ptr(addr)? as *mut u8;
        // SAFETY: the host guarantees a non-null buffer spans the element being written.
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst, src.len()) };
        Ok(())
    }

    fn caller_width(&self) -> CallerWidth {
        self.width
    }
}

fn addr<T>(p: *const T) -> UserAddr {
    UserAddr(p as usize as u64)
}

fn errno(res: Result<()>) -> c_int {
    match res {
        Ok(()) => 0,
        Err(e) => e.errno(),
    }
}

/// Fixes the compat configuration. Fails with `-EBUSY` once the translator
/// has been configured or used.
#[no_mangle]
pub extern "C" fn evcompat_configure(compat_support: bool, compat_64bit_time: bool) -> c_int {
    let config = CompatConfig {
        compat_support,
        compat_64bit_time,
    };
    match TRANSLATOR.set(Translator::new(config)) {
        Ok(()) => 0,
        Err(_) => {
            tracing::warn!(?config, "translator already configured");
            -EBUSY
        }
    }
}

/// Installs a log subscriber filtered by `RUST_LOG`, `evcompat=warn` by default.
#[no_mangle]
pub extern "C" fn evcompat_init_logging() -> c_int {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("evcompat=warn"));
    match tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        Ok(()) => 0,
        Err(_) => -EBUSY,
    }
}

/// Bytes per event for `if_type`, 0 for an unknown interface.
#[no_mangle]
pub extern "C" fn evcompat_event_size(if_type: c_int, compat: bool) -> usize {
    translator()
        .selector()
        .event_size(if_type as u32, RawUser::new(compat).width)
}

/// # Safety
/// `buffer` must be null or readable for `evcompat_event_size(if_type, compat)`
/// bytes. `event` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn evcompat_event_from_user(
    buffer: *const u8,
    event: *mut InputValue,
    if_type: c_int,
    compat: bool,
) -> c_int {
    if event.is_null() {
        return Fault::Unreachable.errno();
    }
    let user = RawUser::new(compat);
    match translator().event_from_user(&user, addr(buffer), if_type as u32) {
        Ok(record) => {
            // SAFETY: checked non-null above; validity is the caller's contract.
            unsafe { event.write(InputValue::from(record)) };
            0
        }
        Err(e) => e.errno(),
    }
}

/// # Safety
/// `buffer` must be null or writable for `evcompat_event_size(if_type, compat)`
/// bytes. `event` must be null or valid for reads.
#[no_mangle]
pub unsafe extern "C" fn evcompat_event_to_user(
    buffer: *mut u8,
    event: *const InputValue,
    clk_type: c_int,
    if_type: c_int,
    compat: bool,
) -> c_int {
    if event.is_null() {
        return Fault::Unreachable.errno();
    }
    // SAFETY: checked non-null above; validity is the caller's contract.
    let record = EventRecord::from(unsafe { event.read() });
    let mut user = RawUser::new(compat);
    errno(translator().event_to_user(
        &mut user,
        addr(buffer),
        &record,
        if_type as u32,
        ClockDomain::from_raw(clk_type as u32),
    ))
}

/// [`evcompat_event_to_user`] stamping legacy events from the wall clock.
///
/// # Safety
/// As for [`evcompat_event_to_user`].
#[no_mangle]
pub unsafe extern "C" fn evcompat_value_to_user(
    buffer: *mut u8,
    event: *const InputValue,
    if_type: c_int,
    compat: bool,
) -> c_int {
    if event.is_null() {
        return Fault::Unreachable.errno();
    }
    // SAFETY: checked non-null above; validity is the caller's contract.
    let record = EventRecord::from(unsafe { event.read() });
    let mut user = RawUser::new(compat);
    errno(translator().value_to_user(&mut user, addr(buffer), &record, if_type as u32))
}

/// Copies `size` bytes at `buffer` into the native `struct ff_effect` at
/// `effect`. Native effects are copied verbatim; narrow ones are widened.
///
/// # Safety
/// `buffer` must be null or readable for `size` bytes. `effect` must be null
/// or writable for `EFFECT_NATIVE_SIZE` bytes.
#[no_mangle]
pub unsafe extern "C" fn evcompat_ff_effect_from_user(
    buffer: *const u8,
    size: usize,
    effect: *mut u8,
    compat: bool,
) -> c_int {
    if effect.is_null() {
        return Fault::Unreachable.errno();
    }
    let user = RawUser::new(compat);
    match translator().ff_effect_native_from_user(&user, addr(buffer), size) {
        Ok(native) => {
            // SAFETY: checked non-null above; the caller provides EFFECT_NATIVE_SIZE bytes.
            unsafe { ptr::copy_nonoverlapping(native.as_ptr(), effect, EFFECT_NATIVE_SIZE) };
            0
        }
        Err(e) => e.errno(),
    }
}

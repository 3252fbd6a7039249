// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The caller's address space, as seen by the translators.
//!
//! A copy either moves the whole range or fails with
//! [`Fault::Unreachable`]. Partial copies are not modelled.

use core::fmt;

use crate::error::{Fault, Result};
use crate::types::event::CallerWidth;

/// Address in the caller's address space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct UserAddr(pub u64);

impl UserAddr {
    /// Address `bytes` past this one. Wrapping past the top of the space is
    /// left for the boundary to reject.
    pub fn offset(&self, bytes: usize) -> Self {
        UserAddr(self.0.wrapping_add(bytes as u64))
    }
}

impl fmt::Display for UserAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

pub trait Boundary {
    /// Fill all of `dst` from `addr`.
    fn read(&self, addr: UserAddr, dst: &mut [u8]) -> Result<()>;

    /// Store all of `src` at `addr`.
    fn write(&mut self, addr: UserAddr, src: &[u8]) -> Result<()>;

    /// Layout width of the caller owning this address space.
    fn caller_width(&self) -> CallerWidth {
        CallerWidth::Native
    }
}

/// A contiguous block of caller memory starting at `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserMemory {
    base: UserAddr,
    bytes: Vec<u8>,
    width: CallerWidth,
}

impl UserMemory {
    pub fn new(base: UserAddr, len: usize, width: CallerWidth) -> Self {
        Self {
            base,
            bytes: vec![0u8; len],
            width,
        }
    }

    pub fn from_bytes(base: UserAddr, bytes: Vec<u8>, width: CallerWidth) -> Self {
        Self { base, bytes, width }
    }

    pub fn base(&self) -> UserAddr {
        self.base
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    fn range(&self, addr: UserAddr, len: usize) -> Result<core::ops::Range<usize>> {
        let start = addr.0.checked_sub(self.base.0).ok_or(Fault::Unreachable)?;
        let start = usize::try_from(start).map_err(|_| Fault::Unreachable)?;
        let end = start.checked_add(len).ok_or(Fault::Unreachable)?;
        if end > self.bytes.len() {
            return Err(Fault::Unreachable);
        }
        Ok(start..end)
    }
}

impl Boundary for UserMemory {
    fn read(&self, addr: UserAddr, dst: &mut [u8]) -> Result<()> {
        let range = self.range(addr, dst.len())?;
        dst.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn write(&mut self, addr: UserAddr, src: &[u8]) -> Result<()> {
        let range = self.range(addr, src.len())?;
        self.bytes[range].copy_from_slice(src);
        Ok(())
    }

    fn caller_width(&self) -> CallerWidth {
        self.width
    }
}

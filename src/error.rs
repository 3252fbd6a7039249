// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::config::{EFAULT, EINVAL};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The caller's address range could not be copied to or from.
    #[error("Boundary copy failed: address range unreachable")]
    Unreachable,

    #[error("Invalid buffer size: expected {expected}, found {found}")]
    InvalidSize { expected: usize, found: usize },

    #[error("Unsupported framing mode: {0}")]
    UnsupportedMode(u32),
}

impl Fault {
    /// Negative errno understood by the host ABI.
    pub fn errno(&self) -> i32 {
        match self {
            Fault::Unreachable => -EFAULT,
            Fault::InvalidSize { .. } | Fault::UnsupportedMode(_) => -EINVAL,
        }
    }
}

pub type Result<T> = core::result::Result<T, Fault>;

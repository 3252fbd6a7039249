// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! evcompat: width- and framing-aware marshalling of input events and
//! force-feedback effects across a caller copy boundary.
//!
//! The crate is stateless. Every entry point takes the caller's address
//! space (a [`boundary::Boundary`]), decides the concrete wire layout through
//! the [`layout::LayoutSelector`], and performs exactly the copies that layout
//! requires.
//!
//! # Invariants
//! - Canonical records never carry a timestamp
//! - Inbound timestamps are always discarded
//! - Outbound timestamps are always sampled fresh
//! - A declared size that does not match the selected layout is rejected

pub mod config;
pub mod error;
pub mod types;
pub mod layout;
pub mod clock;
pub mod boundary;
pub mod wire;
pub mod translate;

pub use error::{Fault, Result};
pub use translate::Translator;

#[cfg(test)]
pub mod tests;

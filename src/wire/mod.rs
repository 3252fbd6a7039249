// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Byte-exact wire forms. Host byte order throughout.
pub mod event;
pub mod effect;

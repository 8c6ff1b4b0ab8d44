// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Equilab hand equity GUI client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod connection;

pub mod gui;
pub use gui::{AppFrame, Config};

pub mod picker_view;

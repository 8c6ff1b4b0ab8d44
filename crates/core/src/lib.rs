// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Equilab core types shared by the front ends.
//!
//! A [Widget](widget::Widget) holds the hero and board slots, the card selector
//! modal and the evaluation coordinator. Front ends forward clicks to the
//! widget, paint its [WidgetView](view::WidgetView) and deliver evaluation
//! replies from their [Transport](evaluation::Transport).
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub use equilab_cards as cards;

pub mod evaluation;
pub mod message;
pub mod selector;
pub mod slots;
pub mod view;
pub mod widget;

pub use widget::Widget;

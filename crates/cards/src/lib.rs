// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Equilab cards types.
//!
//! This crate define the cards a user can pick:
//!
//! ```
//! # use equilab_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(ah.label(), "A♥");
//! ```
//!
//! and the mapping between the labels shown on the picker and the codes sent
//! to the evaluation service, ten is shown as `10` and sent as `T`:
//!
//! ```
//! # use equilab_cards::{Card, Rank, Suit};
//! let ten = Rank::from_label("10").unwrap();
//! assert_eq!(ten, Rank::Ten);
//! assert_eq!(ten.code(), 'T');
//!
//! let card: Card = "10s".parse().unwrap();
//! assert_eq!(card.code(), "Ts");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

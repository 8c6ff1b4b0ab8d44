// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Hero and board card slots.
use std::fmt;

use crate::cards::Card;

/// A card slot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    /// First hero card.
    Hand1,
    /// Second hero card.
    Hand2,
    /// First flop card.
    Board1,
    /// Second flop card.
    Board2,
    /// Third flop card.
    Board3,
    /// The turn card.
    Board4,
    /// The river card.
    Board5,
}

impl SlotId {
    /// The number of slots.
    pub const COUNT: usize = 7;

    /// The hero hand slots.
    pub const HERO: [SlotId; 2] = [SlotId::Hand1, SlotId::Hand2];

    /// The board slots in dealing order.
    pub const BOARD: [SlotId; 5] = [
        SlotId::Board1,
        SlotId::Board2,
        SlotId::Board3,
        SlotId::Board4,
        SlotId::Board5,
    ];

    /// Returns all slots, hero slots first.
    pub fn slots() -> impl DoubleEndedIterator<Item = SlotId> {
        Self::HERO.into_iter().chain(Self::BOARD)
    }

    /// Checks if this is a hero hand slot.
    pub fn is_hero(&self) -> bool {
        matches!(self, SlotId::Hand1 | SlotId::Hand2)
    }

    /// The slot name.
    pub fn name(&self) -> &'static str {
        match self {
            SlotId::Hand1 => "hand1",
            SlotId::Hand2 => "hand2",
            SlotId::Board1 => "board1",
            SlotId::Board2 => "board2",
            SlotId::Board3 => "board3",
            SlotId::Board4 => "board4",
            SlotId::Board5 => "board5",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The hero and board slots, each empty or holding a card.
///
/// Slots are created empty and are never removed, a slot can only be filled
/// with a complete card or reset to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotModel {
    cards: [Option<Card>; SlotId::COUNT],
}

impl SlotModel {
    /// Returns the card in a slot.
    pub fn get(&self, slot: SlotId) -> Option<Card> {
        self.cards[slot.index()]
    }

    /// Checks if a slot holds a card.
    pub fn is_filled(&self, slot: SlotId) -> bool {
        self.get(slot).is_some()
    }

    /// Puts a card in a slot, returns the card that was there.
    pub(crate) fn set(&mut self, slot: SlotId, card: Card) -> Option<Card> {
        self.cards[slot.index()].replace(card)
    }

    /// Empties a slot, returns the card that was there.
    pub(crate) fn clear(&mut self, slot: SlotId) -> Option<Card> {
        self.cards[slot.index()].take()
    }

    /// Empties all slots.
    pub(crate) fn clear_all(&mut self) {
        self.cards = Default::default();
    }

    /// The hero cards that are present, in slot order.
    pub fn hero_cards(&self) -> Vec<Card> {
        SlotId::HERO.iter().filter_map(|s| self.get(*s)).collect()
    }

    /// The board cards that are present, in slot order.
    pub fn board_cards(&self) -> Vec<Card> {
        SlotId::BOARD.iter().filter_map(|s| self.get(*s)).collect()
    }
}

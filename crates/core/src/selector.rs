// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Card selector modal state machine.
//!
//! The selector turns rank and suit clicks into cards committed into a
//! [SlotModel] slot:
//!
//! ```text
//!   Closed --open--> Open(Empty) --rank--> Open(Rank) --suit--+
//!                        |                                     |
//!                        +-----suit--> Open(Suit) --rank-------+--> commit --> Closed
//! ```
//!
//! A rank or suit chosen before commit replaces the pending value of the same
//! kind, cancel closes without touching the slots.
use log::{debug, info};

use crate::{
    cards::{Card, Rank, Suit},
    slots::{SlotId, SlotModel},
};

/// The rank and suit chosen so far while the selector is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing chosen yet.
    #[default]
    Empty,
    /// A rank is waiting for a suit.
    Rank(Rank),
    /// A suit is waiting for a rank.
    Suit(Suit),
}

/// The selector state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// The modal is closed.
    #[default]
    Closed,
    /// The modal is open to edit a slot.
    Open {
        /// The slot being edited.
        slot: SlotId,
        /// The pending selection.
        selection: Selection,
    },
}

impl SelectionState {
    /// The slot being edited if the modal is open.
    pub fn editing_slot(&self) -> Option<SlotId> {
        match self {
            SelectionState::Closed => None,
            SelectionState::Open { slot, .. } => Some(*slot),
        }
    }

    /// Checks if the modal is open.
    pub fn is_open(&self) -> bool {
        self.editing_slot().is_some()
    }

    /// The pending rank.
    pub fn pending_rank(&self) -> Option<Rank> {
        match self {
            SelectionState::Open {
                selection: Selection::Rank(rank),
                ..
            } => Some(*rank),
            _ => None,
        }
    }

    /// The pending suit.
    pub fn pending_suit(&self) -> Option<Suit> {
        match self {
            SelectionState::Open {
                selection: Selection::Suit(suit),
                ..
            } => Some(*suit),
            _ => None,
        }
    }
}

/// The result of a click on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClick {
    /// The slot was empty and the modal opened for it.
    Opened,
    /// The slot held a card that has been removed, the modal stays closed.
    Cleared(Card),
}

/// A card written into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// The slot that received the card.
    pub slot: SlotId,
    /// The committed card.
    pub card: Card,
}

/// The card selector modal.
#[derive(Debug, Default)]
pub struct Selector {
    state: SelectionState,
}

impl Selector {
    /// The current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Handles a click on a slot.
    ///
    /// A filled slot is emptied and the modal is left closed, an empty slot
    /// opens the modal with no pending rank or suit.
    pub fn open_slot(&mut self, slot: SlotId, slots: &mut SlotModel) -> SlotClick {
        if let Some(card) = slots.clear(slot) {
            info!("Cleared slot {slot} card {card}");
            return SlotClick::Cleared(card);
        }

        if let Some(prev) = self.state.editing_slot() {
            debug!("Selector moved from {prev} to {slot}");
        }

        self.state = SelectionState::Open {
            slot,
            selection: Selection::Empty,
        };

        debug!("Selector opened for {slot}");
        SlotClick::Opened
    }

    /// Chooses a rank, commits the card if a suit is pending.
    pub fn choose_rank(&mut self, rank: Rank, slots: &mut SlotModel) -> Option<Commit> {
        let SelectionState::Open { slot, selection } = self.state else {
            debug!("Ignoring rank {rank} with closed selector");
            return None;
        };

        match selection {
            Selection::Suit(suit) => Some(self.commit(slot, Card::new(rank, suit), slots)),
            Selection::Empty | Selection::Rank(_) => {
                self.state = SelectionState::Open {
                    slot,
                    selection: Selection::Rank(rank),
                };

                debug!("Pending rank {rank} for {slot}");
                None
            }
        }
    }

    /// Chooses a suit, commits the card if a rank is pending.
    pub fn choose_suit(&mut self, suit: Suit, slots: &mut SlotModel) -> Option<Commit> {
        let SelectionState::Open { slot, selection } = self.state else {
            debug!("Ignoring suit {suit} with closed selector");
            return None;
        };

        match selection {
            Selection::Rank(rank) => Some(self.commit(slot, Card::new(rank, suit), slots)),
            Selection::Empty | Selection::Suit(_) => {
                self.state = SelectionState::Open {
                    slot,
                    selection: Selection::Suit(suit),
                };

                debug!("Pending suit {suit} for {slot}");
                None
            }
        }
    }

    /// Closes the modal without changing any slot.
    pub fn cancel(&mut self) {
        if let Some(slot) = self.state.editing_slot() {
            debug!("Selector for {slot} cancelled");
        }

        self.state = SelectionState::Closed;
    }

    fn commit(&mut self, slot: SlotId, card: Card, slots: &mut SlotModel) -> Commit {
        slots.set(slot, card);
        self.state = SelectionState::Closed;

        info!("Committed {card} to {slot}");
        Commit { slot, card }
    }
}

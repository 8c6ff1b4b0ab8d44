// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! The card picker widget controller.
use log::info;

use crate::{
    cards::{Rank, Suit},
    evaluation::{Coordinator, Dispatch, EvalError, Transport, TransportResult},
    message::Evaluation,
    selector::{Commit, Selector, SlotClick},
    slots::{SlotId, SlotModel},
    view::{ModalView, SlotView, WidgetView},
};

/// The default number of opponents.
pub const DEFAULT_OPPONENTS: u32 = 1;

/// A card picker widget.
///
/// The widget owns the slots, the selector and the evaluation coordinator, a
/// front end creates one widget for each picker it shows and forwards the user
/// actions to it.
#[derive(Debug)]
pub struct Widget {
    slots: SlotModel,
    selector: Selector,
    coordinator: Coordinator,
    opponents: u32,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new(DEFAULT_OPPONENTS)
    }
}

impl Widget {
    /// Creates a widget with empty slots.
    pub fn new(opponents: u32) -> Self {
        Self {
            slots: SlotModel::default(),
            selector: Selector::default(),
            coordinator: Coordinator::default(),
            opponents,
        }
    }

    /// The widget slots.
    pub fn slots(&self) -> &SlotModel {
        &self.slots
    }

    /// The selector modal.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The number of opponents.
    pub fn opponents(&self) -> u32 {
        self.opponents
    }

    /// Sets the number of opponents.
    pub fn set_opponents(&mut self, opponents: u32) {
        self.opponents = opponents;
    }

    /// Handles a click on a slot.
    pub fn open_slot(&mut self, slot: SlotId) -> SlotClick {
        self.selector.open_slot(slot, &mut self.slots)
    }

    /// Handles a click on a rank button.
    pub fn choose_rank(&mut self, rank: Rank) -> Option<Commit> {
        self.selector.choose_rank(rank, &mut self.slots)
    }

    /// Handles a click on a rank button given its label.
    pub fn choose_rank_label(&mut self, label: &str) -> Option<Commit> {
        Rank::from_label(label).and_then(|rank| self.choose_rank(rank))
    }

    /// Handles a click on a suit button.
    pub fn choose_suit(&mut self, suit: Suit) -> Option<Commit> {
        self.selector.choose_suit(suit, &mut self.slots)
    }

    /// Closes the selector without changing the slots.
    pub fn cancel(&mut self) {
        self.selector.cancel();
    }

    /// Empties all slots and closes the selector.
    pub fn clear_all(&mut self) {
        self.selector.cancel();
        self.slots.clear_all();
        info!("Cleared all slots");
    }

    /// Handles a click on the evaluate control.
    pub fn evaluate<T: Transport>(&mut self, transport: &mut T) -> Result<Dispatch, EvalError> {
        self.coordinator
            .evaluate(&self.slots, self.opponents, transport)
    }

    /// Applies the reply for the in flight evaluation.
    pub fn complete(&mut self, reply: TransportResult) -> Result<Evaluation, EvalError> {
        self.coordinator.complete(reply)
    }

    /// Checks if the evaluate control accepts clicks.
    pub fn evaluate_enabled(&self) -> bool {
        self.coordinator.is_enabled()
    }

    /// Maps the widget state to its view.
    pub fn view(&self) -> WidgetView {
        let slot_view = |id: SlotId| SlotView::new(id, self.slots.get(id));

        let state = self.selector.state();
        let modal = state.editing_slot().map(|slot| ModalView {
            slot,
            chosen_rank: state.pending_rank(),
            chosen_suit: state.pending_suit(),
        });

        WidgetView {
            hero: SlotId::HERO.into_iter().map(slot_view).collect(),
            board: SlotId::BOARD.into_iter().map(slot_view).collect(),
            modal,
            opponents: self.opponents,
            results: self.coordinator.results().clone(),
            evaluate_enabled: self.coordinator.is_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cards::Card,
        message::EvaluateRequest,
        evaluation::HttpReply,
        view::{EMPTY_SLOT, ResultsView},
    };
    use anyhow::Result;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<EvaluateRequest>,
    }

    impl Transport for Recorder {
        fn send(&mut self, request: &EvaluateRequest) -> Result<()> {
            self.sent.push(request.clone());
            Ok(())
        }
    }

    fn pick(widget: &mut Widget, slot: SlotId, rank: &str, suit: Suit) {
        assert_eq!(widget.open_slot(slot), SlotClick::Opened);
        assert_eq!(widget.choose_rank_label(rank), None);
        assert!(widget.choose_suit(suit).is_some());
    }

    #[test]
    fn picking_cards_updates_view() {
        let mut widget = Widget::default();

        let view = widget.view();
        assert_eq!(view.hero.len(), 2);
        assert_eq!(view.board.len(), 5);
        assert!(view.hero.iter().chain(&view.board).all(|s| s.label == EMPTY_SLOT));
        assert_eq!(view.modal, None);
        assert!(view.evaluate_enabled);

        widget.open_slot(SlotId::Hand1);
        widget.choose_rank_label("10");
        let view = widget.view();
        assert_eq!(
            view.modal,
            Some(ModalView {
                slot: SlotId::Hand1,
                chosen_rank: Some(Rank::Ten),
                chosen_suit: None,
            })
        );
        assert_eq!(view.hero[0].label, EMPTY_SLOT);

        widget.choose_suit(Suit::Spades);
        let view = widget.view();
        assert_eq!(view.modal, None);
        assert_eq!(view.hero[0].label, "10♠");
        assert_eq!(view.hero[0].card, Some(Card::new(Rank::Ten, Suit::Spades)));
    }

    #[test]
    fn evaluation_round() {
        let mut widget = Widget::new(2);
        let mut transport = Recorder::default();

        // Incomplete hand.
        pick(&mut widget, SlotId::Hand1, "A", Suit::Spades);
        assert_eq!(widget.evaluate(&mut transport), Err(EvalError::Validation));
        assert!(transport.sent.is_empty());
        assert!(widget.evaluate_enabled());
        assert_eq!(widget.opponents(), 2);

        pick(&mut widget, SlotId::Hand2, "A", Suit::Hearts);
        pick(&mut widget, SlotId::Board1, "K", Suit::Clubs);
        pick(&mut widget, SlotId::Board2, "7", Suit::Diamonds);
        pick(&mut widget, SlotId::Board3, "2", Suit::Hearts);

        assert_eq!(widget.evaluate(&mut transport), Ok(Dispatch::Sent));
        assert_eq!(widget.evaluate(&mut transport), Ok(Dispatch::Ignored));
        assert_eq!(transport.sent.len(), 1);
        assert_eq!(transport.sent[0].players, 3);
        assert_eq!(transport.sent[0].board.len(), 3);
        assert!(!widget.view().evaluate_enabled);
        assert_eq!(widget.view().results, ResultsView::pending());

        let body = json!({
            "ok": true,
            "result": { "hand_strength": "Three of a Kind", "equity": 81.2, "suggestion": "Raise High" }
        });
        widget.complete(Ok(HttpReply::json(200, &body))).unwrap();

        let view = widget.view();
        assert!(view.evaluate_enabled);
        assert_eq!(view.results.hand_strength, "Three of a Kind");
        assert_eq!(view.results.equity, "81.20%");
        assert_eq!(view.results.suggestion, "Raise High");
    }

    #[test]
    fn clear_all_resets_slots_and_selector() {
        let mut widget = Widget::default();
        pick(&mut widget, SlotId::Hand1, "Q", Suit::Diamonds);
        widget.open_slot(SlotId::Board5);

        widget.clear_all();
        assert_eq!(widget.slots(), &SlotModel::default());
        assert!(!widget.selector().state().is_open());
    }

    #[test]
    fn duplicate_cards_are_allowed() {
        let mut widget = Widget::default();
        pick(&mut widget, SlotId::Hand1, "J", Suit::Clubs);
        pick(&mut widget, SlotId::Board1, "J", Suit::Clubs);

        assert_eq!(
            widget.slots().get(SlotId::Hand1),
            widget.slots().get(SlotId::Board1)
        );
    }

    #[test]
    fn unknown_rank_label_is_ignored() {
        let mut widget = Widget::default();
        widget.open_slot(SlotId::Hand1);
        assert_eq!(widget.choose_rank_label("1"), None);
        assert_eq!(widget.selector().state().pending_rank(), None);
    }
}

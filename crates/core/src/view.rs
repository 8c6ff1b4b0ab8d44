// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! View model types, front ends paint these and never read the widget state.
use serde_json::Value;

use crate::{
    cards::{Card, Rank, Suit},
    evaluation::EvalError,
    message::Evaluation,
    slots::SlotId,
};

/// Text shown for a missing result field.
pub const EMPTY_FIELD: &str = "—";

/// Text shown in the equity display while a request is in flight.
pub const PENDING_TEXT: &str = "Calculating...";

/// Text shown in the equity display when an evaluation fails.
pub const FAILURE_TEXT: &str = "Error evaluating hand.";

/// Label of an empty slot.
pub const EMPTY_SLOT: &str = "+";

/// The three result displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsView {
    /// The hand strength display.
    pub hand_strength: String,
    /// The equity display.
    pub equity: String,
    /// The suggestion display.
    pub suggestion: String,
}

impl ResultsView {
    /// The displays while a request is in flight.
    pub fn pending() -> Self {
        Self {
            equity: PENDING_TEXT.to_string(),
            ..Default::default()
        }
    }

    /// The displays for a successful evaluation.
    pub fn from_evaluation(eval: &Evaluation) -> Self {
        let equity = eval
            .equity_percent()
            .map(|e| format!("{e:.2}%"))
            .unwrap_or_else(|| EMPTY_FIELD.to_string());

        Self {
            hand_strength: text_field(eval.hand_strength.as_ref()),
            equity,
            suggestion: text_field(eval.suggestion.as_ref()),
        }
    }

    /// The displays for an error.
    ///
    /// A validation error is shown inline in the equity display, any other
    /// error shows the failure text with the error message as suggestion.
    pub fn from_error(err: &EvalError) -> Self {
        match err {
            EvalError::Validation => Self {
                equity: err.to_string(),
                ..Default::default()
            },
            _ => Self {
                hand_strength: String::new(),
                equity: FAILURE_TEXT.to_string(),
                suggestion: err.to_string(),
            },
        }
    }
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        None => EMPTY_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

/// A slot as painted by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    /// The slot id.
    pub id: SlotId,
    /// The slot card if filled.
    pub card: Option<Card>,
    /// The slot label, the card label or a plus sign for empty slots.
    pub label: String,
}

/// The open selector modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalView {
    /// The slot being edited.
    pub slot: SlotId,
    /// The rank button marked as chosen.
    pub chosen_rank: Option<Rank>,
    /// The suit button marked as chosen.
    pub chosen_suit: Option<Suit>,
}

/// Everything a front end needs to paint the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    /// The hero slots.
    pub hero: Vec<SlotView>,
    /// The board slots.
    pub board: Vec<SlotView>,
    /// The selector modal if open.
    pub modal: Option<ModalView>,
    /// The opponents count.
    pub opponents: u32,
    /// The result displays.
    pub results: ResultsView,
    /// Whether the evaluate control accepts clicks.
    pub evaluate_enabled: bool,
}

impl SlotView {
    pub(crate) fn new(id: SlotId, card: Option<Card>) -> Self {
        let label = card
            .map(|c| c.label())
            .unwrap_or_else(|| EMPTY_SLOT.to_string());
        Self { id, card, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn evaluation_displays() {
        let eval = Evaluation::from_payload(&json!({
            "ok": true,
            "result": { "hand_strength": "Flush", "equity": 63.4567, "suggestion": "Raise" }
        }));

        let view = ResultsView::from_evaluation(&eval);
        assert_eq!(view.hand_strength, "Flush");
        assert_eq!(view.equity, "63.46%");
        assert_eq!(view.suggestion, "Raise");
    }

    #[test]
    fn missing_fields_show_dash() {
        let view = ResultsView::from_evaluation(&Evaluation::default());
        assert_eq!(view.hand_strength, EMPTY_FIELD);
        assert_eq!(view.equity, EMPTY_FIELD);
        assert_eq!(view.suggestion, EMPTY_FIELD);

        let eval = Evaluation::from_payload(&json!({ "ok": true, "equity": 50 }));
        let view = ResultsView::from_evaluation(&eval);
        assert_eq!(view.equity, "50.00%");
        assert_eq!(view.hand_strength, EMPTY_FIELD);
    }

    #[test]
    fn error_displays() {
        let view = ResultsView::from_error(&EvalError::Domain("bad board".to_string()));
        assert_eq!(view.hand_strength, "");
        assert_eq!(view.equity, FAILURE_TEXT);
        assert_eq!(view.suggestion, "bad board");

        let view = ResultsView::from_error(&EvalError::Validation);
        assert_eq!(view.equity, EvalError::Validation.to_string());
        assert_eq!(view.suggestion, "");
    }

    #[test]
    fn slot_labels() {
        let card = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!(SlotView::new(SlotId::Hand1, Some(card)).label, "10♦");
        assert_eq!(SlotView::new(SlotId::Board1, None).label, EMPTY_SLOT);
    }
}

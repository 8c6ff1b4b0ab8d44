// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluation requests coordinator.
//!
//! The coordinator validates the slots, sends one request through a
//! [Transport] and maps the reply to the result displays. While a request is in
//! flight the evaluate control is disabled and further evaluations are ignored,
//! the control is enabled again when the reply is applied whatever its outcome.
use anyhow::Result;
use log::{error, info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::{
    message::{EvaluateRequest, Evaluation, payload_error, payload_ok},
    slots::SlotModel,
    view::ResultsView,
};

/// Message used when the service fails without an error description.
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error.";

/// An evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hero hand does not have two cards.
    #[error("Select the 2 cards of your hand.")]
    Validation,
    /// The request could not reach the service.
    #[error("Network error: {0}")]
    Transport(String),
    /// The service answered with a failure.
    #[error("{0}")]
    Domain(String),
    /// The service answer could not be decoded.
    #[error("Invalid server response: {0}")]
    MalformedResponse(String),
}

/// An HTTP reply from the evaluation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// The HTTP status code.
    pub status: u16,
    /// Whether the status is in the 200-299 range.
    pub ok: bool,
    /// The response body.
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Creates a reply with a JSON body, used by transports and tests.
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            body: body.to_string().into_bytes(),
        }
    }
}

/// The outcome of a request as delivered by a transport, the error is the
/// transport failure description.
pub type TransportResult = std::result::Result<HttpReply, String>;

/// A transport that delivers evaluation requests to the service.
///
/// [Transport::send] only dispatches the request, the front end hands the
/// reply back to the widget when it arrives.
pub trait Transport {
    /// Sends a request to the evaluation service.
    fn send(&mut self, request: &EvaluateRequest) -> Result<()>;
}

/// The result of an evaluate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A request has been sent.
    Sent,
    /// A request is already in flight, nothing has been sent.
    Ignored,
}

/// Coordinates evaluation requests and their result displays.
#[derive(Debug, Default)]
pub struct Coordinator {
    in_flight: bool,
    results: ResultsView,
}

impl Coordinator {
    /// Checks if the evaluate control accepts clicks.
    pub fn is_enabled(&self) -> bool {
        !self.in_flight
    }

    /// The current result displays.
    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    /// Starts an evaluation for the cards in the slots.
    ///
    /// Fails with [EvalError::Validation] without sending anything if the hero
    /// hand is incomplete, if the transport cannot dispatch the request the
    /// failure is applied as a transport error reply.
    pub fn evaluate<T: Transport>(
        &mut self,
        slots: &SlotModel,
        opponents: u32,
        transport: &mut T,
    ) -> Result<Dispatch, EvalError> {
        if self.in_flight {
            info!("Evaluation in flight, ignoring evaluate");
            return Ok(Dispatch::Ignored);
        }

        let my_hand = slots.hero_cards();
        if my_hand.len() != 2 {
            let err = EvalError::Validation;
            self.results = ResultsView::from_error(&err);
            return Err(err);
        }

        let request = EvaluateRequest {
            my_hand,
            board: slots.board_cards(),
            players: opponents.saturating_add(1),
        };

        self.results = ResultsView::pending();
        self.in_flight = true;

        info!("Sending evaluation request {request:?}");
        if let Err(e) = transport.send(&request) {
            // Nothing is in flight, apply the failure now.
            self.complete(Err(e.to_string()))?;
        }

        Ok(Dispatch::Sent)
    }

    /// Applies the reply of the in flight request.
    ///
    /// Returns the evaluation on success, on any error the displays show the
    /// failure. The evaluate control is enabled again in both cases.
    pub fn complete(&mut self, reply: TransportResult) -> Result<Evaluation, EvalError> {
        if !self.in_flight {
            warn!("Dropping reply with no request in flight");
            return Err(EvalError::Transport("No request in flight".to_string()));
        }

        let res = decode_reply(reply);
        match &res {
            Ok(eval) => {
                info!("Evaluation result {eval:?}");
                self.results = ResultsView::from_evaluation(eval);
            }
            Err(e) => {
                error!("Evaluation error {e}");
                self.results = ResultsView::from_error(e);
            }
        }

        self.in_flight = false;
        res
    }
}

fn decode_reply(reply: TransportResult) -> Result<Evaluation, EvalError> {
    let reply = reply.map_err(EvalError::Transport)?;

    let payload: Value = serde_json::from_slice(&reply.body)
        .map_err(|e| EvalError::MalformedResponse(e.to_string()))?;

    if !reply.ok || !payload_ok(&payload) {
        let msg = payload_error(&payload).unwrap_or(UNKNOWN_SERVER_ERROR);
        return Err(EvalError::Domain(msg.to_string()));
    }

    Ok(Evaluation::from_payload(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cards::{Card, Rank, Suit},
        slots::SlotId,
        view::{FAILURE_TEXT, PENDING_TEXT},
    };
    use anyhow::bail;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<EvaluateRequest>,
        fail: bool,
    }

    impl Transport for Recorder {
        fn send(&mut self, request: &EvaluateRequest) -> Result<()> {
            if self.fail {
                bail!("connection refused");
            }

            self.sent.push(request.clone());
            Ok(())
        }
    }

    fn full_slots() -> SlotModel {
        let mut slots = SlotModel::default();
        slots.set(SlotId::Hand1, Card::new(Rank::Ace, Suit::Hearts));
        slots.set(SlotId::Hand2, Card::new(Rank::King, Suit::Hearts));
        slots.set(SlotId::Board1, Card::new(Rank::Deuce, Suit::Hearts));
        slots.set(SlotId::Board3, Card::new(Rank::Ten, Suit::Hearts));
        slots.set(SlotId::Board2, Card::new(Rank::Seven, Suit::Clubs));
        slots
    }

    fn sent_and_replied(reply: TransportResult) -> (Coordinator, Result<Evaluation, EvalError>) {
        let mut coord = Coordinator::default();
        let mut transport = Recorder::default();
        assert_eq!(
            coord.evaluate(&full_slots(), 2, &mut transport),
            Ok(Dispatch::Sent)
        );
        let res = coord.complete(reply);
        (coord, res)
    }

    #[test]
    fn request_from_slots() {
        let mut coord = Coordinator::default();
        let mut transport = Recorder::default();

        coord.evaluate(&full_slots(), 2, &mut transport).unwrap();

        assert_eq!(transport.sent.len(), 1);
        let body = serde_json::to_value(&transport.sent[0]).unwrap();
        assert_eq!(
            body,
            json!({ "my_hand": ["Ah", "Kh"], "board": ["2h", "7c", "Th"], "players": 3 })
        );

        assert!(!coord.is_enabled());
        assert_eq!(coord.results(), &ResultsView::pending());
        assert_eq!(coord.results().equity, PENDING_TEXT);
    }

    #[test]
    fn incomplete_hero_hand_sends_nothing() {
        let mut transport = Recorder::default();

        let heroes: [&[SlotId]; 2] = [&[], &[SlotId::Hand2]];
        for hero in heroes {
            let mut slots = SlotModel::default();
            for slot in hero {
                slots.set(*slot, Card::new(Rank::Six, Suit::Spades));
            }
            slots.set(SlotId::Board1, Card::new(Rank::Five, Suit::Spades));
            let before = slots.clone();

            let mut coord = Coordinator::default();
            assert_eq!(
                coord.evaluate(&slots, 4, &mut transport),
                Err(EvalError::Validation)
            );

            assert!(coord.is_enabled());
            assert_eq!(coord.results().equity, "Select the 2 cards of your hand.");
            assert_eq!(slots, before);
        }

        assert!(transport.sent.is_empty());
    }

    #[test]
    fn second_evaluate_while_in_flight_is_ignored() {
        let mut coord = Coordinator::default();
        let mut transport = Recorder::default();
        let slots = full_slots();

        assert_eq!(coord.evaluate(&slots, 1, &mut transport), Ok(Dispatch::Sent));
        assert_eq!(
            coord.evaluate(&slots, 1, &mut transport),
            Ok(Dispatch::Ignored)
        );
        assert_eq!(transport.sent.len(), 1);

        coord
            .complete(Ok(HttpReply::json(200, &json!({ "ok": true }))))
            .unwrap();
        assert!(coord.is_enabled());

        assert_eq!(coord.evaluate(&slots, 1, &mut transport), Ok(Dispatch::Sent));
        assert_eq!(transport.sent.len(), 2);
    }

    #[test]
    fn nested_success() {
        let body = json!({
            "ok": true,
            "result": { "hand_strength": "Flush", "equity": 63.4567, "suggestion": "Raise" }
        });
        let (coord, res) = sent_and_replied(Ok(HttpReply::json(200, &body)));

        assert!(res.is_ok());
        assert!(coord.is_enabled());
        assert_eq!(coord.results().hand_strength, "Flush");
        assert_eq!(coord.results().equity, "63.46%");
        assert_eq!(coord.results().suggestion, "Raise");
    }

    #[test]
    fn flat_success() {
        let body = json!({ "ok": true, "hand_strength": "Pair", "equity": 12.0, "suggestion": "Fold" });
        let (coord, _) = sent_and_replied(Ok(HttpReply::json(200, &body)));

        assert_eq!(coord.results().hand_strength, "Pair");
        assert_eq!(coord.results().equity, "12.00%");
        assert_eq!(coord.results().suggestion, "Fold");
    }

    #[test]
    fn domain_error_shows_server_message() {
        let body = json!({ "ok": false, "error": "bad board" });
        let (coord, res) = sent_and_replied(Ok(HttpReply::json(500, &body)));

        assert_eq!(res, Err(EvalError::Domain("bad board".to_string())));
        assert!(coord.is_enabled());
        assert_eq!(coord.results().hand_strength, "");
        assert_eq!(coord.results().equity, FAILURE_TEXT);
        assert_eq!(coord.results().suggestion, "bad board");
    }

    #[test]
    fn domain_error_without_message() {
        let (coord, res) = sent_and_replied(Ok(HttpReply::json(200, &json!({ "ok": false }))));
        assert_eq!(res, Err(EvalError::Domain(UNKNOWN_SERVER_ERROR.to_string())));
        assert_eq!(coord.results().suggestion, UNKNOWN_SERVER_ERROR);

        // A failed status fails even if the payload says ok.
        let (_, res) = sent_and_replied(Ok(HttpReply::json(502, &json!({ "ok": true }))));
        assert_eq!(res, Err(EvalError::Domain(UNKNOWN_SERVER_ERROR.to_string())));
    }

    #[test]
    fn malformed_body() {
        let reply = HttpReply {
            status: 200,
            ok: true,
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        let (coord, res) = sent_and_replied(Ok(reply));

        assert!(matches!(res, Err(EvalError::MalformedResponse(_))));
        assert!(coord.is_enabled());
        assert_eq!(coord.results().equity, FAILURE_TEXT);
        assert!(coord.results().suggestion.starts_with("Invalid server response"));
    }

    #[test]
    fn transport_failure() {
        let (coord, res) = sent_and_replied(Err("connection reset".to_string()));

        assert_eq!(res, Err(EvalError::Transport("connection reset".to_string())));
        assert!(coord.is_enabled());
        assert_eq!(coord.results().equity, FAILURE_TEXT);
        assert_eq!(coord.results().suggestion, "Network error: connection reset");
    }

    #[test]
    fn dispatch_failure_enables_control() {
        let mut coord = Coordinator::default();
        let mut transport = Recorder {
            fail: true,
            ..Default::default()
        };

        assert_eq!(
            coord.evaluate(&full_slots(), 1, &mut transport),
            Err(EvalError::Transport("connection refused".to_string()))
        );
        assert!(coord.is_enabled());
        assert_eq!(coord.results().equity, FAILURE_TEXT);
    }

    #[test]
    fn stale_reply_is_dropped() {
        let mut coord = Coordinator::default();
        let reply = HttpReply::json(200, &json!({ "ok": true, "equity": 1.0 }));

        assert!(coord.complete(Ok(reply)).is_err());
        assert_eq!(coord.results(), &ResultsView::default());
        assert!(coord.is_enabled());
    }
}

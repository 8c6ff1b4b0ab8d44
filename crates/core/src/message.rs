// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Type definitions for the messages exchanged with the evaluation service.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::Card;

/// The path of the evaluation endpoint.
pub const EVALUATE_PATH: &str = "/api/evaluate";

/// Returns the evaluation endpoint url for a server base url.
pub fn evaluate_url(server_url: &str) -> String {
    format!("{}{EVALUATE_PATH}", server_url.trim_end_matches('/'))
}

/// An evaluation request.
///
/// Cards serialize as their wire codes:
///
/// ```json
/// { "my_hand": ["Ah", "Kd"], "board": ["2c", "7h", "Ts"], "players": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The hero hand cards.
    pub my_hand: Vec<Card>,
    /// The board cards, from 0 to 5.
    pub board: Vec<Card>,
    /// The number of players including the hero.
    pub players: u32,
}

/// An evaluation result as returned by the service.
///
/// Every field is optional and keeps the JSON value the service sent so that a
/// field with an unexpected type is shown as missing instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// The hand strength description.
    pub hand_strength: Option<Value>,
    /// The hero equity in percent.
    pub equity: Option<Value>,
    /// The suggested action.
    pub suggestion: Option<Value>,
}

impl Evaluation {
    /// Extracts the result fields from a response object.
    ///
    /// The service sends the result either nested in a `result` object or flat
    /// at the top level, a non null `result` field takes precedence.
    pub fn from_payload(payload: &Value) -> Self {
        let fields = match payload.get("result") {
            Some(result) if !result.is_null() => result,
            _ => payload,
        };

        let field = |name: &str| fields.get(name).filter(|v| !v.is_null()).cloned();

        Self {
            hand_strength: field("hand_strength"),
            equity: field("equity"),
            suggestion: field("suggestion"),
        }
    }

    /// The equity value if the service sent a number.
    pub fn equity_percent(&self) -> Option<f64> {
        self.equity.as_ref().and_then(Value::as_f64)
    }
}

/// Checks if a response payload declares success.
pub fn payload_ok(payload: &Value) -> bool {
    payload.get("ok") == Some(&Value::Bool(true))
}

/// The error message in a response payload if any.
pub fn payload_error(payload: &Value) -> Option<&str> {
    payload
        .get("error")
        .and_then(Value::as_str)
        .filter(|e| !e.is_empty())
}

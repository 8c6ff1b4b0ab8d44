// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Blocking HTTP client.
use anyhow::Result;

use equilab_core::{
    evaluation::{HttpReply, Transport, TransportResult},
    message::{EvaluateRequest, evaluate_url},
};

/// A client that waits for the reply when sending a request.
pub struct Client {
    url: String,
    reply: Option<TransportResult>,
}

impl Client {
    /// Creates a client for a server base url.
    pub fn new(server_url: &str) -> Self {
        Self {
            url: evaluate_url(server_url),
            reply: None,
        }
    }

    /// Takes the reply of the last request.
    pub fn take_reply(&mut self) -> Option<TransportResult> {
        self.reply.take()
    }
}

impl Transport for Client {
    fn send(&mut self, request: &EvaluateRequest) -> Result<()> {
        let req = ehttp::Request::json(&self.url, request)?;
        log::debug!("POST {}", self.url);

        let reply = ehttp::fetch_blocking(&req).map(|res| HttpReply {
            status: res.status,
            ok: res.ok,
            body: res.bytes,
        });

        self.reply = Some(reply);
        Ok(())
    }
}

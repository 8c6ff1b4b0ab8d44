// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! HTTP connection to the evaluation service.
use anyhow::Result;
use eframe::egui;
use std::sync::mpsc;

use equilab_core::{
    evaluation::{HttpReply, Transport, TransportResult},
    message::{EvaluateRequest, evaluate_url},
};

/// Connection to the evaluation service.
///
/// Requests run in the background, the reply is queued and the UI thread is
/// woken up to poll it.
pub struct Connection {
    url: String,
    ctx: egui::Context,
    reply_tx: mpsc::Sender<TransportResult>,
    reply_rx: mpsc::Receiver<TransportResult>,
}

impl Connection {
    /// Creates a connection to a server base url.
    pub fn new(server_url: &str, ctx: egui::Context) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        Self {
            url: evaluate_url(server_url),
            ctx,
            reply_tx,
            reply_rx,
        }
    }

    /// The evaluation endpoint url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Polls for a reply.
    pub fn poll(&mut self) -> Option<TransportResult> {
        self.reply_rx.try_recv().ok()
    }
}

impl Transport for Connection {
    fn send(&mut self, request: &EvaluateRequest) -> Result<()> {
        let req = ehttp::Request::json(&self.url, request)?;

        let reply_tx = self.reply_tx.clone();
        let ctx = self.ctx.clone();
        ehttp::fetch(req, move |res| {
            let reply = res.map(|res| HttpReply {
                status: res.status,
                ok: res.ok,
                body: res.bytes,
            });

            // The receiver is gone if the app is closing.
            let _ = reply_tx.send(reply);

            // Wake up UI thread on new reply
            ctx.request_repaint();
        });

        Ok(())
    }
}

// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Equilab CLI client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use std::fmt::Write as _;

use equilab_core::{
    Widget,
    cards::Card,
    evaluation::{Dispatch, EvalError},
    slots::SlotId,
    view::{SlotView, WidgetView},
};

pub mod client;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero hand cards, for example: Ah Kd.
    #[clap(long, required = true, num_args = 1..=2)]
    hand: Vec<Card>,
    /// The board cards, for example: 2c 7h 10s.
    #[clap(long, num_args = 0..=5)]
    board: Vec<Card>,
    /// The number of opponents.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=9))]
    opponents: u32,
    /// The evaluation server url.
    #[clap(long, short, default_value = "http://127.0.0.1:8080")]
    url: String,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut widget = Widget::new(cli.opponents);
    fill_widget(&mut widget, &cli.hand, &cli.board);

    let mut client = client::Client::new(&cli.url);
    let res = evaluate(&mut widget, &mut client);

    print!("{}", render(&widget.view()));

    if let Err(e) = res {
        bail!("Evaluation failed: {e}");
    }

    Ok(())
}

/// Fills the widget slots with the cards clicking through the selector.
fn fill_widget(widget: &mut Widget, hand: &[Card], board: &[Card]) {
    let hero = SlotId::HERO.into_iter().zip(hand);
    let board = SlotId::BOARD.into_iter().zip(board);

    for (slot, card) in hero.chain(board) {
        widget.open_slot(slot);
        widget.choose_rank(card.rank());
        widget.choose_suit(card.suit());
    }
}

fn evaluate(widget: &mut Widget, client: &mut client::Client) -> Result<(), EvalError> {
    match widget.evaluate(client)? {
        Dispatch::Sent => match client.take_reply() {
            Some(reply) => widget.complete(reply).map(|_| ()),
            // A dispatch failure has already been applied.
            None => Ok(()),
        },
        Dispatch::Ignored => Ok(()),
    }
}

fn render(view: &WidgetView) -> String {
    fn cards(slots: &[SlotView]) -> String {
        let labels = slots
            .iter()
            .filter(|s| s.card.is_some())
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>();

        if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(" ")
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<15}{}", "Hand", cards(&view.hero));
    let _ = writeln!(out, "{:<15}{}", "Board", cards(&view.board));
    let _ = writeln!(out, "{:<15}{}", "Opponents", view.opponents);
    let _ = writeln!(out, "{:<15}{}", "Hand strength", view.results.hand_strength);
    let _ = writeln!(out, "{:<15}{}", "Equity", view.results.equity);
    let _ = writeln!(out, "{:<15}{}", "Suggestion", view.results.suggestion);
    out
}

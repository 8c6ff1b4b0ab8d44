// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Card picker view.
use eframe::egui::*;

use equilab_core::{
    cards::{Card, Rank, Suit},
    slots::SlotId,
    view::{ModalView, SlotView, WidgetView},
};

/// A user action collected while painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A slot has been clicked.
    OpenSlot(SlotId),
    /// A rank button has been clicked.
    Rank(Rank),
    /// A suit button has been clicked.
    Suit(Suit),
    /// The selector has been closed.
    Cancel,
    /// The clear button has been clicked.
    ClearAll,
    /// The opponents count changed.
    Opponents(u32),
    /// The evaluate button has been clicked.
    Evaluate,
}

/// Paints a [WidgetView] and collects the user actions.
#[derive(Debug, Default)]
pub struct PickerView {
    actions: Vec<Action>,
}

impl PickerView {
    const TEXT_FONT: FontId = FontId::new(16.0, FontFamily::Monospace);
    const CARD_FONT: FontId = FontId::new(24.0, FontFamily::Proportional);
    const CARD_SIZE: Vec2 = vec2(52.0, 72.0);
    const RED: Color32 = Color32::from_rgb(220, 40, 40);
    const MAX_OPPONENTS: u32 = 9;

    /// Paints the widget, returns the actions for this frame.
    pub fn show(&mut self, ctx: &Context, view: &WidgetView) -> Vec<Action> {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Hand Equity");
                ui.add_space(10.0);

                ui.label(RichText::new("Your hand").font(Self::TEXT_FONT));
                self.paint_slots(ui, &view.hero);
                ui.add_space(10.0);

                ui.label(RichText::new("Board").font(Self::TEXT_FONT));
                self.paint_slots(ui, &view.board);
                ui.add_space(10.0);

                self.paint_controls(ui, view);
                ui.add_space(10.0);

                self.paint_results(ui, view);
            });
        });

        if let Some(modal) = view.modal {
            self.paint_modal(ctx, &modal);
        }

        std::mem::take(&mut self.actions)
    }

    fn paint_slots(&mut self, ui: &mut Ui, slots: &[SlotView]) {
        ui.horizontal(|ui| {
            // Center the slots row.
            let width = slots.len() as f32 * (Self::CARD_SIZE.x + ui.spacing().item_spacing.x);
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));

            for slot in slots {
                let text = RichText::new(&slot.label)
                    .font(Self::CARD_FONT)
                    .color(slot_color(slot.card));

                let btn = Button::new(text).min_size(Self::CARD_SIZE);
                if ui.add(btn).on_hover_text(slot.id.name()).clicked() {
                    self.actions.push(Action::OpenSlot(slot.id));
                }
            }
        });
    }

    fn paint_controls(&mut self, ui: &mut Ui, view: &WidgetView) {
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() / 2.0 - 160.0).max(0.0));

            ui.label(RichText::new("Opponents").font(Self::TEXT_FONT));
            let mut opponents = view.opponents;
            let drag = DragValue::new(&mut opponents).range(1..=Self::MAX_OPPONENTS);
            if ui.add(drag).changed() {
                self.actions.push(Action::Opponents(opponents));
            }

            let btn = Button::new(RichText::new("Evaluate").font(Self::TEXT_FONT));
            if ui.add_enabled(view.evaluate_enabled, btn).clicked() {
                self.actions.push(Action::Evaluate);
            }

            let btn = Button::new(RichText::new("Clear").font(Self::TEXT_FONT));
            if ui.add(btn).clicked() {
                self.actions.push(Action::ClearAll);
            }
        });
    }

    fn paint_results(&self, ui: &mut Ui, view: &WidgetView) {
        ui.group(|ui| {
            Grid::new("results_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Hand strength", &view.results.hand_strength),
                        ("Equity", &view.results.equity),
                        ("Suggestion", &view.results.suggestion),
                    ];

                    for (name, value) in rows {
                        ui.label(RichText::new(name).font(Self::TEXT_FONT));
                        ui.label(RichText::new(value).font(Self::TEXT_FONT).strong());
                        ui.end_row();
                    }
                });
        });
    }

    fn paint_modal(&mut self, ctx: &Context, modal: &ModalView) {
        let mut open = true;

        Window::new(format!("Select card for {}", modal.slot))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for rank in Rank::picker_order() {
                        let text = RichText::new(rank.label()).font(Self::TEXT_FONT);
                        let btn = Button::new(text).selected(modal.chosen_rank == Some(rank));
                        if ui.add(btn).clicked() {
                            self.actions.push(Action::Rank(rank));
                        }
                    }
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    for suit in Suit::suits() {
                        let text = RichText::new(suit.symbol().to_string())
                            .font(Self::CARD_FONT)
                            .color(suit_color(suit));
                        let btn = Button::new(text).selected(modal.chosen_suit == Some(suit));
                        if ui.add(btn).clicked() {
                            self.actions.push(Action::Suit(suit));
                        }
                    }
                });

                ui.add_space(8.0);

                if ui.button("Cancel").clicked() {
                    self.actions.push(Action::Cancel);
                }
            });

        if !open {
            self.actions.push(Action::Cancel);
        }
    }
}

fn suit_color(suit: Suit) -> Color32 {
    if suit.is_red() {
        PickerView::RED
    } else {
        Color32::WHITE
    }
}

fn slot_color(card: Option<Card>) -> Color32 {
    card.map(|c| suit_color(c.suit()))
        .unwrap_or(Color32::GRAY)
}

// Copyright (C) 2025 Equilab Developers
// SPDX-License-Identifier: Apache-2.0

//! Equilab egui app implementation.
use eframe::egui::*;
use serde::{Deserialize, Serialize};

use equilab_core::{
    Widget,
    evaluation::{Dispatch, EvalError},
    widget::DEFAULT_OPPONENTS,
};

use crate::{
    connection::Connection,
    picker_view::{Action, PickerView},
};

/// App configuration parameters.
#[derive(Debug)]
pub struct Config {
    /// The evaluation server base url.
    pub server_url: String,
}

/// Settings persisted across runs.
#[derive(Debug, Serialize, Deserialize)]
struct Settings {
    opponents: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opponents: DEFAULT_OPPONENTS,
        }
    }
}

impl Settings {
    const STORAGE_KEY: &'static str = "settings";
}

/// The UI main frame.
pub struct AppFrame {
    widget: Widget,
    connection: Connection,
    view: PickerView,
}

impl AppFrame {
    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(Theme::Dark);

        log::info!("Creating new app with config: {config:?}");

        let settings: Settings = cc
            .storage
            .and_then(|s| eframe::get_value(s, Settings::STORAGE_KEY))
            .unwrap_or_default();

        let connection = Connection::new(&config.server_url, cc.egui_ctx.clone());
        log::info!("Evaluation endpoint {}", connection.url());

        AppFrame {
            widget: Widget::new(settings.opponents),
            connection,
            view: PickerView::default(),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::OpenSlot(slot) => {
                self.widget.open_slot(slot);
            }
            Action::Rank(rank) => {
                self.widget.choose_rank(rank);
            }
            Action::Suit(suit) => {
                self.widget.choose_suit(suit);
            }
            Action::Cancel => self.widget.cancel(),
            Action::ClearAll => self.widget.clear_all(),
            Action::Opponents(n) => self.widget.set_opponents(n),
            Action::Evaluate => match self.widget.evaluate(&mut self.connection) {
                Ok(Dispatch::Sent) | Ok(Dispatch::Ignored) => {}
                Err(EvalError::Validation) => log::info!("Hero hand incomplete"),
                Err(e) => log::error!("Evaluation error {e}"),
            },
        }
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        while let Some(reply) = self.connection.poll() {
            // Errors are already shown in the result displays.
            let _ = self.widget.complete(reply);
        }

        let actions = self.view.show(ctx, &self.widget.view());
        for action in actions {
            self.apply(action);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = Settings {
            opponents: self.widget.opponents(),
        };

        eframe::set_value(storage, Settings::STORAGE_KEY, &settings);
    }
}

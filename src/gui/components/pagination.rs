// src/gui/components/pagination.rs
//
// Prev/next plus the windowed page-number strip. Hidden entirely when
// everything fits on one page. Prev on page 1 and next on the last page
// are disabled, not wrapping.

use eframe::egui::{self, Button};

use crate::config::state::Action;
use crate::gui::app::App;
use crate::paginate::{self, PageToken};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let total = app.state.total_pages();
    let current = app.state.view.page;
    let tokens = paginate::page_numbers(current, total);
    if tokens.is_empty() {
        return;
    }

    let mut pending: Option<Action> = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 1, Button::new("‹")).clicked() {
            pending = Some(Action::PrevPage);
        }

        for tok in &tokens {
            match tok {
                PageToken::Num(n) => {
                    let selected = *n == current;
                    if ui.selectable_label(selected, n.to_string()).clicked() && !selected {
                        pending = Some(Action::GotoPage(*n));
                    }
                }
                PageToken::Gap => {
                    ui.label("…");
                }
            }
        }

        if ui.add_enabled(current < total, Button::new("›")).clicked() {
            pending = Some(Action::NextPage);
        }
    });

    if let Some(action) = pending {
        app.state.apply(action);
    }
}

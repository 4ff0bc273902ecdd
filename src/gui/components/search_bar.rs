// src/gui/components/search_bar.rs
//
// Search box + campus dropdown. Text applies on Enter or the button;
// a campus change applies immediately. Both dispatch one Search action,
// which also resets to page 1.

use eframe::egui;

use crate::config::consts::CAMPUSES;
use crate::config::state::Action;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut submit = false;

    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.query_input)
                .hint_text("Buscar Materia o Profesor")
                .desired_width(320.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui.button("Buscar").clicked() {
            submit = true;
        }

        let before = app.campus_input.clone();
        let shown = if app.campus_input.is_empty() {
            "Todos los campus"
        } else {
            app.campus_input.as_str()
        };
        egui::ComboBox::from_id_salt("campus_select")
            .selected_text(shown)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.campus_input, s!(), "Todos los campus");
                for c in CAMPUSES {
                    ui.selectable_value(&mut app.campus_input, s!(*c), *c);
                }
            });
        if app.campus_input != before {
            submit = true;
        }
    });

    if submit {
        logf!(
            "UI: Search \"{}\" campus \"{}\"",
            app.query_input,
            app.campus_input
        );
        app.state.apply(Action::Search {
            query: app.query_input.clone(),
            campus: app.campus_input.clone(),
        });
    }
}

// src/gui/components/course_table.rs
//
// Draws the visible page of sections. Rows are copied out of the filtered
// view first so the borrow on app.state ends before a star click mutates
// it through an action.

use eframe::egui::{self, Button, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::state::Action;
use crate::gui::app::App;

const STAR_COLOR: egui::Color32 = egui::Color32::GOLD;

struct Row {
    nrc: String,
    course: String,
    professor: String,
    campus: String,
    schedule: String,
    rating: u8,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows: Vec<Row> = {
        let view = app.state.results();
        app.state
            .page_range()
            .filter_map(|i| view.section(i))
            .map(|sec| {
                let course = view
                    .course_for(sec)
                    .map(|c| format!("{} ({})", c.name, c.code))
                    .unwrap_or_else(|| sec.course_id.clone());
                Row {
                    nrc: sec.nrc.clone(),
                    course,
                    professor: sec.professor.clone(),
                    campus: sec.campus.clone(),
                    schedule: format!("{} ({})", sec.schedule, sec.modality),
                    rating: sec.rating,
                }
            })
            .collect()
    };

    let mut pending: Option<Action> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))   // NRC
        .column(Column::auto().resizable(true).at_least(220.0)) // Asignatura
        .column(Column::auto().resizable(true).at_least(160.0)) // Profesor
        .column(Column::auto().at_least(110.0))  // Campus
        .column(Column::auto().resizable(true).at_least(160.0)) // Horario
        .column(Column::auto().at_least(110.0))  // Calificación
        .header(24.0, |mut header| {
            for title in ["NRC", "Asignatura", "Profesor", "Campus", "Horario", "Calificación"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut table_row| {
                let r = &rows[table_row.index()];
                table_row.col(|ui| { ui.label(&r.nrc); });
                table_row.col(|ui| { ui.label(&r.course); });
                table_row.col(|ui| { ui.label(&r.professor); });
                table_row.col(|ui| { ui.label(&r.campus); });
                table_row.col(|ui| { ui.label(&r.schedule); });
                table_row.col(|ui| {
                    ui.horizontal(|ui| {
                        for star in 1u8..=5 {
                            let glyph = if star <= r.rating { "★" } else { "☆" };
                            let btn = Button::new(RichText::new(glyph).color(STAR_COLOR))
                                .frame(false);
                            if ui.add(btn).clicked() {
                                pending = Some(Action::Rate {
                                    nrc: r.nrc.clone(),
                                    stars: star,
                                });
                            }
                        }
                    });
                });
            });
        });

    if let Some(action) = pending {
        app.state.apply(action);
    }
}

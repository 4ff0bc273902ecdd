// src/gui/components/export_bar.rs
//
// Format selector, output path, Copy/Export of the *filtered* result set
// (all pages, not just the visible slice).

use std::path::PathBuf;

use eframe::egui;

use crate::csv::{self, Delim};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut copy_clicked = false;
    let mut export_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Formato:");
        ui.selectable_value(&mut app.export_fmt, Delim::Csv, "CSV");
        ui.selectable_value(&mut app.export_fmt, Delim::Tsv, "TSV");

        ui.label("Salida:");
        ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(220.0));

        copy_clicked = ui.button("Copiar").clicked();
        export_clicked = ui.button("Exportar").clicked();
    });

    if copy_clicked {
        let txt = csv::results_to_string(&app.state.results(), app.export_fmt);
        ui.ctx().copy_text(txt);
        app.status("Copiado al portapapeles.");
    }

    if export_clicked {
        let n = {
            let view = app.state.results();
            let txt = csv::results_to_string(&view, app.export_fmt);
            let path = PathBuf::from(&app.out_path_text);
            let written = (|| -> std::io::Result<usize> {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                std::fs::write(&path, txt)?;
                Ok(view.len())
            })();
            written
        };
        match n {
            Ok(count) => app.status(format!("Exportado: {count} secciones → {}", app.out_path_text)),
            Err(e) => {
                loge!("Export: {e}");
                app.status(format!("Error al exportar: {e}"));
            }
        }
    }
}

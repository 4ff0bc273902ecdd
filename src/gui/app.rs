// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    catalog::{Catalog, LoadError},
    config::{
        consts::{DATA_URL, DEFAULT_EXPORT_FILE, DEFAULT_OUT_DIR},
        state::AppState,
    },
    csv::Delim,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Programación Docente UASD 2024-20",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // search box buffer; applied to state on submit
    pub query_input: String,
    // campus selection; applies immediately on change
    pub campus_input: String,

    // export format & output path (GUI only)
    pub export_fmt: Delim,
    pub out_path_text: String,

    // status line (the fetch worker writes here too)
    pub status: Arc<Mutex<String>>,
    pub loading: bool,

    // one-shot fetch: spawned on the first frame, result parked in `loaded`
    fetch_started: bool,
    loaded: Arc<Mutex<Option<Result<Catalog, LoadError>>>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            query_input: s!(),
            campus_input: s!(),
            export_fmt: Delim::Csv,
            out_path_text: join!(DEFAULT_OUT_DIR, "/", DEFAULT_EXPORT_FILE, ".csv"),
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: false,
            fetch_started: false,
            loaded: Arc::new(Mutex::new(None)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    fn start_fetch(&mut self, ctx: &egui::Context) {
        self.fetch_started = true;
        self.loading = true;
        self.status("Cargando datos…");

        let slot = self.loaded.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let res = Catalog::fetch(DATA_URL);
            *slot.lock().unwrap() = Some(res);
            ctx2.request_repaint();
        });
    }

    /// Install the fetch result once the worker parks it. A failed load
    /// leaves the empty catalog in place; the table then shows the generic
    /// no-results message.
    fn poll_fetch(&mut self) {
        let Some(res) = self.loaded.lock().unwrap().take() else { return };
        self.loading = false;
        match res {
            Ok(cat) => {
                let n = cat.sections().len();
                self.state.install_catalog(cat);
                self.status(format!("Listo: {n} secciones"));
            }
            Err(e) => {
                loge!("Load: {e}");
                self.status(format!("Error al cargar los datos: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.fetch_started {
            self.start_fetch(ctx);
        }
        self.poll_fetch();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Programación Docente UASD 2024-20");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let status = self.status.lock().unwrap().clone();
                    ui.label(status);
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("© 2024 UASD. Todos los derechos reservados.");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_bar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            if self.loading {
                ui.label("Cargando…");
                return;
            }

            if self.state.results().is_empty() {
                let campus = &self.state.view.campus;
                let msg = if campus.is_empty() {
                    s!("No se encontraron asignaturas que coincidan con la búsqueda.")
                } else {
                    format!("No se encontraron asignaturas para el campus de {campus}.")
                };
                ui.label(msg);
                return;
            }

            components::course_table::draw(ui, self);
            ui.separator();
            components::pagination::draw(ui, self);
        });
    }
}

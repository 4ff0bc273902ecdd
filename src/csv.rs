// src/csv.rs
//
// CSV/TSV writing for export (Copy button, Export button, CLI output).
// The input side of the app is JSON, so there is no parser here.

use std::io::{self, Write};

use crate::catalog::Section;
use crate::search::ResultView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

pub const EXPORT_HEADERS: &[&str] = &[
    "NRC", "Clave", "Asignatura", "Profesor", "Campus", "Horario", "Modalidad", "Calificación",
];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One export row per section; course name resolved through the view.
pub fn section_row(view: &ResultView<'_>, sec: &Section) -> Vec<String> {
    let course_name = view
        .course_for(sec)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    vec![
        sec.nrc.clone(),
        sec.course_id.clone(),
        course_name,
        sec.professor.clone(),
        sec.campus.clone(),
        sec.schedule.clone(),
        sec.modality.clone(),
        sec.rating.to_string(),
    ]
}

/// Full export string for the filtered result set (not just the visible
/// page), with a header line.
pub fn results_to_string(view: &ResultView<'_>, delim: Delim) -> String {
    let sep = delim.sep();
    let mut buf: Vec<u8> = Vec::new();

    let headers: Vec<String> = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
    let _ = write_row(&mut buf, &headers, sep);
    for sec in view.sections() {
        let _ = write_row(&mut buf, &section_row(view, sec), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

// src/catalog.rs
//
// Canonical in-memory dataset: Courses deduplicated by code, one Section
// per raw record. Loaded once at startup; `rate()` is the only mutator,
// everything else reads.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::net;

/// One element of the upstream JSON array (Spanish wire keys).
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub clave: String,
    pub asignatura: String,
    pub profesor: String,
    pub horario: String,
    pub provincia: String,
    pub nrc: String,
    pub modalidad: String,
    pub calificacion: String,
}

/// An academic subject. `id` and `code` are both the clave; `id` exists so
/// sections can reference courses the same way the upstream data does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// One scheduled offering of a course, identified by NRC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub course_id: String,
    pub professor: String,
    pub schedule: String,
    pub campus: String,
    pub rating: u8,
    pub nrc: String,
    pub modality: String,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// "N/A" → 0; "X/10" → X; anything malformed → 0. Never panics: bad data
/// must not escape the load boundary.
pub fn parse_rating(s: &str) -> u8 {
    let s = s.trim();
    if s.eq_ignore_ascii_case("n/a") {
        return 0;
    }
    s.split('/')
        .next()
        .and_then(|head| head.trim().parse::<u8>().ok())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    sections: Vec<Section>,
    // code → index into `courses`
    by_code: HashMap<String, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shape raw records into the two related collections. First record
    /// seen for a clave defines the Course; later ones only add Sections.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        let mut courses: Vec<Course> = Vec::new();
        let mut sections: Vec<Section> = Vec::with_capacity(records.len());
        let mut by_code: HashMap<String, usize> = HashMap::new();

        for rec in records {
            if !by_code.contains_key(&rec.clave) {
                by_code.insert(rec.clave.clone(), courses.len());
                courses.push(Course {
                    id: rec.clave.clone(),
                    name: rec.asignatura.clone(),
                    code: rec.clave.clone(),
                });
            }

            sections.push(Section {
                id: rec.nrc.clone(),
                course_id: rec.clave,
                professor: rec.profesor,
                schedule: rec.horario,
                campus: rec.provincia,
                rating: parse_rating(&rec.calificacion),
                nrc: rec.nrc,
                modality: rec.modalidad,
            });
        }

        Self { courses, sections, by_code }
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let records: Vec<RawRecord> = serde_json::from_str(text)?;
        Ok(Self::from_records(records))
    }

    pub fn fetch(url: &str) -> Result<Self, LoadError> {
        let body = net::http_get(url)?;
        let cat = Self::from_json(&body)?;
        logf!("Load: {} courses, {} sections from {}", cat.courses.len(), cat.sections.len(), url);
        Ok(cat)
    }

    pub fn load_file(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn course_by_code(&self, code: &str) -> Option<&Course> {
        self.by_code.get(code).map(|&ix| &self.courses[ix])
    }

    pub fn course_index(&self, code: &str) -> Option<usize> {
        self.by_code.get(code).copied()
    }

    /// Overwrite one section's rating in place. Returns false when the NRC
    /// is unknown. Touches nothing else.
    pub fn rate(&mut self, nrc: &str, stars: u8) -> bool {
        match self.sections.iter_mut().find(|s| s.nrc == nrc) {
            Some(sec) => {
                sec.rating = stars;
                true
            }
            None => false,
        }
    }
}

// src/search.rs
//
// Filter engine. Produces a zero-copy projection over the catalog:
// indices of matching sections plus the distinct courses they reference,
// in first-observed order. Recomputed from scratch on every call — no
// hidden state, so identical calls give identical results.

use std::collections::HashSet;

use crate::catalog::{Catalog, Course, Section};
use crate::core::normalize;

/// Filtered view for display. Holds positions into the canonical catalog.
#[derive(Clone, Debug)]
pub struct ResultView<'a> {
    pub section_ix: Vec<usize>,
    pub course_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> ResultView<'a> {
    pub fn len(&self) -> usize {
        self.section_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.section_ix.is_empty()
    }

    pub fn section(&self, i: usize) -> Option<&'a Section> {
        self.section_ix.get(i).map(|&ix| &self.catalog.sections()[ix])
    }

    pub fn sections(&self) -> impl Iterator<Item = &'a Section> + '_ {
        self.section_ix.iter().map(|&ix| &self.catalog.sections()[ix])
    }

    pub fn courses(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.course_ix.iter().map(|&ix| &self.catalog.courses()[ix])
    }

    pub fn course_for(&self, section: &Section) -> Option<&'a Course> {
        self.catalog.course_by_code(&section.course_id)
    }
}

/// Text predicate: folded query is a substring of the professor name, the
/// linked course name, or the course code. Empty folded query matches all.
fn text_match(section: &Section, course: Option<&Course>, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true;
    }
    if normalize::fold(&section.professor).contains(folded_query) {
        return true;
    }
    match course {
        Some(c) => {
            normalize::fold(&c.name).contains(folded_query)
                || normalize::fold(&c.code).contains(folded_query)
        }
        None => false,
    }
}

/// Campus predicate: empty selection means every campus; otherwise exact,
/// case-sensitive equality (the dropdown vocabulary is fixed).
fn campus_match(section: &Section, campus: &str) -> bool {
    campus.is_empty() || section.campus == campus
}

pub fn filter<'a>(catalog: &'a Catalog, query: &str, campus: &str) -> ResultView<'a> {
    let folded = normalize::fold(query.trim());

    let mut section_ix = Vec::new();
    let mut course_ix = Vec::new();
    let mut seen_codes: HashSet<&str> = HashSet::new();

    for (ix, sec) in catalog.sections().iter().enumerate() {
        let course = catalog.course_by_code(&sec.course_id);
        if !text_match(sec, course, &folded) || !campus_match(sec, campus) {
            continue;
        }
        section_ix.push(ix);

        if seen_codes.insert(&sec.course_id) {
            if let Some(pos) = catalog.course_index(&sec.course_id) {
                course_ix.push(pos);
            }
        }
    }

    ResultView { section_ix, course_ix, catalog }
}

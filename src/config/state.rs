// src/config/state.rs
//
// Single source of truth for the session (UI thread only). All user
// interactions funnel through `AppState::apply` as explicit actions; the
// visible slice, course set and page count are derived on demand from the
// canonical (query, campus, page, catalog) tuple, never cached.

use crate::catalog::Catalog;
use crate::config::consts::PAGE_SIZE;
use crate::paginate;
use crate::search::{self, ResultView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub campus: String,
    /// 1-based; always within 1..=total_pages for the current filter.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { query: s!(), campus: s!(), page: 1 }
    }
}

#[derive(Clone, Debug)]
pub enum Action {
    /// Submit from the search box or a campus dropdown change.
    Search { query: String, campus: String },
    /// Star click on one section row.
    Rate { nrc: String, stars: u8 },
    GotoPage(usize),
    NextPage,
    PrevPage,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub view: ViewState,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, view: ViewState::default() }
    }

    /// Swap in a freshly loaded catalog, keeping the current search inputs
    /// but starting back at the first page.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.view.page = 1;
    }

    /// The one state-transition entry point.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Search { query, campus } => {
                self.view.query = query;
                self.view.campus = campus;
                self.view.page = 1;
            }
            Action::Rate { nrc, stars } => {
                if !self.catalog.rate(&nrc, stars) {
                    logd!("Rate: unknown NRC {nrc}");
                }
            }
            Action::GotoPage(p) => {
                self.view.page = paginate::clamp_page(p, self.total_pages());
            }
            Action::NextPage => {
                if self.view.page < self.total_pages() {
                    self.view.page += 1;
                }
            }
            Action::PrevPage => {
                if self.view.page > 1 {
                    self.view.page -= 1;
                }
            }
        }

        // A transition can shrink the filtered set out from under the
        // current page; land on the last valid page, not in the void.
        let total = self.total_pages();
        if self.view.page > total {
            self.view.page = total;
        }
    }

    /* ---------- derived (recomputed per call) ---------- */

    pub fn results(&self) -> ResultView<'_> {
        search::filter(&self.catalog, &self.view.query, &self.view.campus)
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.results().len(), PAGE_SIZE)
    }

    /// Distinct courses referenced by the sections on the current page,
    /// first-observed order.
    pub fn page_courses(&self) -> Vec<&crate::catalog::Course> {
        let results = self.results();
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for i in self.page_range() {
            if let Some(sec) = results.section(i) {
                if seen.insert(sec.course_id.as_str()) {
                    if let Some(course) = self.catalog.course_by_code(&sec.course_id) {
                        out.push(course);
                    }
                }
            }
        }
        out
    }

    /// Indices (into the filtered view) of the sections on the current page.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let results = self.results();
        let page = paginate::clamp_page(
            self.view.page,
            paginate::total_pages(results.len(), PAGE_SIZE),
        );
        paginate::page_bounds(results.len(), page, PAGE_SIZE)
    }
}

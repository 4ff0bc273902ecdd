// src/gui/components/mod.rs

pub mod course_table;
pub mod export_bar;
pub mod pagination;
pub mod search_bar;

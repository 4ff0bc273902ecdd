// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod catalog;
pub mod csv;
pub mod gui;
pub mod paginate;
pub mod search;

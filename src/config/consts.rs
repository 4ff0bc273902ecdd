// src/config/consts.rs

// Net config
pub const DATA_URL: &str = "https://uasd-docente.pages.dev/data.json";
pub const USER_AGENT: &str = "docente/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local store
pub const STORE_DIR: &str = ".store";

// Pagination
pub const PAGE_SIZE: usize = 10;
/// Pages shown on each side of the current page in the pager strip.
pub const PAGE_WINDOW: usize = 2;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_FILE: &str = "secciones";

/// Campus dropdown vocabulary. Fixed, independent of the loaded data.
pub const CAMPUSES: &[&str] = &[
    "Santo Domingo",
    "Santiago",
    "San Francisco de Macorís",
    "Puerto Plata",
    "San Juan de la Maguana",
    "Barahona",
    "Mao",
    "Hato Mayor",
    "Higüey",
    "Bonao",
    "La Vega",
    "Baní",
    "Azua",
    "Neyba",
    "Cotuí",
    "Nagua",
    "Dajabón",
];

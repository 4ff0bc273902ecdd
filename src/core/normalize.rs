// src/core/normalize.rs
//
// Diacritic-insensitive text folding for search. Lowercase, decompose
// (NFD), drop combining marks: "Higüey" → "higuey", "México" → "mexico".
// Pure and idempotent; empty in → empty out.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

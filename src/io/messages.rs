//! User-facing status text in Czech and English.
//!
//! Presentation only — the scoring pipeline never reads the language
//! setting.

use crate::types::Language;

/// Header printed above the ranked list in verbose mode.
pub fn results_header(language: Language, count: usize) -> String {
    match language {
        Language::Czech => format!("Nalezeno {count} klíčových slov:"),
        Language::English => format!("Found {count} keywords:"),
    }
}

/// Notice printed when no candidate word matched the corpus.
pub fn no_keywords(language: Language) -> &'static str {
    match language {
        Language::Czech => "Žádná klíčová slova nebyla nalezena.",
        Language::English => "No keywords found.",
    }
}

/// Error text for a document that filters down to nothing.
pub fn empty_document(language: Language) -> &'static str {
    match language {
        Language::Czech => "Dokument po odfiltrování neobsahuje žádná použitelná slova.",
        Language::English => "The document contains no usable words after filtering.",
    }
}

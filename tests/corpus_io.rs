//! Tests for the I/O collaborators: corpus file parsing, document reading,
//! and result formatting.

use std::io::Write as _;

use tempfile::NamedTempFile;

use keyrank::io::{CorpusFile, DocumentSource, ResultSink};
use keyrank::types::KeyrankError;
use keyrank::{CorpusIndex, Language, OutputConfig, RankedKeyword};

// ==================== Helpers ====================

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn render(results: &[RankedKeyword], config: &OutputConfig) -> String {
    let mut sink = ResultSink::new(Vec::new());
    sink.write_results(results, config).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

// ==================== Corpus File Tests ====================

#[test]
fn test_corpus_file_parses_rows_in_order() {
    let file = temp_file("1 být 91523\n2 Kočka 4500\n3 strom 800\n");

    let entries = CorpusFile::new(file.path()).load_entries().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].word, "být");
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].frequency, 91523);
    // Words are lowercased on load.
    assert_eq!(entries[1].word, "kočka");
    assert_eq!(entries[2].word, "strom");
}

#[test]
fn test_corpus_file_skips_malformed_rows() {
    let file = temp_file(
        "1 být 91523\n\
         garbage\n\
         2 kočka\n\
         x kočka 4500\n\
         3 strom notanumber\n\
         \n\
         4 zmije 700\n",
    );

    let entries = CorpusFile::new(file.path()).load_entries().unwrap();
    // Only the two fully parseable rows survive, in file order.
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].word, "být");
    assert_eq!(entries[1].word, "zmije");
}

#[test]
fn test_corpus_file_with_no_usable_rows_is_error() {
    let file = temp_file("garbage\nmore garbage\n");
    let err = CorpusFile::new(file.path()).load_entries().unwrap_err();
    assert!(matches!(err, KeyrankError::EmptyCorpus));
}

#[test]
fn test_corpus_file_missing_is_io_error() {
    let err = CorpusFile::new("/nonexistent/corpus.txt")
        .load_entries()
        .unwrap_err();
    assert!(matches!(err, KeyrankError::Io { .. }));
}

#[test]
fn test_corpus_file_duplicates_keep_first_occurrence() {
    let file = temp_file("1 kočka 4500\n2 kočka 7\n");

    let entries = CorpusFile::new(file.path()).load_entries().unwrap();
    let index = CorpusIndex::new(entries);
    assert_eq!(index.lookup("kočka"), Some(4500));
    assert_eq!(index.size(), 2);
}

// ==================== Document Source Tests ====================

#[test]
fn test_document_source_reads_full_text() {
    let file = temp_file("Kočka sedí na stromě.\nPes štěká.\n");
    let text = DocumentSource::new(file.path()).read_all().unwrap();
    assert!(text.contains("Kočka sedí"));
    assert!(text.contains("Pes štěká"));
}

#[test]
fn test_document_source_missing_file_is_io_error() {
    let err = DocumentSource::new("/nonexistent/document.txt")
        .read_all()
        .unwrap_err();
    assert!(matches!(err, KeyrankError::Io { .. }));
}

// ==================== Result Sink Tests ====================

#[test]
fn test_sink_verbose_format() {
    let results = vec![
        RankedKeyword {
            word: "slunce".to_string(),
            score: 100.0,
        },
        RankedKeyword {
            word: "měsíc".to_string(),
            score: 0.5,
        },
    ];
    let config = OutputConfig {
        verbose: true,
        language: Language::Czech,
    };

    let output = render(&results, &config);
    assert_eq!(output, "1. slunce (100.00)\n2. měsíc (0.50)\n");
}

#[test]
fn test_sink_terse_format() {
    let results = vec![
        RankedKeyword {
            word: "slunce".to_string(),
            score: 100.0,
        },
        RankedKeyword {
            word: "měsíc".to_string(),
            score: 0.5,
        },
    ];
    let config = OutputConfig {
        verbose: false,
        language: Language::English,
    };

    let output = render(&results, &config);
    assert_eq!(output, "slunce\nměsíc\n");
}

#[test]
fn test_sink_empty_results_write_nothing() {
    let config = OutputConfig {
        verbose: true,
        language: Language::Czech,
    };
    assert!(render(&[], &config).is_empty());
}

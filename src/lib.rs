#[macro_use]
extern crate lazy_static;

pub mod document;
pub mod polish;
pub mod remap;
pub mod scan;
pub mod translate;

pub use document::{read_document, write_document, ErrorKind, RepairResult};
pub use polish::{polish, spot_check, PhraseRule, PhraseTable, DEFAULT_PHRASES, SPOT_CHECKS};
pub use remap::{build_remap_table, ByteRemapTable, RemapTableBuilder, DEFAULT_REMAP};
pub use translate::{translate, translate_counted, TranslateStats};

use log::debug;

#[derive(Debug, Clone)]
pub struct Repaired {
    pub text: String,
    pub stats: TranslateStats,
    // per phrase rule, in table order
    pub phrase_hits: Vec<usize>,
}

/// Byte translation followed by phrase polishing, with the given tables.
pub fn repair_with(raw: &[u8], table: &ByteRemapTable, phrases: &PhraseTable) -> Repaired {
    let (intermediate, stats) = translate_counted(raw, table);
    debug!(
        "{} quoted segments, {} bytes remapped, {} passed through",
        stats.segments, stats.remapped, stats.fallback
    );
    let (text, phrase_hits) = phrases.apply_counted(&intermediate);
    Repaired {
        text,
        stats,
        phrase_hits,
    }
}

pub fn repair(raw: &[u8]) -> String {
    repair_with(raw, &DEFAULT_REMAP, &DEFAULT_PHRASES).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupted_weekday_repaired() {
        // these bytes came out as Եիկոóշաբթի under the uncorrected map
        let raw = [
            b'"', 0x88, 0x95, 0x9d, 0xaf, 0xf3, 0xad, 0x81, 0x83, 0x91, 0x95, b'"',
        ];
        let legacy = RemapTableBuilder::default().without_overrides().build();
        let repaired = repair_with(&raw, &legacy, &DEFAULT_PHRASES);
        assert_eq!(repaired.text, "\"Երկուշաբթի\"");
        assert_eq!(repaired.phrase_hits[0], 1);
        assert_eq!(repaired.stats.fallback, 1);
    }

    #[test]
    fn test_override_bytes_need_no_polish() {
        // Երկու via the corrected map alone
        let raw = [b'"', 0x88, 0x95, 0x9d, 0xaf, 0xf3, b'"'];
        let repaired = repair_with(&raw, &DEFAULT_REMAP, &DEFAULT_PHRASES);
        assert_eq!(repaired.text, "\"Երկու\"");
        assert!(repaired.phrase_hits.iter().all(|&n| n == 0));
    }

    #[test]
    fn test_unmapped_byte_survives() {
        let raw = [b'"', 0xc0, b'"'];
        assert!(!DEFAULT_REMAP.contains(0xc0));
        assert_eq!(repair(&raw), "\"\u{c0}\"");
    }

    #[test]
    fn test_structure_outside_quotes_unchanged() {
        let raw = b"DEFINE MENU(1, 2); { x = y + 3 }\r\n";
        assert_eq!(repair(raw), "DEFINE MENU(1, 2); { x = y + 3 }\r\n");
    }

    #[test]
    fn test_document_with_escapes() {
        let mut raw = b"PROMPT \"".to_vec();
        raw.extend_from_slice(&[0x80, b'\\', b'"', 0xa9, b'"']);
        raw.extend_from_slice(b" END");
        assert_eq!(repair(&raw), "PROMPT \"Ա\\\"օ\" END");
    }
}

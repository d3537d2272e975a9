use crate::remap::ByteRemapTable;
use crate::scan::{Chunk, QuotedChunks};
use log::trace;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranslateStats {
    pub segments: usize,
    // quoted bytes the table had an entry for
    pub remapped: usize,
    // quoted bytes that went through as their own codepoint
    pub fallback: usize,
}

/// Rewrites every byte inside a quoted segment through `table` and copies
/// everything else across as its Latin-1 codepoint.
///
/// Every byte yields exactly one `char`, so the result is always valid text
/// and nothing is dropped.
pub fn translate(raw: &[u8], table: &ByteRemapTable) -> String {
    translate_counted(raw, table).0
}

pub fn translate_counted(raw: &[u8], table: &ByteRemapTable) -> (String, TranslateStats) {
    let mut text = String::with_capacity(raw.len());
    let mut stats = TranslateStats::default();
    for chunk in raw.quoted_chunks() {
        match chunk {
            Chunk::Plain(bytes) => text.extend(bytes.iter().map(|&b| b as char)),
            Chunk::Quoted(bytes) => {
                trace!("quoted segment of {} bytes", bytes.len());
                stats.segments += 1;
                text.push('"');
                for &b in bytes {
                    match table.get(b) {
                        Some(c) => {
                            stats.remapped += 1;
                            text.push(c);
                        }
                        None => {
                            stats.fallback += 1;
                            text.push(b as char);
                        }
                    }
                }
                text.push('"');
            }
        }
    }
    (text, stats)
}

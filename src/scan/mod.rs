pub mod parse;

const QUOTE: u8 = b'"';

/// A piece of a document: either structural bytes left alone, or the
/// interior of a double-quoted segment (delimiters excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    Plain(&'a [u8]),
    Quoted(&'a [u8]),
}

impl<'a> Chunk<'a> {
    #[inline]
    pub fn bytes(self) -> &'a [u8] {
        match self {
            Chunk::Plain(b) | Chunk::Quoted(b) => b,
        }
    }
}

/// Splits a document left to right into non-overlapping chunks.
///
/// A quote with no matching close is emitted as plain text and scanning
/// resumes at the next quote.
pub struct Chunks<'a> {
    rest: &'a [u8],
}

impl<'a> Chunks<'a> {
    pub fn new(document: &'a [u8]) -> Self {
        Chunks { rest: document }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if let Ok((rest, body)) = parse::quoted_segment(self.rest) {
            self.rest = rest;
            return Some(Chunk::Quoted(body));
        }
        let skip = if self.rest[0] == QUOTE { 1 } else { 0 };
        let end = self.rest[skip..]
            .iter()
            .position(|&b| b == QUOTE)
            .map_or(self.rest.len(), |pos| pos + skip);
        let (plain, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Chunk::Plain(plain))
    }
}

pub trait QuotedChunks<'a> {
    fn quoted_chunks(self) -> Chunks<'a>;
}

impl<'a> QuotedChunks<'a> for &'a [u8] {
    #[inline]
    fn quoted_chunks(self) -> Chunks<'a> {
        Chunks::new(self)
    }
}

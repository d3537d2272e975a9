use itertools::Itertools;
use std::fmt;

// Hand-verified corrections for bytes the even/odd pattern gets wrong.
// Several of these land inside the generated range (0x95, 0xa9, 0xb0).
pub const OVERRIDES: &[(u8, char)] = &[
    (0x95, '\u{0580}'), // ր, generated arm gives ի
    (0xf3, '\u{0582}'), // ւ
    (0xe1, '\u{0549}'), // Չ
    (0xf7, '\u{0584}'), // ք
    (0xe9, '\u{057d}'), // ս
    (0xf8, '\u{0555}'), // Օ
    (0xec, '\u{0551}'), // Ց
    (0xf1, '\u{0581}'), // ց
    (0xea, '\u{054e}'), // Վ
    (0xeb, '\u{057e}'), // վ
    (0xe7, '\u{057c}'), // ռ
    (0xe8, '\u{0550}'), // Ր
    (0xf4, '\u{0553}'), // Փ
    (0xe4, '\u{0584}'), // ք
    (0xed, '\u{057f}'), // տ
    (0xfe, '\u{0587}'), // և
    (0xf9, '\u{0585}'), // օ
    (0xfc, '\u{0580}'), // ր
    (0xa9, '\u{0585}'), // օ
    (0xb0, '\u{055b}'), // ՛
    (0xdf, '\u{0569}'), // թ
    (0xef, '\u{056f}'), // կ
];

pub const UPPER_ARM: &str = "ԱԲԳԴԵԶԷԸԹԺԻԼԽԾԿՀՁՂՃՄՅՆՇՈՉՊՋՌՍՎ";
pub const LOWER_ARM: &str = "աբգդեզէըթժիլխծկհձղճմյնշոչպջռսվ";
pub const BASE: u8 = 0x80;

/// Byte to character map for the corrupted codepage.
///
/// Bytes without an entry are left unmapped and callers fall back to the
/// byte's own codepoint (see [`ByteRemapTable::translate_byte`]).
#[derive(Clone, PartialEq, Eq)]
pub struct ByteRemapTable {
    entries: [Option<char>; 256],
    overridden: [bool; 256],
}

impl ByteRemapTable {
    #[inline]
    pub fn get(&self, byte: u8) -> Option<char> {
        self.entries[byte as usize]
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.entries[byte as usize].is_some()
    }

    #[inline]
    pub fn is_override(&self, byte: u8) -> bool {
        self.overridden[byte as usize]
    }

    // unmapped bytes are read as Latin-1
    #[inline]
    pub fn translate_byte(&self, byte: u8) -> char {
        self.get(byte).unwrap_or(byte as char)
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mapped entries in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        (0..=u8::MAX).filter_map(move |b| self.get(b).map(|c| (b, c)))
    }
}

impl fmt::Debug for ByteRemapTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(b, c)| (format!("{:#04x}", b), c)))
            .finish()
    }
}

/// Assembles a [`ByteRemapTable`] from two alphabet arms laid out on an
/// even/odd stride and a list of overrides. Overrides always win over the
/// generated entries regardless of the order they were supplied in.
#[derive(Debug, Clone)]
pub struct RemapTableBuilder<'a> {
    base: u8,
    upper: &'a str,
    lower: &'a str,
    overrides: &'a [(u8, char)],
}

impl Default for RemapTableBuilder<'static> {
    fn default() -> Self {
        RemapTableBuilder {
            base: BASE,
            upper: UPPER_ARM,
            lower: LOWER_ARM,
            overrides: OVERRIDES,
        }
    }
}

impl<'a> RemapTableBuilder<'a> {
    pub fn new(base: u8, upper: &'a str, lower: &'a str) -> Self {
        RemapTableBuilder {
            base,
            upper,
            lower,
            overrides: &[],
        }
    }

    pub fn overrides(mut self, overrides: &'a [(u8, char)]) -> Self {
        self.overrides = overrides;
        self
    }

    // the map as it was before any manual correction; this is what produced
    // the corrupted words the phrase table knows about
    pub fn without_overrides(self) -> Self {
        self.overrides(&[])
    }

    // (byte, char) pairs of the stride pattern: base+2i from the upper arm,
    // base+1+2i from the lower arm
    fn generated(&self) -> impl Iterator<Item = (u8, char)> + 'a {
        (self.base..=u8::MAX).zip(
            self.upper
                .chars()
                .interleave_shortest(self.lower.chars()),
        )
    }

    pub fn build(&self) -> ByteRemapTable {
        let mut entries = [None; 256];
        let mut overridden = [false; 256];
        for (byte, c) in self.generated() {
            entries[byte as usize] = Some(c);
        }
        for &(byte, c) in self.overrides {
            entries[byte as usize] = Some(c);
            overridden[byte as usize] = true;
        }
        ByteRemapTable {
            entries,
            overridden,
        }
    }
}

pub fn build_remap_table() -> ByteRemapTable {
    RemapTableBuilder::default().build()
}

lazy_static! {
    pub static ref DEFAULT_REMAP: ByteRemapTable = build_remap_table();
}

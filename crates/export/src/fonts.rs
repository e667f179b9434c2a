// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Metrics for the two standard fonts the writer uses.
//!
//! Widths are advance widths in thousandths of an em, taken from the Adobe
//! core font metrics. Printable ASCII and the typographic glyphs that
//! `WinAnsiEncoding` places at 0x80 through 0x9F are measured exactly.
//! Anything else is measured as a digit.

/// A standard Type 1 font available in every PDF reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// `WinAnsiEncoding` glyphs outside Latin-1 as
/// `(char, code, Helvetica width, Helvetica-Bold width)`.
#[rustfmt::skip]
const WIN_ANSI_SPECIALS: [(char, u8, u16, u16); 27] = [
    ('\u{20AC}', 0x80, 556, 556),   // Euro
    ('\u{201A}', 0x82, 222, 278),   // quotesinglbase
    ('\u{0192}', 0x83, 556, 556),   // florin
    ('\u{201E}', 0x84, 333, 500),   // quotedblbase
    ('\u{2026}', 0x85, 1000, 1000), // ellipsis
    ('\u{2020}', 0x86, 556, 556),   // dagger
    ('\u{2021}', 0x87, 556, 556),   // daggerdbl
    ('\u{02C6}', 0x88, 333, 333),   // circumflex
    ('\u{2030}', 0x89, 1000, 1000), // perthousand
    ('\u{0160}', 0x8A, 667, 667),   // Scaron
    ('\u{2039}', 0x8B, 333, 333),   // guilsinglleft
    ('\u{0152}', 0x8C, 1000, 1000), // OE
    ('\u{017D}', 0x8E, 611, 611),   // Zcaron
    ('\u{2018}', 0x91, 222, 278),   // quoteleft
    ('\u{2019}', 0x92, 222, 278),   // quoteright
    ('\u{201C}', 0x93, 333, 500),   // quotedblleft
    ('\u{201D}', 0x94, 333, 500),   // quotedblright
    ('\u{2022}', 0x95, 350, 350),   // bullet
    ('\u{2013}', 0x96, 556, 556),   // endash
    ('\u{2014}', 0x97, 1000, 1000), // emdash
    ('\u{02DC}', 0x98, 333, 333),   // tilde
    ('\u{2122}', 0x99, 1000, 1000), // trademark
    ('\u{0161}', 0x9A, 500, 556),   // scaron
    ('\u{203A}', 0x9B, 333, 333),   // guilsinglright
    ('\u{0153}', 0x9C, 944, 944),   // oe
    ('\u{017E}', 0x9E, 500, 500),   // zcaron
    ('\u{0178}', 0x9F, 667, 667),   // Ydieresis
];

/// The `WinAnsiEncoding` byte for `c`, if the encoding has one.
///
/// Latin-1 maps to itself except for the C1 control range, which the
/// encoding reuses for typographic glyphs.
#[must_use]
pub fn win_ansi_code(c: char) -> Option<u8> {
    let code: u32 = u32::from(c);
    if (0x80..0xA0).contains(&code) {
        return None;
    }
    u8::try_from(code).ok().or_else(|| {
        WIN_ANSI_SPECIALS
            .iter()
            .find(|(special, ..)| *special == c)
            .map(|&(_, byte, ..)| byte)
    })
}

impl Font {
    /// The `BaseFont` name written into the font dictionary.
    #[must_use]
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The resource name used in content streams.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    fn char_width(self, c: char) -> u16 {
        let table: &[u16; 95] = match self {
            Self::Helvetica => &HELVETICA_WIDTHS,
            Self::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        let code: u32 = u32::from(c);
        if (32..=126).contains(&code) {
            usize::try_from(code - 32)
                .ok()
                .and_then(|i| table.get(i).copied())
                .unwrap_or(FALLBACK_WIDTH)
        } else {
            WIN_ANSI_SPECIALS
                .iter()
                .find(|(special, ..)| *special == c)
                .map_or(FALLBACK_WIDTH, |&(_, _, regular, bold)| match self {
                    Self::Helvetica => regular,
                    Self::HelveticaBold => bold,
                })
        }
    }

    /// Width of `text` in points when set at `size`.
    #[must_use]
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        f64::from(units) * size / 1000.0
    }
}

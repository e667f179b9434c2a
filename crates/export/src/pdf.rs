// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A minimal PDF 1.4 document builder.
//!
//! The builder lays out wrapped text top to bottom on US Letter pages with
//! fixed margins, starting a new page whenever the next line does not fit.
//! Only the two standard Helvetica faces are used, so no font data is
//! embedded. Streams are written uncompressed.

use std::io::Write;

use crate::error::ExportError;
use crate::fonts::{Font, win_ansi_code};

/// US Letter width in points.
pub const PAGE_WIDTH: f64 = 612.0;
/// US Letter height in points.
pub const PAGE_HEIGHT: f64 = 792.0;
/// Margin on every side, in points.
pub const MARGIN: f64 = 72.0;

const LINE_SPACING: f64 = 1.2;

/// Fill color in the `DeviceRGB` space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GRAY: Self = Self {
        r: 0.5,
        g: 0.5,
        b: 0.5,
    };
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

/// How a run of text is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    /// Distance from one baseline to the next.
    #[must_use]
    pub const fn leading(&self) -> f64 {
        self.size * LINE_SPACING
    }
}

/// Horizontal placement of each line of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush against the left margin plus any indent.
    Left,
    /// Centered between the margins.
    Center,
}

/// Fluent builder for a text-only PDF document.
#[derive(Debug)]
pub struct PdfWriter {
    pages: Vec<Vec<u8>>,
    current: Vec<u8>,
    cursor_y: f64,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    /// Starts a document with one empty page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            cursor_y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Width available to text between the margins.
    #[must_use]
    pub const fn content_width() -> f64 {
        PAGE_WIDTH - MARGIN - MARGIN
    }

    /// Number of pages written so far, including the one in progress.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Closes the current page and continues at the top of a fresh one.
    pub fn new_page(&mut self) -> &mut Self {
        let finished: Vec<u8> = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.cursor_y = PAGE_HEIGHT - MARGIN;
        self
    }

    /// Breaks the page unless `height` points remain above the bottom margin.
    ///
    /// A page that has nothing on it yet is never broken.
    pub fn ensure_space(&mut self, height: f64) -> &mut Self {
        if self.cursor_y - height < MARGIN && !self.current.is_empty() {
            self.new_page();
        }
        self
    }

    /// Moves the cursor down by `points`.
    ///
    /// Vertical space never carries over to a following page.
    pub fn space(&mut self, points: f64) -> &mut Self {
        self.cursor_y = (self.cursor_y - points).max(MARGIN);
        self
    }

    /// Sets `text` as a wrapped paragraph.
    ///
    /// Explicit newlines start new lines; a blank line is kept as vertical
    /// space. `indent` shifts left-aligned text and narrows the wrap width.
    pub fn paragraph(
        &mut self,
        text: &str,
        style: TextStyle,
        align: Align,
        indent: f64,
    ) -> &mut Self {
        let max_width: f64 = Self::content_width() - indent;
        for line in wrap_text(text, style.font, style.size, max_width) {
            self.line(&line, style, align, indent);
        }
        self
    }

    fn line(&mut self, text: &str, style: TextStyle, align: Align, indent: f64) {
        let leading: f64 = style.leading();
        self.ensure_space(leading);

        let baseline: f64 = self.cursor_y - style.size;
        self.cursor_y -= leading;

        if text.is_empty() {
            return;
        }

        let x: f64 = match align {
            Align::Left => MARGIN + indent,
            Align::Center => {
                let width: f64 = style.font.text_width(text, style.size);
                ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
            }
        };

        let header: String = format!(
            "BT /{} {:.2} Tf {:.3} {:.3} {:.3} rg {x:.2} {baseline:.2} Td (",
            style.font.resource_name(),
            style.size,
            style.color.r,
            style.color.g,
            style.color.b,
        );
        self.current.extend_from_slice(header.as_bytes());
        self.current.extend_from_slice(&encode_text(text));
        self.current.extend_from_slice(b") Tj ET\n");
    }

    /// Serializes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output buffer fails.
    pub fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        let last: Vec<u8> = std::mem::take(&mut self.current);
        self.pages.push(last);

        let page_count: usize = self.pages.len();
        let mut doc: ObjectWriter = ObjectWriter::new()?;

        doc.object(b"<< /Type /Catalog /Pages 2 0 R >>")?;

        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", page_object_id(i)))
            .collect();
        doc.object(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
                kids.join(" ")
            )
            .as_bytes(),
        )?;

        for font in [Font::Helvetica, Font::HelveticaBold] {
            doc.object(
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_name()
                )
                .as_bytes(),
            )?;
        }

        for (i, content) in self.pages.iter().enumerate() {
            doc.object(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    page_object_id(i) + 1
                )
                .as_bytes(),
            )?;

            let mut stream: Vec<u8> = Vec::with_capacity(content.len() + 64);
            writeln!(stream, "<< /Length {} >>\nstream", content.len())?;
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"endstream");
            doc.object(&stream)?;
        }

        doc.finish()
    }
}

/// Object number of the page dictionary for the zero-based page `index`.
///
/// Objects 1 through 4 are the catalog, page tree and both fonts; each page
/// is followed by its content stream.
const fn page_object_id(index: usize) -> usize {
    5 + index * 2
}

/// Appends numbered objects and tracks their offsets for the xref table.
struct ObjectWriter {
    out: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Result<Self, ExportError> {
        let mut out: Vec<u8> = Vec::new();
        out.write_all(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;
        Ok(Self {
            out,
            offsets: Vec::new(),
        })
    }

    fn object(&mut self, body: &[u8]) -> Result<(), ExportError> {
        self.offsets.push(self.out.len());
        writeln!(self.out, "{} 0 obj", self.offsets.len())?;
        self.out.write_all(body)?;
        self.out.write_all(b"\nendobj\n")?;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        let xref_offset: usize = self.out.len();
        let size: usize = self.offsets.len() + 1;

        writeln!(self.out, "xref\n0 {size}\n0000000000 65535 f ")?;
        for offset in &self.offsets {
            writeln!(self.out, "{offset:010} 00000 n ")?;
        }
        writeln!(
            self.out,
            "trailer\n<< /Size {size} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF"
        )?;

        Ok(self.out)
    }
}

/// Encodes text for a literal string in a content stream.
///
/// Text is mapped to `WinAnsiEncoding`, the encoding declared on both font
/// dictionaries. Characters the encoding lacks become `?`. Delimiters and
/// backslashes are escaped.
#[must_use]
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(text.len());
    for c in text.chars() {
        let byte: u8 = win_ansi_code(c).unwrap_or(b'?');
        match byte {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(byte);
            }
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.push(b' '),
            _ => out.push(byte),
        }
    }
    out
}

/// Splits `text` into lines no wider than `max_width` points.
///
/// Words are separated on whitespace. A single word wider than the line is
/// broken between characters.
#[must_use]
pub fn wrap_text(text: &str, font: Font, size: f64, max_width: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw_line in text.split('\n') {
        let mut current: String = String::new();

        for word in raw_line.split_whitespace() {
            let candidate: String = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if font.text_width(&candidate, size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if font.text_width(word, size) <= max_width {
                current = word.to_string();
            } else {
                for c in word.chars() {
                    let mut extended: String = current.clone();
                    extended.push(c);
                    if !current.is_empty() && font.text_width(&extended, size) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                    } else {
                        current = extended;
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::pdf::encode_text;
use crate::tests::as_text;
use crate::{Align, Color, Font, PdfWriter, TextStyle, wrap_text};

const BODY: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 10.0,
    color: Color::BLACK,
};

#[test]
fn test_text_width_uses_font_metrics() {
    // 'i' is much narrower than 'W' in both faces.
    assert!(Font::Helvetica.text_width("i", 10.0) < Font::Helvetica.text_width("W", 10.0));
    assert!(Font::HelveticaBold.text_width("abc", 10.0) > Font::Helvetica.text_width("abc", 10.0));
    assert!((Font::Helvetica.text_width("", 12.0)).abs() < f64::EPSILON);
}

#[test]
fn test_wrap_text_short_line_is_unchanged() {
    let lines: Vec<String> = wrap_text("Fixed login bug", Font::Helvetica, 10.0, 468.0);
    assert_eq!(lines, vec!["Fixed login bug".to_string()]);
}

#[test]
fn test_wrap_text_breaks_on_whitespace_within_width() {
    let text: String = "word ".repeat(200);
    let lines: Vec<String> = wrap_text(&text, Font::Helvetica, 10.0, 200.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(Font::Helvetica.text_width(line, 10.0) <= 200.0);
        assert!(!line.starts_with(' '));
        assert!(!line.ends_with(' '));
    }
    let rejoined: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
    assert_eq!(rejoined, 200);
}

#[test]
fn test_wrap_text_splits_overlong_word() {
    let word: String = "x".repeat(300);
    let lines: Vec<String> = wrap_text(&word, Font::Helvetica, 10.0, 100.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), word);
}

#[test]
fn test_wrap_text_keeps_explicit_line_breaks() {
    let lines: Vec<String> = wrap_text("first\n\nthird", Font::Helvetica, 10.0, 468.0);
    assert_eq!(lines, vec!["first", "", "third"]);
}

#[test]
fn test_encode_text_escapes_delimiters() {
    assert_eq!(encode_text(r"a(b)c\d"), br"a\(b\)c\\d".to_vec());
}

#[test]
fn test_encode_text_maps_latin1_and_replaces_others() {
    assert_eq!(encode_text("café"), vec![b'c', b'a', b'f', 0xE9]);
    assert_eq!(encode_text("日本"), b"??".to_vec());
}

#[test]
fn test_encode_text_maps_typographic_punctuation_to_win_ansi() {
    assert_eq!(
        encode_text(
            "\u{2018}a\u{2019} \u{201C}b\u{201D} \u{2013}\u{2014}\u{2026}\u{20AC}\u{2122}\u{2022}"
        ),
        vec![0x91, b'a', 0x92, b' ', 0x93, b'b', 0x94, b' ', 0x96, 0x97, 0x85, 0x80, 0x99, 0x95]
    );
    assert_eq!(
        encode_text("\u{0160}\u{0161}\u{0152}\u{0153}\u{0178}"),
        vec![0x8A, 0x9A, 0x8C, 0x9C, 0x9F]
    );
}

#[test]
fn test_encode_text_replaces_c1_controls() {
    assert_eq!(encode_text("a\u{0085}b\u{0092}"), b"a?b?".to_vec());
}

#[test]
fn test_text_width_measures_typographic_glyphs() {
    // Curly apostrophe is as narrow as the straight one; em dash is a full em.
    assert!((Font::Helvetica.text_width("\u{2019}", 10.0) - 2.22).abs() < 1e-9);
    assert!((Font::HelveticaBold.text_width("\u{2019}", 10.0) - 2.78).abs() < 1e-9);
    assert!((Font::Helvetica.text_width("\u{2014}", 10.0) - 10.0).abs() < 1e-9);
}

#[test]
fn test_empty_document_has_one_page() {
    let bytes: Vec<u8> = PdfWriter::new().finish().unwrap();
    let text: String = as_text(&bytes);
    assert!(text.starts_with("%PDF-1.4\n"));
    assert!(text.contains("/Count 1 >>"));
    assert!(text.trim_end().ends_with("%%EOF"));
}

fn rfind_bytes(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .rposition(|w| w == needle)
        .unwrap()
}

fn parse_leading_number(bytes: &[u8]) -> usize {
    let digits: String = bytes
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .map(|b| char::from(*b))
        .collect();
    digits.parse().unwrap()
}

#[test]
fn test_document_structure_offsets_are_valid() {
    let mut pdf: PdfWriter = PdfWriter::new();
    pdf.paragraph("Hello", BODY, Align::Left, 0.0);
    let bytes: Vec<u8> = pdf.finish().unwrap();

    let marker: usize = rfind_bytes(&bytes, b"startxref\n");
    let xref_offset: usize = parse_leading_number(&bytes[marker + b"startxref\n".len()..]);
    assert!(bytes[xref_offset..].starts_with(b"xref\n0 7\n0000000000 65535 f \n"));

    // Object 1 is the catalog.
    let first_entry: usize = xref_offset + b"xref\n0 7\n0000000000 65535 f \n".len();
    let object_offset: usize = parse_leading_number(&bytes[first_entry..]);
    assert!(bytes[object_offset..].starts_with(b"1 0 obj\n<< /Type /Catalog"));
}

#[test]
fn test_paragraph_emits_text_operators() {
    let mut pdf: PdfWriter = PdfWriter::new();
    pdf.paragraph("Hello (world)", BODY, Align::Left, 10.0);
    let text: String = as_text(&pdf.finish().unwrap());
    assert!(text.contains("BT /F1 10.00 Tf 0.000 0.000 0.000 rg 82.00 710.00 Td (Hello \\(world\\)) Tj ET"));
}

#[test]
fn test_centered_line_is_centered() {
    let mut pdf: PdfWriter = PdfWriter::new();
    pdf.paragraph("Title", BODY, Align::Center, 0.0);
    let text: String = as_text(&pdf.finish().unwrap());
    let width: f64 = Font::Helvetica.text_width("Title", 10.0);
    let expected_x: String = format!("{:.2} 710.00 Td (Title)", (612.0 - width) / 2.0);
    assert!(text.contains(&expected_x));
}

#[test]
fn test_long_content_breaks_pages() {
    let mut pdf: PdfWriter = PdfWriter::new();
    for i in 0..120 {
        pdf.paragraph(&format!("Line {i}"), BODY, Align::Left, 0.0);
    }
    assert!(pdf.page_count() > 1);
    let pages: usize = pdf.page_count();
    let text: String = as_text(&pdf.finish().unwrap());
    assert!(text.contains(&format!("/Count {pages} >>")));
    assert!(text.contains("(Line 0) Tj"));
    assert!(text.contains("(Line 119) Tj"));
}

#[test]
fn test_space_does_not_create_blank_page() {
    let mut pdf: PdfWriter = PdfWriter::new();
    pdf.space(10_000.0);
    assert_eq!(pdf.page_count(), 1);
    pdf.paragraph("still first page", BODY, Align::Left, 0.0);
    assert_eq!(pdf.page_count(), 1);
}

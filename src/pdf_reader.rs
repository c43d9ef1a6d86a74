use std::collections::BTreeMap;
use std::path::Path;

use encoding_rs::UTF_16BE;
use lopdf::Document;
use lopdf::Object;
use lopdf::content::Content;

use crate::error::ExtractError;
use crate::table_extract::{PageSpan, soft_cell_count, strict_cell_count};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageText {
    pub page_number: u32,
    pub text: String,
}

fn split_text_into_pages(raw_text: &str) -> Vec<String> {
    let mut pages = raw_text
        .split('\u{000C}')
        .map(str::to_string)
        .collect::<Vec<_>>();
    if pages.last().is_some_and(String::is_empty) {
        pages.pop();
    }
    pages
}

fn looks_decoding_broken(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    if text.contains("?Identity-H Unimplemented?") {
        return true;
    }

    let total = text.chars().count();
    let replacement = text.matches('\u{FFFD}').count();
    let control = text
        .chars()
        .filter(|ch| ch.is_control() && !matches!(ch, '\n' | '\r' | '\t'))
        .count();

    replacement * 8 > total || control * 5 > total
}

fn decode_pdf_bytes(encoding: Option<&str>, bytes: &[u8]) -> String {
    let decoded = Document::decode_text(encoding, bytes);
    if !looks_decoding_broken(&decoded) {
        return decoded;
    }

    if bytes.starts_with(&[0xFE, 0xFF]) || bytes.starts_with(&[0xFF, 0xFE]) {
        let bytes = if bytes.len() > 2 { &bytes[2..] } else { bytes };
        let (utf16, had_errors) = UTF_16BE.decode_without_bom_handling(bytes);
        if !had_errors && !utf16.is_empty() {
            return utf16.into_owned();
        }
    }

    if let Some(name) = encoding {
        let lower = name.to_ascii_lowercase();
        if lower.contains("utf16")
            || lower.contains("ucs2")
            || lower.contains("identity-h")
            || lower.contains("unicode")
        {
            let (utf16, had_errors) = UTF_16BE.decode_without_bom_handling(bytes);
            if !had_errors && !utf16.is_empty() {
                return utf16.into_owned();
            }
        }
    }

    String::from_utf8_lossy(bytes).to_string()
}

fn collect_operand_text(text: &mut String, encoding: Option<&str>, operands: &[Object]) {
    for operand in operands {
        match operand {
            Object::String(bytes, _) => {
                text.push_str(&decode_pdf_bytes(encoding, bytes));
            }
            Object::Array(items) => {
                collect_operand_text(text, encoding, items);
                text.push(' ');
            }
            Object::Integer(value) => {
                // Large negative kerning adjustments stand in for cell gaps.
                if *value < -100 {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// Recovers page text by walking the content stream directly. Line structure
/// follows the text-positioning operators, which tracks the ruled grid of the
/// template more faithfully than glyph-placement heuristics.
fn walk_page_content(document: &Document, page_id: lopdf::ObjectId) -> Option<String> {
    let raw_content = document.get_page_content(page_id).ok()?;
    let content = Content::decode(&raw_content).ok()?;
    let encodings = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect::<BTreeMap<Vec<u8>, &str>>();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_encoding = None;
    for operation in content.operations {
        match operation.operator.as_str() {
            "Tf" => {
                if let Some(font_name) = operation
                    .operands
                    .first()
                    .and_then(|operand| operand.as_name().ok())
                {
                    current_encoding = encodings.get(font_name).copied();
                }
            }
            "Tj" | "TJ" | "'" | "\"" => {
                collect_operand_text(&mut current, current_encoding, &operation.operands);
            }
            "T*" | "Td" | "TD" | "ET" => {
                if !current.trim().is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
            _ => {}
        }
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

pub(crate) fn read_pages_lattice(
    input_pdf: &Path,
    span: PageSpan,
) -> Result<Vec<PageText>, ExtractError> {
    let document = Document::load(input_pdf)?;
    let pages_map = document.get_pages();

    let mut pages = Vec::new();
    for (page_no, page_id) in &pages_map {
        if span == PageSpan::First && !pages.is_empty() {
            break;
        }

        let text = walk_page_content(&document, *page_id)
            .or_else(|| {
                document
                    .extract_text(&[*page_no])
                    .ok()
                    .filter(|text| !text.trim().is_empty())
            })
            .unwrap_or_default();

        pages.push(PageText {
            page_number: *page_no,
            text,
        });
    }

    if pages.is_empty() {
        return Err(ExtractError::NoPages);
    }

    Ok(pages)
}

fn extraction_quality_score(text: &str) -> i64 {
    if text.trim().is_empty() {
        return i64::MIN / 4;
    }

    let mut non_empty_lines = 0_i64;
    let mut grid_lines = 0_i64;
    let mut loose_lines = 0_i64;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        non_empty_lines += 1;
        if strict_cell_count(line) >= 2 {
            grid_lines += 1;
        } else if soft_cell_count(line) >= 3 {
            loose_lines += 1;
        }
    }

    // Grid-shaped lines outweigh loosely spaced ones, so a recovery that
    // preserved the cell gaps beats one that collapsed them.
    let broken_penalty = if looks_decoding_broken(text) { 800 } else { 0 };
    grid_lines * 50 + loose_lines * 15 + non_empty_lines - broken_penalty
}

fn choose_best_text(candidates: &[String]) -> String {
    candidates
        .iter()
        .max_by_key(|text| extraction_quality_score(text))
        .cloned()
        .unwrap_or_default()
}

/// Whole-document text extraction, preferring the whitespace-layout engine
/// but falling back per page to whichever candidate recovers the most
/// table-shaped text.
pub(crate) fn read_pages_general(input_pdf: &Path) -> Result<Vec<PageText>, ExtractError> {
    let document = Document::load(input_pdf)?;
    let pages_map = document.get_pages();

    let layout_pages = pdf_extract::extract_text(input_pdf)
        .ok()
        .map(|text| split_text_into_pages(&text))
        .filter(|pages| pages.len() == pages_map.len());

    let mut pages = Vec::new();
    for (index, (page_no, page_id)) in pages_map.iter().enumerate() {
        let mut candidates = Vec::new();
        if let Some(text) = layout_pages
            .as_ref()
            .and_then(|fallback| fallback.get(index).cloned())
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }
        if let Some(text) = walk_page_content(&document, *page_id) {
            candidates.push(text);
        }
        if let Some(text) = document
            .extract_text(&[*page_no])
            .ok()
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }

        pages.push(PageText {
            page_number: *page_no,
            text: choose_best_text(&candidates),
        });
    }

    if pages.is_empty() {
        return Err(ExtractError::NoPages);
    }

    Ok(pages)
}

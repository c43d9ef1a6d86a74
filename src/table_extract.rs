use std::path::Path;

use crate::error::ExtractError;
use crate::model::RawTable;
use crate::pdf_reader::{PageText, read_pages_general, read_pages_lattice};

/// Pages an extraction pass covers. Header fields live on the first page of
/// the template; product tables may continue onto later pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSpan {
    First,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Strict cell boundaries, following the ruled grid of the template.
    Lattice,
    /// Whitespace-inferred boundaries with a soft-split fallback.
    General,
}

const MIN_TABLE_COLS: usize = 2;
const MIN_TABLE_ROWS: usize = 2;

fn split_row_strict(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut whitespace_run = 0_usize;

    for ch in trimmed.chars() {
        if ch == '\t' {
            if !current.trim().is_empty() {
                cells.push(current.trim().to_string());
                current.clear();
            }
            whitespace_run = 0;
            continue;
        }

        if ch.is_whitespace() {
            whitespace_run += 1;
            if whitespace_run >= 2 {
                if !current.trim().is_empty() {
                    cells.push(current.trim().to_string());
                    current.clear();
                }
                continue;
            }
            current.push(' ');
            continue;
        }

        whitespace_run = 0;
        current.push(ch);
    }

    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }

    cells
}

fn split_row_soft(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Cells a line would contribute under the strict split, for scoring
/// competing text recoveries of the same page.
pub(crate) fn strict_cell_count(line: &str) -> usize {
    split_row_strict(line).len()
}

pub(crate) fn soft_cell_count(line: &str) -> usize {
    split_row_soft(line).len()
}

/// Splits one line into cells for the given mode. General mode falls back to
/// single-space splitting for lines the strict pass leaves whole, unless the
/// line reads like prose.
fn split_row(line: &str, mode: ExtractMode) -> Vec<String> {
    let cells = split_row_strict(line);
    if mode == ExtractMode::Lattice || cells.len() >= MIN_TABLE_COLS {
        return cells;
    }

    let soft_cells = split_row_soft(line);
    let has_numeric = soft_cells
        .iter()
        .any(|cell| cell.chars().any(|ch| ch.is_ascii_digit()));
    let looks_like_sentence = ['.', '!', '?']
        .iter()
        .any(|punctuation| line.trim_end().ends_with(*punctuation));

    if soft_cells.len() >= MIN_TABLE_COLS
        && !looks_like_sentence
        && (has_numeric || soft_cells.len() <= 6)
    {
        soft_cells
    } else {
        cells
    }
}

fn tables_in_page(page: &PageText, mode: ExtractMode) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut current_rows: Vec<Vec<String>> = Vec::new();

    for line in page.text.lines() {
        let cells = split_row(line, mode);
        if cells.len() >= MIN_TABLE_COLS {
            current_rows.push(cells);
        } else if current_rows.len() >= MIN_TABLE_ROWS {
            tables.push(RawTable::new(std::mem::take(&mut current_rows)));
        } else {
            current_rows.clear();
        }
    }

    if current_rows.len() >= MIN_TABLE_ROWS {
        tables.push(RawTable::new(current_rows));
    }

    tables
}

pub(crate) fn tables_from_pages(pages: &[PageText], mode: ExtractMode) -> Vec<RawTable> {
    pages
        .iter()
        .flat_map(|page| tables_in_page(page, mode))
        .collect()
}

/// The two extraction engines behind one seam. The passes are independent;
/// callers must not assume any correspondence between their table sets.
pub trait TableSource {
    fn lattice_tables(&self, path: &Path, span: PageSpan) -> Result<Vec<RawTable>, ExtractError>;

    fn general_tables(&self, path: &Path) -> Result<Vec<RawTable>, ExtractError>;
}

/// Production source reading real PDFs from disk.
pub struct PdfTableSource;

impl TableSource for PdfTableSource {
    fn lattice_tables(&self, path: &Path, span: PageSpan) -> Result<Vec<RawTable>, ExtractError> {
        let pages = read_pages_lattice(path, span)?;
        Ok(tables_from_pages(&pages, ExtractMode::Lattice))
    }

    fn general_tables(&self, path: &Path) -> Result<Vec<RawTable>, ExtractError> {
        let pages = read_pages_general(path)?;
        Ok(tables_from_pages(&pages, ExtractMode::General))
    }
}

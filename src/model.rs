use serde::Serialize;

use crate::warning::ExtractWarning;

/// One tabular region as returned by an extraction pass. Rows may be ragged
/// and cells carry whatever text the pass recovered, including empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Width of the widest row.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Document-level fields shared by every line item of one invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub invoice_number: String,
    pub invoice_date: Option<String>,
    pub po_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_code: String,
    pub description: String,
    pub ship_qty: String,
}

/// One flat output row. Serde renames carry the exact export column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "INVOICE")]
    pub invoice_number: String,
    #[serde(rename = "INVOICE DATE")]
    pub invoice_date: String,
    #[serde(rename = "PO#")]
    pub po_number: String,
    #[serde(rename = "Product & Description")]
    pub product_and_description: String,
    #[serde(rename = "Ship Qty")]
    pub ship_qty: String,
    #[serde(rename = "Source File")]
    pub source_file: String,
}

pub type Dataset = Vec<OutputRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl InputDocument {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub records: Dataset,
    pub file_count: usize,
    pub failed_count: usize,
    pub warnings: Vec<ExtractWarning>,
}

use regex::Regex;

use crate::layout::VendorLayout;
use crate::model::{HeaderFields, RawTable};

/// Seven digits, a hyphen, two digits, bounded by non-digits (e.g. "3378472-00").
const INVOICE_NUMBER_PATTERN: &str = r"(?:^|\D)(\d{7}-\d{2})(?:\D|$)";

/// M/D/YY with a two-digit year, bounded by non-digits (e.g. "1/12/24").
const INVOICE_DATE_PATTERN: &str = r"(?:^|\D)(\d{1,2}/\d{1,2}/\d{2})(?:\D|$)";

fn exact_digit_run(text: &str, digits: usize) -> Option<String> {
    let pattern = format!(r"(?:^|\D)(\d{{{digits}}})(?:\D|$)");
    let run_re = Regex::new(&pattern).expect("digit-run regex shape is valid");
    run_re
        .captures(text)
        .and_then(|capture| capture.get(1))
        .map(|value| value.as_str().to_string())
}

fn first_match_in_row<'a>(row: &'a [String], pattern: &Regex) -> Option<&'a str> {
    row.iter().find_map(|cell| {
        pattern
            .captures(cell)
            .and_then(|capture| capture.get(1))
            .map(|value| value.as_str())
    })
}

/// The purchase-order number sits at a fixed table/row/column on the first
/// page. No label search: the position is the contract.
fn locate_po_number(tables: &[RawTable], layout: &VendorLayout) -> Option<String> {
    let table = tables.get(layout.po_table_index)?;
    let cell = table.cell(layout.po_row, layout.po_col)?;
    exact_digit_run(cell, layout.po_digits)
}

/// Scans the lattice-pass tables of the first page for the invoice number,
/// invoice date and purchase-order number. Missing tables, short rows and
/// malformed cells degrade the affected field to its default; the scan itself
/// cannot fail.
///
/// First match wins per field, in table order then row order; a later match
/// never overwrites an earlier one.
#[must_use]
pub fn locate_header_fields(tables: &[RawTable], layout: &VendorLayout) -> HeaderFields {
    let mut header = HeaderFields {
        invoice_number: layout.fallback_invoice_number.clone(),
        invoice_date: None,
        po_number: locate_po_number(tables, layout),
    };

    let invoice_number_re =
        Regex::new(INVOICE_NUMBER_PATTERN).expect("invoice number regex is valid");
    let invoice_date_re = Regex::new(INVOICE_DATE_PATTERN).expect("invoice date regex is valid");

    let mut invoice_number = None;
    for table in tables {
        for (row_index, row) in table.rows.iter().take(layout.header_scan_rows).enumerate() {
            // Row cells concatenated without separators, matching how the
            // template's label fragments land across cells.
            let haystack = row.join("").to_lowercase();

            if invoice_number.is_none()
                && haystack.contains("invoice")
                && !haystack.contains("date")
                && let Some(found) = first_match_in_row(row, &invoice_number_re)
            {
                invoice_number = Some(found.to_string());
            }

            if header.invoice_date.is_none()
                && haystack.contains("invoice date")
                && let Some(next_row) = table.rows.get(row_index + 1)
                && let Some(found) = first_match_in_row(next_row, &invoice_date_re)
            {
                header.invoice_date = Some(found.to_string());
            }
        }
    }

    if let Some(number) = invoice_number {
        header.invoice_number = number;
    }

    header
}

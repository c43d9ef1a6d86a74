use crate::model::{HeaderFields, LineItem, OutputRecord};

/// Joins one document's header fields with each of its line items, preserving
/// item order. Absent header fields become empty strings at this point; the
/// header itself is never mutated.
#[must_use]
pub fn reconcile(header: &HeaderFields, items: &[LineItem], source_file: &str) -> Vec<OutputRecord> {
    items
        .iter()
        .map(|item| OutputRecord {
            invoice_number: header.invoice_number.clone(),
            invoice_date: header.invoice_date.clone().unwrap_or_default(),
            po_number: header.po_number.clone().unwrap_or_default(),
            product_and_description: format!("{} - {}", item.product_code, item.description),
            ship_qty: item.ship_qty.clone(),
            source_file: source_file.to_string(),
        })
        .collect()
}

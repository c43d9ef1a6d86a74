use crate::layout::VendorLayout;
use crate::model::{LineItem, RawTable};

const DEFAULT_SHIP_QTY: &str = "0";

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn resolve_ship_qty(row: &[String], qty_columns: &[usize]) -> String {
    for &column in qty_columns {
        if let Some(value) = row.get(column) {
            let value = value.trim();
            if is_all_digits(value) {
                return value.to_string();
            }
        }
    }
    DEFAULT_SHIP_QTY.to_string()
}

/// Scans the general-pass tables for product rows. A row qualifies when its
/// sequence cell is all digits; a qualifying row without a product code is a
/// near-miss artifact and is dropped whole rather than emitted partially.
#[must_use]
pub fn locate_line_items(tables: &[RawTable], layout: &VendorLayout) -> Vec<LineItem> {
    let mut items = Vec::new();

    for table in tables {
        if table.is_empty() || table.col_count() < layout.min_item_cols {
            continue;
        }

        for row in &table.rows {
            let Some(sequence) = row.get(layout.sequence_col) else {
                continue;
            };
            if !is_all_digits(sequence.trim()) {
                continue;
            }

            let product_code = row
                .get(layout.product_code_col)
                .map_or("", |cell| cell.trim());
            if product_code.is_empty() {
                continue;
            }

            items.push(LineItem {
                product_code: product_code.to_string(),
                description: layout.description.clone(),
                ship_qty: resolve_ship_qty(row, &layout.qty_columns),
            });
        }
    }

    items
}

/// Positional contract of the Bando invoice template.
///
/// Every index here is keyed to the fixed vendor layout, not to semantic
/// content. The purchase-order number in particular is read from a fixed
/// table/row/column because the template places it there reliably while its
/// label text does not survive extraction intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLayout {
    /// Table on the first page holding the purchase-order number.
    pub po_table_index: usize,
    pub po_row: usize,
    pub po_col: usize,
    /// Length of the digit run that makes up a purchase-order number.
    pub po_digits: usize,
    /// Rows inspected per table during the header label scan.
    pub header_scan_rows: usize,
    /// Minimum table width for a table to qualify as a product table.
    pub min_item_cols: usize,
    /// Column holding the line sequence number in a product row.
    pub sequence_col: usize,
    pub product_code_col: usize,
    /// Candidate quantity columns in empirically observed priority order.
    /// Column 4 is the reliable position in the common layout; 3, 5 and 2
    /// cover variant layouts. The order is deliberate, not ascending.
    pub qty_columns: Vec<usize>,
    /// Every product in this template family shares one description.
    pub description: String,
    /// Invoice number used when none can be located.
    pub fallback_invoice_number: String,
}

impl Default for VendorLayout {
    fn default() -> Self {
        Self {
            po_table_index: 3,
            po_row: 1,
            po_col: 1,
            po_digits: 10,
            header_scan_rows: 5,
            min_item_cols: 5,
            sequence_col: 0,
            product_code_col: 1,
            qty_columns: vec![4, 3, 5, 2],
            description: "Auto Serpentine Belt".to_string(),
            fallback_invoice_number: "INV-XXXXXX".to_string(),
        }
    }
}

mod batch;
mod csv_out;
mod error;
mod header_locate;
mod layout;
mod line_items;
mod model;
mod pdf_reader;
mod progress;
mod reconcile;
mod staging;
mod table_extract;
mod warning;

use std::path::Path;

pub use batch::process_batch;
pub use csv_out::{OUTPUT_COLUMNS, write_csv, write_csv_to_string, write_json_to_string};
pub use error::ExtractError;
pub use header_locate::locate_header_fields;
pub use layout::VendorLayout;
pub use line_items::locate_line_items;
pub use model::{
    BatchReport, Dataset, HeaderFields, InputDocument, LineItem, OutputRecord, RawTable,
};
pub use progress::{LogReporter, NullReporter, Reporter};
pub use reconcile::reconcile;
pub use table_extract::{ExtractMode, PageSpan, PdfTableSource, TableSource};
pub use warning::{ExtractWarning, WarningCode};

/// Extracts all invoice records from one PDF already on disk. `source_file`
/// is carried into every record verbatim. Extraction trouble is returned as
/// warnings next to whatever records could still be recovered.
pub fn extract_invoice_records(
    input_pdf: &Path,
    source_file: &str,
    layout: &VendorLayout,
) -> (Vec<OutputRecord>, Vec<ExtractWarning>) {
    let mut warnings = Vec::new();
    let records = batch::extract_document_records(
        &PdfTableSource,
        input_pdf,
        source_file,
        layout,
        &mut warnings,
    );
    (records, warnings)
}

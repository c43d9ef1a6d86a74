use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::ExtractError;
use crate::model::OutputRecord;

/// Export column order is part of the output contract.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "INVOICE",
    "INVOICE DATE",
    "PO#",
    "Product & Description",
    "Ship Qty",
    "Source File",
];

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, records: &[OutputRecord]) -> Result<(), ExtractError> {
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.invoice_number.as_str(),
            record.invoice_date.as_str(),
            record.po_number.as_str(),
            record.product_and_description.as_str(),
            record.ship_qty.as_str(),
            record.source_file.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, records: &[OutputRecord]) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    write_rows(&mut writer, records)
}

pub fn write_csv_to_string(records: &[OutputRecord]) -> Result<String, ExtractError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::<u8>::new());
    write_rows(&mut writer, records)?;

    let bytes = writer
        .into_inner()
        .map_err(|error| ExtractError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes)
        .map_err(|error| ExtractError::InvalidOption(format!("invalid utf-8 csv output: {error}")))
}

pub fn write_json_to_string(records: &[OutputRecord]) -> Result<String, ExtractError> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{write_csv_to_string, write_json_to_string};
    use crate::model::OutputRecord;

    fn record() -> OutputRecord {
        OutputRecord {
            invoice_number: "3378472-00".to_string(),
            invoice_date: "1/12/24".to_string(),
            po_number: "4500123456".to_string(),
            product_and_description: "4PK815 - Auto Serpentine Belt".to_string(),
            ship_qty: "12".to_string(),
            source_file: "inv.pdf".to_string(),
        }
    }

    #[test]
    fn csv_carries_the_fixed_column_order() {
        let csv = write_csv_to_string(&[record()]).expect("csv should render");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("INVOICE,INVOICE DATE,PO#,Product & Description,Ship Qty,Source File")
        );
        assert_eq!(
            lines.next(),
            Some("3378472-00,1/12/24,4500123456,4PK815 - Auto Serpentine Belt,12,inv.pdf")
        );
    }

    #[test]
    fn empty_dataset_still_writes_the_header_row() {
        let csv = write_csv_to_string(&[]).expect("csv should render");
        assert_eq!(
            csv.trim_end(),
            "INVOICE,INVOICE DATE,PO#,Product & Description,Ship Qty,Source File"
        );
    }

    #[test]
    fn json_uses_the_export_field_names() {
        let json = write_json_to_string(&[record()]).expect("json should render");
        assert!(json.contains("\"INVOICE\": \"3378472-00\""));
        assert!(json.contains("\"PO#\": \"4500123456\""));
        assert!(json.contains("\"Ship Qty\": \"12\""));
    }
}

use std::path::Path;

use crate::header_locate::locate_header_fields;
use crate::layout::VendorLayout;
use crate::line_items::locate_line_items;
use crate::model::{BatchReport, InputDocument, OutputRecord};
use crate::progress::Reporter;
use crate::reconcile::reconcile;
use crate::staging::StagedDocument;
use crate::table_extract::{PageSpan, TableSource};
use crate::warning::{ExtractWarning, WarningCode};

/// Runs both extraction passes and the locators over one staged document.
/// Adapter failures degrade to zero tables for the affected pass and are
/// recorded as warnings; the document still yields whatever the other pass
/// recovered.
pub(crate) fn extract_document_records(
    source: &impl TableSource,
    path: &Path,
    source_file: &str,
    layout: &VendorLayout,
    warnings: &mut Vec<ExtractWarning>,
) -> Vec<OutputRecord> {
    let lattice_tables = match source.lattice_tables(path, PageSpan::First) {
        Ok(tables) => tables,
        Err(error) => {
            warnings.push(
                ExtractWarning::new(
                    WarningCode::HeaderExtractionFailed,
                    format!("header extraction failed for '{source_file}'; using default fields"),
                )
                .with_source_file(source_file)
                .with_detail(error.to_string()),
            );
            Vec::new()
        }
    };
    let header = locate_header_fields(&lattice_tables, layout);

    let general_tables = match source.general_tables(path) {
        Ok(tables) => tables,
        Err(error) => {
            warnings.push(
                ExtractWarning::new(
                    WarningCode::LineItemExtractionFailed,
                    format!("line-item extraction failed for '{source_file}'"),
                )
                .with_source_file(source_file)
                .with_detail(error.to_string()),
            );
            Vec::new()
        }
    };
    let items = locate_line_items(&general_tables, layout);

    reconcile(&header, &items, source_file)
}

/// Processes documents strictly in input order, one at a time. A failure in
/// one document is reported and skipped; it never aborts the batch. The
/// returned dataset holds records from the documents that succeeded, in file
/// order then row order.
pub fn process_batch(
    source: &impl TableSource,
    documents: &[InputDocument],
    layout: &VendorLayout,
    reporter: &mut impl Reporter,
) -> BatchReport {
    let total = documents.len();
    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut failed_count = 0_usize;

    for (index, document) in documents.iter().enumerate() {
        reporter.progress(index + 1, total, &document.name);

        let staged = match StagedDocument::write(&document.bytes) {
            Ok(staged) => staged,
            Err(error) => {
                failed_count += 1;
                let warning = ExtractWarning::new(
                    WarningCode::DocumentFailed,
                    format!("failed to stage '{}'; document skipped", document.name),
                )
                .with_source_file(&document.name)
                .with_detail(error.to_string());
                reporter.warn(&warning.message);
                warnings.push(warning);
                continue;
            }
        };

        let mut document_warnings = Vec::new();
        let document_records = extract_document_records(
            source,
            staged.path(),
            &document.name,
            layout,
            &mut document_warnings,
        );

        if document_records.is_empty() && document_warnings.is_empty() {
            document_warnings.push(
                ExtractWarning::new(
                    WarningCode::NoLineItems,
                    format!("no line items detected in '{}'", document.name),
                )
                .with_source_file(&document.name),
            );
        }

        for warning in &document_warnings {
            reporter.warn(&warning.message);
        }
        warnings.extend(document_warnings);
        records.extend(document_records);

        // The staged file drops here, before the next document is touched.
        drop(staged);
    }

    BatchReport {
        records,
        file_count: total,
        failed_count,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::process_batch;
    use crate::error::ExtractError;
    use crate::layout::VendorLayout;
    use crate::model::{InputDocument, RawTable};
    use crate::progress::Reporter;
    use crate::table_extract::{PageSpan, TableSource};
    use crate::warning::WarningCode;

    /// Builds canned tables from the staged bytes: the file content is the PO
    /// number, and documents whose content is "FAIL" error on both passes.
    struct CannedSource;

    fn read_marker(path: &Path) -> Result<String, ExtractError> {
        let marker = fs::read_to_string(path)?;
        if marker == "FAIL" {
            return Err(ExtractError::PdfExtract("engine gave up".to_string()));
        }
        Ok(marker)
    }

    fn rows(raw: &[&[&str]]) -> RawTable {
        RawTable::new(
            raw.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    impl TableSource for CannedSource {
        fn lattice_tables(
            &self,
            path: &Path,
            _span: PageSpan,
        ) -> Result<Vec<RawTable>, ExtractError> {
            let po = read_marker(path)?;
            Ok(vec![
                rows(&[&["Invoice", "No:", "3378472-00"], &["Customer", "82110"]]),
                rows(&[&["Invoice Date", "Terms"], &["1/12/24", "Net 30"]]),
                rows(&[&["Ship To", "Whse"], &["Dayton", "OH"]]),
                rows(&[&["Customer PO", "Release"], &["PO", &po]]),
            ])
        }

        fn general_tables(&self, path: &Path) -> Result<Vec<RawTable>, ExtractError> {
            read_marker(path)?;
            Ok(vec![rows(&[
                &["Line", "Product", "Description", "Order", "Ship", "B/O"],
                &["1", "4PK815", "belt", "12", "12", "0"],
            ])])
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        progress: Vec<(usize, usize, String)>,
        warnings: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn progress(&mut self, done: usize, total: usize, label: &str) {
            self.progress.push((done, total, label.to_string()));
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }

    fn documents() -> Vec<InputDocument> {
        vec![
            InputDocument::new("one.pdf", b"4500111111".to_vec()),
            InputDocument::new("two.pdf", b"FAIL".to_vec()),
            InputDocument::new("three.pdf", b"4500333333".to_vec()),
        ]
    }

    #[test]
    fn failing_document_is_skipped_without_aborting_the_batch() {
        let mut reporter = RecordingReporter::default();
        let report = process_batch(
            &CannedSource,
            &documents(),
            &VendorLayout::default(),
            &mut reporter,
        );

        let sources: Vec<&str> = report
            .records
            .iter()
            .map(|record| record.source_file.as_str())
            .collect();
        assert_eq!(sources, vec!["one.pdf", "three.pdf"]);
        assert!(report.warnings.iter().any(|warning| {
            warning.source_file.as_deref() == Some("two.pdf")
                && warning.code == WarningCode::LineItemExtractionFailed
        }));
    }

    #[test]
    fn header_fields_never_leak_across_documents() {
        let mut reporter = RecordingReporter::default();
        let report = process_batch(
            &CannedSource,
            &documents(),
            &VendorLayout::default(),
            &mut reporter,
        );

        assert_eq!(report.records[0].po_number, "4500111111");
        assert_eq!(report.records[1].po_number, "4500333333");
    }

    #[test]
    fn progress_is_reported_for_every_document_in_order() {
        let mut reporter = RecordingReporter::default();
        process_batch(
            &CannedSource,
            &documents(),
            &VendorLayout::default(),
            &mut reporter,
        );

        assert_eq!(reporter.progress, vec![
            (1, 3, "one.pdf".to_string()),
            (2, 3, "two.pdf".to_string()),
            (3, 3, "three.pdf".to_string()),
        ]);
    }

    #[test]
    fn running_the_batch_twice_yields_identical_reports() {
        let documents = documents();
        let layout = VendorLayout::default();
        let first = process_batch(&CannedSource, &documents, &layout, &mut RecordingReporter::default());
        let second = process_batch(&CannedSource, &documents, &layout, &mut RecordingReporter::default());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_batch_yields_an_empty_report() {
        let report = process_batch(
            &CannedSource,
            &[],
            &VendorLayout::default(),
            &mut RecordingReporter::default(),
        );
        assert!(report.records.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.file_count, 0);
    }
}

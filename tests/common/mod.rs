use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Builds a text PDF with one page per slice of lines, rendered in a
/// monospace font so cell gaps survive extraction.
pub fn create_test_pdf(
    path: &Path,
    pages: &[Vec<String>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();

    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("TL", vec![14.into()]),
            Operation::new("Td", vec![40.into(), 790.into()]),
        ];

        for (index, line) in lines.iter().enumerate() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.as_str())],
            ));
            if index + 1 < lines.len() {
                operations.push(Operation::new("T*", vec![]));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| (*id).into()).collect::<Vec<_>>(),
            "Count" => i64::try_from(page_ids.len())?,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    doc.save(path)?;
    Ok(())
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| (*line).to_string()).collect()
}

/// First page of the fixture invoice: four header tables in template order,
/// separated by single-cell address lines so the groups stay distinct.
pub fn invoice_header_page(po_number: &str) -> Vec<String> {
    let mut page = lines(&[
        "Bando USA Inc",
        "Invoice  No:  3378472-00",
        "Customer  82110",
        "Itasca",
        "Invoice Date  Terms",
        "1/12/24  Net 30",
        "Illinois",
        "Ship To  Whse",
        "Dayton  OH",
        "Chicago",
        "Customer PO  Release",
    ]);
    page.push(format!("PO  {po_number}"));
    page
}

/// Product page with a header row and two line items.
pub fn invoice_item_page() -> Vec<String> {
    lines(&[
        "Line  Product  Description  Order Qty  Ship Qty  B/O Qty",
        "1  4PK815  Serpentine Belt  12  12  0",
        "2  6PK2080  Serpentine Belt  8  6  2",
    ])
}

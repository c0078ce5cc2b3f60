//! Display projection and xlsx workbook serialization for the product list.
//!
//! The projection drops the id column, relabels `name`, and renders the
//! price as a currency string; the workbook writer is treated as an opaque
//! serializer from those rows to bytes.

use rust_xlsxwriter::{Format, Workbook};

use crate::db::models::Product;
use crate::error::CatalogError;

pub const WORKBOOK_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const WORKBOOK_FILENAME: &str = "products.xlsx";

const SHEET_NAME: &str = "Products";
const HEADERS: [&str; 2] = ["Product Name", "Price"];

/// One display-formatted row of the export: name as-is, price as a
/// two-decimal currency string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub price: String,
}

impl From<&Product> for ExportRow {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            price: format!("${:.2}", p.price),
        }
    }
}

/// Project products into export rows, preserving order.
pub fn project(products: &[Product]) -> Vec<ExportRow> {
    products.iter().map(ExportRow::from).collect()
}

/// Serialize the rows into a single-sheet workbook: a bold header row
/// followed by the data rows in input order.
pub fn export_to_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, CatalogError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, row.name.as_str())?;
        sheet.write(r, 1, row.price.as_str())?;
    }

    Ok(workbook.save_to_buffer()?)
}

//! PDF encoding of the booking report
//!
//! A4 landscape, title on the first page, header repeated on every page,
//! fixed column x-positions matching the 8-column layout.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::domain::{DomainError, DomainResult};

use super::{ReportRow, REPORT_COLUMNS, REPORT_TITLE};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
/// Left edge of each column in mm
const COLUMN_X: [f32; 8] = [12.0, 30.0, 78.0, 108.0, 138.0, 168.0, 196.0, 248.0];
const TOP_Y: f32 = 190.0;
const BOTTOM_Y: f32 = 16.0;
const ROW_STEP: f32 = 7.0;

fn pdf_err(e: printpdf::Error) -> DomainError {
    DomainError::Render(e.to_string())
}

fn write_header(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        layer.use_text(*title, 10.0, Mm(COLUMN_X[col]), Mm(y), font);
    }
}

fn write_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, sl_no: usize, r: &ReportRow) {
    let cells = [
        sl_no.to_string(),
        r.guest_name.clone(),
        r.room_name.clone(),
        r.checkin_date.clone(),
        r.checkout_date.clone(),
        r.duration.clone(),
        r.payment_status.clone(),
        r.reference.clone(),
    ];
    for (col, text) in cells.iter().enumerate() {
        layer.use_text(text.as_str(), 9.0, Mm(COLUMN_X[col]), Mm(y), font);
    }
}

/// Render the report as an in-memory PDF document.
pub fn render_pdf(rows: &[ReportRow]) -> DomainResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    layer.use_text(REPORT_TITLE, 18.0, Mm(12.0), Mm(198.0), &bold);
    write_header(&layer, &bold, TOP_Y);
    let mut y = TOP_Y - ROW_STEP;

    for (i, row) in rows.iter().enumerate() {
        if y < BOTTOM_Y {
            let (page, layer_idx) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            layer = doc.get_page(page).get_layer(layer_idx);
            write_header(&layer, &bold, TOP_Y);
            y = TOP_Y - ROW_STEP;
        }
        write_row(&layer, &regular, y, i + 1, row);
        y -= ROW_STEP;
    }

    doc.save_to_bytes().map_err(pdf_err)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn row(i: usize) -> ReportRow {
        ReportRow {
            guest_name: format!("Guest {}", i),
            room_name: "101".to_string(),
            checkin_date: "2024-01-01".to_string(),
            checkout_date: "2024-01-03".to_string(),
            duration: "3 hari".to_string(),
            payment_status: "Belum Ada Invoice".to_string(),
            reference: format!("BK{:05}", i),
        }
    }

    #[test]
    fn document_bytes_carry_pdf_magic() {
        let bytes = render_pdf(&[row(1)]).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn long_report_paginates() {
        let rows: Vec<ReportRow> = (1..=120).map(row).collect();
        let bytes = render_pdf(&rows).unwrap();
        // more than one page object in the document
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.matches("/Type /Page").count() > 1);
    }
}

//! XLSX encoding of the booking report
//!
//! Single sheet: a merged title row, the fixed 8-column header, then one
//! row per booking line.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};

use crate::domain::{DomainError, DomainResult};

use super::{ReportRow, REPORT_COLUMNS, REPORT_TITLE};

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> DomainError {
    DomainError::Render(e.to_string())
}

/// Render the report as an in-memory .xlsx workbook.
pub fn render_xlsx(rows: &[ReportRow]) -> DomainResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(REPORT_TITLE).map_err(xlsx_err)?;

    let head = Format::new()
        .set_bold()
        .set_font_size(23)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let header = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let body = Format::new()
        .set_align(FormatAlign::Left)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    sheet
        .merge_range(0, 0, 0, 7, REPORT_TITLE, &head)
        .map_err(xlsx_err)?;
    sheet.set_row_height(0, 30).map_err(xlsx_err)?;
    sheet.set_row_height(1, 20).map_err(xlsx_err)?;

    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(1, col as u16, *title, &header)
            .map_err(xlsx_err)?;
        sheet.set_column_width(col as u16, 18).map_err(xlsx_err)?;
    }

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 2) as u32;
        sheet
            .write_number_with_format(row, 0, (i + 1) as f64, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 1, &r.guest_name, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 2, &r.room_name, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 3, &r.checkin_date, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 4, &r.checkout_date, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 5, &r.duration, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 6, &r.payment_status, &body)
            .map_err(xlsx_err)?;
        sheet
            .write_string_with_format(row, 7, &r.reference, &body)
            .map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ReportRow {
        ReportRow {
            guest_name: "Maya Sari".to_string(),
            room_name: "101".to_string(),
            checkin_date: "2024-01-01".to_string(),
            checkout_date: "2024-01-03".to_string(),
            duration: "3 hari".to_string(),
            payment_status: "Lunas".to_string(),
            reference: "BK00001".to_string(),
        }
    }

    #[test]
    fn workbook_bytes_are_a_zip_archive() {
        let bytes = render_xlsx(&[sample_row()]).unwrap();
        // .xlsx is a ZIP container
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn empty_report_still_renders_header() {
        let bytes = render_xlsx(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}

//! PDF rendering with printpdf.
//!
//! Layout is in whole millimetres on A4 portrait.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::{ExportError, ReportExporter, ReportTable};

const PAGE_WIDTH: i16 = 210;
const PAGE_HEIGHT: i16 = 297;
const MARGIN: i16 = 15;
const TOP: i16 = 280;
const BOTTOM: i16 = 20;
const ROW_HEIGHT: i16 = 7;
const TITLE_GAP: i16 = 12;
const SUMMARY_VALUE_OFFSET: i16 = 60;

const TITLE_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;

/// Renders report tables as A4 PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl PdfExporter {
    /// Creates a new exporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportExporter for PdfExporter {
    fn render(&self, table: &ReportTable) -> Result<Vec<u8>, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            table.title.as_str(),
            mm(PAGE_WIDTH),
            mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let mut canvas = doc.get_page(page).get_layer(layer);
        let mut y = TOP;
        canvas.use_text(table.title.as_str(), TITLE_SIZE, mm(MARGIN), mm(y), &bold);
        y -= TITLE_GAP;

        let width = column_width(table.columns.len());
        write_row(&canvas, &table.columns, y, width, HEADER_SIZE, &bold);
        y -= ROW_HEIGHT;

        for row in &table.rows {
            if y < BOTTOM {
                canvas = next_page(&doc);
                y = TOP;
                // Header repeats on every page.
                write_row(&canvas, &table.columns, y, width, HEADER_SIZE, &bold);
                y -= ROW_HEIGHT;
            }
            write_row(&canvas, row, y, width, BODY_SIZE, &regular);
            y -= ROW_HEIGHT;
        }

        let summary_lines = i16::try_from(table.summary_columns.len() + 2).unwrap_or(i16::MAX);
        if y.saturating_sub(ROW_HEIGHT.saturating_mul(summary_lines)) < BOTTOM {
            canvas = next_page(&doc);
            y = TOP;
        } else {
            y -= ROW_HEIGHT;
        }

        canvas.use_text(table.summary_title.as_str(), HEADER_SIZE, mm(MARGIN), mm(y), &bold);
        y -= ROW_HEIGHT;
        for (label, value) in table.summary_columns.iter().zip(&table.summary_row) {
            canvas.use_text(label.as_str(), BODY_SIZE, mm(MARGIN), mm(y), &bold);
            canvas.use_text(
                value.as_str(),
                BODY_SIZE,
                mm(MARGIN + SUMMARY_VALUE_OFFSET),
                mm(y),
                &regular,
            );
            y -= ROW_HEIGHT;
        }

        doc.save_to_bytes().map_err(pdf_error)
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}

fn mm(value: i16) -> Mm {
    Mm(f32::from(value))
}

fn column_width(columns: usize) -> i16 {
    let usable = PAGE_WIDTH - 2 * MARGIN;
    i16::try_from(columns)
        .ok()
        .filter(|count| *count > 0)
        .map_or(usable, |count| usable / count)
}

fn next_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
    doc.get_page(page).get_layer(layer)
}

fn write_row(
    canvas: &PdfLayerReference,
    cells: &[String],
    y: i16,
    width: i16,
    size: f32,
    font: &IndirectFontRef,
) {
    let mut x = MARGIN;
    for cell in cells {
        canvas.use_text(cell.as_str(), size, mm(x), mm(y), font);
        x = x.saturating_add(width);
    }
}

fn pdf_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> ReportTable {
        ReportTable {
            title: "Monthly Report - January 2024".to_string(),
            columns: vec!["Date".to_string(), "Income".to_string()],
            rows: (0..rows)
                .map(|i| vec![format!("{:02}/01/2024", i % 28 + 1), "Rp 1.000,00".to_string()])
                .collect(),
            summary_title: "Monthly Summary".to_string(),
            summary_columns: vec!["Total Income".to_string()],
            summary_row: vec!["Rp 1.000,00".to_string()],
        }
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let bytes = PdfExporter::new().render(&table(3)).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(PdfExporter.content_type(), "application/pdf");
    }

    #[test]
    fn test_long_table_spans_pages() {
        let short = PdfExporter::new().render(&table(3)).unwrap();
        let long = PdfExporter::new().render(&table(120)).unwrap();

        assert!(long.starts_with(b"%PDF"));
        assert!(long.len() > short.len());
    }

    #[test]
    fn test_empty_table() {
        let mut empty = table(0);
        empty.columns.clear();

        let bytes = PdfExporter::new().render(&empty).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(5), 36);
        assert_eq!(column_width(0), 180);
    }
}

// src/report/pdf.rs

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use crate::{
    error::AppError,
    report::layout::{Align, DrawCommand, Layout, Weight},
};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Rough Helvetica advance width in ems. The builtin fonts carry no metrics
/// we can query, so centred text is positioned from this estimate.
fn average_advance(weight: Weight) -> f32 {
    match weight {
        Weight::Normal => 0.52,
        Weight::Bold => 0.56,
    }
}

/// Estimated rendered width of `text` in millimetres.
pub fn text_width(text: &str, size: f32, weight: Weight) -> f32 {
    text.chars().count() as f32 * size * average_advance(weight) * MM_PER_PT
}

/// Writes `layout` as a single-page PDF and returns the document bytes.
pub fn write_pdf(title: &str, layout: &Layout) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(layout.width), Mm(layout.height), "Layer 1");
    let canvas = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    for command in &layout.commands {
        draw(&canvas, layout.height, command, &regular, &bold);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw(
    canvas: &PdfLayerReference,
    page_height: f32,
    command: &DrawCommand,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    // PDF space starts at the bottom-left corner.
    let point = |x: f32, y: f32| (Point::new(Mm(x), Mm(page_height - y)), false);

    match command {
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
        } => canvas.add_line(Line {
            points: vec![
                point(*x, *y),
                point(x + width, *y),
                point(x + width, y + height),
                point(*x, y + height),
            ],
            is_closed: true,
        }),
        DrawCommand::Line { x1, y1, x2, y2 } => canvas.add_line(Line {
            points: vec![point(*x1, *y1), point(*x2, *y2)],
            is_closed: false,
        }),
        DrawCommand::Text {
            x,
            y,
            text,
            size,
            weight,
            align,
        } => {
            let font = match weight {
                Weight::Normal => regular,
                Weight::Bold => bold,
            };
            let left = match align {
                Align::Left => *x,
                Align::Center => x - text_width(text, *size, *weight) / 2.0,
            };
            canvas.use_text(text.as_str(), *size, Mm(left), Mm(page_height - y), font);
        }
    }
}

fn pdf_error<E: std::fmt::Debug>(err: E) -> AppError {
    AppError::InternalServerError(format!("pdf write failed: {:?}", err))
}

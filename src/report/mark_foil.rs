// src/report/mark_foil.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    config::FormHeaders,
    models::mark_foil::{FormMetadata, MarkEntry},
    report::layout::{Align, Layout, Weight},
};

pub const SUBJECT_PLACEHOLDER: &str = "ARTS/ECONOMICS";
pub const EXAM_PAPER_PLACEHOLDER: &str = "Sem - 1/ CORE-1";
pub const CONFIDENTIAL_FORM_PLACEHOLDER: &str = "12";

pub const ROW_HEIGHT: f32 = 15.0;

const TABLE_X: f32 = 20.0;
const TABLE_WIDTH: f32 = 170.0;
const LABEL_DIVIDER_X: f32 = 50.0;
const TITLE_Y: f32 = 35.0;
const TITLE_STEP: f32 = 10.0;

/// (left edge, width, text x) of the College No, In Figure and In Words cells.
const CELLS: [(f32, f32, f32); 3] = [(20.0, 60.0, 30.0), (80.0, 50.0, 90.0), (130.0, 60.0, 140.0)];

const BODY_SIZE: f32 = 12.0;
const BASELINE_OFFSET: f32 = 10.0;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// `mark-foil-<subject, lowercased, whitespace runs as '-'>-<foil no>.pdf`
///
/// Only printable ASCII other than `"` and `\` survives, so the name can go
/// into a quoted `Content-Disposition` filename as is.
pub fn mark_foil_file_name(subject: &str, mark_foil_no: &str) -> String {
    let lowered = subject.to_lowercase();
    let slug = WHITESPACE.replace_all(&lowered, "-");
    format!(
        "mark-foil-{}-{}.pdf",
        header_safe(&slug),
        header_safe(mark_foil_no)
    )
}

fn header_safe(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | '\\'))
        .collect()
}

/// Text printed in the EXAM/PAPER box.
pub fn exam_paper_text(metadata: &FormMetadata) -> String {
    let parts: Vec<&str> = [metadata.semester.as_str(), metadata.exam_type.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        EXAM_PAPER_PLACEHOLDER.to_string()
    } else {
        parts.join("/ ")
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Top of the SUBJECT box, below the title lines and institution name.
fn table_top(headers: &FormHeaders) -> f32 {
    TITLE_Y + (headers.mark_foil_title.len() + 1) as f32 * TITLE_STEP + 5.0
}

/// Top of the first entry row.
pub fn first_row_y(headers: &FormHeaders) -> f32 {
    table_top(headers) + 5.0 * ROW_HEIGHT
}

/// Lays out the mark foil for `subject` with one row per entry.
pub fn mark_foil_layout(
    headers: &FormHeaders,
    subject: &str,
    metadata: &FormMetadata,
    entries: &[MarkEntry],
) -> Layout {
    let mut layout = Layout::a4();
    let center = layout.width / 2.0;

    layout.text(
        format!(
            "CONFIDENTIAL FORM NO - {}",
            or_placeholder(&metadata.confidential_form_no, CONFIDENTIAL_FORM_PLACEHOLDER)
        ),
        center,
        20.0,
        BODY_SIZE,
        Weight::Bold,
        Align::Center,
    );

    let mut y = TITLE_Y;
    for line in headers
        .mark_foil_title
        .iter()
        .chain(std::iter::once(&headers.institution_name))
    {
        layout.text(line.as_str(), center, y, 14.0, Weight::Bold, Align::Center);
        y += TITLE_STEP;
    }

    let top = table_top(headers);
    labelled_box(
        &mut layout,
        top,
        "SUBJECT",
        or_placeholder(subject, SUBJECT_PLACEHOLDER),
    );
    labelled_box(
        &mut layout,
        top + ROW_HEIGHT,
        "EXAM/PAPER",
        &exam_paper_text(metadata),
    );

    let y = top + 2.0 * ROW_HEIGHT;
    layout.rect(TABLE_X, y, TABLE_WIDTH, ROW_HEIGHT);
    layout.text(
        format!("Mark Foil #{}", metadata.mark_foil_no),
        center,
        y + 9.0,
        BODY_SIZE,
        Weight::Bold,
        Align::Center,
    );

    let y = top + 3.0 * ROW_HEIGHT;
    layout.rect(TABLE_X, y, TABLE_WIDTH, ROW_HEIGHT);
    layout.text("Marks Secured", center, y + 9.0, BODY_SIZE, Weight::Bold, Align::Center);

    let header_y = top + 4.0 * ROW_HEIGHT;
    table_row(
        &mut layout,
        header_y,
        ["College No", "In Figure", "In Words"],
        Weight::Bold,
    );

    for (i, entry) in entries.iter().enumerate() {
        table_row(
            &mut layout,
            header_y + (i + 1) as f32 * ROW_HEIGHT,
            [
                entry.exam_code.as_str(),
                entry.marks_in_figure.as_str(),
                entry.marks_in_words.as_str(),
            ],
            Weight::Normal,
        );
    }

    layout
}

fn labelled_box(layout: &mut Layout, y: f32, label: &str, value: &str) {
    layout.rect(TABLE_X, y, TABLE_WIDTH, ROW_HEIGHT);
    layout.line(LABEL_DIVIDER_X, y, LABEL_DIVIDER_X, y + ROW_HEIGHT);
    let baseline = y + 9.0;
    layout.text(label, 22.0, baseline, BODY_SIZE, Weight::Bold, Align::Left);
    layout.text(":", 47.0, baseline, BODY_SIZE, Weight::Bold, Align::Left);
    layout.text(value, 55.0, baseline, BODY_SIZE, Weight::Bold, Align::Left);
}

fn table_row(layout: &mut Layout, y: f32, texts: [&str; 3], weight: Weight) {
    for ((x, width, text_x), text) in CELLS.into_iter().zip(texts) {
        layout.rect(x, y, width, ROW_HEIGHT);
        if !text.is_empty() {
            layout.text(text, text_x, y + BASELINE_OFFSET, BODY_SIZE, weight, Align::Left);
        }
    }
}

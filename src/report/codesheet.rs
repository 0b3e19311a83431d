// src/report/codesheet.rs

use crate::{
    config::FormHeaders,
    models::exam_code::ExamCodeRecord,
    report::layout::{Align, Layout, Weight},
};

pub const CODESHEET_FILE_NAME: &str = "exam-codesheet.pdf";

pub const COLUMN_COUNT: usize = 3;
pub const ROW_HEIGHT: f32 = 15.0;
pub const ROLL_CELL_WIDTH: f32 = 40.0;
/// Longest roll number that stays inside the roll cell at body size.
pub const ROLL_NUMBER_MAX_CHARS: usize = 15;
pub const CODE_CELL_WIDTH: f32 = 20.0;
/// Left edge of each column.
pub const COLUMN_OFFSETS: [f32; COLUMN_COUNT] = [15.0, 75.0, 135.0];

const HEADER_ROW_Y: f32 = 75.0;
/// Top of the first data row.
pub const FIRST_ROW_Y: f32 = HEADER_ROW_Y + ROW_HEIGHT;

const LABEL_BOX_X: f32 = 15.0;
const LABEL_BOX_Y: f32 = 45.0;
const LABEL_BOX_WIDTH: f32 = 100.0;
const LABEL_BOX_HEIGHT: f32 = 30.0;
const LABEL_LINE_STEP: f32 = 10.0;

const BODY_SIZE: f32 = 12.0;
const CELL_PADDING: f32 = 3.0;
const BASELINE_OFFSET: f32 = 10.0;

/// Splits `items` into three consecutive groups of `ceil(len / 3)`.
///
/// Column `i` holds indices `[i * n, min((i + 1) * n, len))`, so trailing
/// columns may be short or empty.
pub fn split_columns<T>(items: &[T]) -> [&[T]; COLUMN_COUNT] {
    let per_column = items.len().div_ceil(COLUMN_COUNT);
    std::array::from_fn(|i| {
        let start = (i * per_column).min(items.len());
        let end = ((i + 1) * per_column).min(items.len());
        &items[start..end]
    })
}

/// Rows that fit in one column before running off the page.
pub fn rows_per_column(page_height: f32) -> usize {
    ((page_height - FIRST_ROW_Y) / ROW_HEIGHT).floor().max(0.0) as usize
}

/// Lays out the codesheet for `records`.
pub fn codesheet_layout(headers: &FormHeaders, records: &[ExamCodeRecord]) -> Layout {
    let mut layout = Layout::a4();
    let center = layout.width / 2.0;

    layout.text(
        headers.institution_name.as_str(),
        center,
        20.0,
        16.0,
        Weight::Bold,
        Align::Center,
    );
    layout.text(
        headers.codesheet_title.as_str(),
        center,
        35.0,
        14.0,
        Weight::Bold,
        Align::Center,
    );

    layout.rect(LABEL_BOX_X, LABEL_BOX_Y, LABEL_BOX_WIDTH, LABEL_BOX_HEIGHT);
    let label_center = LABEL_BOX_X + LABEL_BOX_WIDTH / 2.0;
    let lines = headers.program_label.len().max(1) as f32;
    let first_line_y =
        LABEL_BOX_Y + LABEL_BOX_HEIGHT / 2.0 + 5.0 - (lines - 1.0) * LABEL_LINE_STEP / 2.0;
    for (i, line) in headers.program_label.iter().enumerate() {
        layout.text(
            line.as_str(),
            label_center,
            first_line_y + i as f32 * LABEL_LINE_STEP,
            BODY_SIZE,
            Weight::Bold,
            Align::Center,
        );
    }

    for (column, items) in split_columns(records).into_iter().enumerate() {
        if column > 0 && items.is_empty() {
            continue;
        }
        let x = COLUMN_OFFSETS[column];
        header_row(&mut layout, x);

        for (row, record) in items.iter().enumerate() {
            let y = FIRST_ROW_Y + row as f32 * ROW_HEIGHT;
            layout.rect(x, y, ROLL_CELL_WIDTH, ROW_HEIGHT);
            layout.rect(x + ROLL_CELL_WIDTH, y, CODE_CELL_WIDTH, ROW_HEIGHT);
            layout.text(
                record.roll_number.as_str(),
                x + CELL_PADDING,
                y + BASELINE_OFFSET,
                BODY_SIZE,
                Weight::Normal,
                Align::Left,
            );
            layout.text(
                record.exam_code.as_str(),
                x + ROLL_CELL_WIDTH + CELL_PADDING,
                y + BASELINE_OFFSET,
                BODY_SIZE,
                Weight::Normal,
                Align::Left,
            );
        }
    }

    layout
}

fn header_row(layout: &mut Layout, x: f32) {
    layout.rect(x, HEADER_ROW_Y, ROLL_CELL_WIDTH, ROW_HEIGHT);
    layout.rect(x + ROLL_CELL_WIDTH, HEADER_ROW_Y, CODE_CELL_WIDTH, ROW_HEIGHT);
    layout.text(
        "Roll No",
        x + ROLL_CELL_WIDTH / 2.0,
        HEADER_ROW_Y + BASELINE_OFFSET,
        BODY_SIZE,
        Weight::Bold,
        Align::Center,
    );
    layout.text(
        "Code",
        x + ROLL_CELL_WIDTH + CODE_CELL_WIDTH / 2.0,
        HEADER_ROW_Y + BASELINE_OFFSET,
        BODY_SIZE,
        Weight::Bold,
        Align::Center,
    );
}

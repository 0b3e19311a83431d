// tests/report_tests.rs

use examdesk::{
    config::FormHeaders,
    models::{
        exam_code::ExamCodeRecord,
        mark_foil::{FormMetadata, MarkEntry},
    },
    report::{
        ReportRenderer,
        codesheet::{
            COLUMN_OFFSETS, FIRST_ROW_Y, ROLL_CELL_WIDTH, ROLL_NUMBER_MAX_CHARS, ROW_HEIGHT,
            codesheet_layout, rows_per_column, split_columns,
        },
        layout::{DrawCommand, PAGE_HEIGHT, Weight},
        mark_foil::{exam_paper_text, first_row_y, mark_foil_file_name, mark_foil_layout},
        pdf::{text_width, write_pdf},
    },
};

fn records(count: usize) -> Vec<ExamCodeRecord> {
    (0..count)
        .map(|i| ExamCodeRecord {
            roll_number: format!("R{:04}", i),
            subject: "BCA-PRG".to_string(),
            exam_code: (18001 + i).to_string(),
            id: i as i64,
        })
        .collect()
}

fn text_position(commands: &[DrawCommand], needle: &str) -> Option<(f32, f32)> {
    commands.iter().find_map(|c| match c {
        DrawCommand::Text { x, y, text, .. } if text == needle => Some((*x, *y)),
        _ => None,
    })
}

#[test]
fn columns_split_by_ceiling_of_a_third() {
    for k in 0..=20usize {
        let items: Vec<usize> = (0..k).collect();
        let [a, b, c] = split_columns(&items);
        let per_column = k.div_ceil(3);

        assert_eq!(a.len(), per_column.min(k), "k = {}", k);
        assert_eq!(b.len(), per_column.min(k.saturating_sub(per_column)), "k = {}", k);
        assert_eq!(c.len(), k.saturating_sub(2 * per_column), "k = {}", k);

        let joined: Vec<usize> = a.iter().chain(b).chain(c).copied().collect();
        assert_eq!(joined, items);
    }
}

#[test]
fn column_split_examples() {
    let seven: Vec<u8> = (0..7).collect();
    let [a, b, c] = split_columns(&seven);
    assert_eq!((a.len(), b.len(), c.len()), (3, 3, 1));

    let four: Vec<u8> = (0..4).collect();
    let [a, b, c] = split_columns(&four);
    assert_eq!((a.len(), b.len(), c.len()), (2, 2, 0));

    let empty: [u8; 0] = [];
    let [a, b, c] = split_columns(&empty);
    assert!(a.is_empty() && b.is_empty() && c.is_empty());
}

#[test]
fn codesheet_places_rows_in_three_columns() {
    let headers = FormHeaders::default();
    let records = records(5);

    let layout = codesheet_layout(&headers, &records);

    // 2 + 2 + 1 rows: record 2 opens the second column, record 4 the third
    assert_eq!(
        text_position(&layout.commands, "R0000"),
        Some((COLUMN_OFFSETS[0] + 3.0, FIRST_ROW_Y + 10.0))
    );
    assert_eq!(
        text_position(&layout.commands, "R0001"),
        Some((COLUMN_OFFSETS[0] + 3.0, FIRST_ROW_Y + ROW_HEIGHT + 10.0))
    );
    assert_eq!(
        text_position(&layout.commands, "R0002"),
        Some((COLUMN_OFFSETS[1] + 3.0, FIRST_ROW_Y + 10.0))
    );
    assert_eq!(
        text_position(&layout.commands, "R0004"),
        Some((COLUMN_OFFSETS[2] + 3.0, FIRST_ROW_Y + 10.0))
    );

    // label box + one header row per column + two cells per record
    assert_eq!(layout.rects().count(), 1 + 3 * 2 + 5 * 2);
    assert!(layout.rects().all(|(_, _, _, h)| h == ROW_HEIGHT || h == 30.0));
}

#[test]
fn codesheet_header_comes_from_configuration() {
    let headers = FormHeaders {
        institution_name: "RIVERSIDE COLLEGE".to_string(),
        codesheet_title: "UG SEM-4 CODESHEET".to_string(),
        program_label: vec!["BACHELOR OF SCIENCE".to_string()],
        ..FormHeaders::default()
    };

    let layout = codesheet_layout(&headers, &records(1));
    let texts: Vec<&str> = layout.texts().collect();

    assert_eq!(&texts[..3], &["RIVERSIDE COLLEGE", "UG SEM-4 CODESHEET", "BACHELOR OF SCIENCE"]);
    assert!(!texts.contains(&"NIMAPARA AUTONOMOUS COLLEGE, NIMAPARA"));
}

#[test]
fn empty_codesheet_is_header_only() {
    let layout = codesheet_layout(&FormHeaders::default(), &[]);
    let texts: Vec<&str> = layout.texts().collect();

    assert!(texts.contains(&"Roll No"));
    assert!(texts.contains(&"Code"));
    // label box and the first column's header cells
    assert_eq!(layout.rects().count(), 3);
    assert!(!layout.overflows());
}

#[test]
fn codesheet_overflows_past_thirteen_rows_per_column() {
    let headers = FormHeaders::default();
    assert_eq!(rows_per_column(PAGE_HEIGHT), 13);

    // 39 records: 13 rows per column, last row ends at 285
    let fits = codesheet_layout(&headers, &records(39));
    assert!(!fits.overflows());
    assert_eq!(fits.bottom(), FIRST_ROW_Y + 13.0 * ROW_HEIGHT);

    // 40 records: 14 rows, the last one is cut off by the page edge
    let spills = codesheet_layout(&headers, &records(40));
    assert!(spills.overflows());
    assert!(spills.texts().any(|t| t == "R0039"));
}

#[test]
fn mark_foil_uses_placeholders_for_blank_fields() {
    let metadata = FormMetadata {
        mark_foil_no: "12345".to_string(),
        ..FormMetadata::default()
    };

    let layout = mark_foil_layout(&FormHeaders::default(), "", &metadata, &[]);
    let texts: Vec<&str> = layout.texts().collect();

    assert!(texts.contains(&"CONFIDENTIAL FORM NO - 12"));
    assert!(texts.contains(&"ARTS/ECONOMICS"));
    assert!(texts.contains(&"Sem - 1/ CORE-1"));
    assert!(texts.contains(&"Mark Foil #12345"));
    assert!(texts.contains(&"Marks Secured"));
}

#[test]
fn mark_foil_prints_supplied_metadata() {
    let metadata = FormMetadata {
        confidential_form_no: "7".to_string(),
        semester: "Sem - 2".to_string(),
        exam_type: "CORE-3".to_string(),
        mark_foil_no: "54321".to_string(),
    };

    let layout = mark_foil_layout(&FormHeaders::default(), "SCIENCE-PHY", &metadata, &[]);
    let texts: Vec<&str> = layout.texts().collect();

    assert!(texts.contains(&"CONFIDENTIAL FORM NO - 7"));
    assert!(texts.contains(&"SCIENCE-PHY"));
    assert!(texts.contains(&"Sem - 2/ CORE-3"));
    assert!(!texts.contains(&"ARTS/ECONOMICS"));
}

#[test]
fn exam_paper_text_joins_what_is_present() {
    let only_type = FormMetadata {
        exam_type: "CORE-1".to_string(),
        ..FormMetadata::default()
    };
    assert_eq!(exam_paper_text(&only_type), "CORE-1");
    assert_eq!(exam_paper_text(&FormMetadata::default()), "Sem - 1/ CORE-1");
}

#[test]
fn longest_accepted_roll_number_fits_its_cell() {
    let roll = "0".repeat(ROLL_NUMBER_MAX_CHARS);
    // 3 mm left padding inside the cell
    assert!(3.0 + text_width(&roll, 12.0, Weight::Normal) <= ROLL_CELL_WIDTH);
}

#[test]
fn mark_foil_has_one_row_per_entry() {
    let headers = FormHeaders::default();
    let entries = vec![
        MarkEntry {
            exam_code: "18001".to_string(),
            marks_in_figure: "42".to_string(),
            marks_in_words: "Forty Two".to_string(),
        },
        MarkEntry::blank("18003"),
    ];

    let layout = mark_foil_layout(&headers, "SCIENCE-PHY", &FormMetadata::default(), &entries);

    // four label boxes, three header cells, three cells per entry
    assert_eq!(layout.rects().count(), 4 + 3 + 3 * 2);
    assert_eq!(first_row_y(&headers), 145.0);
    assert_eq!(text_position(&layout.commands, "18001"), Some((30.0, 155.0)));
    assert_eq!(text_position(&layout.commands, "Forty Two"), Some((140.0, 155.0)));
    assert_eq!(text_position(&layout.commands, "18003"), Some((30.0, 170.0)));
    assert_eq!(layout.bottom(), 145.0 + 2.0 * 15.0);
}

#[test]
fn mark_foil_file_names() {
    assert_eq!(
        mark_foil_file_name("SCIENCE-PHY", "12345"),
        "mark-foil-science-phy-12345.pdf"
    );
    assert_eq!(
        mark_foil_file_name("Political  Science\tHonours", "99999"),
        "mark-foil-political-science-honours-99999.pdf"
    );
}

#[test]
fn mark_foil_file_names_are_header_safe() {
    assert_eq!(
        mark_foil_file_name("SCI\"ENCE", "12345"),
        "mark-foil-science-12345.pdf"
    );
    assert_eq!(mark_foil_file_name("A\u{1}B", "12345"), "mark-foil-ab-12345.pdf");
    assert_eq!(
        mark_foil_file_name("ODIA \u{b13}\u{b21}\u{b3c}\u{b3f}\u{b06}", "1\\2"),
        "mark-foil-odia--12.pdf"
    );
}

#[test]
fn centred_text_width_grows_with_length_and_weight() {
    let short = text_width("Code", 12.0, Weight::Normal);
    let long = text_width("Roll Number", 12.0, Weight::Normal);
    assert!(short > 0.0 && long > short);
    assert!(text_width("Code", 12.0, Weight::Bold) > short);
    assert_eq!(text_width("", 12.0, Weight::Bold), 0.0);
}

#[test]
fn writer_emits_pdf_bytes() {
    let layout = codesheet_layout(&FormHeaders::default(), &records(4));
    let bytes = write_pdf("Exam Codesheet", &layout).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn renderer_names_documents() {
    let renderer = ReportRenderer::default();

    let codesheet = renderer.render_codesheet(&records(2)).unwrap();
    assert_eq!(codesheet.file_name, "exam-codesheet.pdf");

    let metadata = FormMetadata {
        mark_foil_no: "10001".to_string(),
        ..FormMetadata::default()
    };
    let foil = renderer
        .render_mark_foil("BCA-PRG", &metadata, &[MarkEntry::blank("18001")])
        .unwrap();
    assert_eq!(foil.file_name, "mark-foil-bca-prg-10001.pdf");
    assert!(foil.bytes.starts_with(b"%PDF"));
}

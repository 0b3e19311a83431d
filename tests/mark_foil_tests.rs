// tests/mark_foil_tests.rs

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use examdesk::{
    error::AppError,
    models::{exam_code::ExamCodeRecord, mark_foil::MarkEntry},
    services::mark_foil::{
        FOIL_NO_MAX, FOIL_NO_MIN, FoilNumberSource, MarkFoilSession, RandomFoilNumbers,
        mark_entries,
    },
};

/// Counts draws and returns an increasing number on each one.
struct CountingSource {
    draws: Arc<AtomicUsize>,
}

impl FoilNumberSource for CountingSource {
    fn next_foil_number(&mut self) -> u32 {
        let n = self.draws.fetch_add(1, Ordering::SeqCst) as u32;
        FOIL_NO_MIN + n
    }
}

fn record(subject: &str, exam_code: &str) -> ExamCodeRecord {
    ExamCodeRecord {
        roll_number: format!("roll-{}", exam_code),
        subject: subject.to_string(),
        exam_code: exam_code.to_string(),
        id: 0,
    }
}

#[test]
fn foil_number_is_drawn_once_per_session() {
    let draws = Arc::new(AtomicUsize::new(0));
    let mut session = MarkFoilSession::new(Box::new(CountingSource {
        draws: draws.clone(),
    }));
    let records = vec![record("SCIENCE-PHY", "18001"), record("SCIENCE-CHE", "18002")];

    assert_eq!(session.mark_foil_no(), None);

    let first = session.select_subject("SCIENCE-PHY", &records).unwrap();
    let second = session.select_subject("SCIENCE-CHE", &records).unwrap();
    let third = session.select_subject("SCIENCE-PHY", &records).unwrap();

    assert_eq!(first.mark_foil_no, "10000");
    assert_eq!(second.mark_foil_no, first.mark_foil_no);
    assert_eq!(third.mark_foil_no, first.mark_foil_no);
    assert_eq!(draws.load(Ordering::SeqCst), 1);
    assert_eq!(session.mark_foil_no(), Some("10000"));
}

#[test]
fn empty_subject_is_rejected_without_drawing() {
    let draws = Arc::new(AtomicUsize::new(0));
    let mut session = MarkFoilSession::new(Box::new(CountingSource {
        draws: draws.clone(),
    }));

    let err = session.select_subject("", &[]).unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(draws.load(Ordering::SeqCst), 0);
    assert_eq!(session.mark_foil_no(), None);
}

#[test]
fn seeded_numbers_are_five_digit_and_reproducible() {
    for seed in 0..50u64 {
        let a = RandomFoilNumbers::seeded(seed).next_foil_number();
        let b = RandomFoilNumbers::seeded(seed).next_foil_number();

        assert_eq!(a, b);
        assert!((FOIL_NO_MIN..=FOIL_NO_MAX).contains(&a), "seed {} gave {}", seed, a);
    }
}

#[test]
fn entries_match_subject_label_exactly() {
    let records = vec![
        record("SCIENCE-MAT", "18001"),
        record("COMMERCE-MAT", "18002"),
        record("SCIENCE-MAT", "18003"),
    ];

    let entries = mark_entries(&records, "SCIENCE-MAT");

    assert_eq!(
        entries,
        vec![MarkEntry::blank("18001"), MarkEntry::blank("18003")]
    );
    // A bare code is not a label, so nothing matches
    assert!(mark_entries(&records, "MAT").is_empty());
}

#[test]
fn single_matching_record_gives_one_blank_entry() {
    let records = vec![record("SCIENCE-PHY", "18001"), record("SCIENCE-CHE", "18002")];

    let mut session = MarkFoilSession::new(Box::new(RandomFoilNumbers::seeded(7)));
    let selection = session.select_subject("SCIENCE-PHY", &records).unwrap();

    assert_eq!(selection.entries.len(), 1);
    assert_eq!(selection.entries[0].exam_code, "18001");
    assert_eq!(selection.entries[0].marks_in_figure, "");
    assert_eq!(selection.entries[0].marks_in_words, "");
}

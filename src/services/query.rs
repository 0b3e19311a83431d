// src/services/query.rs

use crate::models::{catalog::Catalog, exam_code::ExamCodeRecord};

/// Filters records the way the exam code listing does.
///
/// Matching is substring containment on the composite subject label, not an
/// exact key comparison, so a code that happens to occur inside another label
/// also matches. Existing sheets rely on this, so it stays loose.
///
/// * no filters: every record, insertion order kept
/// * stream only: label contains any subject code of that stream
///   (an unknown stream matches nothing)
/// * subject, with or without stream: label contains the subject code
pub fn filter_records(
    catalog: &Catalog,
    records: &[ExamCodeRecord],
    stream: Option<&str>,
    subject: Option<&str>,
) -> Vec<ExamCodeRecord> {
    match (stream, subject) {
        (None, None) => records.to_vec(),
        (Some(stream), None) => {
            let Some(stream) = catalog.stream(stream) else {
                return Vec::new();
            };
            records
                .iter()
                .filter(|r| {
                    stream
                        .subjects
                        .iter()
                        .any(|s| r.subject.contains(s.code.as_str()))
                })
                .cloned()
                .collect()
        }
        (_, Some(subject)) => records
            .iter()
            .filter(|r| r.subject.contains(subject))
            .cloned()
            .collect(),
    }
}

/// Distinct composite subject labels, in the order they first appear.
pub fn distinct_subjects(records: &[ExamCodeRecord]) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for record in records {
        if !subjects.contains(&record.subject) {
            subjects.push(record.subject.clone());
        }
    }
    subjects
}

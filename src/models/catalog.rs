// src/models/catalog.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A course identified by a short code within a stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub code: String,
}

/// An academic program track with its fixed list of subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Display name, also the value the forms submit (e.g. "SCIENCE").
    pub name: String,
    pub code: String,
    pub subjects: Vec<Subject>,
}

impl Stream {
    /// Finds a subject of this stream by its code.
    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }
}

/// Read-only stream/subject lookup table, loaded once at start-up.
///
/// Subject codes are only unique within a stream: `ECO` appears under both
/// ARTS and COMMERCE, `MAT` under COMMERCE and SCIENCE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    streams: Vec<Stream>,
}

impl Catalog {
    pub fn new(streams: Vec<Stream>) -> Self {
        Self { streams }
    }

    /// Loads a catalog from a JSON array of streams.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let streams: Vec<Stream> = serde_json::from_str(&raw).map_err(|e| {
            AppError::InternalServerError(format!(
                "invalid catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(streams))
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// Looks a stream up by name, the value used by the selection forms.
    pub fn stream(&self, name: &str) -> Option<&Stream> {
        self.streams.iter().find(|s| s.name == name)
    }

    pub fn subject(&self, stream_name: &str, subject_code: &str) -> Option<&Subject> {
        self.stream(stream_name)?.subject(subject_code)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        fn stream(name: &str, code: &str, subjects: &[(&str, &str)]) -> Stream {
            Stream {
                name: name.to_string(),
                code: code.to_string(),
                subjects: subjects
                    .iter()
                    .map(|(name, code)| Subject {
                        name: name.to_string(),
                        code: code.to_string(),
                    })
                    .collect(),
            }
        }

        Self::new(vec![
            stream(
                "ARTS",
                "ARTS",
                &[
                    ("Odia", "ODIA"),
                    ("English", "ENG"),
                    ("Education", "EDU"),
                    ("History", "HIS"),
                    ("Political Science", "POL"),
                    ("Economics", "ECO"),
                ],
            ),
            stream(
                "COMMERCE",
                "COM",
                &[
                    ("Accountancy", "ACC"),
                    ("Business Studies", "BUS"),
                    ("Economics", "ECO"),
                    ("Mathematics", "MAT"),
                ],
            ),
            stream(
                "SCIENCE",
                "SCI",
                &[
                    ("Physics", "PHY"),
                    ("Chemistry", "CHE"),
                    ("Mathematics", "MAT"),
                    ("Biology", "BIO"),
                ],
            ),
            stream(
                "BBA",
                "BBA",
                &[
                    ("Business Management", "BMG"),
                    ("Marketing", "MKT"),
                    ("Finance", "FIN"),
                    ("Human Resource", "HRM"),
                ],
            ),
            stream(
                "BCA",
                "BCA",
                &[
                    ("Programming", "PRG"),
                    ("Database Management", "DBM"),
                    ("Web Development", "WEB"),
                    ("Computer Networks", "CNT"),
                ],
            ),
        ])
    }
}

// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Separator used to put several printed lines into one environment variable.
const LINE_SEPARATOR: char = '|';

/// Texts printed in the fixed header blocks of both paper forms.
#[derive(Debug, Clone)]
pub struct FormHeaders {
    /// Institution name printed on the codesheet and the mark foil.
    pub institution_name: String,
    /// Exam title printed under the institution name on the codesheet.
    pub codesheet_title: String,
    /// Lines of the "stream/program" label box on the codesheet.
    pub program_label: Vec<String>,
    /// Title lines printed above the institution name on the mark foil.
    pub mark_foil_title: Vec<String>,
}

impl Default for FormHeaders {
    fn default() -> Self {
        Self {
            institution_name: "NIMAPARA AUTONOMOUS COLLEGE, NIMAPARA".to_string(),
            codesheet_title: "SF UG SEM-2 CODESHEET EXAM - 2025 (R)".to_string(),
            program_label: vec![
                "BACHELOR IN".to_string(),
                "COMPUTER APPLICATION".to_string(),
            ],
            mark_foil_title: vec![
                "MID SEM MARK FOIL FOR".to_string(),
                "EXAMINATION-2023".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    pub headers: FormHeaders,
    /// JSON stream catalog replacing the built-in table.
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for the mark foil number generator.
    pub mark_foil_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            headers: FormHeaders::default(),
            catalog_path: None,
            mark_foil_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        let headers = FormHeaders {
            institution_name: env::var("INSTITUTION_NAME")
                .unwrap_or(defaults.headers.institution_name),
            codesheet_title: env::var("CODESHEET_TITLE")
                .unwrap_or(defaults.headers.codesheet_title),
            program_label: env::var("PROGRAM_LABEL")
                .map(|v| split_lines(&v))
                .unwrap_or(defaults.headers.program_label),
            mark_foil_title: env::var("MARK_FOIL_TITLE")
                .map(|v| split_lines(&v))
                .unwrap_or(defaults.headers.mark_foil_title),
        };

        let catalog_path = env::var("CATALOG_PATH").ok().map(PathBuf::from);

        let mark_foil_seed = env::var("MARK_FOIL_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        Self {
            bind_addr,
            rust_log,
            log_dir,
            cors_origins,
            headers,
            catalog_path,
            mark_foil_seed,
        }
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .split(LINE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

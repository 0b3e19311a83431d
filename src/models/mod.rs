// src/models/mod.rs

pub mod catalog;
pub mod exam_code;
pub mod mark_foil;

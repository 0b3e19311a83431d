// src/services/mod.rs

pub mod assignment;
pub mod mark_foil;
pub mod query;

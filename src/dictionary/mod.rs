//! Style and family word dictionary and rule file loading

pub mod loader;
pub mod rules;

pub use loader::StyleWordDictionary;
pub use rules::{FamilyWordRule, StyleWordRule};

//! Font record access: name table and style metrics

pub mod candidate;
pub mod loader;
pub mod record;

pub use candidate::{candidate_name, NameSource};
pub use loader::{is_valid_font_file, LoadedFont};
pub use record::{name_id, selection, FontRecord, NameFilter, NameRecord, StyleMetrics};

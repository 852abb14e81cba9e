//! Batch fixing: parallel classification, family grouping and output

pub mod group;
pub mod output;
pub mod processor;

pub use group::group_by_family;
pub use output::{build_report, write_groups, write_report, CopyWriter, FontWriter, WrittenFonts};
pub use processor::{fix_font, fix_fonts, summarize, FixOutcome, FixedFont, OutcomeReport};

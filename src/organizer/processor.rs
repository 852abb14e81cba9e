use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;
use crate::dictionary::StyleWordDictionary;
use crate::error::Error;
use crate::font::{candidate_name, FontRecord, LoadedFont, NameSource};
use crate::models::ClassificationResult;
use crate::naming::{classify, ClassifyOptions};

/// A font whose names were fixed in memory
#[derive(Debug, Clone)]
pub struct FixedFont {
    pub record: LoadedFont,
    pub raw_name: String,
    pub result: ClassificationResult,
}

/// What happened to one input font
#[derive(Debug)]
pub enum FixOutcome {
    Fixed(FixedFont),
    Skipped { path: PathBuf, raw_name: Option<String>, error: Error },
}

impl FixOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FixOutcome::Fixed(fixed) => &fixed.record.path,
            FixOutcome::Skipped { path, .. } => path,
        }
    }
}

/// Report line for one font
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeReport {
    pub path: PathBuf,
    pub raw_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ClassificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_error: Option<String>,
}

impl From<&FixOutcome> for OutcomeReport {
    fn from(outcome: &FixOutcome) -> Self {
        match outcome {
            FixOutcome::Fixed(fixed) => OutcomeReport {
                path: fixed.record.path.clone(),
                raw_name: Some(fixed.raw_name.clone()),
                result: Some(fixed.result.clone()),
                error: None,
                output: None,
                write_error: None,
            },
            FixOutcome::Skipped { path, raw_name, error } => OutcomeReport {
                path: path.clone(),
                raw_name: raw_name.clone(),
                result: None,
                error: Some(error.to_string()),
                output: None,
                write_error: None,
            },
        }
    }
}

/// Classify a font's candidate name and write the result onto the record.
pub fn fix_font(
    mut record: LoadedFont,
    dictionary: &StyleWordDictionary,
    options: &ClassifyOptions,
    source: NameSource,
) -> FixOutcome {
    let path = record.path.clone();
    let Some(raw_name) = candidate_name(&record, &path, source) else {
        return FixOutcome::Skipped {
            path,
            raw_name: None,
            error: Error::EmptyName(String::new()),
        };
    };

    match classify(&raw_name, dictionary, options) {
        Ok(result) => {
            result.apply_to(&mut record);
            debug!(
                "{}: \"{}\" -> \"{}\" / \"{}\" (weight {}, width {}, flags {:#06x})",
                path.display(),
                raw_name,
                result.family_name,
                result.style_name,
                record.weight(),
                record.width(),
                record.selection_flags()
            );
            FixOutcome::Fixed(FixedFont {
                record,
                raw_name,
                result,
            })
        }
        Err(error) => FixOutcome::Skipped {
            path,
            raw_name: Some(raw_name),
            error,
        },
    }
}

/// Load and fix every font in parallel. A failing font never stops the others.
pub fn fix_fonts(
    paths: &[PathBuf],
    dictionary: &StyleWordDictionary,
    options: &ClassifyOptions,
    source: NameSource,
) -> Vec<FixOutcome> {
    info!("Fixing {} font(s) using the {}", paths.len(), source);

    let outcomes: Vec<FixOutcome> = paths
        .par_iter()
        .map(|path| match LoadedFont::load(path) {
            Ok(record) => fix_font(record, dictionary, options, source),
            Err(error) => FixOutcome::Skipped {
                path: path.clone(),
                raw_name: None,
                error,
            },
        })
        .collect();

    for outcome in &outcomes {
        if let FixOutcome::Skipped { path, raw_name, error } = outcome {
            warn!(
                "Skipped {} ({}): {}",
                path.display(),
                raw_name.as_deref().unwrap_or("no name"),
                error
            );
        }
    }

    outcomes
}

/// Count (fixed, skipped) outcomes.
pub fn summarize(outcomes: &[FixOutcome]) -> (usize, usize) {
    let fixed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, FixOutcome::Fixed(_)))
        .count();
    (fixed, outcomes.len() - fixed)
}

use log::debug;
use regex::Regex;
use crate::dictionary::StyleWordDictionary;
use crate::error::{Error, Result};
use crate::models::{ClassificationResult, MetricsApplied};
use super::boundary::classify_boundary;
use super::case::{join_family, split_camel_case, title_case_if_uniform};
use super::metrics::apply_metrics;
use super::separator::separate;
use super::tokenizer::{tokenize, tokenize_style_run};

/// Per-run options for [`classify`]
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Pattern whose first two groups capture family and style directly
    pub match_pattern: Option<Regex>,
    /// Never separate a dictionary word at the very start of the name
    pub protect_beginning: bool,
    /// Replaces the computed family name
    pub family_override: Option<String>,
    /// Split camelCase compounds in the family name
    pub split_camel_case: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            match_pattern: None,
            protect_beginning: true,
            family_override: None,
            split_camel_case: false,
        }
    }
}

/// Split a raw font name into family and style names and infer the style
/// metrics named by its style words.
pub fn classify(
    raw_name: &str,
    dictionary: &StyleWordDictionary,
    options: &ClassifyOptions,
) -> Result<ClassificationResult> {
    let (computed_family, style_words) = match &options.match_pattern {
        Some(pattern) => split_with_pattern(raw_name, pattern)?,
        None => {
            let (family_words, style_words) =
                split_with_dictionary(raw_name, dictionary, options.protect_beginning)?;
            let family = join_family(&family_words);
            if options.split_camel_case {
                (split_camel_case(&family), style_words)
            } else {
                (family, style_words)
            }
        }
    };

    let mut metrics = MetricsApplied::default();
    let style_name = apply_metrics(&style_words, dictionary, &mut metrics)
        .iter()
        .map(|word| title_case_if_uniform(word))
        .collect::<Vec<_>>()
        .join(" ");

    let family_name = options
        .family_override
        .clone()
        .unwrap_or(computed_family);

    debug!(
        "Classified \"{}\" as family \"{}\", style \"{}\"",
        raw_name, family_name, style_name
    );

    Ok(ClassificationResult {
        family_name,
        style_name,
        metrics,
    })
}

fn split_with_dictionary(
    raw_name: &str,
    dictionary: &StyleWordDictionary,
    protect_beginning: bool,
) -> Result<(Vec<String>, Vec<String>)> {
    let marked = separate(raw_name, dictionary.style_words(), protect_beginning)?;
    let tokens = tokenize(&marked);
    if tokens.is_empty() {
        return Err(Error::EmptyName(raw_name.to_string()));
    }
    Ok(classify_boundary(&tokens, dictionary).split(&tokens))
}

/// Group 1 is the family verbatim, group 2 the style run.
fn split_with_pattern(raw_name: &str, pattern: &Regex) -> Result<(String, Vec<String>)> {
    let pattern_error = |groups: usize| Error::Pattern {
        name: raw_name.to_string(),
        pattern: pattern.as_str().to_string(),
        groups,
    };

    let captures = pattern.captures(raw_name).ok_or_else(|| pattern_error(0))?;
    let groups = captures.iter().skip(1).filter(Option::is_some).count();

    match (captures.get(1), captures.get(2)) {
        (Some(family), Some(style)) => Ok((
            family.as_str().to_string(),
            tokenize_style_run(style.as_str()),
        )),
        _ => Err(pattern_error(groups)),
    }
}

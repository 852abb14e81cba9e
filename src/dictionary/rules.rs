use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// A style word entry as written in a rule file: either a bare word or a
/// full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStyleWord {
    Text(String),
    Rule(RawStyleRule),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyleRule {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "match")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub replace: Option<String>,
    #[serde(default)]
    pub separate: bool,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub only_last: Option<usize>,
    #[serde(default)]
    pub not_first: Option<usize>,
    #[serde(default)]
    pub weight: Option<u16>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub fs_selection: Option<u16>,
}

/// A family word entry as written in a rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFamilyWord {
    Text(String),
    Rule { text: String },
}

impl From<RawStyleWord> for RawStyleRule {
    fn from(raw: RawStyleWord) -> Self {
        match raw {
            RawStyleWord::Text(text) => RawStyleRule {
                text,
                ..Default::default()
            },
            RawStyleWord::Rule(rule) => rule,
        }
    }
}

/// One style word of the dictionary, with its regexes compiled.
#[derive(Debug, Clone)]
pub struct StyleWordRule {
    /// Canonical display form
    pub text: String,
    /// Regex alternative to matching `text` literally
    pub pattern: Option<String>,
    /// Canonical spelling substituted for every separated match
    pub replace: Option<String>,
    pub separate: bool,
    pub case_sensitive: bool,
    /// Only classifies a token among the last N tokens
    pub only_last: Option<usize>,
    /// Never classifies a token at position N or before
    pub not_first: Option<usize>,
    pub weight: Option<u16>,
    pub width: Option<u16>,
    pub fs_selection: Option<u16>,
    separation_case_sensitive: bool,
    recognizer: Option<Regex>,
    separator: Option<fancy_regex::Regex>,
}

impl StyleWordRule {
    /// Build a plain rule recognizing `text`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::from_raw(RawStyleRule {
            text: text.into(),
            ..Default::default()
        })
    }

    /// Coerce a rule-file record into a rule, compiling its regexes.
    pub fn from_raw(raw: RawStyleRule) -> Result<Self> {
        let label = raw.pattern.clone().unwrap_or_else(|| raw.text.clone());

        if raw.text.is_empty() && raw.pattern.is_none() {
            return Err(Error::dictionary(label, "rule has neither text nor match"));
        }

        let source = match &raw.pattern {
            Some(pattern) => pattern.clone(),
            None => regex::escape(&raw.text),
        };

        // Recognition is case-insensitive unless asked otherwise, separation
        // is case-sensitive unless asked otherwise, replacements always are.
        let case_sensitive = raw.case_sensitive.unwrap_or(false);
        let separation_case_sensitive = raw.case_sensitive.unwrap_or(true);

        let recognizer = match &raw.pattern {
            Some(pattern) => Some(compile(&label, &format!("^(?:{})$", pattern), case_sensitive)?),
            None => None,
        };

        let separator = if raw.replace.is_some() {
            Some(compile_separator(&label, &source, true)?)
        } else if raw.separate {
            Some(compile_separator(&label, &source, separation_case_sensitive)?)
        } else {
            None
        };

        Ok(Self {
            text: raw.text,
            pattern: raw.pattern,
            replace: raw.replace,
            separate: raw.separate,
            case_sensitive,
            only_last: raw.only_last,
            not_first: raw.not_first,
            weight: raw.weight,
            width: raw.width,
            fs_selection: raw.fs_selection,
            separation_case_sensitive,
            recognizer,
            separator,
        })
    }

    /// True when the token as a whole is this style word.
    pub fn matches(&self, token: &str) -> bool {
        if let Some(recognizer) = &self.recognizer {
            if recognizer.is_match(token) {
                return true;
            }
        }
        if self.text.is_empty() {
            return false;
        }
        if self.case_sensitive {
            self.text == token
        } else {
            self.text.to_lowercase() == token.to_lowercase()
        }
    }

    /// Whether this rule may classify the token at `index` of `token_count`.
    pub fn applies_at(&self, index: usize, token_count: usize) -> bool {
        let within_last = self
            .only_last
            .map_or(true, |n| token_count.saturating_sub(index) <= n);
        let past_first = self.not_first.map_or(true, |n| index > n);
        within_last && past_first
    }

    /// Regex used to find this word inside a raw name, if it takes part in
    /// separation at all. It never matches right before a lowercase letter.
    pub fn separator(&self) -> Option<&fancy_regex::Regex> {
        self.separator.as_ref()
    }

    /// Text inserted for a separated match; `None` keeps the matched text.
    pub fn replacement(&self) -> Option<&str> {
        self.replace.as_deref()
    }

    pub fn has_metrics(&self) -> bool {
        self.weight.is_some() || self.width.is_some() || self.fs_selection.is_some()
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_fs_selection(mut self, flags: u16) -> Self {
        self.fs_selection = Some(flags);
        self
    }

    /// Turn on separation for a literal rule.
    pub fn separated(mut self) -> Result<Self> {
        if self.separator.is_none() {
            let source = match &self.pattern {
                Some(pattern) => pattern.clone(),
                None => regex::escape(&self.text),
            };
            self.separator = Some(compile_separator(
                &self.text,
                &source,
                self.separation_case_sensitive,
            )?);
        }
        self.separate = true;
        Ok(self)
    }
}

fn compile(label: &str, source: &str, case_sensitive: bool) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| Error::dictionary(label, e.to_string()))
}

fn compile_separator(label: &str, source: &str, case_sensitive: bool) -> Result<fancy_regex::Regex> {
    // The flag is scoped to the word so the lowercase class stays case-exact
    let flags = if case_sensitive { "" } else { "i" };
    fancy_regex::Regex::new(&format!(r"(?{}:{})(?!\p{{Ll}})", flags, source))
        .map_err(|e| Error::dictionary(label, e.to_string()))
}

/// A word reclaimed into the family name when it trails a style word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyWordRule {
    pub text: String,
}

impl FamilyWordRule {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn matches(&self, token: &str) -> bool {
        self.text.to_lowercase() == token.to_lowercase()
    }
}

impl From<RawFamilyWord> for FamilyWordRule {
    fn from(raw: RawFamilyWord) -> Self {
        match raw {
            RawFamilyWord::Text(text) | RawFamilyWord::Rule { text } => Self { text },
        }
    }
}

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use log::debug;
use crate::error::{Error, Result};
use super::rules::{FamilyWordRule, RawFamilyWord, RawStyleWord, StyleWordRule};

const DEFAULT_RULES: &str = include_str!("../../rules/default.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleFile {
    #[serde(default)]
    style_words: Vec<RawStyleWord>,
    #[serde(default)]
    family_words: Vec<RawFamilyWord>,
}

/// Style and family words, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StyleWordDictionary {
    style_words: Vec<StyleWordRule>,
    family_words: Vec<FamilyWordRule>,
}

impl StyleWordDictionary {
    pub fn new(style_words: Vec<StyleWordRule>, family_words: Vec<FamilyWordRule>) -> Self {
        Self {
            style_words,
            family_words,
        }
    }

    /// The dictionary shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(DEFAULT_RULES)
    }

    /// Load a rule file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));

        let dictionary = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        debug!(
            "Loaded {} style words and {} family words from {}",
            dictionary.style_words.len(),
            dictionary.family_words.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: RuleFile = serde_json::from_str(content)?;
        Self::from_rule_file(file)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RuleFile = toml::from_str(content)?;
        Self::from_rule_file(file)
    }

    fn from_rule_file(file: RuleFile) -> Result<Self> {
        let style_words = file
            .style_words
            .into_iter()
            .map(|raw| StyleWordRule::from_raw(raw.into()))
            .collect::<Result<Vec<_>>>()?;

        let family_words = file
            .family_words
            .into_iter()
            .map(FamilyWordRule::from)
            .filter(|rule| !rule.text.is_empty())
            .collect();

        Ok(Self::new(style_words, family_words))
    }

    pub fn style_words(&self) -> &[StyleWordRule] {
        &self.style_words
    }

    pub fn family_words(&self) -> &[FamilyWordRule] {
        &self.family_words
    }

    /// Whether the token at `index` is a style word at that position.
    pub fn is_style_word(&self, token: &str, index: usize, token_count: usize) -> bool {
        self.style_words
            .iter()
            .filter(|rule| rule.applies_at(index, token_count))
            .any(|rule| rule.matches(token))
    }

    pub fn is_family_word(&self, token: &str) -> bool {
        self.family_words.iter().any(|rule| rule.matches(token))
    }

    /// First rule, in dictionary order, that recognizes the token.
    pub fn find_style_rule(&self, token: &str) -> Option<&StyleWordRule> {
        self.style_words.iter().find(|rule| rule.matches(token))
    }
}

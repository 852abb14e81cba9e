use std::path::PathBuf;
use regex::Regex;
use crate::error::{Error, Result};
use crate::font::NameSource;
use crate::naming::ClassifyOptions;

/// Configuration for a fixing run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Classify and report without writing anything
    pub dry_run: bool,
    /// Descend into subdirectories of input directories
    pub recursive: bool,
    /// Rule file; the embedded dictionary is used when unset
    pub rules_path: Option<PathBuf>,
    /// Root of the `<Family>/` output layout
    pub output_dir: Option<PathBuf>,
    /// Where the JSON report goes
    pub report_path: Option<PathBuf>,
    /// Which name of each font gets classified
    pub name_source: NameSource,
    pub match_pattern: Option<String>,
    pub protect_beginning: bool,
    pub family_override: Option<String>,
    pub split_camel_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_mode: false,
            dry_run: false,
            recursive: false,
            rules_path: None,
            output_dir: None,
            report_path: None,
            name_source: NameSource::default(),
            match_pattern: None,
            protect_beginning: true,
            family_override: None,
            split_camel_case: false,
        }
    }
}

impl Config {
    /// Build the classifier options, compiling the match pattern once.
    pub fn classify_options(&self) -> Result<ClassifyOptions> {
        let match_pattern = match &self.match_pattern {
            Some(pattern) => {
                let regex = Regex::new(pattern)
                    .map_err(|e| Error::Config(format!("Invalid match pattern /{}/: {}", pattern, e)))?;
                if regex.captures_len() < 3 {
                    return Err(Error::Config(format!(
                        "Match pattern /{}/ must define at least 2 capture groups",
                        pattern
                    )));
                }
                Some(regex)
            }
            None => None,
        };

        Ok(ClassifyOptions {
            match_pattern,
            protect_beginning: self.protect_beginning,
            family_override: self.family_override.clone(),
            split_camel_case: self.split_camel_case,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Config::default().classify_options().unwrap();
        assert!(options.protect_beginning);
        assert!(options.match_pattern.is_none());
    }

    #[test]
    fn test_bad_match_pattern_is_fatal() {
        let config = Config {
            match_pattern: Some("(unclosed".into()),
            ..Default::default()
        };
        assert!(matches!(config.classify_options(), Err(Error::Config(_))));

        let config = Config {
            match_pattern: Some("^(only one)$".into()),
            ..Default::default()
        };
        assert!(matches!(config.classify_options(), Err(Error::Config(_))));
    }
}

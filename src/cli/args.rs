use std::path::PathBuf;
use clap::Parser;
use crate::font::NameSource;
use crate::models::Config;

/// Fix font family and style names and infer weight, width and selection
/// flags from style words.
#[derive(Debug, Parser)]
#[command(name = "fontfix", version, about)]
pub struct Args {
    /// Font files or directories containing font files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Rule file with styleWords/familyWords (.json or .toml)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Copy fixed fonts into <DIR>/<Family>/
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write a JSON report of every font
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Which name of each font to classify
    #[arg(long, value_enum, default_value_t = NameSource::FullName)]
    pub source: NameSource,

    /// Regex whose groups 1 and 2 capture family and style directly
    #[arg(long = "match", value_name = "REGEX")]
    pub match_pattern: Option<String>,

    /// Use this family name for every font
    #[arg(long, value_name = "NAME")]
    pub family: Option<String>,

    /// Allow splitting a style word off the very start of a name
    #[arg(long)]
    pub no_protect_beginning: bool,

    /// Split camelCase family names into words
    #[arg(long)]
    pub split_camel_case: bool,

    /// Classify and report without writing fonts
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            debug_mode: self.debug,
            dry_run: self.dry_run,
            recursive: self.recursive,
            rules_path: self.rules.clone(),
            output_dir: self.output.clone(),
            report_path: self.report.clone(),
            name_source: self.source,
            match_pattern: self.match_pattern.clone(),
            protect_beginning: !self.no_protect_beginning,
            family_override: self.family.clone(),
            split_camel_case: self.split_camel_case,
        }
    }
}

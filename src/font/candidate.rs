use std::fmt;
use std::path::Path;
use clap::ValueEnum;
use serde::Serialize;
use super::record::{name_id, FontRecord};

/// Where the raw name to classify comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameSource {
    /// Full font name (ID 4), falling back to family + subfamily
    #[default]
    FullName,
    /// Typographic or legacy family + subfamily
    Family,
    /// PostScript name (ID 6)
    Postscript,
    /// File name without extension
    Filename,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSource::FullName => write!(f, "full name"),
            NameSource::Family => write!(f, "family + subfamily"),
            NameSource::Postscript => write!(f, "PostScript name"),
            NameSource::Filename => write!(f, "file name"),
        }
    }
}

/// Pick the raw name to classify for a font, falling back to its file name.
pub fn candidate_name<F: FontRecord + ?Sized>(font: &F, path: &Path, source: NameSource) -> Option<String> {
    let from_names = match source {
        NameSource::FullName => font
            .name(name_id::FULL_NAME)
            .or_else(|| family_and_subfamily(font)),
        NameSource::Family => family_and_subfamily(font),
        NameSource::Postscript => font.name(name_id::POST_SCRIPT_NAME),
        NameSource::Filename => None,
    };

    from_names.or_else(|| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .filter(|stem| !stem.trim().is_empty())
    })
}

fn family_and_subfamily<F: FontRecord + ?Sized>(font: &F) -> Option<String> {
    let family = font
        .name(name_id::TYPOGRAPHIC_FAMILY)
        .or_else(|| font.name(name_id::FAMILY))?;
    let subfamily = font
        .name(name_id::TYPOGRAPHIC_SUBFAMILY)
        .or_else(|| font.name(name_id::SUBFAMILY));

    Some(match subfamily {
        Some(subfamily) if !family.ends_with(&subfamily) => format!("{} {}", family, subfamily),
        _ => family,
    })
}

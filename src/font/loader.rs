use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use log::debug;
use ttf_parser::{Face, PlatformId};
use crate::error::{Error, Result};
use super::record::{selection, FontRecord, NameFilter, NameRecord, StyleMetrics};

/// Check if a file looks like a TrueType/OpenType font
pub fn is_valid_font_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    let ext = ext.to_lowercase();
    if ext != "ttf" && ext != "otf" {
        return false;
    }

    let mut header = [0u8; 4];
    let valid = fs::File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .is_ok()
        && (header == [0x00, 0x01, 0x00, 0x00] // TTF
            || header == [0x4F, 0x54, 0x54, 0x4F] // OTF
            || header == *b"true");

    if !valid {
        debug!("Invalid font file: {}", path.display());
    }
    valid
}

/// Font metadata read from disk, mutated in memory
#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub path: PathBuf,
    names: Vec<NameRecord>,
    weight: u16,
    width: u16,
    selection_flags: u16,
    fixed_names: Option<(String, String)>,
}

impl LoadedFont {
    /// Read the name table and OS/2 style values of a font file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let font = Self::from_bytes(&data, path)?;
        debug!(
            "Loaded {} name records from {} (weight {}, width {}, flags {:#06x})",
            font.names.len(),
            path.display(),
            font.weight,
            font.width,
            font.selection_flags
        );
        Ok(font)
    }

    pub fn from_bytes(data: &[u8], path: &Path) -> Result<Self> {
        let face = Face::parse(data, 0)
            .map_err(|e| Error::Font(format!("Failed to parse {}: {}", path.display(), e)))?;

        let names = face
            .names()
            .into_iter()
            .filter_map(|name| {
                let value = name.to_string()?;
                Some(NameRecord {
                    platform_id: platform_code(name.platform_id),
                    encoding_id: name.encoding_id,
                    language_id: name.language_id,
                    name_id: name.name_id,
                    value,
                })
            })
            .collect();

        let mut selection_flags = 0;
        if face.is_italic() {
            selection_flags |= selection::ITALIC;
        }
        if face.is_bold() {
            selection_flags |= selection::BOLD;
        }
        if face.is_regular() {
            selection_flags |= selection::REGULAR;
        }
        if face.is_oblique() {
            selection_flags |= selection::OBLIQUE;
        }

        Ok(Self {
            path: path.to_path_buf(),
            names,
            weight: face.weight().to_number(),
            width: face.width().to_number(),
            selection_flags,
            fixed_names: None,
        })
    }

    /// Build a record without a backing font binary.
    pub fn from_names(path: impl Into<PathBuf>, names: Vec<NameRecord>) -> Self {
        Self {
            path: path.into(),
            names,
            weight: 400,
            width: 5,
            selection_flags: 0,
            fixed_names: None,
        }
    }

    /// The family and style set by the last fix, if any
    pub fn fixed_names(&self) -> Option<(&str, &str)> {
        self.fixed_names
            .as_ref()
            .map(|(family, style)| (family.as_str(), style.as_str()))
    }
}

fn platform_code(platform: PlatformId) -> u16 {
    match platform {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}

impl StyleMetrics for LoadedFont {
    fn set_weight(&mut self, weight: u16) {
        self.weight = weight;
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn add_selection_flags(&mut self, flags: u16) {
        self.selection_flags |= flags;
    }
}

impl FontRecord for LoadedFont {
    fn name_records(&self, filter: &NameFilter) -> Vec<NameRecord> {
        self.names
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    fn weight(&self) -> u16 {
        self.weight
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn selection_flags(&self) -> u16 {
        self.selection_flags
    }

    fn set_family(&mut self, family_name: &str, style_name: &str) {
        self.fixed_names = Some((family_name.to_string(), style_name.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::record::name_id;

    #[test]
    fn test_rejects_non_font_files() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("notes.txt");
        fs::write(&text, b"hello").unwrap();
        assert!(!is_valid_font_file(&text));

        let fake = dir.path().join("fake.ttf");
        fs::write(&fake, b"GIF89a").unwrap();
        assert!(!is_valid_font_file(&fake));
    }

    #[test]
    fn test_garbage_is_a_font_error() {
        let err = LoadedFont::from_bytes(b"\x00\x01\x00\x00garbage", Path::new("x.ttf")).unwrap_err();
        assert!(matches!(err, Error::Font(_)));
    }

    #[test]
    fn test_in_memory_record() {
        let mut font = LoadedFont::from_names(
            "a.ttf",
            vec![NameRecord {
                platform_id: 3,
                encoding_id: 1,
                language_id: 0x0409,
                name_id: name_id::FULL_NAME,
                value: " Foo Bold ".into(),
            }],
        );
        assert_eq!(font.name(name_id::FULL_NAME).as_deref(), Some("Foo Bold"));
        assert_eq!(font.name(name_id::FAMILY), None);

        font.add_selection_flags(selection::ITALIC);
        font.add_selection_flags(selection::BOLD);
        font.set_weight(700);
        font.set_family("Foo", "Bold Italic");
        assert_eq!(font.selection_flags(), 0x21);
        assert_eq!(font.weight(), 700);
        assert_eq!(font.fixed_names(), Some(("Foo", "Bold Italic")));
    }
}

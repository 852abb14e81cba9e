use serde::Serialize;

/// OS/2 `fsSelection` bits
pub mod selection {
    pub const ITALIC: u16 = 0x0001;
    pub const UNDERSCORE: u16 = 0x0002;
    pub const NEGATIVE: u16 = 0x0004;
    pub const OUTLINED: u16 = 0x0008;
    pub const STRIKEOUT: u16 = 0x0010;
    pub const BOLD: u16 = 0x0020;
    pub const REGULAR: u16 = 0x0040;
    pub const USE_TYPO_METRICS: u16 = 0x0080;
    pub const WWS: u16 = 0x0100;
    pub const OBLIQUE: u16 = 0x0200;
}

/// Name table IDs used when picking a candidate name
pub mod name_id {
    pub const FAMILY: u16 = 1;
    pub const SUBFAMILY: u16 = 2;
    pub const FULL_NAME: u16 = 4;
    pub const POST_SCRIPT_NAME: u16 = 6;
    pub const TYPOGRAPHIC_FAMILY: u16 = 16;
    pub const TYPOGRAPHIC_SUBFAMILY: u16 = 17;
}

/// One decoded entry of a font's name table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub value: String,
}

/// Selects name records; unset fields match anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameFilter {
    pub platform_id: Option<u16>,
    pub encoding_id: Option<u16>,
    pub language_id: Option<u16>,
    pub name_id: Option<u16>,
}

impl NameFilter {
    pub fn name_id(name_id: u16) -> Self {
        Self {
            name_id: Some(name_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, record: &NameRecord) -> bool {
        self.platform_id.map_or(true, |id| id == record.platform_id)
            && self.encoding_id.map_or(true, |id| id == record.encoding_id)
            && self.language_id.map_or(true, |id| id == record.language_id)
            && self.name_id.map_or(true, |id| id == record.name_id)
    }
}

/// The style metrics a style word can set
pub trait StyleMetrics {
    fn set_weight(&mut self, weight: u16);
    fn set_width(&mut self, width: u16);
    fn add_selection_flags(&mut self, flags: u16);
}

/// In-memory view of a font's naming and style metadata
pub trait FontRecord: StyleMetrics {
    fn name_records(&self, filter: &NameFilter) -> Vec<NameRecord>;
    fn weight(&self) -> u16;
    fn width(&self) -> u16;
    fn selection_flags(&self) -> u16;
    fn set_family(&mut self, family_name: &str, style_name: &str);

    /// First non-empty value for a name ID, preferring English Windows records.
    fn name(&self, name_id: u16) -> Option<String> {
        let records = self.name_records(&NameFilter::name_id(name_id));
        records
            .iter()
            .find(|r| r.platform_id == 3 && r.language_id == 0x0409 && !r.value.trim().is_empty())
            .or_else(|| records.iter().find(|r| !r.value.trim().is_empty()))
            .map(|r| r.value.trim().to_string())
    }
}

/// Clean a name for use in filenames
pub fn clean_name(name: &str) -> String {
    // Replace invalid filename characters with underscores
    let invalid_chars = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let mut cleaned: String = name
        .chars()
        .map(|c| if invalid_chars.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    // Remove leading/trailing spaces and dots
    cleaned = cleaned.trim().trim_matches('.').to_string();

    if cleaned.is_empty() {
        cleaned = "Unknown".to_string();
    }

    cleaned
}

/// File name for a fixed font: "Family Style.ext", or "Family.ext" without a style
pub fn fixed_file_name(family_name: &str, style_name: &str, extension: &str) -> String {
    let base_name = if style_name.is_empty() {
        family_name.to_string()
    } else {
        format!("{} {}", family_name, style_name)
    };
    format!("{}.{}", clean_name(&base_name), extension.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("Foo: Bar/Baz"), "Foo_ Bar_Baz");
        assert_eq!(clean_name("  ..Hidden. "), "Hidden");
        assert_eq!(clean_name(""), "Unknown");
    }

    #[test]
    fn test_fixed_file_name() {
        assert_eq!(fixed_file_name("Myriad Pro", "Bold", "OTF"), "Myriad Pro Bold.otf");
        assert_eq!(fixed_file_name("Myriad Pro", "", "ttf"), "Myriad Pro.ttf");
    }
}

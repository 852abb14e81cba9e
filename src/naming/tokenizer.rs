use super::separator::BOUNDARY_MARKER;

/// Split a marked name into words on whitespace, dashes and boundary markers.
pub fn tokenize(marked_name: &str) -> Vec<String> {
    marked_name
        .split(|c: char| c.is_whitespace() || c == '-' || c == BOUNDARY_MARKER)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a captured style run on underscores and whitespace.
pub fn tokenize_style_run(style_run: &str) -> Vec<String> {
    style_run
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_separators() {
        let marked = format!("My{m}Font{m} -Bold{m}{m}Italic", m = BOUNDARY_MARKER);
        assert_eq!(tokenize(&marked), vec!["My", "Font", "Bold", "Italic"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  - \t").is_empty());
    }

    #[test]
    fn test_style_run_splits_on_underscores() {
        assert_eq!(tokenize_style_run("Bold_Italic"), vec!["Bold", "Italic"]);
        assert_eq!(tokenize_style_run("_ Bold__Italic "), vec!["Bold", "Italic"]);
    }
}

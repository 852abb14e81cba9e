use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CAMEL_CASE_SEAM: Regex = Regex::new(r"(\p{Ll})(\p{Lu}|\p{Lt})").unwrap();
}

/// Capitalize the first character, leaving the rest untouched.
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Title-case a word whose letters are all lowercase or all uppercase,
/// otherwise only capitalize its first character.
pub fn title_case_if_uniform(word: &str) -> String {
    let letters = word.chars().filter(|c| c.is_alphabetic());
    let (mut lower, mut upper, mut any) = (true, true, false);
    for c in letters {
        any = true;
        lower &= c.is_lowercase();
        upper &= c.is_uppercase();
    }

    if !any || !(lower || upper) {
        return upper_first(word);
    }

    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Insert a space wherever a lowercase letter runs straight into an
/// uppercase or titlecase one.
pub fn split_camel_case(name: &str) -> String {
    CAMEL_CASE_SEAM.replace_all(name, "$1 $2").into_owned()
}

/// Join family words, capitalizing each one.
pub fn join_family(words: &[String]) -> String {
    words
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("myFont"), "MyFont");
        assert_eq!(upper_first("éclair"), "Éclair");
        assert_eq!(upper_first(""), "");
        assert_eq!(upper_first("ABC"), "ABC");
    }

    #[test]
    fn test_title_case_if_uniform() {
        assert_eq!(title_case_if_uniform("italic"), "Italic");
        assert_eq!(title_case_if_uniform("SEMIBOLD"), "Semibold");
        assert_eq!(title_case_if_uniform("semiBold"), "SemiBold");
        assert_eq!(title_case_if_uniform("SemiBold"), "SemiBold");
        assert_eq!(title_case_if_uniform("100"), "100");
    }

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split_camel_case("HelveticaNeue Pro"), "Helvetica Neue Pro");
        assert_eq!(split_camel_case("ABC Sans"), "ABC Sans");
    }

    #[test]
    fn test_join_family() {
        let words = vec!["myriad".to_string(), "pro".to_string()];
        assert_eq!(join_family(&words), "Myriad Pro");
    }
}

use crate::dictionary::StyleWordDictionary;

/// Where a token sequence splits into family and style words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Boundary {
    /// Index of the first style token; `None` when the whole name is family
    pub first_style_index: Option<usize>,
    /// Indices of family words pulled out of the style run, in order
    pub reclaimed: Vec<usize>,
}

impl Boundary {
    /// Split `tokens` into (family, style) words.
    pub fn split(&self, tokens: &[String]) -> (Vec<String>, Vec<String>) {
        let Some(first) = self.first_style_index else {
            return (tokens.to_vec(), Vec::new());
        };

        let mut family: Vec<String> = tokens[..first].to_vec();
        family.extend(self.reclaimed.iter().map(|&i| tokens[i].clone()));

        let style = tokens[first..]
            .iter()
            .enumerate()
            .filter(|(offset, _)| !self.reclaimed.contains(&(first + offset)))
            .map(|(_, token)| token.clone())
            .collect();

        (family, style)
    }
}

/// Find the family/style split point.
///
/// Style words have to form a run that reaches the last token. A family word
/// right after a style word is reclaimed into the family name without breaking
/// the run; any other unknown word cancels the run found so far. Index 0 never
/// starts a style run.
pub fn classify_boundary(tokens: &[String], dictionary: &StyleWordDictionary) -> Boundary {
    let token_count = tokens.len();
    let mut previous_is_style = false;
    let mut first_style_index = None;
    let mut reclaimed = Vec::new();

    for (i, token) in tokens.iter().enumerate().skip(1) {
        let is_style = dictionary.is_style_word(token, i, token_count);

        if !previous_is_style && is_style {
            first_style_index = Some(i);
        } else if !is_style {
            if previous_is_style && dictionary.is_family_word(token) {
                reclaimed.push(i);
                continue;
            }
            first_style_index = None;
            reclaimed.clear();
        }

        previous_is_style = is_style;
    }

    Boundary {
        first_style_index,
        reclaimed,
    }
}

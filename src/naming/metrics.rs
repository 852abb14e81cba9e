use log::trace;
use crate::dictionary::StyleWordDictionary;
use crate::font::StyleMetrics;

/// Conform style tokens to their dictionary spelling and apply the metrics
/// their rules carry. Weight and width are overwritten by later tokens,
/// selection flags accumulate.
pub fn apply_metrics<M: StyleMetrics + ?Sized>(
    style_tokens: &[String],
    dictionary: &StyleWordDictionary,
    metrics: &mut M,
) -> Vec<String> {
    style_tokens
        .iter()
        .map(|token| {
            let Some(rule) = dictionary.find_style_rule(token) else {
                return token.clone();
            };

            if let Some(weight) = rule.weight {
                metrics.set_weight(weight);
            }
            if let Some(width) = rule.width {
                metrics.set_width(width);
            }
            if let Some(flags) = rule.fs_selection {
                metrics.add_selection_flags(flags);
            }
            trace!("Style word \"{}\" matched rule \"{}\"", token, rule.text);

            if rule.text.is_empty() {
                token.clone()
            } else {
                rule.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricsApplied;

    fn dictionary() -> StyleWordDictionary {
        StyleWordDictionary::from_json_str(
            r#"{
                "styleWords": [
                    { "text": "Bold", "weight": 700, "fsSelection": 32 },
                    { "text": "Light", "weight": 300 },
                    { "text": "Italic", "match": "It(al(ic)?)?", "fsSelection": 1 },
                    { "text": "Condensed", "match": "Cond(ensed)?", "width": 3 },
                    { "text": "", "match": "W[0-9]+" }
                ]
            }"#,
        )
        .unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tokens_take_canonical_spelling() {
        let mut metrics = MetricsApplied::default();
        let style = apply_metrics(&tokens(&["BOLD", "ital", "cond"]), &dictionary(), &mut metrics);
        assert_eq!(style, tokens(&["Bold", "Italic", "Condensed"]));
        assert_eq!(metrics.weight, Some(700));
        assert_eq!(metrics.width, Some(3));
        assert_eq!(metrics.selection_flags, Some(33));
    }

    #[test]
    fn test_later_weight_wins() {
        let mut metrics = MetricsApplied::default();
        apply_metrics(&tokens(&["Bold", "Light"]), &dictionary(), &mut metrics);
        assert_eq!(metrics.weight, Some(300));
        assert_eq!(metrics.selection_flags, Some(32));
    }

    #[test]
    fn test_unmatched_and_pattern_only_tokens() {
        let mut metrics = MetricsApplied::default();
        let style = apply_metrics(&tokens(&["Fancy", "W3"]), &dictionary(), &mut metrics);
        assert_eq!(style, tokens(&["Fancy", "W3"]));
        assert_eq!(metrics, MetricsApplied::default());
    }
}

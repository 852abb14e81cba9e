use std::collections::BTreeMap;
use crate::utils::clean_name;
use super::processor::{FixOutcome, FixedFont};

/// Group fixed fonts by the family name they were classified into.
///
/// Runs only once every font of the batch is classified; keys are the
/// cleaned directory names so families differing only in forbidden
/// characters end up together.
pub fn group_by_family(outcomes: &[FixOutcome]) -> BTreeMap<String, Vec<&FixedFont>> {
    let mut groups: BTreeMap<String, Vec<&FixedFont>> = BTreeMap::new();

    for outcome in outcomes {
        if let FixOutcome::Fixed(fixed) = outcome {
            groups
                .entry(clean_name(&fixed.result.family_name))
                .or_default()
                .push(fixed);
        }
    }

    for fonts in groups.values_mut() {
        fonts.sort_by(|a, b| a.result.style_name.cmp(&b.result.style_name));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::font::LoadedFont;
    use crate::models::{ClassificationResult, MetricsApplied};
    use std::path::PathBuf;

    fn fixed(path: &str, family: &str, style: &str) -> FixOutcome {
        FixOutcome::Fixed(FixedFont {
            record: LoadedFont::from_names(path, Vec::new()),
            raw_name: format!("{} {}", family, style),
            result: ClassificationResult {
                family_name: family.to_string(),
                style_name: style.to_string(),
                metrics: MetricsApplied::default(),
            },
        })
    }

    #[test]
    fn test_groups_by_family() {
        let outcomes = vec![
            fixed("1.otf", "Myriad Pro", "Italic"),
            fixed("2.otf", "Minion", "Bold"),
            fixed("3.otf", "Myriad Pro", "Bold"),
            FixOutcome::Skipped {
                path: PathBuf::from("4.otf"),
                raw_name: None,
                error: Error::EmptyName(String::new()),
            },
        ];

        let groups = group_by_family(&outcomes);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Minion", "Myriad Pro"]);

        let myriad: Vec<&str> = groups["Myriad Pro"]
            .iter()
            .map(|font| font.result.style_name.as_str())
            .collect();
        assert_eq!(myriad, vec!["Bold", "Italic"]);
    }

    #[test]
    fn test_cleaned_names_share_a_group() {
        let outcomes = vec![fixed("1.otf", "A/B", "Bold"), fixed("2.otf", "A_B", "Light")];
        let groups = group_by_family(&outcomes);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["A_B"].len(), 2);
    }
}

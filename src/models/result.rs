use serde::Serialize;
use crate::font::{FontRecord, StyleMetrics};

/// Metrics inferred from the style words of one name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsApplied {
    pub weight: Option<u16>,
    pub width: Option<u16>,
    pub selection_flags: Option<u16>,
}

impl StyleMetrics for MetricsApplied {
    fn set_weight(&mut self, weight: u16) {
        self.weight = Some(weight);
    }

    fn set_width(&mut self, width: u16) {
        self.width = Some(width);
    }

    fn add_selection_flags(&mut self, flags: u16) {
        self.selection_flags = Some(self.selection_flags.unwrap_or(0) | flags);
    }
}

impl MetricsApplied {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.width.is_none() && self.selection_flags.is_none()
    }

    /// Replay these metrics onto another target.
    pub fn apply_to<M: StyleMetrics + ?Sized>(&self, target: &mut M) {
        if let Some(weight) = self.weight {
            target.set_weight(weight);
        }
        if let Some(width) = self.width {
            target.set_width(width);
        }
        if let Some(flags) = self.selection_flags {
            target.add_selection_flags(flags);
        }
    }
}

/// Family/style split of one raw name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub family_name: String,
    /// Empty when the name carries no style words
    pub style_name: String,
    pub metrics: MetricsApplied,
}

impl ClassificationResult {
    /// Write names and metrics back onto a font record.
    pub fn apply_to<F: FontRecord + ?Sized>(&self, record: &mut F) {
        self.metrics.apply_to(record);
        record.set_family(&self.family_name, &self.style_name);
    }

    pub fn full_name(&self) -> String {
        if self.style_name.is_empty() {
            self.family_name.clone()
        } else {
            format!("{} {}", self.family_name, self.style_name)
        }
    }
}

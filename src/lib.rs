//! # fontfix
//!
//! Normalizes messy font naming metadata into a typographically correct
//! family/style split, and infers weight class, width class and selection
//! flags from the style words it recognizes.
//!
//! Classification is driven by a [`StyleWordDictionary`] loaded once per run
//! and passed explicitly to [`classify`]:
//!
//! ```
//! use fontfix::{classify, ClassifyOptions, StyleWordDictionary};
//!
//! let dictionary = StyleWordDictionary::embedded().unwrap();
//! let result = classify("MyFontBold", &dictionary, &ClassifyOptions::default()).unwrap();
//! assert_eq!(result.family_name, "MyFont");
//! assert_eq!(result.style_name, "Bold");
//! assert_eq!(result.metrics.weight, Some(700));
//! ```

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod font;
pub mod models;
pub mod naming;
pub mod organizer;
pub mod utils;

pub use dictionary::{FamilyWordRule, StyleWordDictionary, StyleWordRule};
pub use error::{Error, Result};
pub use models::{ClassificationResult, Config, MetricsApplied};
pub use naming::{classify, ClassifyOptions};

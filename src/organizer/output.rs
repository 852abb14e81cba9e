use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use serde::Serialize;
use crate::error::{Error, Result};
use crate::utils::{ensure_directory_exists, fixed_file_name, unique_path};
use super::processor::{FixOutcome, FixedFont, OutcomeReport};

/// Persists a fixed font into an output directory.
pub trait FontWriter: Sync {
    fn write_font(&self, font: &FixedFont, output_dir: &Path) -> Result<PathBuf>;
}

/// Copies the original font binary under its fixed name. Rewriting the
/// binary tables is left to a dedicated font writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyWriter;

impl FontWriter for CopyWriter {
    fn write_font(&self, font: &FixedFont, output_dir: &Path) -> Result<PathBuf> {
        let extension = font
            .record
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("ttf");
        let file_name = fixed_file_name(&font.result.family_name, &font.result.style_name, extension);
        let target = unique_path(output_dir, &file_name);

        fs::copy(&font.record.path, &target)?;
        debug!("Copied {} to {}", font.record.path.display(), target.display());
        Ok(target)
    }
}

/// Where each input font was written, or the error that stopped it.
pub type WrittenFonts = BTreeMap<PathBuf, Result<PathBuf>>;

/// Write every family group into `<output_dir>/<Family>/`. A font that fails
/// to write is recorded and the remaining fonts are still written.
pub fn write_groups(
    groups: &BTreeMap<String, Vec<&FixedFont>>,
    output_dir: &Path,
    writer: &dyn FontWriter,
) -> WrittenFonts {
    let mut written = WrittenFonts::new();

    for (family, fonts) in groups {
        let family_dir = output_dir.join(family);
        debug!("Writing {} font(s) of family {}", fonts.len(), family);

        let prepared = ensure_directory_exists(&family_dir);
        if let Err(e) = &prepared {
            warn!("Cannot create {}: {}", family_dir.display(), e);
        }

        for font in fonts {
            let target = match &prepared {
                Ok(()) => writer.write_font(font, &family_dir),
                Err(_) => Err(Error::InvalidPath(family_dir.clone())),
            };
            if let Err(e) = &target {
                warn!("Failed to write {}: {}", font.record.path.display(), e);
            }
            written.insert(font.record.path.clone(), target);
        }
    }

    let failed = written.values().filter(|target| target.is_err()).count();
    info!(
        "Wrote {} font(s) into {} families, {} failed",
        written.len() - failed,
        groups.len(),
        failed
    );
    written
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    fixed: usize,
    skipped: usize,
    fonts: &'a [OutcomeReport],
}

/// Build the report lines, attaching output paths or write errors.
pub fn build_report(outcomes: &[FixOutcome], written: &WrittenFonts) -> Vec<OutcomeReport> {
    outcomes
        .iter()
        .map(|outcome| {
            let mut report = OutcomeReport::from(outcome);
            match written.get(outcome.path()) {
                Some(Ok(target)) => report.output = Some(target.clone()),
                Some(Err(e)) => report.write_error = Some(e.to_string()),
                None => {}
            }
            report
        })
        .collect()
}

/// Write the JSON report of a run.
pub fn write_report(path: &Path, reports: &[OutcomeReport]) -> Result<()> {
    let fixed = reports.iter().filter(|report| report.result.is_some()).count();
    let report = Report {
        fixed,
        skipped: reports.len() - fixed,
        fonts: reports,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&report)?)?;
    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::LoadedFont;
    use crate::models::{ClassificationResult, MetricsApplied};
    use crate::organizer::group::group_by_family;

    fn fixed(path: PathBuf, family: &str, style: &str) -> FixOutcome {
        FixOutcome::Fixed(FixedFont {
            record: LoadedFont::from_names(path, Vec::new()),
            raw_name: format!("{}{}", family, style),
            result: ClassificationResult {
                family_name: family.to_string(),
                style_name: style.to_string(),
                metrics: MetricsApplied {
                    weight: Some(700),
                    ..Default::default()
                },
            },
        })
    }

    #[test]
    fn test_write_groups_and_report() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let first = input.path().join("a.otf");
        let second = input.path().join("b.otf");
        fs::write(&first, b"one").unwrap();
        fs::write(&second, b"two").unwrap();

        let outcomes = vec![
            fixed(first.clone(), "Foo", "Bold"),
            fixed(second.clone(), "Foo", "Bold"),
            FixOutcome::Skipped {
                path: input.path().join("c.otf"),
                raw_name: Some("".into()),
                error: Error::EmptyName("".into()),
            },
        ];

        let groups = group_by_family(&outcomes);
        let written = write_groups(&groups, output.path(), &CopyWriter);

        let family_dir = output.path().join("Foo");
        assert_eq!(written[&first].as_ref().unwrap(), &family_dir.join("Foo Bold.otf"));
        assert_eq!(written[&second].as_ref().unwrap(), &family_dir.join("Foo Bold_1.otf"));
        assert_eq!(fs::read(family_dir.join("Foo Bold_1.otf")).unwrap(), b"two");

        let reports = build_report(&outcomes, &written);
        let report_path = output.path().join("report.json");
        write_report(&report_path, &reports).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(json["fixed"], 2);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["fonts"][0]["result"]["familyName"], "Foo");
        assert_eq!(json["fonts"][0]["result"]["metrics"]["weight"], 700);
        assert!(json["fonts"][2]["error"].as_str().unwrap().contains("Empty name"));
    }

    struct RejectingWriter(PathBuf);

    impl FontWriter for RejectingWriter {
        fn write_font(&self, font: &FixedFont, output_dir: &Path) -> Result<PathBuf> {
            if font.record.path == self.0 {
                return Err(Error::Font("write refused".into()));
            }
            CopyWriter.write_font(font, output_dir)
        }
    }

    #[test]
    fn test_failed_write_does_not_stop_others() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = ["a.otf", "b.otf", "c.otf"]
            .iter()
            .map(|name| input.path().join(name))
            .collect();
        for path in &paths {
            fs::write(path, b"font").unwrap();
        }

        let outcomes = vec![
            fixed(paths[0].clone(), "Bar", "Regular"),
            fixed(paths[1].clone(), "Foo", "Bold"),
            fixed(paths[2].clone(), "Foo", "Italic"),
        ];
        let groups = group_by_family(&outcomes);
        let written = write_groups(&groups, output.path(), &RejectingWriter(paths[1].clone()));

        assert_eq!(written.len(), 3);
        assert!(written[&paths[0]].is_ok());
        assert!(written[&paths[1]].is_err());
        assert!(output.path().join("Foo").join("Foo Italic.otf").exists());

        let reports = build_report(&outcomes, &written);
        assert!(reports[0].output.is_some());
        assert!(reports[1].output.is_none());
        assert!(reports[1].write_error.as_deref().unwrap().contains("write refused"));
        assert!(reports[2].write_error.is_none());
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::error::{Error, Result};
use crate::font::is_valid_font_file;

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// First free path for `file_name` in `dir`, appending `_1`, `_2`, ... on collision
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let file_stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = path.extension().unwrap_or_default().to_string_lossy();

    let mut counter = 1;
    loop {
        let unique = dir.join(format!("{}_{}.{}", file_stem, counter, extension));
        if !unique.exists() {
            return unique;
        }
        counter += 1;
    }
}

/// Expand input paths into the font files they name or contain
pub fn collect_font_files(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut fonts = Vec::new();
    for input in inputs {
        if input.is_file() {
            if is_valid_font_file(input) {
                fonts.push(input.clone());
            } else {
                warn!("Skipping {}: not a TrueType/OpenType font", input.display());
            }
        } else if input.is_dir() {
            collect_from_directory(input, recursive, &mut fonts)?;
        } else {
            return Err(Error::InvalidPath(input.clone()));
        }
    }
    fonts.sort();
    fonts.dedup();
    Ok(fonts)
}

fn collect_from_directory(dir: &Path, recursive: bool, fonts: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            if is_valid_font_file(&path) {
                fonts.push(path);
            }
        } else if path.is_dir() && recursive {
            collect_from_directory(&path, recursive, fonts)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_font_stub(path: &Path) {
        fs::write(path, [0x4F, 0x54, 0x54, 0x4F, 0, 0]).unwrap();
    }

    #[test]
    fn test_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(unique_path(dir.path(), "A.otf"), dir.path().join("A.otf"));

        fs::write(dir.path().join("A.otf"), b"x").unwrap();
        fs::write(dir.path().join("A_1.otf"), b"x").unwrap();
        assert_eq!(unique_path(dir.path(), "A.otf"), dir.path().join("A_2.otf"));
    }

    #[test]
    fn test_collect_font_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_font_stub(&dir.path().join("a.otf"));
        write_font_stub(&nested.join("b.otf"));
        fs::write(dir.path().join("readme.txt"), b"hi").unwrap();

        let flat = collect_font_files(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.otf")]);

        let deep = collect_font_files(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            collect_font_files(&[missing], false),
            Err(Error::InvalidPath(_))
        ));
    }
}

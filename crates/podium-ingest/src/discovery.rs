//! Dataset file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Expected source filenames inside a data directory.
pub const COUNTRY_PROFILES_FILE: &str = "Olympic_Country_Profiles.csv";
pub const GAMES_SUMMARY_FILE: &str = "Olympic_Games_Summary.csv";
pub const MEDAL_TALLY_FILE: &str = "Olympic_Medal_Tally_History.csv";
pub const ATHLETE_EVENTS_FILE: &str = "Olympic_Athlete_Event_Details.csv";

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Locates `filename` in `dir`, matching the name case-insensitively.
pub fn find_dataset(dir: &Path, filename: &str) -> Result<PathBuf> {
    let direct = dir.join(filename);
    if direct.is_file() {
        return Ok(direct);
    }

    for path in list_csv_files(dir)? {
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.eq_ignore_ascii_case(filename));
        if matches {
            return Ok(path);
        }
    }

    Err(IngestError::DatasetNotFound {
        dir: dir.to_path_buf(),
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_datasets_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("olympic_country_profiles.csv"), "noc,country\n")
            .unwrap();
        let found = find_dataset(dir.path(), COUNTRY_PROFILES_FILE).unwrap();
        assert!(found.is_file());
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_dataset(dir.path(), GAMES_SUMMARY_FILE).unwrap_err();
        assert!(matches!(err, IngestError::DatasetNotFound { .. }));
    }

    #[test]
    fn lists_only_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.csv"), "x\n").unwrap();
        std::fs::write(dir.path().join("b.txt"), "x\n").unwrap();
        let files = list_csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }
}

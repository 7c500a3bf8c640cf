//! Read-only store of puzzle inputs on the local filesystem

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store for puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    input_dir: PathBuf,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        assert_eq!(store.input_path(2024, 1), PathBuf::from("inputs/2024_day01.txt"));
        assert_eq!(store.input_path(2023, 25), PathBuf::from("inputs/2023_day25.txt"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let input = "r, wr, b\n\nbrwrr\n";
        fs::write(temp.path().join("2024_day19.txt"), input).unwrap();

        assert!(store.contains(2024, 19));
        assert_eq!(store.get(2024, 19).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 1));
        match store.get(2024, 1) {
            Err(InputError::Missing(path)) => assert!(path.ends_with("2024_day01.txt")),
            other => panic!("expected a missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2024_day02.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 2));
        assert!(matches!(store.get(2024, 2), Err(InputError::Io { .. })));
    }
}

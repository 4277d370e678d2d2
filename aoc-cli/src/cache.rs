//! Local directory of puzzle inputs

use crate::error::CacheError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Puzzle inputs stored as `{dir}/{year}_day{day:02}.txt`
///
/// Inputs are user-specific and never fetched; anything missing has to be
/// dropped into the directory by hand.
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the input file for a year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.cache_path(year, day).is_file()
    }

    /// Input for a year/day, or `None` if there is no file for it
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        match read_input(&self.cache_path(year, day)) {
            Ok(input) => Ok(Some(input)),
            Err(CacheError::Missing(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Read an input file, telling a missing file apart from a failed read
pub fn read_input(path: &Path) -> Result<String, CacheError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CacheError::Missing(path.to_path_buf()),
        _ => CacheError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

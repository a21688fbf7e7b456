/*
levels.rs

Copyright 2025 Hervé Quatremain

This file is part of Tenpair.

Tenpair is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tenpair is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tenpair. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Load and export level catalogs.
//!
//! The saved object is a serialization of a list of [`LevelConfig`] objects in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::levels::{self, LevelConfig};

/// Object to load and export a level catalog.
pub struct LevelFile {
    /// Path to the catalog file.
    path: PathBuf,
}

impl LevelFile {
    /// Create a [`LevelFile`] object.
    pub fn new(path: PathBuf) -> Self {
        debug!("Level file: {path:?}");
        Self { path }
    }

    /// Retrieve the levels from the catalog file.
    ///
    /// Return the levels or None if the file does not exist.
    /// The levels are verified before being returned.
    pub fn get_levels(&self) -> Result<Option<Vec<LevelConfig>>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.path) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let level_list: Vec<LevelConfig> = serde_json::from_reader(reader)?;
        levels::validate_catalog(&level_list)?;
        debug!("{} levels loaded from {:?}", level_list.len(), self.path);
        Ok(Some(level_list))
    }

    /// Save the provided levels.
    pub fn save_levels(&self, level_list: &[LevelConfig]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, level_list)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("tenpair-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let saver = LevelFile::new(temp_file("missing.json"));
        assert!(saver.get_levels().unwrap().is_none());
    }

    #[test]
    fn export_then_load() {
        let path: PathBuf = temp_file("export.json");
        let saver = LevelFile::new(path.clone());
        let catalog: Vec<LevelConfig> = levels::catalog();

        saver.save_levels(&catalog).unwrap();
        assert_eq!(saver.get_levels().unwrap(), Some(catalog));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn invalid_catalogs_are_rejected() {
        let path: PathBuf = temp_file("invalid.json");
        let saver = LevelFile::new(path.clone());

        saver.save_levels(&[]).unwrap();
        let error = saver.get_levels().unwrap_err();
        assert_eq!(
            error.downcast_ref::<GameError>(),
            Some(&GameError::EmptyCatalog)
        );

        fs::write(&path, "not json").unwrap();
        assert!(saver.get_levels().is_err());
        let _ = fs::remove_file(path);
    }
}

//! File-backed high score: one decimal integer in a text file.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::core::RecordKeeper;

#[derive(Debug, Clone)]
pub struct FileRecord {
    path: PathBuf,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordKeeper for FileRecord {
    fn load_record(&mut self) -> u32 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!("record: cannot read {}: {e}", self.path.display());
                return 0;
            }
        };
        match text.trim().parse::<u32>() {
            Ok(value) => value,
            Err(e) => {
                warn!("record: ignoring garbled {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save_record(&mut self, score: u32) {
        match std::fs::write(&self.path, format!("{score}\n")) {
            Ok(()) => info!("record: saved {score} to {}", self.path.display()),
            Err(e) => warn!("record: cannot write {}: {e}", self.path.display()),
        }
    }
}

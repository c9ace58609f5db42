//! Level library: the level files available in a directory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use sidescroller_core::level::{LevelDescriptor, LevelError};

use crate::error::AppError;

/// One descriptor file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelFile {
    pub path: PathBuf,
    pub file_name: String,
    /// First level's name, or the file stem when there is none.
    pub display_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct LevelLibrary {
    files: Vec<LevelFile>,
}

impl LevelLibrary {
    /// Collect every `*.json` file in `dir`, sorted by file name.
    /// Files that fail to parse are still listed, under their stem.
    pub fn scan(dir: &Path) -> Result<Self, LevelError> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned)
            else {
                continue;
            };
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(&file_name)
                .to_owned();

            let display_name = match LevelDescriptor::load(&path) {
                Ok(descriptor) => descriptor.display_name(&stem).to_owned(),
                Err(err) => {
                    warn!(file = %file_name, error = %err, "unreadable level file");
                    stem
                }
            };

            files.push(LevelFile {
                path,
                file_name,
                display_name,
            });
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        debug!(dir = %dir.display(), count = files.len(), "level library scanned");
        Ok(Self { files })
    }

    pub fn files(&self) -> &[LevelFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn find(&self, file_name: &str) -> Option<&LevelFile> {
        self.files.iter().find(|f| f.file_name == file_name)
    }

    /// Read and parse a listed file.
    pub fn load(&self, file_name: &str) -> Result<LevelDescriptor, AppError> {
        let file = self
            .find(file_name)
            .ok_or_else(|| AppError::UnknownLevelFile(file_name.to_owned()))?;
        Ok(LevelDescriptor::load(&file.path)?)
    }
}

//! Where to fetch from and where to write to.

use std::path::{Path, PathBuf};

pub const VOICES_URL: &str = "https://api.elevenlabs.io/v1/voices";
pub const API_KEY_HEADER: &str = "xi-api-key";
pub const JSON_FILE: &str = "voices.json";
pub const CSV_FILE: &str = "voices.csv";

/// Export Config
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub voices_url: String,
    /// Directory both output files are written into. Defaults to the working directory.
    pub output_dir: PathBuf,
    pub json_file: String,
    pub csv_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            voices_url: VOICES_URL.to_string(),
            output_dir: PathBuf::new(),
            json_file: JSON_FILE.to_string(),
            csv_file: CSV_FILE.to_string(),
        }
    }
}

impl ExportConfig {
    /// Same file names and endpoint, written under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }
}

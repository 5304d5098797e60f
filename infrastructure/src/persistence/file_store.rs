//! Filesystem result store
//!
//! Writes each successful run to its own timestamped directory under the
//! configured root:
//!
//! ```text
//! <root>/<timestamp>_<model>_<technique>/
//!   correction.sh   the generated script, ready for review
//!   run.json        model, technique, vulnerability, prompts, timing
//! ```

use chrono::{Local, SecondsFormat, Utc};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use vulnmend_application::ports::result_store::{ResultStore, StoreError};
use vulnmend_domain::RemediationRecord;

/// Result store writing one directory per run
pub struct FileResultStore {
    root: PathBuf,
}

impl FileResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pick a run directory that does not exist yet. Timestamps are
    /// millisecond-precision; the counter suffix handles collisions.
    fn run_dir(&self, record: &RemediationRecord) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        let base = format!("{}_{}_{}", stamp, record.model, record.technique);
        let mut candidate = self.root.join(&base);
        let mut counter = 1;
        while candidate.exists() {
            candidate = self.root.join(format!("{base}-{counter}"));
            counter += 1;
        }
        candidate
    }
}

impl ResultStore for FileResultStore {
    fn save(&self, record: &RemediationRecord) -> Result<PathBuf, StoreError> {
        let dir = self.run_dir(record);
        fs::create_dir_all(&dir)?;

        fs::write(dir.join("correction.sh"), &record.correction)?;

        let mut metadata = serde_json::to_value(record)?;
        if let serde_json::Value::Object(map) = &mut metadata {
            map.insert(
                "created_at".to_string(),
                serde_json::Value::String(
                    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                ),
            );
        }

        let file = File::create(dir.join("run.json"))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &metadata)?;
        writer.flush()?;

        debug!("Saved remediation record to {}", dir.display());
        Ok(dir)
    }
}

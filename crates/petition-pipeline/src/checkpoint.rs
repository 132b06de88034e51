//! Per-step JSON state files for debugging and resuming a run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use petition_core::{ErrorChain, EvidenceRecord, PetitionError, PetitionResult};

/// Step name of the gathered-evidence state.
pub const STEP_EVIDENCE: &str = "step3_evidence";
/// Step name of the validated-and-ranked state.
pub const STEP_VALIDATE: &str = "step4_validate";
/// Step name of the rendered report state.
pub const STEP_REPORT: &str = "step5_report";

/// One run directory holding `<step>_state.json` files.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    /// Create `statement_<YYYYmmdd_HHMMSS>` under `output_root`.
    pub fn create(output_root: impl AsRef<Path>) -> PetitionResult<Self> {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let dir = output_root.as_ref().join(format!("statement_{stamp}"));
        fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "checkpoint directory ready");
        Ok(Self { dir })
    }

    /// Use an existing run directory, e.g. to resume.
    pub fn open(dir: impl Into<PathBuf>) -> PetitionResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(PetitionError::Checkpoint {
                step: "open".to_string(),
                reason: format!("{} is not a directory", dir.display()),
            });
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, step: &str) -> PathBuf {
        self.dir.join(format!("{step}_state.json"))
    }

    pub fn exists(&self, step: &str) -> bool {
        self.path_for(step).is_file()
    }

    /// Write pretty-printed state for a step, replacing any previous file.
    pub fn save<T: Serialize>(&self, step: &str, state: &T) -> PetitionResult<PathBuf> {
        let path = self.path_for(step);
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&path, json)?;
        info!(step, path = %path.display(), "checkpoint saved");
        Ok(path)
    }

    pub fn load<T: DeserializeOwned>(&self, step: &str) -> PetitionResult<T> {
        let path = self.path_for(step);
        if !path.is_file() {
            return Err(PetitionError::Checkpoint {
                step: step.to_string(),
                reason: format!("{} not found", path.display()),
            });
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Read evidence records from a JSON file. See [`parse_records`].
pub fn load_records(path: impl AsRef<Path>) -> PetitionResult<(Vec<EvidenceRecord>, ErrorChain)> {
    let text = fs::read_to_string(path)?;
    parse_records(&text)
}

/// Parse a JSON array of evidence records, or an object with an `evidence`
/// array. Each element is deserialized on its own: a malformed record is
/// reported in the returned chain and skipped, the rest still load.
pub fn parse_records(json: &str) -> PetitionResult<(Vec<EvidenceRecord>, ErrorChain)> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("evidence") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(PetitionError::Checkpoint {
                    step: STEP_EVIDENCE.to_string(),
                    reason: "expected an `evidence` array".to_string(),
                })
            }
        },
        _ => {
            return Err(PetitionError::Checkpoint {
                step: STEP_EVIDENCE.to_string(),
                reason: "expected an array of evidence records".to_string(),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut errors = ErrorChain::new();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<EvidenceRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed evidence record");
                errors.push(
                    index,
                    PetitionError::InvalidRecord {
                        index,
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    Ok((records, errors))
}

//! The `rank` and `report` commands behind the `petition-evidence` binary.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use petition_core::{ErrorChain, PetitionError, PetitionResult, ScoringConfig};
use petition_scoring::EvidenceScorer;

use crate::checkpoint::{load_records, CheckpointStore, STEP_REPORT, STEP_VALIDATE};
use crate::report::{ApplicantInfo, ReportBuilder};
use crate::steps::{run_validation_step, ValidationState};

/// Inputs of a `rank` run.
#[derive(Debug, Clone)]
pub struct RankOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    /// Replaces the configured minimum score when set.
    pub min_score: Option<u32>,
    pub output_dir: PathBuf,
}

/// What a `rank` run produced.
#[derive(Debug)]
pub struct RankOutcome {
    pub run_dir: PathBuf,
    pub state: ValidationState,
    /// Records that could not be read and were skipped.
    pub skipped: ErrorChain,
}

/// Score, filter, rank and bucket the records in `options.input`, then write
/// the validation checkpoint into a fresh run directory.
pub fn rank(options: &RankOptions) -> PetitionResult<RankOutcome> {
    let mut config = match &options.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    if let Some(min) = options.min_score {
        config = config.with_minimum_score(min);
    }
    let scorer = EvidenceScorer::new(config)?;

    let (records, skipped) = load_records(&options.input)?;
    if !skipped.is_empty() {
        warn!(skipped = skipped.len(), "some evidence records could not be read:\n{skipped}");
    }

    let state = run_validation_step(&scorer, records)?;
    let store = CheckpointStore::create(&options.output_dir)?;
    let path = store.save(STEP_VALIDATE, &state)?;
    info!(path = %path.display(), "validation state written");

    Ok(RankOutcome {
        run_dir: store.dir().to_path_buf(),
        state,
        skipped,
    })
}

/// Render the report from the validation checkpoint in `run_dir` and save it
/// as the report checkpoint. Refuses state whose fingerprints no longer match.
pub fn report(run_dir: &Path, applicant: &Path) -> PetitionResult<String> {
    let store = CheckpointStore::open(run_dir)?;
    let state: ValidationState = store.load(STEP_VALIDATE)?;
    if !state.verify() {
        return Err(PetitionError::Checkpoint {
            step: STEP_VALIDATE.to_string(),
            reason: format!("state in {} does not match its fingerprints", store.dir().display()),
        });
    }
    let applicant = ApplicantInfo::load(applicant)?;

    let text = ReportBuilder::new(&applicant, state.summary.minimum_score)
        .render(&state.validated_evidence);
    store.save(STEP_REPORT, &serde_json::json!({ "report_text": text }))?;
    Ok(text)
}

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::model::labels::LabelSchema;
use crate::model::probs::ClassProbabilityVector;

pub mod predictions;

use predictions::parse_prediction_response;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid prediction format: {0}")]
    InvalidPredictionFormat(String),
}

/// Anything that can hand the ranking stages one distribution per competitor,
/// in request order.
pub trait PredictionSource {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<Vec<ClassProbabilityVector>, InputError>;
}

#[derive(Debug, Clone)]
pub struct PredictionSourceConfig {
    pub path: PathBuf,
    pub schema: LabelSchema,
}

/// Reads a saved prediction response from disk.
#[derive(Debug, Clone)]
pub struct FilePredictionSource {
    config: PredictionSourceConfig,
}

impl FilePredictionSource {
    pub fn new(config: PredictionSourceConfig) -> Self {
        Self { config }
    }
}

impl PredictionSource for FilePredictionSource {
    fn describe(&self) -> String {
        self.config.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<ClassProbabilityVector>, InputError> {
        let mut reader = open_maybe_gz(&self.config.path)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let raw = parse_prediction_response(&value)?;

        let schema = &self.config.schema;
        let mut out = Vec::with_capacity(raw.len());
        for (idx, scores) in raw.iter().enumerate() {
            if scores.len() != schema.n_labels() {
                tracing::warn!(
                    "prediction {} has {} scores but the label schema has {} labels; missing labels read as 0.0",
                    idx,
                    scores.len(),
                    schema.n_labels()
                );
            }
            out.push(ClassProbabilityVector::from_scores(schema, scores));
        }
        Ok(out)
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

use crate::input::{InputError, PredictionSource};
use crate::model::probs::ClassProbabilityVector;

#[derive(Debug)]
pub struct Stage1Output {
    pub source: String,
    pub distributions: Vec<ClassProbabilityVector>,
}

pub fn run_stage1(source: &dyn PredictionSource) -> Result<Stage1Output, InputError> {
    let name = source.describe();
    let distributions = source.fetch()?;
    if distributions.is_empty() {
        tracing::warn!("no predictions found in {}; ranking will be empty", name);
    } else {
        tracing::info!("loaded {} competitors from {}", distributions.len(), name);
    }
    Ok(Stage1Output {
        source: name,
        distributions,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;

use super::*;
use crate::model::labels::ClassLabel;

struct FixedSource(Vec<ClassProbabilityVector>);

impl PredictionSource for FixedSource {
    fn describe(&self) -> String {
        "fixed".to_string()
    }

    fn fetch(&self) -> Result<Vec<ClassProbabilityVector>, InputError> {
        Ok(self.0.clone())
    }
}

struct BrokenSource;

impl PredictionSource for BrokenSource {
    fn describe(&self) -> String {
        "broken".to_string()
    }

    fn fetch(&self) -> Result<Vec<ClassProbabilityVector>, InputError> {
        Err(InputError::InvalidPredictionFormat(
            "prediction 0 must be an object, got string".to_string(),
        ))
    }
}

#[test]
fn test_stage1_keeps_request_order() {
    let a: ClassProbabilityVector = [(ClassLabel::Position(1), 0.9)].into_iter().collect();
    let b: ClassProbabilityVector = [(ClassLabel::Position(1), 0.1)].into_iter().collect();
    let out = run_stage1(&FixedSource(vec![a.clone(), b.clone()])).unwrap();
    assert_eq!(out.source, "fixed");
    assert_eq!(out.distributions, vec![a, b]);
}

#[test]
fn test_stage1_empty_batch_is_not_an_error() {
    let out = run_stage1(&FixedSource(Vec::new())).unwrap();
    assert!(out.distributions.is_empty());
}

#[test]
fn test_stage1_propagates_format_errors() {
    assert!(matches!(
        run_stage1(&BrokenSource),
        Err(InputError::InvalidPredictionFormat(_))
    ));
}

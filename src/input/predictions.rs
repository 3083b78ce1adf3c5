use serde_json::Value;

use crate::input::InputError;

const PREDICTIONS_KEY: &str = "predictions";
const SCORES_KEY: &str = "scores";

/// Pulls one raw score vector per prediction out of an endpoint response.
///
/// Accepts either the `{"predictions": [...]}` envelope or a bare array. Shape
/// problems are errors: a prediction that is not an object, or scores that
/// are not an array of numbers, or a missing `scores` key, must not be read as
/// zeros.
pub fn parse_prediction_response(value: &Value) -> Result<Vec<Vec<f64>>, InputError> {
    let predictions = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get(PREDICTIONS_KEY) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(InputError::InvalidPredictionFormat(format!(
                    "\"{PREDICTIONS_KEY}\" must be an array, got {}",
                    kind_name(other)
                )));
            }
            None => {
                return Err(InputError::InvalidPredictionFormat(format!(
                    "response object has no \"{PREDICTIONS_KEY}\" key"
                )));
            }
        },
        other => {
            return Err(InputError::InvalidPredictionFormat(format!(
                "response must be an array or an object, got {}",
                kind_name(other)
            )));
        }
    };

    predictions
        .iter()
        .enumerate()
        .map(|(idx, pred)| parse_scores(idx, pred))
        .collect()
}

fn parse_scores(idx: usize, pred: &Value) -> Result<Vec<f64>, InputError> {
    let Value::Object(map) = pred else {
        return Err(InputError::InvalidPredictionFormat(format!(
            "prediction {idx} must be an object, got {}",
            kind_name(pred)
        )));
    };
    let scores = match map.get(SCORES_KEY) {
        None => {
            return Err(InputError::InvalidPredictionFormat(format!(
                "prediction {idx} has no \"{SCORES_KEY}\" key"
            )));
        }
        Some(Value::Array(scores)) => scores,
        Some(other) => {
            return Err(InputError::InvalidPredictionFormat(format!(
                "prediction {idx}: \"{SCORES_KEY}\" must be an array, got {}",
                kind_name(other)
            )));
        }
    };
    scores
        .iter()
        .enumerate()
        .map(|(j, s)| {
            s.as_f64().ok_or_else(|| {
                InputError::InvalidPredictionFormat(format!(
                    "prediction {idx}: score {j} is not a number ({})",
                    kind_name(s)
                ))
            })
        })
        .collect()
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/predictions.rs"]
mod tests;

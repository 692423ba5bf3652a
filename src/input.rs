//! JSON boundary of the command line: `{"xList": [...]}` in, treatments or `{"error"}` out.

use crate::error::{GaError, Result};
use crate::stage::{Condition, Stage};
use serde::{Deserialize, Serialize};

/// One `xList` entry as entered in the form: a number, or text to decode
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ClinicalValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Request {
    #[serde(rename = "xList")]
    pub x_list: Vec<ClinicalValue>,
}

/// Body written to stderr when an invocation fails
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&GaError> for ErrorResponse {
    fn from(err: &GaError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}

const YES: [&str; 2] = ["так", "yes"];
const NO: [&str; 2] = ["ні", "no"];

/// Decode a single value of `feature` with the stage's yes/no encoding
pub fn decode_value(stage: Stage, feature: &str, value: &ClinicalValue) -> Result<f64> {
    let text = match value {
        ClinicalValue::Number(number) => return Ok(*number),
        ClinicalValue::Text(text) => text.trim(),
    };

    if text.is_empty() {
        return Err(GaError::InvalidValue {
            feature: feature.to_string(),
            reason: "value is blank".to_string(),
        });
    }

    if let Ok(number) = text.parse::<f64>() {
        return Ok(number);
    }

    let (yes, no) = stage.yes_no_encoding();
    let lowered = text.to_lowercase();
    if YES.contains(&lowered.as_str()) {
        Ok(yes)
    } else if NO.contains(&lowered.as_str()) {
        Ok(no)
    } else {
        Err(GaError::InvalidValue {
            feature: feature.to_string(),
            reason: format!("cannot read '{}' as a number or a yes/no answer", text),
        })
    }
}

/// Decode and validate a request body into a patient condition.
///
/// The length of `xList` is checked before any value is decoded.
pub fn parse_request(stage: Stage, json: &str) -> Result<Condition> {
    let request: Request = serde_json::from_str(json)?;
    decode_request(stage, &request)
}

pub fn decode_request(stage: Stage, request: &Request) -> Result<Condition> {
    if request.x_list.len() != stage.condition_len() {
        return Err(GaError::InputLength {
            expected: stage.condition_len(),
            actual: request.x_list.len(),
        });
    }

    let values = request
        .x_list
        .iter()
        .zip(stage.condition_names().iter())
        .map(|(value, feature)| decode_value(stage, feature, value))
        .collect::<Result<Vec<f64>>>()?;

    Condition::new(stage, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ClinicalValue {
        ClinicalValue::Text(s.to_string())
    }

    #[test]
    fn test_yes_no_encoding_per_stage() {
        assert_eq!(decode_value(Stage::Operational, "x110", &text("Так")).unwrap(), 1.0);
        assert_eq!(decode_value(Stage::Operational, "x111", &text("Ні")).unwrap(), 2.0);
        assert_eq!(decode_value(Stage::Conservative, "pe", &text("Ні")).unwrap(), 1.0);
        assert_eq!(decode_value(Stage::Conservative, "vab", &text("Так")).unwrap(), 2.0);
    }

    #[test]
    fn test_english_aliases_and_case() {
        assert_eq!(decode_value(Stage::Operational, "x110", &text("YES")).unwrap(), 1.0);
        assert_eq!(decode_value(Stage::Conservative, "pe", &text("no")).unwrap(), 1.0);
        assert_eq!(decode_value(Stage::Operational, "x112", &text("так")).unwrap(), 1.0);
    }

    #[test]
    fn test_numeric_text_and_whitespace() {
        assert_eq!(decode_value(Stage::Operational, "x101", &text("42")).unwrap(), 42.0);
        assert!((decode_value(Stage::Operational, "x102", &text("3.14")).unwrap() - 3.14).abs() < 1e-12);
        assert_eq!(decode_value(Stage::Operational, "x103", &text("  5.0  ")).unwrap(), 5.0);
        assert_eq!(decode_value(Stage::Operational, "x110", &text("  Так  ")).unwrap(), 1.0);
        assert_eq!(
            decode_value(Stage::Conservative, "snd", &ClinicalValue::Number(7.5)).unwrap(),
            7.5
        );
    }

    #[test]
    fn test_blank_and_unreadable_text_are_rejected() {
        for bad in ["", "   ", "maybe"] {
            match decode_value(Stage::Operational, "x104", &text(bad)) {
                Err(GaError::InvalidValue { feature, .. }) => assert_eq!(feature, "x104"),
                other => panic!("'{}' gave {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_request_mixed_values() {
        let json = r#"{"xList": [120, 3.5, 4.2, 2, 1, 1.8, 2.1, 3.0, 4.5, "Так", "Ні", "Так"]}"#;
        let condition = parse_request(Stage::Operational, json).unwrap();
        assert_eq!(
            condition.values(),
            &[120.0, 3.5, 4.2, 2.0, 1.0, 1.8, 2.1, 3.0, 4.5, 1.0, 2.0, 1.0]
        );

        let json = r#"{"xList": ["Ні", "Так", "Ні", "Ні", "Так", "Ні", "Так", "Ні", "Так"]}"#;
        let condition = parse_request(Stage::Conservative, json).unwrap();
        assert_eq!(
            condition.values(),
            &[1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_length_is_checked_before_values() {
        // The bad text would fail decoding, but the length error comes first
        let json = r#"{"xList": ["maybe", 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]}"#;
        let err = parse_request(Stage::Operational, json).unwrap_err();
        assert!(
            matches!(err, GaError::InputLength { expected: 12, actual: 11 }),
            "{:?}",
            err
        );
    }

    #[test]
    fn test_malformed_json_and_missing_field() {
        assert!(matches!(
            parse_request(Stage::Operational, "{\"xList\": [1, 2"),
            Err(GaError::Json(_))
        ));
        assert!(matches!(
            parse_request(Stage::Operational, "{\"values\": []}"),
            Err(GaError::Json(_))
        ));
    }

    #[test]
    fn test_error_response_body() {
        let err = GaError::InputLength {
            expected: 9,
            actual: 3,
        };
        let body = serde_json::to_string(&ErrorResponse::from(&err)).unwrap();
        assert_eq!(body, r#"{"error":"Expected 9 input values, got 3"}"#);
    }
}

//! Typed contracts for the calculation backend.
//!
//! Every calculator posts a JSON object to a fixed endpoint and receives an
//! envelope whose `success` flag decides between a calculator-specific
//! payload and an `error` string:
//!
//! | Endpoint | Request | Success payload |
//! |---|---|---|
//! | `/calculate/pcr` | [`PcrRequest`] | [`PcrOutput`] |
//! | `/calculate/dilution` | [`DilutionRequest`] | [`TextOutput`] |
//! | `/convert/dna_concentration` | [`DnaConcentrationRequest`] | [`TextOutput`] |
//! | `/convert/ul_to_mmol` | [`UlToMmolRequest`] | [`TextOutput`] |
//!
//! Field values are sent exactly as typed. The backend parses and validates
//! them and reports problems through `error`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result, UNKNOWN_ERROR};
use crate::view::{MasterMixTable, ResultBody, ResultView};

/// Unit the dilution backend reports the stock volume in.
pub const V1_UNIT: &str = "µL";

/// Backend endpoints, one per calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Pcr,
    Dilution,
    DnaConcentration,
    UlToMmol,
}

impl Endpoint {
    /// Path relative to the API base.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Pcr => "/calculate/pcr",
            Endpoint::Dilution => "/calculate/dilution",
            Endpoint::DnaConcentration => "/convert/dna_concentration",
            Endpoint::UlToMmol => "/convert/ul_to_mmol",
        }
    }

    /// Human-readable calculator name.
    pub const fn title(self) -> &'static str {
        match self {
            Endpoint::Pcr => "PCR Master Mix",
            Endpoint::Dilution => "Buffer Dilution",
            Endpoint::DnaConcentration => "DNA Concentration",
            Endpoint::UlToMmol => "µL to mmol",
        }
    }
}

/// A request body bound to its endpoint and success payload.
pub trait Calculation: Serialize {
    const ENDPOINT: Endpoint;

    /// Fields carried by a successful response.
    type Output: DeserializeOwned;

    /// Turn a successful payload into something the result panel can show.
    fn present(output: Self::Output) -> ResultView;
}

/// One reagent line of a PCR request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub stock: String,
    #[serde(rename = "final")]
    pub final_conc: String,
}

impl Component {
    pub fn new(name: &str, stock: &str, final_conc: &str) -> Self {
        Self {
            name: name.to_string(),
            stock: stock.to_string(),
            final_conc: final_conc.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PcrRequest {
    pub reactions: String,
    pub volume: String,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DilutionRequest {
    pub c1: String,
    pub c2: String,
    pub v2: String,
    pub v1_unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnaConcentrationRequest {
    pub concentration: String,
    pub length: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UlToMmolRequest {
    pub volume: String,
    pub molarity: String,
}

/// Per-component volumes returned by the PCR endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PcrLine {
    pub name: String,
    pub single_rxn_vol: f64,
    pub master_mix_vol: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PcrOutput {
    pub total_mm_volume: f64,
    pub results: Vec<PcrLine>,
    pub explanation: String,
}

/// Payload shared by the calculators that answer with a single line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextOutput {
    pub result: String,
    pub explanation: String,
}

impl Calculation for PcrRequest {
    const ENDPOINT: Endpoint = Endpoint::Pcr;
    type Output = PcrOutput;

    fn present(output: PcrOutput) -> ResultView {
        ResultView::Success {
            body: ResultBody::MasterMix(MasterMixTable {
                total_mm_volume: output.total_mm_volume,
                rows: output.results,
            }),
            explanation: output.explanation,
        }
    }
}

fn present_text(output: TextOutput) -> ResultView {
    ResultView::Success {
        body: ResultBody::Text(output.result),
        explanation: output.explanation,
    }
}

impl Calculation for DilutionRequest {
    const ENDPOINT: Endpoint = Endpoint::Dilution;
    type Output = TextOutput;

    fn present(output: TextOutput) -> ResultView {
        present_text(output)
    }
}

impl Calculation for DnaConcentrationRequest {
    const ENDPOINT: Endpoint = Endpoint::DnaConcentration;
    type Output = TextOutput;

    fn present(output: TextOutput) -> ResultView {
        present_text(output)
    }
}

impl Calculation for UlToMmolRequest {
    const ENDPOINT: Endpoint = Endpoint::UlToMmol;
    type Output = TextOutput;

    fn present(output: TextOutput) -> ResultView {
        present_text(output)
    }
}

/// What a well-formed response said.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure { error: String },
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

fn error_field(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Interpret an HTTP status and body from a calculation endpoint.
///
/// A non-2xx status is always an error. Its `error` field becomes
/// [`ApiError::Server`], and without one it is [`ApiError::Unknown`]. A 2xx
/// body is an envelope that decodes into an [`Outcome`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Outcome<T>> {
    if !(200..300).contains(&status) {
        let value: Value = serde_json::from_str(body)?;
        return Err(error_field(&value).map_or(ApiError::Unknown, ApiError::Server));
    }

    let envelope: Envelope = serde_json::from_str(body)?;
    if !envelope.success {
        let error = envelope
            .error
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Ok(Outcome::Failure { error });
    }

    let payload = serde_json::from_value(Value::Object(envelope.payload))?;
    Ok(Outcome::Success(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_paths() {
        let all = [
            Endpoint::Pcr,
            Endpoint::Dilution,
            Endpoint::DnaConcentration,
            Endpoint::UlToMmol,
        ];
        let paths: Vec<&str> = all.iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec![
                "/calculate/pcr",
                "/calculate/dilution",
                "/convert/dna_concentration",
                "/convert/ul_to_mmol",
            ]
        );
    }

    #[test]
    fn test_component_serializes_final_key() {
        let value = serde_json::to_value(Component::new("Buffer", "10", "1")).unwrap();
        assert_eq!(value, json!({"name": "Buffer", "stock": "10", "final": "1"}));
    }

    #[test]
    fn test_dilution_request_shape() {
        let req = DilutionRequest {
            c1: "10".into(),
            c2: "1".into(),
            v2: "100".into(),
            v1_unit: V1_UNIT.into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"c1": "10", "c2": "1", "v2": "100", "v1_unit": "µL"})
        );
    }

    #[test]
    fn test_decode_text_success() {
        let body = r#"{"success": true, "result": "10.00 µL", "explanation": "C1V1 = C2V2"}"#;
        let outcome: Outcome<TextOutput> = decode_response(200, body).unwrap();
        assert_eq!(
            outcome,
            Outcome::Success(TextOutput {
                result: "10.00 µL".into(),
                explanation: "C1V1 = C2V2".into(),
            })
        );
    }

    #[test]
    fn test_decode_pcr_success() {
        let body = json!({
            "success": true,
            "total_mm_volume": 550.0,
            "results": [
                {"name": "Buffer", "single_rxn_vol": 5.0, "master_mix_vol": 55.0},
                {"name": "Nuclease-Free Water", "single_rxn_vol": 45.0, "master_mix_vol": 495.0}
            ],
            "explanation": "Calculations based on C1V1=C2V2"
        })
        .to_string();
        let outcome: Outcome<PcrOutput> = decode_response(200, &body).unwrap();
        match outcome {
            Outcome::Success(out) => {
                assert_eq!(out.total_mm_volume, 550.0);
                assert_eq!(out.results.len(), 2);
                assert_eq!(out.results[1].name, "Nuclease-Free Water");
            }
            other => panic!("Expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failure_envelope() {
        let body = r#"{"success": false, "error": "c2 must be less than c1"}"#;
        let outcome: Outcome<TextOutput> = decode_response(200, body).unwrap();
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: "c2 must be less than c1".into()
            }
        );
    }

    #[test]
    fn test_decode_failure_without_message() {
        let outcome: Outcome<TextOutput> = decode_response(200, r#"{"success": false}"#).unwrap();
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: UNKNOWN_ERROR.into()
            }
        );
    }

    #[test]
    fn test_decode_error_status_with_message() {
        let body = r#"{"success": false, "error": "Invalid input. Please provide a valid volume and molarity."}"#;
        let err = decode_response::<TextOutput>(400, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server("Invalid input. Please provide a valid volume and molarity.".into())
        );
    }

    #[test]
    fn test_decode_error_status_without_message() {
        let err = decode_response::<TextOutput>(500, "{}").unwrap_err();
        assert_eq!(err, ApiError::Unknown);
    }

    #[test]
    fn test_decode_error_status_non_json() {
        let err = decode_response::<TextOutput>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_success_missing_fields() {
        let err = decode_response::<TextOutput>(200, r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_present_text() {
        let view = DilutionRequest::present(TextOutput {
            result: "10.00 µL".into(),
            explanation: "why".into(),
        });
        assert_eq!(
            view,
            ResultView::Success {
                body: ResultBody::Text("10.00 µL".into()),
                explanation: "why".into(),
            }
        );
    }
}

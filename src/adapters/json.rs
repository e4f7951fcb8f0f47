use crate::domain::model::{CpfReport, GenerationOutcome};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::{CpfError, Result};
use serde_json::json;

/// Machine-readable renderer for the `--json` output mode.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn generated(&self, outcome: &GenerationOutcome) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcome)?)
    }

    fn valid(&self, report: &CpfReport) -> Result<String> {
        let body = json!({
            "valid": true,
            "report": report,
        });
        Ok(serde_json::to_string_pretty(&body)?)
    }

    fn invalid(&self, input: &str, error: &CpfError) -> Result<String> {
        let mut body = json!({
            "valid": false,
            "input": input,
            "error": error.to_string(),
        });
        if let CpfError::ChecksumMismatch { supplied, expected } = error {
            body["supplied_verifiers"] = json!(supplied.to_string());
            body["expected_verifiers"] = json!(expected.to_string());
        }
        Ok(serde_json::to_string_pretty(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::validate;
    use crate::domain::model::{CpfReport, GenerationOutcome};

    #[test]
    fn valid_report_round_trips_through_json() {
        let report: CpfReport = validate("111.444.777-47").unwrap();
        let text = JsonRenderer.valid(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["report"]["formatted"], "111.444.777-47");
        assert_eq!(value["report"]["verifiers"]["first"], 4);
        assert_eq!(value["report"]["verifiers"]["second"], 7);
        assert_eq!(value["report"]["region"]["digit"], 7);
    }

    #[test]
    fn generation_outcome_flattens_the_report() {
        let report: CpfReport = validate("111.444.777-47").unwrap();
        let outcome = GenerationOutcome {
            report,
            requested_region: Some(7),
        };
        let text = JsonRenderer.generated(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["formatted"], "111.444.777-47");
        assert_eq!(value["requested_region"], 7);
    }

    #[test]
    fn mismatch_carries_both_verifier_pairs() {
        let err = validate("111.444.777-48").unwrap_err();
        let text = JsonRenderer.invalid("111.444.777-48", &err).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["supplied_verifiers"], "48");
        assert_eq!(value["expected_verifiers"], "47");
    }
}

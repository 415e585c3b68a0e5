//! The persisted submission record - one immutable document per response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::weighting::LabeledMatrix;

use super::respondent::RespondentProfile;

/// One criterion's weight in the persisted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub criterion: String,
    pub weight: f64,
}

/// The self-describing record written once per submission.
///
/// Field names are part of the export contract for downstream analysis and
/// must stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub response_id: Uuid,
    pub saved_at_utc: DateTime<Utc>,
    pub respondent: RespondentProfile,
    pub criteria: Vec<String>,
    pub weights: Vec<WeightEntry>,
    pub consistency_ratio: f64,
    pub lambda_max: f64,
    pub comparison_matrix: LabeledMatrix,
}

impl SubmissionRecord {
    /// File name for the record: `response_<YYYYMMDD-HHMMSS>_<id-prefix>.json`.
    ///
    /// The short id prefix keeps names readable while disambiguating
    /// submissions that land within the same second.
    pub fn file_name(&self) -> String {
        let stamp = self.saved_at_utc.format("%Y%m%d-%H%M%S");
        let id = self.response_id.simple().to_string();
        format!("response_{}_{}.json", stamp, &id[..6])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> SubmissionRecord {
        SubmissionRecord {
            response_id: Uuid::new_v4(),
            saved_at_utc: Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap(),
            respondent: RespondentProfile {
                age_range: "25-44".to_string(),
                field_of_work: "Engineering".to_string(),
                field_of_work_other: None,
                difficulty_feedback: None,
                suggestions: Some("More context per criterion".to_string()),
            },
            criteria: vec!["X".to_string(), "Y".to_string()],
            weights: vec![
                WeightEntry {
                    criterion: "X".to_string(),
                    weight: 0.9,
                },
                WeightEntry {
                    criterion: "Y".to_string(),
                    weight: 0.1,
                },
            ],
            consistency_ratio: 0.0,
            lambda_max: 2.0,
            comparison_matrix: LabeledMatrix {
                index: vec!["X".to_string(), "Y".to_string()],
                columns: vec!["X".to_string(), "Y".to_string()],
                values: vec![vec![1.0, 9.0], vec![1.0 / 9.0, 1.0]],
            },
        }
    }

    #[test]
    fn file_name_embeds_timestamp_and_id_prefix() {
        let record = sample_record();
        let name = record.file_name();
        assert!(name.starts_with("response_20260314-150926_"));
        assert!(name.ends_with(".json"));
        let prefix = &record.response_id.simple().to_string()[..6];
        assert!(name.contains(prefix));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: SubmissionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_json_uses_stable_field_names() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        for field in [
            "response_id",
            "saved_at_utc",
            "respondent",
            "criteria",
            "weights",
            "consistency_ratio",
            "lambda_max",
            "comparison_matrix",
        ] {
            assert!(json.contains(field), "missing field '{}'", field);
        }
    }
}

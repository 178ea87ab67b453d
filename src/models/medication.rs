use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// One medication entry as it appears in the curated drug data JSON.
///
/// The JSON is maintained by hand, so every field except `name` is optional
/// and unknown fields are ignored. Fields flagged in the source data as
/// still needing clinical research (administration recommendations, dosage
/// considerations, preparation/administration guidelines) are passed through
/// unchanged rather than derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MedicationRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "brandName")]
    pub brand_name: Option<String>,
    #[serde(rename = "drugClass")]
    pub drug_class: Option<String>,
    pub indication: Option<String>,
    pub administration_recommendations: Option<String>,
    /// Arbitrary nested object describing line requirements (central,
    /// peripheral, midline). Stored serialized in a text column.
    #[serde(rename = "lineRecommendation")]
    pub line_recommendation: Option<Value>,
    pub vesicant: bool,
    pub irritant: bool,
    pub management: Option<String>,
    pub mechanism: Option<String>,
    pub dosage_considerations: Option<String>,
    pub preparation_guidelines: Option<String>,
    pub administration_guidelines: Option<String>,
    pub evidence_level: Option<String>,
    /// ISO 8601 timestamp, or the sentinel `"now"` meaning "stamp at seed
    /// time with the database clock".
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    /// URL of the main literature reference for this medication.
    pub reference: Option<String>,
    pub antidotes: Vec<AntidoteRecord>,
}

impl MedicationRecord {
    /// The record's own id when present and non-empty, otherwise a freshly
    /// generated v4 UUID.
    pub fn resolved_id(&self) -> String {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        }
    }

    /// The medication name, treating an empty string as absent.
    pub fn resolved_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AntidoteRecord {
    pub name: Option<String>,
    pub priority: Option<String>,
    pub preparation: Option<String>,
    /// Older entries describe preparation under `explanation`.
    pub explanation: Option<String>,
    pub administration: Option<String>,
    pub evidence_level: Option<String>,
    pub reference: Option<String>,
}

impl AntidoteRecord {
    pub fn resolved_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// `preparation` when present, else the legacy `explanation` field.
    pub fn preparation_text(&self) -> Option<&str> {
        self.preparation.as_deref().or(self.explanation.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolved_id_prefers_existing() {
        let record = MedicationRecord {
            id: Some("med-001".to_string()),
            ..Default::default()
        };
        assert_eq!(record.resolved_id(), "med-001");
    }

    #[test]
    fn test_resolved_id_generates_uuid_for_empty() {
        let record = MedicationRecord {
            id: Some(String::new()),
            ..Default::default()
        };
        let id = record.resolved_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_resolved_name_empty_is_none() {
        let record = MedicationRecord {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(record.resolved_name().is_none());
    }

    #[test]
    fn test_preparation_falls_back_to_explanation() {
        let antidote = AntidoteRecord {
            explanation: Some("Apply topically".to_string()),
            ..Default::default()
        };
        assert_eq!(antidote.preparation_text(), Some("Apply topically"));

        let antidote = AntidoteRecord {
            preparation: Some("Dilute 1:10".to_string()),
            explanation: Some("Apply topically".to_string()),
            ..Default::default()
        };
        assert_eq!(antidote.preparation_text(), Some("Dilute 1:10"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let value = json!({
            "name": "Vincristine",
            "vesicant": true,
            "color": "clear"
        });
        let record: MedicationRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.resolved_name(), Some("Vincristine"));
        assert!(record.vesicant);
        assert!(!record.irritant);
    }
}

use std::fmt;

use crate::utils::escape_sql_string;

/// Extravasation risk classification. Vesicant takes precedence over
/// irritant when a medication carries both flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtravasationRisk {
    Vesicant,
    Irritant,
    NonVesicant,
}

impl ExtravasationRisk {
    pub fn from_flags(vesicant: bool, irritant: bool) -> Self {
        if vesicant {
            ExtravasationRisk::Vesicant
        } else if irritant {
            ExtravasationRisk::Irritant
        } else {
            ExtravasationRisk::NonVesicant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtravasationRisk::Vesicant => "Vesicant",
            ExtravasationRisk::Irritant => "Irritant",
            ExtravasationRisk::NonVesicant => "Non-Vesicant",
        }
    }
}

impl fmt::Display for ExtravasationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value for the `last_updated` column. `Now` renders the database's
/// current-timestamp expression as a raw token, never as a quoted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastUpdated {
    Now,
    At(String),
}

impl LastUpdated {
    /// The sentinel value `"now"` (and an absent field) both mean "stamp
    /// with the database clock at seed time".
    pub fn from_field(value: Option<String>) -> Self {
        match value {
            None => LastUpdated::Now,
            Some(v) if v == "now" => LastUpdated::Now,
            Some(v) => LastUpdated::At(v),
        }
    }

    pub fn to_sql(&self) -> String {
        match self {
            LastUpdated::Now => "datetime('now')".to_string(),
            LastUpdated::At(v) => escape_sql_string(Some(v.as_str())),
        }
    }
}

/// One row of the `Medications` table, fully derived and ready to render.
#[derive(Debug, Clone)]
pub struct MedicationRow {
    pub id: String,
    pub name: String,
    pub brand_name: Option<String>,
    pub drug_class: Option<String>,
    pub indication: Option<String>,
    pub administration_recommendations: Option<String>,
    /// Line requirements object serialized to compact JSON text.
    pub line_requirements: String,
    pub extravasation_risk: ExtravasationRisk,
    pub extravasation_management: Option<String>,
    pub mechanism_of_injury: Option<String>,
    pub dosage_considerations: Option<String>,
    pub preparation_guidelines: Option<String>,
    pub administration_guidelines: Option<String>,
    pub evidence_level: Option<String>,
    pub last_updated: LastUpdated,
    /// 1 for the first five medications in processing order, 0 after.
    pub is_free: i64,
    /// Lowercased space-joined search blob over name, brand, class,
    /// indication and risk.
    pub search_terms: String,
}

impl MedicationRow {
    pub fn to_insert(&self) -> String {
        format!(
            "INSERT INTO Medications (id, name, brand_name, drug_class, indication, \
             administration_recommendations, line_requirements, extravasation_risk, \
             extravasation_management, mechanism_of_injury, dosage_considerations, \
             preparation_guidelines, administration_guidelines, evidence_level, \
             last_updated, is_free, search_terms) VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            escape_sql_string(Some(self.id.as_str())),
            escape_sql_string(Some(self.name.as_str())),
            escape_sql_string(self.brand_name.as_deref()),
            escape_sql_string(self.drug_class.as_deref()),
            escape_sql_string(self.indication.as_deref()),
            escape_sql_string(self.administration_recommendations.as_deref()),
            escape_sql_string(Some(self.line_requirements.as_str())),
            escape_sql_string(Some(self.extravasation_risk.as_str())),
            escape_sql_string(self.extravasation_management.as_deref()),
            escape_sql_string(self.mechanism_of_injury.as_deref()),
            escape_sql_string(self.dosage_considerations.as_deref()),
            escape_sql_string(self.preparation_guidelines.as_deref()),
            escape_sql_string(self.administration_guidelines.as_deref()),
            escape_sql_string(self.evidence_level.as_deref()),
            self.last_updated.to_sql(),
            self.is_free,
            escape_sql_string(Some(self.search_terms.as_str())),
        )
    }
}

/// One row of the `Antidotes` table, keyed to its parent medication.
#[derive(Debug, Clone)]
pub struct AntidoteRow {
    pub medication_id: String,
    pub name: String,
    pub priority: Option<String>,
    pub preparation: Option<String>,
    pub administration: Option<String>,
    pub evidence_level: Option<String>,
    pub reference: Option<String>,
}

impl AntidoteRow {
    pub fn to_insert(&self) -> String {
        format!(
            "INSERT INTO Antidotes (medication_id, name, priority, preparation, \
             administration, evidence_level, reference) VALUES ({}, {}, {}, {}, {}, {}, {});",
            escape_sql_string(Some(self.medication_id.as_str())),
            escape_sql_string(Some(self.name.as_str())),
            escape_sql_string(self.priority.as_deref()),
            escape_sql_string(self.preparation.as_deref()),
            escape_sql_string(self.administration.as_deref()),
            escape_sql_string(self.evidence_level.as_deref()),
            escape_sql_string(self.reference.as_deref()),
        )
    }
}

/// One row of the `MedicationReferences` table. URLs are de-duplicated per
/// medication before rows are built.
#[derive(Debug, Clone)]
pub struct ReferenceRow {
    pub medication_id: String,
    pub citation: String,
    pub url: String,
}

impl ReferenceRow {
    pub fn to_insert(&self) -> String {
        format!(
            "INSERT INTO MedicationReferences (medication_id, citation, url) VALUES ({}, {}, {});",
            escape_sql_string(Some(self.medication_id.as_str())),
            escape_sql_string(Some(self.citation.as_str())),
            escape_sql_string(Some(self.url.as_str())),
        )
    }
}

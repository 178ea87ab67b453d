use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::SeedError;
use crate::models::{
    AntidoteRow, ExtravasationRisk, LastUpdated, MedicationRecord, MedicationRow, ReferenceRow,
};

/// The first five medications (in processing order) are seeded as free-tier
/// content; everything after is gated.
const FREE_TIER_LIMIT: usize = 5;

const SEED_FILE_HEADER: &str =
    "-- Seed data for Medications, Antidotes, and MedicationReferences --\n\n";

#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub statements: usize,
    pub medications: usize,
}

/// Accumulator threaded through the sequential pass over the input array.
/// `medications` counts only records that processed successfully, which is
/// what drives the free-tier cutoff.
#[derive(Debug, Default)]
struct SeedBatch {
    statements: Vec<String>,
    medications: usize,
}

/// Turns the curated medication JSON into a SQL seed file.
///
/// Each element of the top-level array is processed independently: a
/// malformed record is logged and skipped without aborting the batch. Only
/// an unreadable/unparseable input file or an unwritable output path is
/// fatal, and the output file is written in one shot after the whole pass
/// so a fatal input error never leaves a partial seed file behind.
pub struct SeedGenerator;

impl SeedGenerator {
    pub fn generate(input_path: &Path, output_path: &Path) -> Result<SeedSummary, SeedError> {
        let raw = fs::read_to_string(input_path)
            .map_err(|e| SeedError::input_read(input_path, e))?;
        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| SeedError::input_read(input_path, e))?;
        let entries = document
            .as_array()
            .ok_or_else(|| SeedError::input_read(input_path, "top level is not a JSON array"))?;

        tracing::info!(
            "Processing {} medications from {}",
            entries.len(),
            input_path.display()
        );

        let mut batch = SeedBatch::default();
        for entry in entries {
            match process_record(entry, batch.medications) {
                Ok(Some(statements)) => {
                    batch.statements.extend(statements);
                    batch.medications += 1;
                }
                Ok(None) => {
                    tracing::warn!("Skipping entry with missing name: {}", entry);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                }
            }
        }

        write_seed_file(output_path, &batch.statements)?;

        Ok(SeedSummary {
            statements: batch.statements.len(),
            medications: batch.medications,
        })
    }
}

/// Derive all rows for one input record. Returns `Ok(None)` for a record
/// without a usable name (a skip, not an error); any other failure is a
/// per-record error the caller logs and moves past. `processed_so_far` is
/// the count of medications that already made it through, used for the
/// free-tier flag.
fn process_record(
    entry: &Value,
    processed_so_far: usize,
) -> Result<Option<Vec<String>>, SeedError> {
    let record: MedicationRecord = serde_json::from_value(entry.clone())
        .map_err(|e| SeedError::record(entry_name(entry), e))?;

    let name = match record.resolved_name() {
        Some(name) => name.to_string(),
        None => return Ok(None),
    };
    let medication_id = record.resolved_id();

    let risk = ExtravasationRisk::from_flags(record.vesicant, record.irritant);
    let line_requirements = serde_json::to_string(
        record.line_recommendation.as_ref().unwrap_or(&Value::Object(Default::default())),
    )
    .map_err(|e| SeedError::record(name.as_str(), e))?;

    let search_terms = build_search_terms(&[
        Some(name.as_str()),
        record.brand_name.as_deref(),
        record.drug_class.as_deref(),
        record.indication.as_deref(),
        Some(risk.as_str()),
    ]);

    let medication = MedicationRow {
        id: medication_id.clone(),
        name: name.clone(),
        brand_name: record.brand_name.clone(),
        drug_class: record.drug_class.clone(),
        indication: record.indication.clone(),
        administration_recommendations: record.administration_recommendations.clone(),
        line_requirements,
        extravasation_risk: risk,
        extravasation_management: record.management.clone(),
        mechanism_of_injury: record.mechanism.clone(),
        dosage_considerations: record.dosage_considerations.clone(),
        preparation_guidelines: record.preparation_guidelines.clone(),
        administration_guidelines: record.administration_guidelines.clone(),
        evidence_level: record.evidence_level.clone(),
        last_updated: LastUpdated::from_field(record.last_updated.clone()),
        is_free: if processed_so_far < FREE_TIER_LIMIT { 1 } else { 0 },
        search_terms,
    };

    let mut statements = vec![medication.to_insert()];

    // Reference candidates in emission order: the medication's own reference
    // first, then antidote references as they appear.
    let mut reference_candidates: Vec<(String, String)> = Vec::new();
    if let Some(url) = record.reference.as_deref().filter(|u| !u.is_empty()) {
        reference_candidates.push((format!("Main Reference for {}", name), url.to_string()));
    }

    for antidote in &record.antidotes {
        let antidote_name = match antidote.resolved_name() {
            Some(n) => n.to_string(),
            None => continue,
        };
        let row = AntidoteRow {
            medication_id: medication_id.clone(),
            name: antidote_name.clone(),
            priority: antidote.priority.clone(),
            preparation: antidote.preparation_text().map(str::to_string),
            administration: antidote.administration.clone(),
            evidence_level: antidote.evidence_level.clone(),
            reference: antidote.reference.clone(),
        };
        statements.push(row.to_insert());

        if let Some(url) = antidote.reference.as_deref().filter(|u| !u.is_empty()) {
            reference_candidates
                .push((format!("Reference for Antidote: {}", antidote_name), url.to_string()));
        }
    }

    // De-duplicate by URL within this medication; first occurrence wins.
    let mut seen_urls: HashSet<String> = HashSet::new();
    for (citation, url) in reference_candidates {
        if !seen_urls.insert(url.clone()) {
            continue;
        }
        let row = ReferenceRow {
            medication_id: medication_id.clone(),
            citation,
            url,
        };
        statements.push(row.to_insert());
    }

    Ok(Some(statements))
}

/// Lowercase space-joined search blob, dropping empty/absent parts.
fn build_search_terms(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .copied()
        .filter_map(|p| p.filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn entry_name(entry: &Value) -> String {
    entry
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN")
        .to_string()
}

/// Buffer the whole file and write it once so an interrupted run never
/// leaves a half-written seed file for the migration runner to pick up.
fn write_seed_file(output_path: &Path, statements: &[String]) -> Result<(), SeedError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SeedError::OutputWrite {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    }

    let mut contents = String::from(SEED_FILE_HEADER);
    for statement in statements {
        contents.push_str(statement);
        contents.push('\n');
    }

    fs::write(output_path, contents).map_err(|e| SeedError::OutputWrite {
        path: output_path.to_path_buf(),
        source: e,
    })
}

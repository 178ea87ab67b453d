pub mod medication;
pub mod seed;

pub use medication::{AntidoteRecord, MedicationRecord};
pub use seed::{AntidoteRow, ExtravasationRisk, LastUpdated, MedicationRow, ReferenceRow};

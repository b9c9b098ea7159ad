//! Record types returned by the protected endpoints.

use serde::{Deserialize, Serialize};

/// One administered or scheduled vaccine, as returned by `GET /auth/vaccines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineRecord {
    pub id: String,
    /// Vaccine name, e.g. "MMR".
    pub name: String,
    /// Free-text description shown on the detail card.
    pub details: String,
    /// Dose label, e.g. "1st dose".
    pub dose: String,
    /// Administration route, e.g. "Intramuscular".
    pub route: String,
    /// Administration date as the server formats it.
    pub date: String,
}

/// One row of the doctor-facing patient listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    /// Clinic index number shown under the patient's name.
    pub index: String,
}

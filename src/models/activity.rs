use serde::{Deserialize, Serialize};

/// A single extracurricular offering in the catalog.
///
/// `max_participants` is informational only; nothing caps the length of
/// `participants`. The list keeps signup order and never contains the
/// same email twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

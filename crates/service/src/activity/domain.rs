use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Stored activity as returned to clients.
pub type Activity = models::activity::Model;

/// Create/update payload. Absent strings decode as empty so that the validation
/// policy, not the decoder, decides whether they are acceptable. `id`, `status`
/// and `created_at` are not part of the payload and are ignored if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activity_date: Option<DateTime<FixedOffset>>,
}

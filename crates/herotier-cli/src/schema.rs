use chrono::{DateTime, Utc};
use serde::Serialize;

/// Envelope for every JSON report the CLI writes.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Report<T> {
    pub fn new(body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            body,
        }
    }
}

//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp stamped onto generated dashboard documents.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company event as listed on the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub location: String,
}

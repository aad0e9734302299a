use serde::{Deserialize, Serialize};

/// One news record. All six fields are materialized as strings; a record
/// missing a key in the source file loads with that field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub headline: String,
    /// Full author name as a single string, not a list.
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub short_description: String,
    /// Opaque date text, compared verbatim and never parsed.
    #[serde(default)]
    pub date: String,
}

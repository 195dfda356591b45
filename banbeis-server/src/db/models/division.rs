//! Division Model

use super::Model;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type DivisionId = RecordId;

/// Top-level administrative division.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Division {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DivisionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bengali name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Model for Division {
    const TABLE: &'static str = "division";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

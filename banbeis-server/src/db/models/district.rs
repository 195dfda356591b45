//! District Model

use super::Model;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type DistrictId = RecordId;

/// District within a division. The division link is a weak reference
/// stored as a record id; resolving it is the caller's business.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct District {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DistrictId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub division: Option<RecordId>,
}

impl Model for District {
    const TABLE: &'static str = "district";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

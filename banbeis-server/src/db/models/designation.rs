//! Designation Model

use super::Model;
use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type DesignationId = RecordId;

/// Employee designation (rank). `name` and `sort_name` are required at
/// the API boundary; `grade` is the numeric pay grade.
///
/// Audited: the repository stamps the `created_*`/`last_modified_*`
/// fields on every write, clients cannot control them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Designation {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DesignationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<i32>,

    // Audit metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Model for Designation {
    const TABLE: &'static str = "designation";
    const AUDITED: bool = true;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn stamp_created(&mut self, actor: &str, now: DateTime<Utc>) {
        self.created_by = Some(actor.to_string());
        self.created_date = Some(now);
        self.stamp_modified(actor, now);
    }

    fn stamp_modified(&mut self, actor: &str, now: DateTime<Utc>) {
        self.last_modified_by = Some(actor.to_string());
        self.last_modified_date = Some(now);
    }
}

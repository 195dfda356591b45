//! Post Model

use super::Model;
use super::serde_helpers;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type PostId = RecordId;

/// News/notice post published by a center. `publish` is a plain flag;
/// `published_on` records when it was flipped (set by the client, not
/// derived here).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<PostId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub center: Option<RecordId>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee: Option<RecordId>,

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

impl Model for Post {
    const TABLE: &'static str = "post";
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

//! PostPhoto Model

use super::Model;
use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type PostPhotoId = RecordId;

/// Photo attached to a post, ordered by `sequence`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPhoto {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<PostPhotoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "serde_helpers::option_base64",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub post: Option<RecordId>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_by: Option<RecordId>,

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

impl Model for PostPhoto {
    const TABLE: &'static str = "post_photo";
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

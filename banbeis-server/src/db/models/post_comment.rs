//! PostComment Model

use super::Model;
use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type PostCommentId = RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    InitialComment,
    Reply,
}

/// Reader comment on a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostComment {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<PostCommentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commented_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<CommentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commented_on: Option<DateTime<Utc>>,

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

impl Model for PostComment {
    const TABLE: &'static str = "post_comment";
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

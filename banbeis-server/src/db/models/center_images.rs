//! CenterImages Model

use super::Model;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CenterImagesId = RecordId;

/// Gallery image attached to a center. `show` toggles visibility on
/// the public site; it is plain data, not a workflow state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CenterImages {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CenterImagesId>,
    #[serde(
        default,
        with = "serde_helpers::option_base64",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub center: Option<RecordId>,
}

impl Model for CenterImages {
    const TABLE: &'static str = "center_images";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

//! CenterEmployee Model

use super::Model;
use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CenterEmployeeId = RecordId;

/// Nature of a posting at a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyType {
    Main,
    Additional,
}

/// Posting of an employee at a center, with joining/release dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CenterEmployee {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CenterEmployeeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_type: Option<DutyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub designation: Option<RecordId>,
}

impl Model for CenterEmployee {
    const TABLE: &'static str = "center_employee";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}

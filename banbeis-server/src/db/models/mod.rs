//! Database Models
//!
//! One module per collection. Every field except the id is optional on
//! the wire: a JSON body only carries the fields the client set, which
//! is what makes the PATCH merge semantics work — absent means "leave
//! unchanged", present (including `false`, `0` and `""`) overwrites.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use surrealdb::RecordId;

// Serde helpers
pub mod serde_helpers;

// Geography
pub mod district;
pub mod division;
pub mod upazila;

// People
pub mod designation;
pub mod employee;

// Centers
pub mod center;
pub mod center_employee;
pub mod center_images;

// Content
pub mod navigation;
pub mod post;
pub mod post_comment;
pub mod post_photo;

// Re-exports
pub use center::{Center, CenterId};
pub use center_employee::{CenterEmployee, CenterEmployeeId, DutyType};
pub use center_images::{CenterImages, CenterImagesId};
pub use designation::{Designation, DesignationId};
pub use district::{District, DistrictId};
pub use division::{Division, DivisionId};
pub use employee::{Employee, EmployeeId};
pub use navigation::{Navigation, NavigationId};
pub use post::{Post, PostId};
pub use post_comment::{CommentType, PostComment, PostCommentId};
pub use post_photo::{PostPhoto, PostPhotoId};
pub use upazila::{Upazila, UpazilaId};

/// Actor recorded on audited writes. There is no authentication layer,
/// so every write is attributed to the system account.
pub const SYSTEM_ACCOUNT: &str = "system";

/// Contract between an entity model and the generic CRUD engine.
///
/// Each model names its collection and exposes just enough id/audit
/// plumbing for the engine to stay generic. Audit stamping defaults to
/// a no-op; audited entities override it.
pub trait Model: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection (table) name in the store
    const TABLE: &'static str;

    /// Whether the entity carries server-stamped audit metadata
    const AUDITED: bool = false;

    fn id(&self) -> Option<&RecordId>;

    /// Drop the id before the record body is written back; the target
    /// id always comes from the operation, never the payload.
    fn clear_id(&mut self);

    fn stamp_created(&mut self, _actor: &str, _now: DateTime<Utc>) {}

    fn stamp_modified(&mut self, _actor: &str, _now: DateTime<Utc>) {}
}

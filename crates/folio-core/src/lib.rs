pub mod bindings;
pub mod document;
pub mod error;
pub mod fields;
pub mod render;
pub mod store;

pub use bindings::ProfileVars;
pub use document::{
    Basics, Certificate, ProfileDocument, Project, Publication, SchoolEntry, Skill, SocialProfile,
    WorkEntry,
};
pub use error::{FolioError, Result};
pub use fields::FieldKind;
pub use render::{format_field, format_section, WIP};
pub use store::{ProfileFetcher, ProfileRecord, ProfileStore, STALE_AFTER};

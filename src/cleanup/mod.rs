// ABOUTME: Untagged container version cleanup: owner lookup, listing, deletion.
// ABOUTME: Exports the orchestrator and the building blocks it composes.

mod orchestrator;
mod owner;
mod versions;

pub use orchestrator::{CleanupReport, cleanup, preview};
pub use owner::{OwnerKind, VersionsUrl, resolve_owner_kind};
pub use versions::{
    PAGE_SIZE, UntaggedVersion, delete_version, fetch_page, list_untagged_ids, untagged_versions,
};

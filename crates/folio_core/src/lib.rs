//! Core domain logic for the Folio site editor.
//! This crate is the single source of truth for content and edit-session
//! invariants; page markup, styling and the host storage engine stay
//! behind the `dom`, `prompt` and `store` boundaries.

pub mod app;
pub mod db;
pub mod debounce;
pub mod dom;
pub mod freeform;
pub mod loader;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod render;
pub mod resume;
pub mod session;
pub mod store;

pub use app::{detect_page_role, App};
pub use debounce::Debouncer;
pub use dom::{Document, NodeId};
pub use freeform::FreeformContent;
pub use loader::{load_site_data, save_site_data};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::resume::ResumeAttachment;
pub use model::site::{
    generate_entry_id, CareerEntry, ContactInfo, EducationEntry, ListName, ProjectEntry, SiteData,
    SkillEntry,
};
pub use prompt::{AutoConfirm, HostPrompt};
pub use render::{PageRole, Renderer};
pub use resume::ResumeUpload;
pub use session::EditSession;
pub use store::{
    KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult, CONTENT_KEY, RESUME_KEY,
    SITE_DATA_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Core domain logic for GradeBook.
//! This crate is the single source of truth for grading and record invariants.

pub mod db;
pub mod grading;
pub mod identity;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use grading::{compute_cgpa, total_credits};
pub use identity::provider::{AccountProfile, IdentityProvider};
pub use identity::session::{IdentityError, SessionIdentityProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::StudentRecord;
pub use model::subject::{Grade, Subject, SubjectId, SubjectValidationError};
pub use repo::record_repo::{
    RecordDraft, RecordRepository, RepoError, RepoResult, SqliteRecordRepository,
};
pub use service::record_service::{RecordService, RecordServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the narrow put/get contract over per-account student records.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Subject::validate()` before persistence.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod record_repo;

//! Domain model for graded subjects and persisted student records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one storage shape shared by aggregation and persistence.
//!
//! # Invariants
//! - Every subject carries `grade_point` equal to the fixed table value for
//!   its `grade`; divergence is a validation error, never silently kept.
//! - The grade scale is a closed set; symbols outside it are rejected at
//!   construction time.

pub mod record;
pub mod subject;

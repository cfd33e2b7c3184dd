//! Persisted student record read model.
//!
//! # Responsibility
//! - Define the single per-account document written on save and read on load.
//!
//! # Invariants
//! - Exactly one record exists per account id; saves fully overwrite it.
//! - `cgpa` and `total_credits` are derived from `subjects` at save time and
//!   never trusted from callers.
//! - `created_at` is set on first save and preserved by later overwrites.

use crate::model::subject::Subject;
use serde::{Deserialize, Serialize};

/// One account's saved subject collection and derived aggregates.
///
/// Field names serialize in the host document schema's camelCase shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Owning account identifier. One record per account.
    pub account_id: String,
    /// Display name captured at save time.
    pub display_name: String,
    /// Full subject collection as of the last save, order-preserving.
    pub subjects: Vec<Subject>,
    /// Credit-weighted average computed at save time.
    pub cgpa: f64,
    /// Sum of subject credits computed at save time.
    pub total_credits: u64,
    /// First-save timestamp in epoch milliseconds.
    pub created_at: i64,
    /// Last-save timestamp in epoch milliseconds.
    pub updated_at: i64,
}

//! Record save/load use-case service.
//!
//! # Responsibility
//! - Validate subject entries before they reach persistence.
//! - Recompute every derived field at save time; caller-supplied values are
//!   never trusted.
//! - Fail fast without a storage call when no session is established.
//!
//! # Invariants
//! - Saves are full replacements; last writer wins, no merge.
//! - An absent record on load is a valid outcome, never an error.
//! - Loaded aggregates are recomputed from the stored subjects to guard
//!   against external tampering of the persisted document.

use crate::grading::{compute_cgpa, total_credits};
use crate::identity::provider::IdentityProvider;
use crate::model::record::StudentRecord;
use crate::model::subject::{Subject, SubjectValidationError};
use crate::repo::record_repo::{RecordDraft, RecordRepository, RepoError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for record save/load use-cases.
#[derive(Debug)]
pub enum RecordServiceError {
    /// No current account identifier; storage was not contacted.
    NotAuthenticated,
    /// Malformed entry rejected locally, never sent to the store.
    Validation(SubjectValidationError),
    /// Store failure surfaced as-is; no local recovery or retry.
    Store(RepoError),
    /// Write/read-back mismatch inside one save operation.
    InconsistentState(&'static str),
}

impl Display for RecordServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "no account session is established"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent record state: {details}")
            }
        }
    }
}

impl Error for RecordServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotAuthenticated | Self::InconsistentState(_) => None,
        }
    }
}

impl From<SubjectValidationError> for RecordServiceError {
    fn from(value: SubjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for RecordServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Store(other),
        }
    }
}

/// Record save/load facade over a repository and an identity provider.
pub struct RecordService<R: RecordRepository, P: IdentityProvider> {
    repo: R,
    identity: P,
}

impl<R: RecordRepository, P: IdentityProvider> RecordService<R, P> {
    /// Creates a service from its two collaborators.
    pub fn new(repo: R, identity: P) -> Self {
        Self { repo, identity }
    }

    /// Saves the current in-memory subject collection for the signed-in
    /// account.
    ///
    /// # Errors
    /// - `NotAuthenticated` when no session is established; the store is not
    ///   contacted.
    pub fn save_current(&mut self, subjects: &[Subject]) -> Result<StudentRecord, RecordServiceError> {
        let profile = self
            .identity
            .current_profile()
            .ok_or(RecordServiceError::NotAuthenticated)?;
        self.save_for(&profile.account_id, profile.display_label(), subjects)
    }

    /// Loads the stored record for the signed-in account.
    ///
    /// # Errors
    /// - `NotAuthenticated` when no session is established; the store is not
    ///   contacted.
    pub fn load_current(&self) -> Result<Option<StudentRecord>, RecordServiceError> {
        let profile = self
            .identity
            .current_profile()
            .ok_or(RecordServiceError::NotAuthenticated)?;
        self.load_for(&profile.account_id)
    }

    /// Fully replaces the record stored for `account_id`.
    ///
    /// Every subject is validated locally and its `grade_point` re-derived
    /// from `grade`; `cgpa` and `total_credits` are recomputed from the
    /// canonical entries. Caller-supplied derived values never reach storage.
    pub fn save_for(
        &mut self,
        account_id: &str,
        display_name: &str,
        subjects: &[Subject],
    ) -> Result<StudentRecord, RecordServiceError> {
        if account_id.trim().is_empty() {
            return Err(RecordServiceError::NotAuthenticated);
        }

        let started_at = Instant::now();
        let mut canonical = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let mut entry = subject.clone();
            entry.recompute_grade_point();
            entry.validate()?;
            canonical.push(entry);
        }

        let draft = RecordDraft {
            account_id: account_id.to_string(),
            display_name: display_name.to_string(),
            cgpa: compute_cgpa(&canonical),
            total_credits: total_credits(&canonical),
            subjects: canonical,
        };

        let outcome = self.repo.put_record(&draft).and_then(|()| {
            self.repo.get_record(account_id)
        });
        match outcome {
            Ok(Some(stored)) => {
                info!(
                    "event=record_save module=service status=ok subject_count={} duration_ms={}",
                    stored.subjects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(stored)
            }
            Ok(None) => Err(RecordServiceError::InconsistentState(
                "saved record not found in read-back",
            )),
            Err(err) => {
                error!(
                    "event=record_save module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Loads the stored record for `account_id`.
    ///
    /// Returns `Ok(None)` for an account that never saved; this is the
    /// expected state for a new account and the caller should start with an
    /// empty entry collection. Stored aggregates are recomputed from the
    /// loaded subjects before the record is returned.
    pub fn load_for(&self, account_id: &str) -> Result<Option<StudentRecord>, RecordServiceError> {
        if account_id.trim().is_empty() {
            return Err(RecordServiceError::NotAuthenticated);
        }

        let started_at = Instant::now();
        match self.repo.get_record(account_id) {
            Ok(Some(mut record)) => {
                record.cgpa = compute_cgpa(&record.subjects);
                record.total_credits = total_credits(&record.subjects);
                info!(
                    "event=record_load module=service status=ok subject_count={} duration_ms={}",
                    record.subjects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(record))
            }
            Ok(None) => {
                info!(
                    "event=record_load module=service status=ok outcome=no_record duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(None)
            }
            Err(err) => {
                error!(
                    "event=record_load module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

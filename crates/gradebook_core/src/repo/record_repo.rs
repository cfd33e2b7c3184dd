//! Student record repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the put/get document-store surface keyed by account id.
//! - Own full-replacement write semantics in a single transaction.
//!
//! # Invariants
//! - `put_record` replaces the whole record atomically; partial writes never
//!   become visible.
//! - `created_at` is preserved across overwrites; `updated_at` always moves.
//! - Absent records read back as `None`, never as an error.

use crate::db::DbError;
use crate::model::record::StudentRecord;
use crate::model::subject::{Grade, Subject, SubjectId, SubjectValidationError};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(SubjectValidationError),
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
        }
    }
}

impl std::error::Error for RepoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<SubjectValidationError> for RepoError {
    fn from(value: SubjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Write model for one save operation.
///
/// Aggregates are computed by the caller at save time; the repository only
/// persists the shape, it never derives values itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub account_id: String,
    pub display_name: String,
    pub subjects: Vec<Subject>,
    pub cgpa: f64,
    pub total_credits: u64,
}

/// Narrow document-store interface keyed by account id.
pub trait RecordRepository {
    /// Fully replaces the record stored under `draft.account_id`.
    fn put_record(&mut self, draft: &RecordDraft) -> RepoResult<()>;
    /// Gets the stored record for one account, or `None` when never saved.
    fn get_record(&self, account_id: &str) -> RepoResult<Option<StudentRecord>>;
}

/// SQLite-backed student record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_record_tables_ready(conn)?;
        Ok(Self { conn })
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn put_record(&mut self, draft: &RecordDraft) -> RepoResult<()> {
        for subject in &draft.subjects {
            subject.validate()?;
        }
        let total_credits = i64::try_from(draft.total_credits).map_err(|_| {
            RepoError::InvalidData(format!(
                "total credits {} exceeds storage range",
                draft.total_credits
            ))
        })?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO student_records (
                account_id,
                display_name,
                cgpa,
                total_credits,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4,
                (strftime('%s', 'now') * 1000),
                (strftime('%s', 'now') * 1000))
            ON CONFLICT (account_id) DO UPDATE SET
                display_name = excluded.display_name,
                cgpa = excluded.cgpa,
                total_credits = excluded.total_credits,
                updated_at = excluded.updated_at;",
            params![
                draft.account_id.as_str(),
                draft.display_name.as_str(),
                draft.cgpa,
                total_credits,
            ],
        )?;

        replace_subject_rows(&tx, draft)?;
        tx.commit()?;
        Ok(())
    }

    fn get_record(&self, account_id: &str) -> RepoResult<Option<StudentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                account_id,
                display_name,
                cgpa,
                total_credits,
                created_at,
                updated_at
             FROM student_records
             WHERE account_id = ?1;",
        )?;

        let mut rows = stmt.query([account_id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let total_credits_raw: i64 = row.get("total_credits")?;
        let total_credits = u64::try_from(total_credits_raw).map_err(|_| {
            RepoError::InvalidData(format!(
                "negative total_credits value `{total_credits_raw}` in student_records"
            ))
        })?;

        let record = StudentRecord {
            account_id: row.get("account_id")?,
            display_name: row.get("display_name")?,
            subjects: load_subject_rows(self.conn, account_id)?,
            cgpa: row.get("cgpa")?,
            total_credits,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        };

        Ok(Some(record))
    }
}

fn replace_subject_rows(tx: &Transaction<'_>, draft: &RecordDraft) -> RepoResult<()> {
    tx.execute(
        "DELETE FROM record_subjects WHERE account_id = ?1;",
        [draft.account_id.as_str()],
    )?;

    let mut insert = tx.prepare(
        "INSERT INTO record_subjects (
            account_id,
            position,
            uuid,
            name,
            credits,
            grade,
            grade_point
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
    )?;

    for (position, subject) in draft.subjects.iter().enumerate() {
        insert.execute(params![
            draft.account_id.as_str(),
            position as i64,
            subject.id.to_string(),
            subject.name.as_str(),
            i64::from(subject.credits),
            subject.grade.symbol(),
            i64::from(subject.grade_point),
        ])?;
    }

    Ok(())
}

fn load_subject_rows(conn: &Connection, account_id: &str) -> RepoResult<Vec<Subject>> {
    let mut stmt = conn.prepare(
        "SELECT
            uuid,
            name,
            credits,
            grade,
            grade_point
         FROM record_subjects
         WHERE account_id = ?1
         ORDER BY position ASC;",
    )?;

    let mut rows = stmt.query([account_id])?;
    let mut subjects = Vec::new();
    while let Some(row) = rows.next()? {
        subjects.push(parse_subject_row(row)?);
    }

    Ok(subjects)
}

fn parse_subject_row(row: &Row<'_>) -> RepoResult<Subject> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_subject_id(&uuid_text)?;

    let grade_text: String = row.get("grade")?;
    let grade = Grade::parse(&grade_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid grade symbol `{grade_text}` in record_subjects.grade"
        ))
    })?;

    let credits_raw: i64 = row.get("credits")?;
    let credits = u32::try_from(credits_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid credits value `{credits_raw}` in record_subjects.credits"
        ))
    })?;

    let grade_point_raw: i64 = row.get("grade_point")?;
    let grade_point = u8::try_from(grade_point_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid grade_point value `{grade_point_raw}` in record_subjects.grade_point"
        ))
    })?;

    let subject = Subject {
        id,
        name: row.get("name")?,
        credits,
        grade,
        grade_point,
    };
    subject.validate()?;
    Ok(subject)
}

fn parse_subject_id(value: &str) -> RepoResult<SubjectId> {
    Uuid::parse_str(value).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{value}` in record_subjects.uuid"))
    })
}

fn ensure_record_tables_ready(conn: &Connection) -> RepoResult<()> {
    for table in ["student_records", "record_subjects"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

//! Subject domain model and the fixed grade scale.
//!
//! # Responsibility
//! - Define the closed letter-grade scale and its point mapping.
//! - Define the graded-subject entry shared by aggregation and persistence.
//!
//! # Invariants
//! - The grade scale never changes at runtime; `Grade::points` is total.
//! - `Subject::grade_point` equals `grade.points()` at construction and is
//!   re-derived on every save; a diverged value fails validation.
//! - `id` is unique within one in-memory session; uniqueness is not enforced
//!   across sessions or persisted records.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a subject entry within one session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SubjectId = Uuid;

/// Closed letter-grade scale, ordered best to worst.
///
/// Serialized as the external letter symbols (`"A+"`, `"B"`, ...) so the
/// persisted record shape matches the host document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// All grade symbols in scale order.
    pub const ALL: [Grade; 8] = [
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    /// Returns the fixed point value for this grade.
    ///
    /// Total over the closed scale; no symbol maps to more than one value.
    pub fn points(self) -> u8 {
        match self {
            Self::APlus => 10,
            Self::A => 9,
            Self::BPlus => 8,
            Self::B => 7,
            Self::CPlus => 6,
            Self::C => 5,
            Self::D => 4,
            Self::F => 0,
        }
    }

    /// Returns the external letter symbol for this grade.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Parses one external letter symbol.
    ///
    /// Returns `None` for any symbol outside the closed scale; unknown
    /// symbols are never coerced to a zero-point grade.
    pub fn parse(value: &str) -> Option<Grade> {
        match value {
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            _ => None,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Grade {
    type Err = SubjectValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| SubjectValidationError::UnknownGrade(value.to_string()))
    }
}

/// Validation error for malformed subject entries.
///
/// Raised locally before any entry reaches persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectValidationError {
    /// Subject name is empty or whitespace-only.
    EmptyName,
    /// Credit weight must be a positive integer.
    ZeroCredits,
    /// Grade symbol is outside the closed scale.
    UnknownGrade(String),
    /// Cached `grade_point` diverged from the table value for `grade`.
    GradePointMismatch { grade: Grade, grade_point: u8 },
}

impl Display for SubjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "subject name must not be empty"),
            Self::ZeroCredits => write!(f, "subject credits must be a positive integer"),
            Self::UnknownGrade(symbol) => write!(f, "unknown grade symbol: `{symbol}`"),
            Self::GradePointMismatch { grade, grade_point } => write!(
                f,
                "grade point {grade_point} does not match grade {grade} (expected {})",
                grade.points()
            ),
        }
    }
}

impl Error for SubjectValidationError {}

/// One graded course entry.
///
/// `grade_point` is a client-held cache of `grade.points()`; save paths
/// re-derive it so the two fields cannot diverge in stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable entry id used for list handling in the host UI.
    pub id: SubjectId,
    /// Course name. Must not be blank.
    pub name: String,
    /// Credit weight. Must be positive.
    pub credits: u32,
    /// Letter grade from the closed scale.
    pub grade: Grade,
    /// Cached point value for `grade`. Serialized as `gradePoint`.
    #[serde(rename = "gradePoint")]
    pub grade_point: u8,
}

impl Subject {
    /// Creates a subject entry with a generated id.
    ///
    /// `grade_point` is derived from `grade` at the moment of creation.
    pub fn new(name: impl Into<String>, credits: u32, grade: Grade) -> Self {
        Self::with_id(Uuid::new_v4(), name, credits, grade)
    }

    /// Creates a subject entry with a caller-provided id.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_id(id: SubjectId, name: impl Into<String>, credits: u32, grade: Grade) -> Self {
        Self {
            id,
            name: name.into(),
            credits,
            grade,
            grade_point: grade.points(),
        }
    }

    /// Re-derives `grade_point` from `grade`.
    ///
    /// Save paths call this so caller-supplied cached values are always
    /// overwritten by the canonical table lookup.
    pub fn recompute_grade_point(&mut self) {
        self.grade_point = self.grade.points();
    }

    /// Validates entry shape ahead of persistence.
    ///
    /// # Errors
    /// - `EmptyName` when the name is blank.
    /// - `ZeroCredits` when the credit weight is zero.
    /// - `GradePointMismatch` when the cached point value diverged.
    pub fn validate(&self) -> Result<(), SubjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(SubjectValidationError::EmptyName);
        }
        if self.credits == 0 {
            return Err(SubjectValidationError::ZeroCredits);
        }
        if self.grade_point != self.grade.points() {
            return Err(SubjectValidationError::GradePointMismatch {
                grade: self.grade,
                grade_point: self.grade_point,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Grade, Subject, SubjectValidationError};
    use std::str::FromStr;

    #[test]
    fn grade_scale_is_total_and_closed() {
        let expected: [(Grade, u8); 8] = [
            (Grade::APlus, 10),
            (Grade::A, 9),
            (Grade::BPlus, 8),
            (Grade::B, 7),
            (Grade::CPlus, 6),
            (Grade::C, 5),
            (Grade::D, 4),
            (Grade::F, 0),
        ];
        for (grade, points) in expected {
            assert_eq!(grade.points(), points);
            assert_eq!(Grade::parse(grade.symbol()), Some(grade));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected_not_coerced() {
        for symbol in ["E", "a+", "A-", "", " A", "Z"] {
            assert_eq!(Grade::parse(symbol), None, "symbol `{symbol}` must be rejected");
        }
        let err = Grade::from_str("E").unwrap_err();
        assert!(matches!(err, SubjectValidationError::UnknownGrade(value) if value == "E"));
    }

    #[test]
    fn new_subject_derives_grade_point_from_grade() {
        let subject = Subject::new("Operating Systems", 4, Grade::BPlus);
        assert_eq!(subject.grade_point, 8);
        subject.validate().expect("fresh subject should be valid");
    }

    #[test]
    fn validate_rejects_blank_name_and_zero_credits() {
        let blank = Subject::new("   ", 3, Grade::A);
        assert_eq!(blank.validate(), Err(SubjectValidationError::EmptyName));

        let zero = Subject::new("Databases", 0, Grade::A);
        assert_eq!(zero.validate(), Err(SubjectValidationError::ZeroCredits));
    }

    #[test]
    fn validate_rejects_diverged_grade_point_cache() {
        let mut subject = Subject::new("Networks", 3, Grade::C);
        subject.grade_point = 9;
        assert_eq!(
            subject.validate(),
            Err(SubjectValidationError::GradePointMismatch {
                grade: Grade::C,
                grade_point: 9,
            })
        );

        subject.recompute_grade_point();
        subject.validate().expect("recomputed cache should be valid");
    }

    #[test]
    fn subject_serializes_with_external_field_names() {
        let subject = Subject::new("Compilers", 3, Grade::APlus);
        let json = serde_json::to_value(&subject).expect("subject should serialize");
        assert_eq!(json["grade"], "A+");
        assert_eq!(json["gradePoint"], 10);
        assert_eq!(json["credits"], 3);
    }
}

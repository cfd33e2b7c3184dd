//! Credit-weighted grade aggregation.
//!
//! # Responsibility
//! - Map an ordered subject collection to one cumulative average.
//! - Provide the total-credit sum used by display and save paths.
//!
//! # Invariants
//! - Both functions are pure and total; no input produces an error.
//! - A collection with zero total credits averages to exactly `0`.
//! - The result is rounded to two decimals and never artificially clamped.

use crate::model::subject::Subject;

/// Computes the cumulative credit-weighted average (CGPA).
///
/// `sum(credits * grade_point) / sum(credits)`, rounded half-away-from-zero
/// to two decimal places. Returns `0.0` for an empty collection or when the
/// total credit weight is zero, avoiding the division entirely.
pub fn compute_cgpa(subjects: &[Subject]) -> f64 {
    let credits = total_credits(subjects);
    if credits == 0 {
        return 0.0;
    }

    let weighted_points: u64 = subjects
        .iter()
        .map(|subject| u64::from(subject.credits) * u64::from(subject.grade_point))
        .sum();

    round_two_decimals(weighted_points as f64 / credits as f64)
}

/// Sums credit weights over the subject collection.
pub fn total_credits(subjects: &[Subject]) -> u64 {
    subjects
        .iter()
        .map(|subject| u64::from(subject.credits))
        .sum()
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{compute_cgpa, total_credits};
    use crate::model::subject::{Grade, Subject};

    #[test]
    fn empty_collection_averages_to_zero() {
        assert_eq!(compute_cgpa(&[]), 0.0);
        assert_eq!(total_credits(&[]), 0);
    }

    #[test]
    fn zero_total_credits_averages_to_zero() {
        let subjects = [
            Subject::new("Seminar", 0, Grade::A),
            Subject::new("Colloquium", 0, Grade::F),
        ];
        assert_eq!(compute_cgpa(&subjects), 0.0);
    }

    #[test]
    fn representative_weighted_average_rounds_to_two_decimals() {
        // (3*9 + 4*7) / 7 = 55/7 = 7.857142...
        let subjects = [
            Subject::new("Algorithms", 3, Grade::A),
            Subject::new("Databases", 4, Grade::B),
        ];
        assert_eq!(compute_cgpa(&subjects), 7.86);
        assert_eq!(total_credits(&subjects), 7);
    }

    #[test]
    fn uniform_grades_average_to_the_grade_point() {
        let subjects = [
            Subject::new("Linear Algebra", 3, Grade::APlus),
            Subject::new("Calculus", 3, Grade::APlus),
        ];
        assert_eq!(compute_cgpa(&subjects), 10.0);
    }

    #[test]
    fn aggregation_is_idempotent_over_immutable_input() {
        let subjects = [
            Subject::new("Physics", 4, Grade::BPlus),
            Subject::new("Chemistry", 2, Grade::CPlus),
        ];
        assert_eq!(compute_cgpa(&subjects), compute_cgpa(&subjects));
    }
}

use crate::error::GradebookError;
use crate::model::{Assignment, Submission};
use std::collections::HashMap;

/// Computes a student's overall percentage grade.
///
/// Each submission's score is converted to earned points
/// (`score / 100 * points`) and the total is divided by the total possible
/// points of every submitted assignment. The result is truncated toward
/// zero, never rounded: 87.6 becomes 87.
///
/// Returns `Ok(None)` when the student has no submissions. A submission for
/// an assignment missing from `assignments` is a
/// [`GradebookError::UnknownAssignment`].
pub fn compute_student_grade<'a, I>(
    student_id: u32,
    submissions: I,
    assignments: &HashMap<u32, Assignment>,
) -> Result<Option<i64>, GradebookError>
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut total_earned = 0.0;
    let mut total_possible: u64 = 0;

    for submission in submissions
        .into_iter()
        .filter(|s| s.student_id == student_id)
    {
        let assignment = assignments.get(&submission.assignment_id).ok_or(
            GradebookError::UnknownAssignment {
                student_id,
                assignment_id: submission.assignment_id,
            },
        )?;

        let points = f64::from(assignment.points);
        total_earned += submission.score / 100.0 * points;
        total_possible += u64::from(assignment.points);
    }

    if total_possible == 0 {
        return Ok(None);
    }

    Ok(Some(
        (total_earned / total_possible as f64 * 100.0).trunc() as i64,
    ))
}

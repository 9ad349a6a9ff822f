//! Failures raised by the grade computations.
//!
//! Absence of data is not an error here: the computations return `None` for
//! that. Only conditions the caller must tell apart from "no data" live in
//! [`GradebookError`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradebookError {
    /// A submission points at an assignment id missing from the assignment table.
    #[error("submission by student {student_id} references unknown assignment {assignment_id}")]
    UnknownAssignment { student_id: u32, assignment_id: u32 },
}

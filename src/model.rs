//! Record types loaded from the roster, assignment, and submission files.

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub name: String,
}

/// A gradable unit. `points` weights the assignment into a student's
/// overall grade and is always positive once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: u32,
    pub name: String,
    pub points: u32,
}

/// One recorded score. `score` is a percentage of the assignment's points,
/// not a raw point count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub student_id: u32,
    pub assignment_id: u32,
    pub score: f64,
}

impl Submission {
    pub fn new(student_id: u32, assignment_id: u32, score: f64) -> Self {
        Self {
            student_id,
            assignment_id,
            score,
        }
    }
}

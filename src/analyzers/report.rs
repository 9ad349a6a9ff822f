use crate::error::GradebookError;
use crate::gradebook::Gradebook;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Grade of one student in the class report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub id: u32,
    pub name: String,
    pub grade: Option<i64>,
}

/// Statistics of one assignment in the class report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRow {
    pub id: u32,
    pub name: String,
    pub points: u32,
    pub submissions: usize,
    pub min: Option<i64>,
    pub avg: Option<i64>,
    pub max: Option<i64>,
}

/// Every student's grade and every assignment's statistics, ordered by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub generated_at: DateTime<Utc>,
    pub students: Vec<StudentRow>,
    pub assignments: Vec<AssignmentRow>,
}

/// Flat row used for CSV export; `kind` tells student and assignment rows
/// apart and fields that don't apply are left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord<'a> {
    pub kind: &'static str,
    pub id: u32,
    pub name: &'a str,
    pub points: Option<u32>,
    pub submissions: Option<usize>,
    pub grade: Option<i64>,
    pub min: Option<i64>,
    pub avg: Option<i64>,
    pub max: Option<i64>,
}

impl ClassReport {
    /// Queries the grade of every student and the statistics of every
    /// assignment in `book`.
    ///
    /// # Errors
    ///
    /// Propagates [`GradebookError::UnknownAssignment`] from any student's
    /// grade.
    pub fn build(book: &Gradebook) -> Result<Self, GradebookError> {
        let mut students = book
            .students()
            .iter()
            .map(|s| {
                Ok(StudentRow {
                    id: s.id,
                    name: s.name.clone(),
                    grade: book.student_grade(s.id)?,
                })
            })
            .collect::<Result<Vec<_>, GradebookError>>()?;
        students.sort_by_key(|r| r.id);

        let mut assignments: Vec<AssignmentRow> = book
            .assignments()
            .map(|a| {
                let stats = book.assignment_statistics(a.id);
                AssignmentRow {
                    id: a.id,
                    name: a.name.clone(),
                    points: a.points,
                    submissions: book.submission_count(a.id),
                    min: stats.map(|s| s.min),
                    avg: stats.map(|s| s.avg),
                    max: stats.map(|s| s.max),
                }
            })
            .collect();
        assignments.sort_by_key(|r| r.id);

        Ok(Self {
            generated_at: Utc::now(),
            students,
            assignments,
        })
    }

    /// Student rows followed by assignment rows, flattened for CSV.
    pub fn records(&self) -> impl Iterator<Item = ReportRecord<'_>> {
        let students = self.students.iter().map(|s| ReportRecord {
            kind: "student",
            id: s.id,
            name: &s.name,
            points: None,
            submissions: None,
            grade: s.grade,
            min: None,
            avg: None,
            max: None,
        });
        let assignments = self.assignments.iter().map(|a| ReportRecord {
            kind: "assignment",
            id: a.id,
            name: &a.name,
            points: Some(a.points),
            submissions: Some(a.submissions),
            grade: None,
            min: a.min,
            avg: a.avg,
            max: a.max,
        });
        students.chain(assignments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, Student, Submission};

    fn book(submissions: Vec<Submission>) -> Gradebook {
        Gradebook::new(
            vec![
                Student {
                    id: 2,
                    name: "Grace".to_string(),
                },
                Student {
                    id: 1,
                    name: "Ada".to_string(),
                },
            ],
            vec![
                Assignment {
                    id: 7,
                    name: "Lab".to_string(),
                    points: 20,
                },
                Assignment {
                    id: 3,
                    name: "Quiz".to_string(),
                    points: 10,
                },
            ],
            submissions,
        )
    }

    #[test]
    fn test_build_orders_by_id() {
        let report = ClassReport::build(&book(vec![
            Submission::new(1, 3, 90.0),
            Submission::new(2, 3, 70.0),
        ]))
        .unwrap();

        let ids: Vec<u32> = report.students.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2]);
        let ids: Vec<u32> = report.assignments.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 7]);
    }

    #[test]
    fn test_build_fills_grades_and_stats() {
        let report = ClassReport::build(&book(vec![
            Submission::new(1, 3, 90.0),
            Submission::new(2, 3, 70.0),
        ]))
        .unwrap();

        assert_eq!(report.students[0].grade, Some(90));
        assert_eq!(report.students[1].grade, Some(70));

        let quiz = &report.assignments[0];
        assert_eq!(quiz.submissions, 2);
        assert_eq!((quiz.min, quiz.avg, quiz.max), (Some(70), Some(80), Some(90)));

        let lab = &report.assignments[1];
        assert_eq!(lab.submissions, 0);
        assert_eq!((lab.min, lab.avg, lab.max), (None, None, None));
    }

    #[test]
    fn test_build_propagates_unknown_assignment() {
        let err = ClassReport::build(&book(vec![Submission::new(2, 42, 90.0)])).unwrap_err();
        assert_eq!(
            err,
            GradebookError::UnknownAssignment {
                student_id: 2,
                assignment_id: 42
            }
        );
    }

    #[test]
    fn test_records_flatten_both_tables() {
        let report = ClassReport::build(&book(Vec::new())).unwrap();
        let kinds: Vec<&str> = report.records().map(|r| r.kind).collect();
        assert_eq!(kinds, ["student", "student", "assignment", "assignment"]);
    }
}

//! The loaded tables plus per-student and per-assignment submission indexes.

use anyhow::Result;
use std::collections::HashMap;
use tracing::info;

use crate::analyzers::grade::compute_student_grade;
use crate::analyzers::stats::{bin_distribution, compute_assignment_statistics};
use crate::analyzers::types::{AssignmentStats, Histogram};
use crate::config::DataConfig;
use crate::error::GradebookError;
use crate::loader::{load_assignments, load_students, load_submissions};
use crate::model::{Assignment, Student, Submission};

/// Immutable gradebook. Built once, then queried.
#[derive(Debug)]
pub struct Gradebook {
    students: Vec<Student>,
    assignment_order: Vec<u32>,
    assignments: HashMap<u32, Assignment>,
    submissions: Vec<Submission>,
    by_student: HashMap<u32, Vec<usize>>,
    by_assignment: HashMap<u32, Vec<usize>>,
}

impl Gradebook {
    /// Builds a gradebook from already-loaded tables. Students and
    /// assignments keep the given order for name lookups; a later assignment
    /// with a repeated id replaces the earlier one.
    pub fn new(
        students: Vec<Student>,
        assignments: Vec<Assignment>,
        submissions: Vec<Submission>,
    ) -> Self {
        let mut assignment_order = Vec::with_capacity(assignments.len());
        let mut assignment_table = HashMap::with_capacity(assignments.len());
        for assignment in assignments {
            if !assignment_table.contains_key(&assignment.id) {
                assignment_order.push(assignment.id);
            }
            assignment_table.insert(assignment.id, assignment);
        }

        let mut by_student: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut by_assignment: HashMap<u32, Vec<usize>> = HashMap::new();
        for (i, submission) in submissions.iter().enumerate() {
            by_student.entry(submission.student_id).or_default().push(i);
            by_assignment
                .entry(submission.assignment_id)
                .or_default()
                .push(i);
        }

        Self {
            students,
            assignment_order,
            assignments: assignment_table,
            submissions,
            by_student,
            by_assignment,
        }
    }

    /// Loads all three tables from the locations in `config`.
    ///
    /// # Errors
    ///
    /// Fails when the roster or assignments file is missing or malformed,
    /// or a submission file exists but cannot be read.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let students = load_students(&config.students_file)?;
        let assignments = load_assignments(&config.assignments_file)?;
        let submissions = load_submissions(&config.submissions_dir)?;

        info!(
            students = students.len(),
            assignments = assignments.len(),
            submissions = submissions.len(),
            "Gradebook loaded"
        );

        Ok(Self::new(students, assignments, submissions))
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Assignments in load order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignment_order
            .iter()
            .filter_map(|id| self.assignments.get(id))
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Id of the first student named exactly `name`.
    pub fn find_student_id(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        self.students.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// Id of the first assignment named exactly `name`.
    pub fn find_assignment_id(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        self.assignments().find(|a| a.name == name).map(|a| a.id)
    }

    /// Number of submissions recorded for an assignment.
    pub fn submission_count(&self, assignment_id: u32) -> usize {
        self.by_assignment.get(&assignment_id).map_or(0, Vec::len)
    }

    fn indexed<'a>(
        &'a self,
        index: &'a HashMap<u32, Vec<usize>>,
        id: u32,
    ) -> impl Iterator<Item = &'a Submission> + 'a {
        index
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&i| &self.submissions[i])
    }

    /// Overall percentage grade of a student. See [`compute_student_grade`].
    pub fn student_grade(&self, student_id: u32) -> Result<Option<i64>, GradebookError> {
        compute_student_grade(
            student_id,
            self.indexed(&self.by_student, student_id),
            &self.assignments,
        )
    }

    /// Min/avg/max of an assignment. See [`compute_assignment_statistics`].
    pub fn assignment_statistics(&self, assignment_id: u32) -> Option<AssignmentStats> {
        compute_assignment_statistics(
            assignment_id,
            self.indexed(&self.by_assignment, assignment_id),
        )
    }

    /// Score distribution of an assignment. See [`bin_distribution`].
    pub fn assignment_histogram(&self, assignment_id: u32) -> Option<Histogram> {
        bin_distribution(
            assignment_id,
            self.indexed(&self.by_assignment, assignment_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gradebook {
        Gradebook::new(
            vec![
                Student {
                    id: 1,
                    name: "Ada".to_string(),
                },
                Student {
                    id: 2,
                    name: "Grace".to_string(),
                },
                Student {
                    id: 3,
                    name: "Ada".to_string(),
                },
            ],
            vec![
                Assignment {
                    id: 10,
                    name: "Quiz".to_string(),
                    points: 50,
                },
                Assignment {
                    id: 20,
                    name: "Exam".to_string(),
                    points: 150,
                },
            ],
            vec![
                Submission::new(1, 10, 100.0),
                Submission::new(1, 20, 60.0),
                Submission::new(2, 10, 45.5),
            ],
        )
    }

    #[test]
    fn test_find_first_match_wins() {
        let book = sample();
        assert_eq!(book.find_student_id("Ada"), Some(1));
        assert_eq!(book.find_student_id("  Grace "), Some(2));
        assert_eq!(book.find_student_id("Linus"), None);
        assert_eq!(book.find_assignment_id("Exam"), Some(20));
        assert_eq!(book.find_assignment_id("exam"), None);
    }

    #[test]
    fn test_indexed_queries_match_full_scan() {
        let book = sample();
        for student in book.students() {
            assert_eq!(
                book.student_grade(student.id),
                compute_student_grade(student.id, book.submissions(), &book.assignments)
            );
        }
        for assignment in book.assignments() {
            assert_eq!(
                book.assignment_statistics(assignment.id),
                compute_assignment_statistics(assignment.id, book.submissions())
            );
            assert_eq!(
                book.assignment_histogram(assignment.id),
                bin_distribution(assignment.id, book.submissions())
            );
        }
    }

    #[test]
    fn test_student_grade() {
        let book = sample();
        // 50 + 90 earned out of 200
        assert_eq!(book.student_grade(1), Ok(Some(70)));
        assert_eq!(book.student_grade(3), Ok(None));
    }

    #[test]
    fn test_repeated_assignment_id_replaces_in_place() {
        let book = Gradebook::new(
            Vec::new(),
            vec![
                Assignment {
                    id: 1,
                    name: "Draft".to_string(),
                    points: 10,
                },
                Assignment {
                    id: 2,
                    name: "Other".to_string(),
                    points: 10,
                },
                Assignment {
                    id: 1,
                    name: "Final".to_string(),
                    points: 20,
                },
            ],
            Vec::new(),
        );
        let names: Vec<&str> = book.assignments().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Final", "Other"]);
    }

    #[test]
    fn test_submission_count() {
        let book = sample();
        assert_eq!(book.submission_count(10), 2);
        assert_eq!(book.submission_count(99), 0);
    }
}

//! Interactive menu and the text answers shared with the one-shot
//! subcommands.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::GradebookError;
use crate::gradebook::Gradebook;
use crate::render::render_histogram;

pub const STUDENT_NOT_FOUND: &str = "Student not found";
pub const ASSIGNMENT_NOT_FOUND: &str = "Assignment not found";
pub const NO_GRADE: &str = "No grade available for this student.";
pub const NO_SCORES: &str = "No scores available for this assignment.";
pub const INVALID_SELECTION: &str = "Invalid selection. Exiting.";

const STUDENT_PROMPT: &str = "What is the student's name: ";
const ASSIGNMENT_PROMPT: &str = "What is the assignment name: ";

/// The three numbered menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StudentGrade,
    AssignmentStatistics,
    AssignmentGraph,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::StudentGrade),
            "2" => Some(Self::AssignmentStatistics),
            "3" => Some(Self::AssignmentGraph),
            _ => None,
        }
    }
}

/// Answer to "what is this student's grade", e.g. `"87%"`.
///
/// # Errors
///
/// Returns [`GradebookError::UnknownAssignment`] if one of the student's
/// submissions cites a missing assignment.
pub fn student_grade_text(book: &Gradebook, name: &str) -> Result<String, GradebookError> {
    let Some(student_id) = book.find_student_id(name) else {
        return Ok(STUDENT_NOT_FOUND.to_string());
    };
    Ok(match book.student_grade(student_id)? {
        Some(grade) => format!("{grade}%"),
        None => NO_GRADE.to_string(),
    })
}

/// Min/Avg/Max lines for an assignment.
pub fn assignment_statistics_text(book: &Gradebook, name: &str) -> String {
    let Some(assignment_id) = book.find_assignment_id(name) else {
        return ASSIGNMENT_NOT_FOUND.to_string();
    };
    match book.assignment_statistics(assignment_id) {
        Some(stats) => format!(
            "Min: {}%\nAvg: {}%\nMax: {}%",
            stats.min, stats.avg, stats.max
        ),
        None => NO_SCORES.to_string(),
    }
}

/// Rendered score histogram for an assignment.
pub fn assignment_graph_text(book: &Gradebook, name: &str) -> String {
    let name = name.trim();
    let Some(assignment_id) = book.find_assignment_id(name) else {
        return ASSIGNMENT_NOT_FOUND.to_string();
    };
    match book.assignment_histogram(assignment_id) {
        Some(hist) => render_histogram(name, &hist),
        None => NO_SCORES.to_string(),
    }
}

/// Shows the menu, reads one selection and one name from `input`, and
/// writes the answer to `out`.
///
/// End of input is read as an empty answer.
///
/// # Errors
///
/// Fails on I/O errors and on [`GradebookError`]s from the grade query.
pub fn run_menu<R, W>(book: &Gradebook, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "1. Student grade")?;
    writeln!(out, "2. Assignment statistics")?;
    writeln!(out, "3. Assignment graph")?;
    let selection = prompt(input, out, "\nEnter your selection: ")?;

    let Some(choice) = MenuChoice::parse(&selection) else {
        debug!(selection = %selection.trim(), "Invalid menu selection");
        writeln!(out, "{INVALID_SELECTION}")?;
        return Ok(());
    };
    debug!(?choice, "Menu selection");

    let answer = match choice {
        MenuChoice::StudentGrade => {
            let name = prompt(input, out, STUDENT_PROMPT)?;
            student_grade_text(book, &name)?
        }
        MenuChoice::AssignmentStatistics => {
            let name = prompt(input, out, ASSIGNMENT_PROMPT)?;
            assignment_statistics_text(book, &name)
        }
        MenuChoice::AssignmentGraph => {
            let name = prompt(input, out, ASSIGNMENT_PROMPT)?;
            assignment_graph_text(book, &name)
        }
    };
    writeln!(out, "{answer}")?;
    out.flush()?;

    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

//! Flat-file loaders for the roster, assignment, and submission tables.
//!
//! The roster and assignment files are required: a malformed record there
//! aborts the load. Submission files are best-effort: bad lines are skipped
//! with a warning and a missing directory yields no submissions.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::model::{Assignment, Student, Submission};

/// Width of the numeric id prefix on each roster line.
const ROSTER_ID_WIDTH: usize = 3;

/// Loads the roster: each line is a 3-character id immediately followed by
/// the student's name.
///
/// A repeated id replaces the earlier student's name in place.
///
/// # Errors
///
/// Returns an error if the file cannot be read or an id is not an integer.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    parse_students(&text, path)
}

fn parse_students(text: &str, path: &Path) -> Result<Vec<Student>> {
    let mut students: Vec<Student> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let split = line
            .char_indices()
            .nth(ROSTER_ID_WIDTH)
            .map_or(line.len(), |(i, _)| i);
        let (id, name) = line.split_at(split);

        let id: u32 = id.trim().parse().with_context(|| {
            format!(
                "{}:{}: invalid student id {:?}",
                path.display(),
                idx + 1,
                id
            )
        })?;
        let name = name.trim().to_string();

        match students.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                warn!(id, old = %existing.name, new = %name, "Duplicate student id, replacing name");
                existing.name = name;
            }
            None => students.push(Student { id, name }),
        }
    }

    debug!(count = students.len(), "Roster loaded");
    Ok(students)
}

/// Loads assignments stored as groups of three lines: name, id, points.
///
/// Blank lines are ignored. A repeated id replaces the earlier assignment in
/// place.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the last group is
/// incomplete, the id is not an integer, or points are not a positive
/// integer.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_assignments(path: &Path) -> Result<Vec<Assignment>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read assignments file {}", path.display()))?;
    parse_assignments(&text, path)
}

fn parse_assignments(text: &str, path: &Path) -> Result<Vec<Assignment>> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    let mut assignments: Vec<Assignment> = Vec::new();

    for group in lines.chunks(3) {
        let [(_, name), (id_line, id), (points_line, points)] = group else {
            bail!(
                "{}:{}: incomplete assignment record, expected name, id and points",
                path.display(),
                group[0].0
            );
        };

        let id: u32 = id
            .parse()
            .with_context(|| format!("{}:{}: invalid assignment id {:?}", path.display(), id_line, id))?;
        let points: u32 = points.parse().with_context(|| {
            format!(
                "{}:{}: invalid assignment points {:?}",
                path.display(),
                points_line,
                points
            )
        })?;
        if points == 0 {
            bail!(
                "{}:{}: assignment {} must be worth more than zero points",
                path.display(),
                points_line,
                id
            );
        }

        let assignment = Assignment {
            id,
            name: name.to_string(),
            points,
        };
        match assignments.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                warn!(id, "Duplicate assignment id, replacing record");
                *existing = assignment;
            }
            None => assignments.push(assignment),
        }
    }

    debug!(count = assignments.len(), "Assignments loaded");
    Ok(assignments)
}

/// Loads every submission file in `dir`, in file-name order.
///
/// Lines are `student_id|assignment_id|score`. Lines with the wrong field
/// count or unparseable numbers are skipped with a warning. A missing
/// directory is reported and yields no submissions.
///
/// # Errors
///
/// Returns an error only if an existing directory or file cannot be read.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_submissions(dir: &Path) -> Result<Vec<Submission>> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Submissions directory not found, continuing without submissions");
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("failed to list submissions directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut submissions = Vec::new();
    for path in &files {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read submissions file {}", path.display()))?;
        let before = submissions.len();
        parse_submissions(&bytes, path, &mut submissions);
        debug!(file = %path.display(), count = submissions.len() - before, "Submission file loaded");
    }

    debug!(files = files.len(), count = submissions.len(), "Submissions loaded");
    Ok(submissions)
}

/// Lines are decoded one at a time so a stray non-UTF-8 byte only costs
/// the line it sits on.
fn parse_submissions(bytes: &[u8], path: &Path, out: &mut Vec<Submission>) {
    let file = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            warn!(file = %file, line_number = idx + 1, "Skipping submission line that is not valid UTF-8");
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_submission_line(line) {
            Ok(submission) => out.push(submission),
            Err(reason) => {
                warn!(file = %file, line_number = idx + 1, line, reason, "Skipping invalid submission line");
            }
        }
    }
}

/// Parses `student_id|assignment_id|score`. Ids go through a numeric
/// coercion first, so `"7.0"` is accepted as 7.
fn parse_submission_line(line: &str) -> std::result::Result<Submission, &'static str> {
    let parts: Vec<&str> = line.split('|').collect();
    let [student_id, assignment_id, score] = parts.as_slice() else {
        return Err("expected 3 pipe-separated fields");
    };

    let student_id = parse_id(student_id).ok_or("invalid student id")?;
    let assignment_id = parse_id(assignment_id).ok_or("invalid assignment id")?;
    let score: f64 = score.trim().parse().map_err(|_| "invalid score")?;
    if !score.is_finite() {
        return Err("score is not a finite number");
    }

    Ok(Submission::new(student_id, assignment_id, score))
}

fn parse_id(field: &str) -> Option<u32> {
    let value: f64 = field.trim().parse().ok()?;
    let value = value.trunc();
    if value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

//! Locations of the gradebook data files.

use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_STUDENTS_FILE: &str = "data/students.txt";
pub const DEFAULT_ASSIGNMENTS_FILE: &str = "data/assignments.txt";
pub const DEFAULT_SUBMISSIONS_DIR: &str = "data/submissions";

/// Where the loaders read from. Every field can be set by flag or
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct DataConfig {
    /// Roster file: 3-digit id followed by the student's name on each line
    #[arg(long, env = "GRADEBOOK_STUDENTS_FILE", default_value = DEFAULT_STUDENTS_FILE)]
    pub students_file: PathBuf,

    /// Assignments file: name, id and points on three consecutive lines
    #[arg(long, env = "GRADEBOOK_ASSIGNMENTS_FILE", default_value = DEFAULT_ASSIGNMENTS_FILE)]
    pub assignments_file: PathBuf,

    /// Directory of `student_id|assignment_id|score` submission files
    #[arg(long, env = "GRADEBOOK_SUBMISSIONS_DIR", default_value = DEFAULT_SUBMISSIONS_DIR)]
    pub submissions_dir: PathBuf,
}

impl DataConfig {
    /// Config rooted at `dir`, using the default file names inside it.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            students_file: dir.join("students.txt"),
            assignments_file: dir.join("assignments.txt"),
            submissions_dir: dir.join("submissions"),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            students_file: DEFAULT_STUDENTS_FILE.into(),
            assignments_file: DEFAULT_ASSIGNMENTS_FILE.into(),
            submissions_dir: DEFAULT_SUBMISSIONS_DIR.into(),
        }
    }
}

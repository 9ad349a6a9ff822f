//! Grade aggregation and score statistics.
//!
//! These computations are pure functions over the loaded tables: a
//! student's weighted percentage grade, an assignment's min/avg/max, and the
//! binned distribution of an assignment's scores, plus the class-wide report
//! built from them.

pub mod grade;
pub mod report;
pub mod stats;
pub mod types;
pub mod utility;

#![forbid(unsafe_code)]

pub mod grading;
pub mod model;

pub use grading::{Difficulty, GradeReport, GradedQuestion, Verdict, grade};

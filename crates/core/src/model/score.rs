use serde::{Deserialize, Serialize};

use crate::grading::{Difficulty, GradeReport};

/// Body posted to the scoreboard after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSubmission {
    pub score: usize,
    pub total: usize,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl ScoreSubmission {
    #[must_use]
    pub fn from_report(report: &GradeReport, topic: impl Into<String>) -> Self {
        Self {
            score: report.score(),
            total: report.total(),
            topic: topic.into(),
            difficulty: report.difficulty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreOwner {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One row of the public scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreboardEntry {
    #[serde(rename = "userId")]
    pub user: ScoreOwner,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

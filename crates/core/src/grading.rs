//! Scoring of a submitted quiz.
//!
//! Grading is a pure function of the quiz and the current answers; it never
//! touches the session, so submitting twice yields the same report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Difficulty tier recorded alongside a saved score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// `Hard` from 80%, `Medium` from 50%, `Easy` below.
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Hard,
            50..=79 => Self::Medium,
            _ => Self::Easy,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Outcome for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedQuestion {
    pub index: usize,
    pub selected: Option<String>,
    pub correct: String,
    pub explanation: Option<String>,
    pub verdict: Verdict,
}

impl GradedQuestion {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    rows: Vec<GradedQuestion>,
    score: usize,
}

impl GradeReport {
    #[must_use]
    pub fn rows(&self) -> &[GradedQuestion] {
        &self.rows
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Rounded accuracy in percent; zero for an empty quiz.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        // Half-up rounding in integers: (2 * 100 * s + t) / (2 * t).
        let rounded = (200 * self.score + total) / (2 * total);
        u8::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_percentage(self.percentage())
    }
}

/// Compare each answer to the question's correct option, in quiz order.
///
/// Missing answers are wrong.
#[must_use]
pub fn grade(quiz: &[Question], answers: &BTreeMap<usize, String>) -> GradeReport {
    let rows: Vec<GradedQuestion> = quiz
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = answers.get(&index).cloned();
            let verdict = match selected.as_deref() {
                Some(choice) if question.is_correct(choice) => Verdict::Correct,
                _ => Verdict::Wrong,
            };
            GradedQuestion {
                index,
                selected,
                correct: question.correct().to_string(),
                explanation: question.explanation().map(str::to_string),
                verdict,
            }
        })
        .collect();
    let score = rows.iter().filter(|row| row.is_correct()).count();

    GradeReport { rows, score }
}

use serde::{Deserialize, Serialize};

/// A single multiple-choice question as produced by the generation service.
///
/// The generator promises that `correct` is one of `options`; the client does
/// not re-check it. Fields are private so a received question stays immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question: String,
    options: Vec<String>,
    correct: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
        explanation: Option<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct: correct.into(),
            explanation,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Exact string comparison against the authoritative answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct == choice
    }
}

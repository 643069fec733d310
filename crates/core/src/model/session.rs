use std::collections::BTreeMap;

use thiserror::Error;

use crate::grading::{GradeReport, grade};
use crate::model::{AuthToken, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question {index} is outside the current quiz of {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },
}

/// Where the quiz screen currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NoQuiz,
    InProgress,
    Graded,
}

/// State of one interactive session, from login to logout.
///
/// Every mutation goes through a method so that `answers` never refers to a
/// question outside `quiz`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<AuthToken>,
    quiz: Vec<Question>,
    answers: BTreeMap<usize, String>,
    submitted: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn quiz(&self) -> &[Question] {
        &self.quiz
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.quiz.is_empty() {
            QuizPhase::NoQuiz
        } else if self.submitted {
            QuizPhase::Graded
        } else {
            QuizPhase::InProgress
        }
    }

    pub fn set_token(&mut self, token: AuthToken) {
        self.token = Some(token);
    }

    /// Replace the quiz. Answers and any previous grading go with it.
    pub fn set_quiz(&mut self, questions: Vec<Question>) {
        self.quiz = questions;
        self.answers.clear();
        self.submitted = false;
    }

    /// Record (or overwrite) the choice for one question.
    ///
    /// Changing an answer after grading hides the results until the next
    /// submission.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QuestionOutOfRange` if `index` is not in the quiz.
    pub fn set_answer(&mut self, index: usize, choice: impl Into<String>) -> Result<(), SessionError> {
        if index >= self.quiz.len() {
            return Err(SessionError::QuestionOutOfRange {
                index,
                len: self.quiz.len(),
            });
        }
        self.answers.insert(index, choice.into());
        self.submitted = false;
        Ok(())
    }

    /// Grade the current answers and move to the graded phase.
    pub fn submit(&mut self) -> GradeReport {
        self.submitted = !self.quiz.is_empty();
        grade(&self.quiz, &self.answers)
    }

    /// The report for the current answers, once submitted.
    #[must_use]
    pub fn report(&self) -> Option<GradeReport> {
        (self.phase() == QuizPhase::Graded).then(|| grade(&self.quiz, &self.answers))
    }

    /// Keep the quiz, forget the answers.
    pub fn retake(&mut self) {
        self.answers.clear();
        self.submitted = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    vec!["yes".into(), "no".into()],
                    "yes",
                    None,
                )
            })
            .collect()
    }

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(session.token().is_none());
        assert!(session.quiz().is_empty());
        assert!(session.answers().is_empty());
        assert_eq!(session.phase(), QuizPhase::NoQuiz);
    }

    #[test]
    fn set_quiz_clears_answers() {
        let mut session = Session::new();
        session.set_quiz(quiz(3));
        session.set_answer(0, "yes").unwrap();
        session.set_answer(2, "no").unwrap();
        session.submit();

        session.set_quiz(quiz(1));
        assert!(session.answers().is_empty());
        assert_eq!(session.quiz().len(), 1);
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn set_answer_rejects_out_of_range() {
        let mut session = Session::new();
        session.set_quiz(quiz(2));
        let err = session.set_answer(2, "yes").unwrap_err();
        assert_eq!(err, SessionError::QuestionOutOfRange { index: 2, len: 2 });
        assert!(session.answers().is_empty());
    }

    #[test]
    fn set_answer_overwrites() {
        let mut session = Session::new();
        session.set_quiz(quiz(1));
        session.set_answer(0, "no").unwrap();
        session.set_answer(0, "yes").unwrap();
        assert_eq!(session.answer(0), Some("yes"));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn phases_follow_submission() {
        let mut session = Session::new();
        session.set_quiz(quiz(2));
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert!(session.report().is_none());

        session.set_answer(0, "yes").unwrap();
        let first = session.submit();
        assert_eq!(session.phase(), QuizPhase::Graded);
        assert_eq!(first.score(), 1);

        let second = session.submit();
        assert_eq!(first, second);
        assert_eq!(session.report(), Some(second));
        assert_eq!(session.answer(0), Some("yes"));

        session.set_answer(1, "yes").unwrap();
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn submitting_without_quiz_stays_no_quiz() {
        let mut session = Session::new();
        let report = session.submit();
        assert_eq!(report.total(), 0);
        assert_eq!(session.phase(), QuizPhase::NoQuiz);
    }

    #[test]
    fn retake_keeps_questions() {
        let mut session = Session::new();
        session.set_quiz(quiz(2));
        session.set_answer(0, "yes").unwrap();
        session.submit();
        session.retake();
        assert_eq!(session.quiz().len(), 2);
        assert!(session.answers().is_empty());
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        session.set_token(AuthToken::new("abc"));
        session.set_quiz(quiz(2));
        session.set_answer(1, "no").unwrap();
        session.submit();

        session.reset();
        assert_eq!(session, Session::new());
        assert!(!session.is_authenticated());
    }
}

use std::sync::Arc;

use quiz_core::GradeReport;
use quiz_core::model::{ScoreSubmission, ScoreboardEntry, Session};

use crate::api::QuizApi;
use crate::error::ScoreboardError;

#[derive(Clone)]
pub struct ScoreboardService {
    api: Arc<dyn QuizApi>,
}

impl ScoreboardService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Post a graded result under the session's account.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::NotAuthenticated` without a token,
    /// `ScoreboardError::NothingGraded` for an empty report and
    /// `ScoreboardError::Api` when the backend call fails.
    pub async fn record(
        &self,
        session: &Session,
        report: &GradeReport,
        topic: &str,
    ) -> Result<(), ScoreboardError> {
        let token = session.token().ok_or(ScoreboardError::NotAuthenticated)?;
        if report.total() == 0 {
            return Err(ScoreboardError::NothingGraded);
        }
        let submission = ScoreSubmission::from_report(report, topic);
        self.api.save_score(token, &submission).await?;
        tracing::info!(
            score = submission.score,
            total = submission.total,
            difficulty = submission.difficulty.label(),
            "Recorded score"
        );
        Ok(())
    }

    /// Public scoreboard, in the order the backend ranks it.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Api` when the backend call fails.
    pub async fn leaderboard(&self) -> Result<Vec<ScoreboardEntry>, ScoreboardError> {
        Ok(self.api.list_scores().await?)
    }
}

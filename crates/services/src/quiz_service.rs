use std::sync::Arc;

use quiz_core::model::{GenerationForm, GenerationInput, GenerationRequest, Session};

use crate::api::QuizApi;
use crate::error::GenerationError;

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuiz {
    pub received: usize,
    /// The topic, or `"File Upload"` for documents.
    pub source: String,
}

/// Turns a topic or a document into a quiz held by the session.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn QuizApi>,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Validate the panel input and generate from it.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptyInput` without contacting the backend when
    /// neither a topic nor a file was given; see [`QuizService::generate_request`]
    /// for the remaining cases.
    pub async fn generate(
        &self,
        session: &mut Session,
        form: GenerationForm,
    ) -> Result<GeneratedQuiz, GenerationError> {
        let request = form.into_request()?;
        self.generate_request(session, request).await
    }

    /// Dispatch to the text or PDF endpoint and replace the session's quiz.
    ///
    /// Returns how many questions arrived and what they were generated from.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Failed` when the backend call fails; the
    /// session keeps its previous quiz. A successful reply always replaces the
    /// quiz, so an empty list leaves the session with no quiz.
    pub async fn generate_request(
        &self,
        session: &mut Session,
        request: GenerationRequest,
    ) -> Result<GeneratedQuiz, GenerationError> {
        let count = request.count;
        let result = match &request.input {
            GenerationInput::Topic(topic) => {
                tracing::info!(count = count.value(), "Generating quiz from topic");
                self.api.generate_from_text(topic, count).await
            }
            GenerationInput::File(file) => {
                tracing::info!(
                    count = count.value(),
                    file = file.name(),
                    bytes = file.len(),
                    "Generating quiz from document"
                );
                self.api.generate_from_pdf(file, count).await
            }
        };

        let questions = result.map_err(|err| {
            tracing::warn!(error = %err, "Quiz generation failed");
            GenerationError::Failed(err)
        })?;
        let received = questions.len();
        session.set_quiz(questions);
        if received == 0 {
            tracing::warn!("Quiz generation returned no questions");
        } else {
            tracing::info!(received, "Quiz ready");
        }
        Ok(GeneratedQuiz {
            received,
            source: request.input.label().to_string(),
        })
    }
}

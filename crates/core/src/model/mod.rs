mod auth;
mod generation;
mod question;
mod score;
mod session;

pub use auth::{AuthToken, Credentials, Signup, SignupError, SignupForm};
pub use generation::{
    GenerationForm, GenerationInput, GenerationInputError, GenerationRequest, QuestionCount,
    UploadedFile,
};
pub use question::Question;
pub use score::{ScoreOwner, ScoreSubmission, ScoreboardEntry};
pub use session::{QuizPhase, Session, SessionError};

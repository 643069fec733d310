use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationInputError {
    #[error("enter a topic or upload a PDF")]
    EmptyInput,

    #[error("question count must be between {min} and {max}, got {got}")]
    CountOutOfRange { got: u8, min: u8, max: u8 },
}

/// Number of questions to request, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns `GenerationInputError::CountOutOfRange` outside `5..=10`.
    pub fn new(value: u8) -> Result<Self, GenerationInputError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GenerationInputError::CountOutOfRange {
                got: value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamp an arbitrary slider value into range.
    #[must_use]
    pub fn saturating(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MIN))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for QuestionCount {
    type Error = GenerationInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionCount> for u8 {
    fn from(count: QuestionCount) -> Self {
        count.0
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document picked by the user, read fully into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What the quiz is generated from. Exactly one source per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationInput {
    Topic(String),
    File(UploadedFile),
}

impl GenerationInput {
    /// Pick the generation source. A non-empty trimmed topic wins over a file.
    ///
    /// # Errors
    ///
    /// Returns `GenerationInputError::EmptyInput` when the topic is blank and
    /// no file was picked.
    pub fn select(topic: &str, file: Option<UploadedFile>) -> Result<Self, GenerationInputError> {
        let topic = topic.trim();
        if !topic.is_empty() {
            return Ok(Self::Topic(topic.to_string()));
        }
        file.map(Self::File)
            .ok_or(GenerationInputError::EmptyInput)
    }

    /// Label recorded with a saved score.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Topic(topic) => topic,
            Self::File(_) => "File Upload",
        }
    }
}

/// Raw state of the generation panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationForm {
    pub topic: String,
    pub file: Option<UploadedFile>,
    pub count: QuestionCount,
}

impl GenerationForm {
    /// # Errors
    ///
    /// Returns `GenerationInputError::EmptyInput` when neither source is present.
    pub fn into_request(self) -> Result<GenerationRequest, GenerationInputError> {
        let input = GenerationInput::select(&self.topic, self.file)?;
        Ok(GenerationRequest {
            input,
            count: self.count,
        })
    }
}

/// A validated request ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub input: GenerationInput,
    pub count: QuestionCount,
}

use quiz_core::model::Session;

/// One question as rendered in the quiz list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl QuestionVm {
    #[must_use]
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.as_deref() == Some(option)
    }

    /// Radio group name, unique per question.
    #[must_use]
    pub fn group_name(&self) -> String {
        format!("q{}", self.index)
    }
}

#[must_use]
pub fn map_questions(session: &Session) -> Vec<QuestionVm> {
    session
        .quiz()
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionVm {
            index,
            heading: format!("Q{}. {}", index + 1, question.text()),
            options: question.options().to_vec(),
            selected: session.answer(index).map(str::to_string),
        })
        .collect()
}

/// "3 of 5 answered"
#[must_use]
pub fn progress_label(session: &Session) -> String {
    format!(
        "{} of {} answered",
        session.answers().len(),
        session.quiz().len()
    )
}

/// State of the Generate button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateButtonVm {
    pub label: &'static str,
    pub disabled: bool,
}

/// A picked document is read asynchronously; generating before it lands
/// would see no file at all.
#[must_use]
pub fn generate_button(busy: bool, reading_file: bool) -> GenerateButtonVm {
    let label = if busy {
        "Generating..."
    } else if reading_file {
        "Reading PDF..."
    } else {
        "Generate Quiz"
    };
    GenerateButtonVm {
        label,
        disabled: busy || reading_file,
    }
}

/// Notice for a generation that succeeded without any questions.
#[must_use]
pub fn generation_notice(received: usize) -> Option<&'static str> {
    (received == 0).then_some("No questions were generated. Try another topic or document.")
}

use quiz_core::GradeReport;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub index: usize,
    pub verdict_label: String,
    pub is_correct: bool,
    /// Only set for wrong answers.
    pub correct_answer_label: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub rows: Vec<ResultRowVm>,
    pub score_label: String,
    pub accuracy_label: String,
    pub difficulty_label: String,
}

#[must_use]
pub fn map_results(report: &GradeReport) -> ResultsVm {
    let rows = report
        .rows()
        .iter()
        .map(|row| {
            let number = row.index + 1;
            if row.is_correct() {
                ResultRowVm {
                    index: row.index,
                    verdict_label: format!("Q{number}: Correct"),
                    is_correct: true,
                    correct_answer_label: None,
                    explanation: row.explanation.clone(),
                }
            } else {
                ResultRowVm {
                    index: row.index,
                    verdict_label: format!("Q{number}: Wrong"),
                    is_correct: false,
                    correct_answer_label: Some(format!("Correct answer: {}", row.correct)),
                    explanation: row.explanation.clone(),
                }
            }
        })
        .collect();

    ResultsVm {
        rows,
        score_label: format!("Score: {}/{}", report.score(), report.total()),
        accuracy_label: format!("{}% accuracy", report.percentage()),
        difficulty_label: format!("Difficulty: {}", report.difficulty().label()),
    }
}

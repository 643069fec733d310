mod quiz_vm;
mod results_vm;
mod scoreboard_vm;

pub use quiz_vm::{
    GenerateButtonVm, QuestionVm, generate_button, generation_notice, map_questions,
    progress_label,
};
pub use results_vm::{ResultRowVm, ResultsVm, map_results};
pub use scoreboard_vm::{ScoreboardRowVm, map_scoreboard_rows};

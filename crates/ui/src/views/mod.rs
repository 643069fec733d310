mod login;
mod quiz;
mod scoreboard;
mod state;

pub use login::LoginView;
pub use quiz::QuizView;
pub use scoreboard::ScoreboardPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

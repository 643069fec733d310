mod generate;
mod questions;
mod results;
mod view;

pub use view::QuizView;

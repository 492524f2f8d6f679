#![forbid(unsafe_code)]

pub mod location;
pub mod model;
pub mod paginator;
pub mod quiz;
pub mod tabs;

pub use paginator::Paginator;
pub use quiz::{COMPLETION_MESSAGE_DELAY, Completion, OptionMark, QuizState, ScoreTier};
pub use tabs::TabSwitcher;

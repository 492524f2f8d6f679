mod blocks;
mod viewer;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use blocks::{MarkdownText, QuizView, RevealView, TabGroupView};
pub use viewer::ViewerView;

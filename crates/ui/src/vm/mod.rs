mod markdown_vm;
mod quiz_vm;

pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use quiz_vm::{option_class, progress_label, question_class};

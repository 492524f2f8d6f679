use slides_core::{OptionMark, QuizState};

#[must_use]
pub fn option_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Neutral => "quiz-option",
        OptionMark::Correct => "quiz-option correct",
        OptionMark::Wrong => "quiz-option wrong",
    }
}

#[must_use]
pub fn question_class(answered: bool) -> &'static str {
    if answered {
        "quiz-question answered"
    } else {
        "quiz-question"
    }
}

/// Progress line under the score, e.g. `2 of 5 answered`.
#[must_use]
pub fn progress_label(state: &QuizState) -> String {
    format!("{} of {} answered", state.answered(), state.total())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_classes_match_marks() {
        assert_eq!(option_class(OptionMark::Neutral), "quiz-option");
        assert_eq!(option_class(OptionMark::Correct), "quiz-option correct");
        assert_eq!(option_class(OptionMark::Wrong), "quiz-option wrong");
    }

    #[test]
    fn answered_questions_get_the_answered_class() {
        assert_eq!(question_class(true), "quiz-question answered");
        assert_eq!(question_class(false), "quiz-question");
    }
}

use std::time::Duration;

use crate::model::Quiz;

/// Delay between the final answer and the completion message, so the score
/// line renders first.
pub const COMPLETION_MESSAGE_DELAY: Duration = Duration::from_millis(500);

//
// ─── SCORING ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    KeepStudying,
}

impl ScoreTier {
    /// `>= 80%` excellent, `>= 60%` good, anything else keep studying.
    #[must_use]
    pub fn from_score(score: u32, total: u32) -> Self {
        match percentage(score, total) {
            80.. => Self::Excellent,
            60.. => Self::Good,
            _ => Self::KeepStudying,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "🎉 Excellent! You're ready!",
            Self::Good => "👍 Good job! Review the topics you missed.",
            Self::KeepStudying => "📚 Keep studying! Review all sections again.",
        }
    }
}

/// Whole-number percentage, rounded down. An empty quiz scores 0.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = u64::from(score) * 100 / u64::from(total);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered { picked: usize },
}

/// How an option should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    NotFinished,
    /// Every question is answered; the message is waiting for its delay.
    Pending(ScoreTier),
    Shown(ScoreTier),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Set on the submission that answers the last open question.
    pub completed: Option<ScoreTier>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct QuestionSlot {
    options: usize,
    correct: usize,
    state: QuestionState,
}

/// Running state of one quiz block.
///
/// `score <= answered <= total` holds at all times and neither counter ever
/// decreases. An answered question is locked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizState {
    total: u32,
    answered: u32,
    score: u32,
    questions: Vec<QuestionSlot>,
    has_feedback: bool,
    feedback_visible: bool,
    completion: Completion,
}

impl QuizState {
    #[must_use]
    pub fn new(quiz: &Quiz) -> Self {
        Self {
            total: quiz.total(),
            answered: 0,
            score: 0,
            questions: quiz
                .questions
                .iter()
                .map(|question| QuestionSlot {
                    options: question.options.len(),
                    correct: question.correct,
                    state: QuestionState::Unanswered,
                })
                .collect(),
            has_feedback: quiz.feedback.is_some(),
            feedback_visible: false,
            completion: Completion::NotFinished,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        self.completion
    }

    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    #[must_use]
    pub fn question_state(&self, question: usize) -> Option<QuestionState> {
        self.questions.get(question).map(|slot| slot.state)
    }

    #[must_use]
    pub fn is_answered(&self, question: usize) -> bool {
        matches!(
            self.question_state(question),
            Some(QuestionState::Answered { .. })
        )
    }

    /// Records an answer.
    ///
    /// Returns `None` and changes nothing when the question is already
    /// answered or either index is out of range.
    pub fn submit(&mut self, question: usize, option: usize) -> Option<AnswerOutcome> {
        let slot = self.questions.get_mut(question)?;
        if option >= slot.options || slot.state != QuestionState::Unanswered {
            return None;
        }

        slot.state = QuestionState::Answered { picked: option };
        let correct = option == slot.correct;
        self.answered += 1;
        if correct {
            self.score += 1;
        }
        if self.has_feedback {
            self.feedback_visible = true;
        }

        let completed = if self.is_complete() && self.completion == Completion::NotFinished {
            let tier = ScoreTier::from_score(self.score, self.total);
            self.completion = Completion::Pending(tier);
            Some(tier)
        } else {
            None
        };

        Some(AnswerOutcome { correct, completed })
    }

    /// Makes a pending completion message visible. Returns whether anything changed.
    pub fn show_completion(&mut self) -> bool {
        match self.completion {
            Completion::Pending(tier) => {
                self.completion = Completion::Shown(tier);
                true
            }
            Completion::NotFinished | Completion::Shown(_) => false,
        }
    }

    /// The completion message, once its delay has elapsed.
    #[must_use]
    pub fn completion_message(&self) -> Option<&'static str> {
        match self.completion {
            Completion::Shown(tier) => Some(tier.message()),
            Completion::NotFinished | Completion::Pending(_) => None,
        }
    }

    /// `Score: {score}/{total}`
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Score: {}/{}", self.score, self.total)
    }

    /// Presentation for one option. Nothing is marked until the question is
    /// answered; after that the correct option is always marked, and a wrong
    /// pick is marked as such.
    #[must_use]
    pub fn option_mark(&self, question: usize, option: usize) -> OptionMark {
        let Some(slot) = self.questions.get(question) else {
            return OptionMark::Neutral;
        };
        match slot.state {
            QuestionState::Unanswered => OptionMark::Neutral,
            QuestionState::Answered { .. } if option == slot.correct => OptionMark::Correct,
            QuestionState::Answered { picked } if option == picked => OptionMark::Wrong,
            QuestionState::Answered { .. } => OptionMark::Neutral,
        }
    }
}

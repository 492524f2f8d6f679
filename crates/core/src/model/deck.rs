use std::collections::HashSet;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{GroupId, QuizId, RevealId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Validation failures for deck content. Page and question numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck must contain at least one page")]
    NoPages,

    #[error("page {page}: tab group has no tabs")]
    EmptyTabGroup { page: usize },

    #[error("page {page}: tab id cannot be empty")]
    EmptyTabId { page: usize },

    #[error("page {page}: tab id `{id}` is declared more than once")]
    DuplicateTabId { page: usize, id: String },

    #[error("page {page}: quiz has no questions")]
    EmptyQuiz { page: usize },

    #[error("page {page}, question {question}: no options")]
    NoOptions { page: usize, question: usize },

    #[error("page {page}, question {question}: expected exactly one correct option, found {count}")]
    CorrectOptionCount {
        page: usize,
        question: usize,
        count: usize,
    },
}

//
// ─── DRAFTS (wire format) ──────────────────────────────────────────────────────
//

/// Deck content as written by an author, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pages: Vec<PageDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blocks: Vec<BlockDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockDraft {
    Text { markdown: String },
    Tabs { tabs: Vec<TabDraft> },
    Quiz(QuizDraft),
    Reveal(RevealDraft),
}

/// Blocks allowed inside a tab panel. Tab groups do not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelBlockDraft {
    Text { markdown: String },
    Quiz(QuizDraft),
    Reveal(RevealDraft),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDraft {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub blocks: Vec<PanelBlockDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizDraft {
    #[serde(default)]
    pub title: Option<String>,
    /// Expected question count as declared by the author. Informational only.
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<OptionDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDraft {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealDraft {
    #[serde(default = "default_reveal_label")]
    pub label: String,
    pub feedback: String,
}

fn default_reveal_label() -> String {
    "Reveal Answer".to_string()
}

//
// ─── VALIDATED DECK ────────────────────────────────────────────────────────────
//

/// A validated deck. Interactive blocks are stored in tables and referenced
/// from pages by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    pages: Vec<Page>,
    groups: Vec<TabGroup>,
    quizzes: Vec<Quiz>,
    reveals: Vec<Reveal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Option<String>,
    pub blocks: Vec<PageBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBlock {
    Text(String),
    Tabs(GroupId),
    Quiz(QuizId),
    Reveal(RevealId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBlock {
    Text(String),
    Quiz(QuizId),
    Reveal(RevealId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub page: usize,
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub blocks: Vec<PanelBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub page: usize,
    pub title: Option<String>,
    pub declared_total: Option<u32>,
    pub questions: Vec<Question>,
    pub feedback: Option<String>,
}

impl Quiz {
    /// Number of questions actually present; this is the quiz total.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// Returns `(declared, actual)` when the author-declared total disagrees
    /// with the question count.
    #[must_use]
    pub fn total_mismatch(&self) -> Option<(u32, u32)> {
        let actual = self.total();
        self.declared_total
            .filter(|declared| *declared != actual)
            .map(|declared| (declared, actual))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub page: usize,
    pub label: String,
    pub feedback: String,
}

impl Deck {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Validation guarantees at least one page.
    #[must_use]
    pub fn page_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.pages.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(id.index())
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn quiz(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.get(id.index())
    }

    #[must_use]
    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }

    #[must_use]
    pub fn reveal(&self, id: RevealId) -> Option<&Reveal> {
        self.reveals.get(id.index())
    }
}

//
// ─── VALIDATION ────────────────────────────────────────────────────────────────
//

impl DeckDraft {
    /// Validates the draft and assigns handles to every interactive block.
    ///
    /// # Errors
    ///
    /// Returns `DeckError` for the first structural problem found.
    pub fn validate(self) -> Result<Deck, DeckError> {
        if self.pages.is_empty() {
            return Err(DeckError::NoPages);
        }

        let mut builder = DeckBuilder::default();
        let mut pages = Vec::with_capacity(self.pages.len());
        for (page_index, page) in self.pages.into_iter().enumerate() {
            pages.push(builder.page(page_index, page)?);
        }

        Ok(Deck {
            title: self.title,
            pages,
            groups: builder.groups,
            quizzes: builder.quizzes,
            reveals: builder.reveals,
        })
    }
}

#[derive(Default)]
struct DeckBuilder {
    groups: Vec<TabGroup>,
    quizzes: Vec<Quiz>,
    reveals: Vec<Reveal>,
}

impl DeckBuilder {
    fn page(&mut self, page: usize, draft: PageDraft) -> Result<Page, DeckError> {
        let mut seen_tab_ids = HashSet::new();
        let mut blocks = Vec::with_capacity(draft.blocks.len());
        for block in draft.blocks {
            let block = match block {
                BlockDraft::Text { markdown } => PageBlock::Text(markdown),
                BlockDraft::Tabs { tabs } => {
                    PageBlock::Tabs(self.tab_group(page, tabs, &mut seen_tab_ids)?)
                }
                BlockDraft::Quiz(quiz) => PageBlock::Quiz(self.quiz(page, quiz)?),
                BlockDraft::Reveal(reveal) => PageBlock::Reveal(self.reveal(page, reveal)),
            };
            blocks.push(block);
        }
        Ok(Page {
            title: draft.title,
            blocks,
        })
    }

    fn tab_group(
        &mut self,
        page: usize,
        drafts: Vec<TabDraft>,
        seen_tab_ids: &mut HashSet<String>,
    ) -> Result<GroupId, DeckError> {
        if drafts.is_empty() {
            return Err(DeckError::EmptyTabGroup { page: page + 1 });
        }

        let mut tabs = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = draft.id.trim().to_string();
            if id.is_empty() {
                return Err(DeckError::EmptyTabId { page: page + 1 });
            }
            if !seen_tab_ids.insert(id.clone()) {
                return Err(DeckError::DuplicateTabId { page: page + 1, id });
            }

            let mut blocks = Vec::with_capacity(draft.blocks.len());
            for block in draft.blocks {
                let block = match block {
                    PanelBlockDraft::Text { markdown } => PanelBlock::Text(markdown),
                    PanelBlockDraft::Quiz(quiz) => PanelBlock::Quiz(self.quiz(page, quiz)?),
                    PanelBlockDraft::Reveal(reveal) => PanelBlock::Reveal(self.reveal(page, reveal)),
                };
                blocks.push(block);
            }
            tabs.push(Tab {
                id,
                label: draft.label,
                blocks,
            });
        }

        let id = GroupId::new(self.groups.len());
        self.groups.push(TabGroup { page, tabs });
        Ok(id)
    }

    fn quiz(&mut self, page: usize, draft: QuizDraft) -> Result<QuizId, DeckError> {
        if draft.questions.is_empty() {
            return Err(DeckError::EmptyQuiz { page: page + 1 });
        }

        let mut questions = Vec::with_capacity(draft.questions.len());
        for (index, question) in draft.questions.into_iter().enumerate() {
            if question.options.is_empty() {
                return Err(DeckError::NoOptions {
                    page: page + 1,
                    question: index + 1,
                });
            }
            let correct: Vec<usize> = question
                .options
                .iter()
                .enumerate()
                .filter(|(_, option)| option.correct)
                .map(|(position, _)| position)
                .collect();
            let [correct] = correct.as_slice() else {
                return Err(DeckError::CorrectOptionCount {
                    page: page + 1,
                    question: index + 1,
                    count: correct.len(),
                });
            };
            questions.push(Question {
                prompt: question.prompt,
                correct: *correct,
                options: question.options.into_iter().map(|option| option.text).collect(),
            });
        }

        let id = QuizId::new(self.quizzes.len());
        self.quizzes.push(Quiz {
            page,
            title: draft.title,
            declared_total: draft.total,
            questions,
            feedback: draft.feedback,
        });
        Ok(id)
    }

    fn reveal(&mut self, page: usize, draft: RevealDraft) -> RevealId {
        let id = RevealId::new(self.reveals.len());
        self.reveals.push(Reveal {
            page,
            label: draft.label,
            feedback: draft.feedback,
        });
        id
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

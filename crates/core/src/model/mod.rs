mod deck;
mod ids;

pub use deck::{
    BlockDraft, Deck, DeckDraft, DeckError, OptionDraft, Page, PageBlock, PageDraft, PanelBlock,
    PanelBlockDraft, Question, QuestionDraft, Quiz, QuizDraft, Reveal, RevealDraft, Tab, TabDraft,
    TabGroup,
};
pub use ids::{GroupId, QuizId, RevealId};

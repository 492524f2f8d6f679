use std::sync::Arc;

use log::{debug, trace};
use slides_core::location::{page_from_url, set_page};
use slides_core::model::{Deck, GroupId, QuizId, RevealId};
use slides_core::{Paginator, QuizState, TabSwitcher};
use url::Url;

use crate::location::Location;

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Viewer behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Mirror the current page into the location and remember the last tab
    /// chosen on each page.
    pub persist_navigation: bool,
    /// Bind the left/right arrow keys to page navigation.
    pub keyboard_navigation: bool,
}

impl ViewerOptions {
    /// No location sync, no tab memory, no keyboard binding.
    #[must_use]
    pub const fn simple() -> Self {
        Self {
            persist_navigation: false,
            keyboard_navigation: false,
        }
    }
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            persist_navigation: true,
            keyboard_navigation: true,
        }
    }
}

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerIntent {
    Next,
    Previous,
    GoTo(usize),
    SelectTab { group: GroupId, tab: String },
    Answer {
        quiz: QuizId,
        question: usize,
        option: usize,
    },
    Reveal(RevealId),
    ShowCompletion(QuizId),
}

/// What the caller has to do after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEffect {
    /// Nothing changed.
    Ignored,
    Updated,
    /// The quiz just finished; apply `ShowCompletion` after
    /// [`slides_core::COMPLETION_MESSAGE_DELAY`].
    ScheduleCompletion(QuizId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` name.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowLeft" => Some(Self::ArrowLeft),
            _ => None,
        }
    }
}

//
// ─── VIEWER ────────────────────────────────────────────────────────────────────
//

/// Owns every piece of runtime state for one open deck.
pub struct Viewer {
    deck: Arc<Deck>,
    options: ViewerOptions,
    location: Box<dyn Location>,
    pages: Paginator,
    tabs: TabSwitcher,
    quizzes: Vec<QuizState>,
    revealed: Vec<bool>,
}

impl Viewer {
    /// Opens `deck` at the page requested by `location` (when navigation is
    /// persisted and the request is valid) or at the first page.
    #[must_use]
    pub fn open(deck: Arc<Deck>, options: ViewerOptions, location: Box<dyn Location>) -> Self {
        let pages = Paginator::new(deck.page_count());
        let tabs = TabSwitcher::new(&deck, options.persist_navigation);
        let quizzes = deck.quizzes().iter().map(QuizState::new).collect();
        let revealed = vec![false; deck.reveals().len()];

        let mut viewer = Self {
            deck,
            options,
            location,
            pages,
            tabs,
            quizzes,
            revealed,
        };

        let initial = if options.persist_navigation {
            let url = viewer.location.current();
            let requested = page_from_url(&url, viewer.pages.total());
            if requested.is_none() {
                trace!("no usable page in {url}, starting at page 1");
            }
            requested.unwrap_or(0)
        } else {
            0
        };
        let moved = viewer.pages.go_to(initial);
        viewer.after_move(moved);
        viewer
    }

    pub fn apply(&mut self, intent: ViewerIntent) -> ViewerEffect {
        let effect = match &intent {
            ViewerIntent::Next => {
                let moved = self.pages.advance();
                self.after_move(moved)
            }
            ViewerIntent::Previous => {
                let moved = self.pages.retreat();
                self.after_move(moved)
            }
            ViewerIntent::GoTo(index) => {
                let moved = self.pages.go_to(*index);
                self.after_move(moved)
            }
            ViewerIntent::SelectTab { group, tab } => updated(self.tabs.select(*group, tab)),
            ViewerIntent::Answer {
                quiz,
                question,
                option,
            } => self.answer(*quiz, *question, *option),
            ViewerIntent::Reveal(id) => self.reveal(*id),
            ViewerIntent::ShowCompletion(quiz) => updated(
                self.quizzes
                    .get_mut(quiz.index())
                    .is_some_and(QuizState::show_completion),
            ),
        };

        if effect == ViewerEffect::Ignored {
            debug!("ignored {intent:?}");
        }
        effect
    }

    /// Arrow-key navigation. Ignored when keyboard navigation is off.
    pub fn handle_key(&mut self, key: NavKey) -> ViewerEffect {
        if !self.options.keyboard_navigation {
            return ViewerEffect::Ignored;
        }
        match key {
            NavKey::ArrowRight => self.apply(ViewerIntent::Next),
            NavKey::ArrowLeft => self.apply(ViewerIntent::Previous),
        }
    }

    fn after_move(&mut self, moved: bool) -> ViewerEffect {
        if moved {
            self.page_shown();
        }
        updated(moved)
    }

    /// Runs once the paginator moved: restore tabs, mirror the page.
    fn page_shown(&mut self) {
        let index = self.pages.current();
        self.tabs.restore_page(index);

        if self.options.persist_navigation {
            let mut url = self.location.current();
            set_page(&mut url, index);
            self.location.replace(url);
        }
        debug!("showing {}", self.pages.indicator());
    }

    fn answer(&mut self, quiz: QuizId, question: usize, option: usize) -> ViewerEffect {
        let Some(state) = self.quizzes.get_mut(quiz.index()) else {
            return ViewerEffect::Ignored;
        };
        let Some(outcome) = state.submit(question, option) else {
            return ViewerEffect::Ignored;
        };

        debug!(
            "{quiz} question {question}: {} ({})",
            if outcome.correct { "correct" } else { "wrong" },
            state.score_line()
        );
        match outcome.completed {
            Some(tier) => {
                debug!("{quiz} complete: {tier:?}");
                ViewerEffect::ScheduleCompletion(quiz)
            }
            None => ViewerEffect::Updated,
        }
    }

    fn reveal(&mut self, id: RevealId) -> ViewerEffect {
        match self.revealed.get_mut(id.index()) {
            Some(revealed) => {
                *revealed = true;
                ViewerEffect::Updated
            }
            None => ViewerEffect::Ignored,
        }
    }

    // ─── Read access ──────────────────────────────────────────────────────────

    /// Shared handle to the deck, for rendering without holding a borrow of the viewer.
    #[must_use]
    pub fn shared_deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pages.current()
    }

    #[must_use]
    pub fn indicator(&self) -> String {
        self.pages.indicator()
    }

    #[must_use]
    pub fn prev_disabled(&self) -> bool {
        self.pages.prev_disabled()
    }

    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.pages.next_disabled()
    }

    #[must_use]
    pub fn active_tab(&self, group: GroupId) -> Option<&str> {
        self.tabs.active_tab(group)
    }

    #[must_use]
    pub fn is_tab_active(&self, group: GroupId, tab_id: &str) -> bool {
        self.tabs.is_active(group, tab_id)
    }

    #[must_use]
    pub fn remembered_tab(&self, page: usize) -> Option<&str> {
        self.tabs.remembered_tab(page)
    }

    #[must_use]
    pub fn quiz(&self, id: QuizId) -> Option<&QuizState> {
        self.quizzes.get(id.index())
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.revealed.get(id.index()).copied().unwrap_or(false)
    }

    /// The location as last written by navigation.
    #[must_use]
    pub fn location(&self) -> Url {
        self.location.current()
    }
}

fn updated(changed: bool) -> ViewerEffect {
    if changed {
        ViewerEffect::Updated
    } else {
        ViewerEffect::Ignored
    }
}

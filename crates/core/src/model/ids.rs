use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a tab group, assigned in document order when a deck is validated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(usize);

impl GroupId {
    /// Creates a new `GroupId`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the group in the deck's group table
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handle for a quiz block, assigned in document order when a deck is validated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuizId(usize);

impl QuizId {
    /// Creates a new `QuizId`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the quiz in the deck's quiz table
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handle for a reveal button, assigned in document order when a deck is validated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RevealId(usize);

impl RevealId {
    /// Creates a new `RevealId`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the reveal block in the deck's reveal table
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

// ─── Debug / Display ───────────────────────────────────────────────────────────

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}

impl fmt::Debug for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuizId({})", self.0)
    }
}

impl fmt::Debug for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevealId({})", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quiz-{}", self.0)
    }
}

impl fmt::Display for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reveal-{}", self.0)
    }
}

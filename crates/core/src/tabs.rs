use crate::model::{Deck, GroupId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupState {
    page: usize,
    tab_ids: Vec<String>,
    active: usize,
}

impl GroupState {
    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tab_ids.iter().position(|id| id == tab_id)
    }
}

/// Active tab per tab group, plus the last tab chosen on each page.
///
/// With memory disabled the switcher never records or restores anything and
/// every group keeps whatever tab was last selected in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSwitcher {
    groups: Vec<GroupState>,
    remembered: Vec<Option<String>>,
    memory: bool,
}

impl TabSwitcher {
    /// Every group starts on its first declared tab.
    #[must_use]
    pub fn new(deck: &Deck, memory: bool) -> Self {
        let groups = deck
            .groups()
            .iter()
            .map(|group| GroupState {
                page: group.page,
                tab_ids: group.tabs.iter().map(|tab| tab.id.clone()).collect(),
                active: 0,
            })
            .collect();
        Self {
            groups,
            remembered: vec![None; deck.page_count().get()],
            memory,
        }
    }

    /// Id of the active tab in `group`.
    #[must_use]
    pub fn active_tab(&self, group: GroupId) -> Option<&str> {
        let state = self.groups.get(group.index())?;
        state.tab_ids.get(state.active).map(String::as_str)
    }

    #[must_use]
    pub fn is_active(&self, group: GroupId, tab_id: &str) -> bool {
        self.active_tab(group) == Some(tab_id)
    }

    /// Tab last chosen on `page`, when memory is enabled.
    #[must_use]
    pub fn remembered_tab(&self, page: usize) -> Option<&str> {
        self.remembered.get(page)?.as_deref()
    }

    /// Activates `tab_id` inside `group` only.
    ///
    /// Returns `false` for an unknown group or a tab id the group does not own.
    pub fn select(&mut self, group: GroupId, tab_id: &str) -> bool {
        let Some(state) = self.groups.get_mut(group.index()) else {
            return false;
        };
        let Some(position) = state.position(tab_id) else {
            return false;
        };
        state.active = position;

        if self.memory
            && let Some(slot) = self.remembered.get_mut(state.page)
        {
            *slot = Some(tab_id.to_string());
        }
        true
    }

    /// Re-applies the remembered tab when `page` becomes active.
    ///
    /// Groups on the page that own the remembered id switch to it. If nothing
    /// was remembered yet every group on the page falls back to its first tab.
    pub fn restore_page(&mut self, page: usize) {
        if !self.memory {
            return;
        }
        let remembered = self.remembered.get(page).cloned().flatten();
        for state in self.groups.iter_mut().filter(|state| state.page == page) {
            match remembered.as_deref() {
                Some(tab_id) => {
                    if let Some(position) = state.position(tab_id) {
                        state.active = position;
                    }
                }
                None => state.active = 0,
            }
        }
    }
}

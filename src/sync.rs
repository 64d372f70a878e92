//! Selection synchronization between the search and browse views.
//!
//! Choosing a search hit must move the browse selection to the matching
//! row (expanding collapsed ancestors on the way) without the browse
//! view's own selection-changed notification bouncing back into a content
//! navigation or a reciprocal search update. The one-shot suppression and
//! the deferred-scroll correction are explicit states here, each consumed
//! exactly once per transition.

use crate::flatten::PathRegistry;
use crate::page::PageTree;
use crate::resolver::{resolve_index, scroll_target, visible_row_count, ExpansionState};

/// Coordinator states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    /// A search hit was just selected; the next browse selection-changed
    /// notification is ours and must be swallowed.
    SyncingFromSearch,
}

/// Row selection handed to the browse view after a search hit is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSelection {
    /// Absolute row to select.
    pub index: usize,
    /// Row to scroll to. Overshoots the selection by one unless it is the
    /// last visible row, so the selected row stays visible while the view
    /// is still sizing itself.
    pub scroll_to: usize,
}

/// What the browse view should do after its selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Ordinary selection: navigate to the selected page's content.
    Navigate,
    /// The change was search-driven; do nothing.
    Suppressed,
}

/// Mediates selection between the browse and search views.
#[derive(Debug, Default)]
pub struct SyncCoordinator {
    state: SyncState,
    pending_scroll: Option<usize>,
}

impl SyncCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Handles a selection in the search-results view.
    ///
    /// Resolves the hit's sidebar row (force-expanding collapsed
    /// ancestors), arms the scroll-settlement marker, and suppresses the
    /// browse view's reciprocal notification. Returns `None` when the uri
    /// was never flattened, leaving the coordinator idle.
    pub fn select_search_result(
        &mut self,
        uri: &str,
        tree: &PageTree,
        registry: &PathRegistry,
        expansion: &mut ExpansionState,
    ) -> Option<BrowseSelection> {
        let path = registry.get(uri)?;
        self.state = SyncState::SyncingFromSearch;
        let index = resolve_index(tree, path, expansion);
        let visible = visible_row_count(tree, expansion);
        self.pending_scroll = Some(index);
        Some(BrowseSelection {
            index,
            scroll_to: scroll_target(index, visible),
        })
    }

    /// Browse-view selection-changed hook.
    ///
    /// Returns [`SelectionOutcome::Suppressed`] exactly once after
    /// [`Self::select_search_result`], then reverts to ordinary navigation.
    pub fn on_browse_selection_changed(&mut self) -> SelectionOutcome {
        match self.state {
            SyncState::SyncingFromSearch => {
                self.state = SyncState::Idle;
                SelectionOutcome::Suppressed
            }
            SyncState::Idle => SelectionOutcome::Navigate,
        }
    }

    /// One-shot marker for the deferred scroll correction: the resolved
    /// row, available exactly once after a search-driven selection.
    pub fn take_scroll_settled(&mut self) -> Option<usize> {
        self.pending_scroll.take()
    }
}

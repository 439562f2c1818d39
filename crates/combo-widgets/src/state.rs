use crate::type_ahead::SearchBuffer;
use std::time::Duration;

/// The mutable state of one select widget.
///
/// Owned exclusively by its [`Select`](crate::select::Select); never shared
/// between widgets.
#[derive(Debug, Clone)]
pub struct SelectState {
    /// The highlighted option. Always `< options.len()` when there are options.
    pub active_index: usize,
    /// The option carrying `aria-selected="true"`.
    pub selected_index: usize,
    /// Whether `selected_index` has been committed by the user, as opposed to
    /// the initial default.
    pub committed: bool,
    /// Whether the listbox is showing.
    pub open: bool,
    /// Characters typed in quick succession.
    pub search: SearchBuffer,
    /// One-shot latch set by pointer-down on an option so the blur it causes
    /// does not commit before the click lands.
    pub suppress_next_blur: bool,
}

impl SelectState {
    /// Closed, first option active, nothing typed.
    pub fn new(search_timeout: Duration) -> Self {
        Self {
            active_index: 0,
            selected_index: 0,
            committed: false,
            open: false,
            search: SearchBuffer::new(search_timeout),
            suppress_next_blur: false,
        }
    }
}

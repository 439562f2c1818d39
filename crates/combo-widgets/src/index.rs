//! Saturating index arithmetic for listbox navigation.

use crate::action::Action;

/// Number of options PageUp/PageDown move by.
pub const PAGE_SIZE: usize = 10;

/// Compute the active index after a navigation action.
///
/// The result always lies in `0..=max_index`; movement saturates at both
/// ends and never wraps. Actions that do not move (open, close, typing)
/// return `current` unchanged. An out-of-range `current` is clamped to
/// `max_index` first.
///
/// ```
/// use combo_widgets::action::Action;
/// use combo_widgets::index::updated_index;
///
/// assert_eq!(updated_index(4, 4, Action::MoveNext), 4);
/// assert_eq!(updated_index(3, 40, Action::PageDown), 13);
/// assert_eq!(updated_index(3, 40, Action::PageUp), 0);
/// ```
pub fn updated_index(current: usize, max_index: usize, action: Action) -> usize {
    let current = current.min(max_index);
    match action {
        Action::MoveFirst => 0,
        Action::MoveLast => max_index,
        Action::MovePrevious => current.saturating_sub(1),
        Action::MoveNext => current.saturating_add(1).min(max_index),
        Action::PageUp => current.saturating_sub(PAGE_SIZE),
        Action::PageDown => current.saturating_add(PAGE_SIZE).min(max_index),
        Action::Open | Action::Close | Action::CommitAndClose | Action::TypeAhead => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(updated_index(5, 9, Action::MoveFirst), 0);
        assert_eq!(updated_index(5, 9, Action::MoveLast), 9);
    }

    #[test]
    fn next_saturates_at_max() {
        assert_eq!(updated_index(8, 9, Action::MoveNext), 9);
        assert_eq!(updated_index(9, 9, Action::MoveNext), 9);
    }

    #[test]
    fn previous_saturates_at_zero() {
        assert_eq!(updated_index(1, 9, Action::MovePrevious), 0);
        assert_eq!(updated_index(0, 9, Action::MovePrevious), 0);
    }

    #[test]
    fn page_moves_by_ten() {
        assert_eq!(updated_index(0, 30, Action::PageDown), 10);
        assert_eq!(updated_index(25, 30, Action::PageDown), 30);
        assert_eq!(updated_index(25, 30, Action::PageUp), 15);
        assert_eq!(updated_index(9, 30, Action::PageUp), 0);
    }

    #[test]
    fn non_moving_actions_keep_current() {
        for action in [
            Action::Open,
            Action::Close,
            Action::CommitAndClose,
            Action::TypeAhead,
        ] {
            assert_eq!(updated_index(3, 9, action), 3);
        }
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(updated_index(50, 9, Action::MovePrevious), 8);
        assert_eq!(updated_index(50, 9, Action::Open), 9);
    }

    #[test]
    fn single_option_list() {
        for action in [
            Action::MoveNext,
            Action::MovePrevious,
            Action::PageUp,
            Action::PageDown,
            Action::MoveLast,
        ] {
            assert_eq!(updated_index(0, 0, action), 0);
        }
    }
}

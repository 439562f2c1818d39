//! Classifies key presses into semantic select actions.

use crate::key::{Key, KeyInput};

/// What a key press means to the select, given whether the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open,
    Close,
    CommitAndClose,
    MoveFirst,
    MoveLast,
    MoveNext,
    MovePrevious,
    PageUp,
    PageDown,
    TypeAhead,
}

/// One effect in an action's ordered expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Open the listbox (no-op when already open).
    Open,
    /// Close the listbox (no-op when already closed).
    Close,
    /// Commit the active option as the selection.
    Commit,
    /// Move the active option with the index updater.
    Move,
    /// Feed the key to the type-ahead buffer and jump to a match.
    Search,
}

impl Action {
    /// The ordered steps the controller runs for this action.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Action::Open => &[Step::Open],
            Action::Close => &[Step::Close],
            Action::CommitAndClose => &[Step::Commit, Step::Close],
            Action::MoveFirst | Action::MoveLast => &[Step::Open, Step::Move],
            Action::MoveNext | Action::MovePrevious | Action::PageUp | Action::PageDown => {
                &[Step::Move]
            }
            Action::TypeAhead => &[Step::Open, Step::Search],
        }
    }

    /// Whether the host should suppress the platform default for the key
    /// that produced this action. Typing is left alone.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Action::TypeAhead)
    }
}

/// Map a key press to an action. `None` means the key is not handled and
/// the platform default should proceed.
///
/// Home, End and typing work whether or not the menu is open; navigation,
/// Escape and commit keys only apply while it is open.
pub fn action_for_key(input: &KeyInput, menu_open: bool) -> Option<Action> {
    let key = input.key;

    if !menu_open && matches!(key, Key::ArrowDown | Key::ArrowUp | Key::Enter | Key::Space) {
        return Some(Action::Open);
    }

    match key {
        Key::Home => return Some(Action::MoveFirst),
        Key::End => return Some(Action::MoveLast),
        Key::Backspace | Key::Clear => return Some(Action::TypeAhead),
        Key::Character(_) if !input.has_command_modifier() => return Some(Action::TypeAhead),
        _ => {}
    }

    if !menu_open {
        return None;
    }

    match key {
        Key::ArrowUp if input.alt => Some(Action::CommitAndClose),
        Key::ArrowDown => (!input.alt).then_some(Action::MoveNext),
        Key::ArrowUp => Some(Action::MovePrevious),
        Key::PageUp => Some(Action::PageUp),
        Key::PageDown => Some(Action::PageDown),
        Key::Escape => Some(Action::Close),
        Key::Enter | Key::Space => Some(Action::CommitAndClose),
        _ => None,
    }
}

/// Whether the host should swallow this key instead of letting the platform
/// default run.
pub fn intercepts(input: &KeyInput, menu_open: bool) -> bool {
    action_for_key(input, menu_open).is_some_and(Action::prevents_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> KeyInput {
        KeyInput::named(name)
    }

    #[test]
    fn open_keys_open_closed_menu() {
        for name in ["ArrowDown", "ArrowUp", "Enter", " "] {
            assert_eq!(action_for_key(&key(name), false), Some(Action::Open), "{name}");
        }
    }

    #[test]
    fn home_end_ignore_open_state() {
        for open in [false, true] {
            assert_eq!(action_for_key(&key("Home"), open), Some(Action::MoveFirst));
            assert_eq!(action_for_key(&key("End"), open), Some(Action::MoveLast));
        }
    }

    #[test]
    fn typing_ignores_open_state() {
        for open in [false, true] {
            assert_eq!(action_for_key(&key("g"), open), Some(Action::TypeAhead));
            assert_eq!(action_for_key(&key("Backspace"), open), Some(Action::TypeAhead));
            assert_eq!(action_for_key(&key("Clear"), open), Some(Action::TypeAhead));
        }
    }

    #[test]
    fn shifted_character_still_types() {
        let input = key("G").with_shift();
        assert_eq!(action_for_key(&input, false), Some(Action::TypeAhead));
    }

    #[test]
    fn command_modifiers_suppress_typing() {
        assert_eq!(action_for_key(&key("c").with_ctrl(), true), None);
        assert_eq!(action_for_key(&key("c").with_meta(), true), None);
        assert_eq!(action_for_key(&key("c").with_alt(), false), None);
    }

    #[test]
    fn escape_only_closes_open_menu() {
        assert_eq!(action_for_key(&key("Escape"), true), Some(Action::Close));
        assert_eq!(action_for_key(&key("Escape"), false), None);
    }

    #[test]
    fn open_menu_navigation() {
        assert_eq!(action_for_key(&key("ArrowDown"), true), Some(Action::MoveNext));
        assert_eq!(action_for_key(&key("ArrowUp"), true), Some(Action::MovePrevious));
        assert_eq!(action_for_key(&key("PageUp"), true), Some(Action::PageUp));
        assert_eq!(action_for_key(&key("PageDown"), true), Some(Action::PageDown));
    }

    #[test]
    fn open_menu_commit_keys() {
        assert_eq!(action_for_key(&key("Enter"), true), Some(Action::CommitAndClose));
        assert_eq!(action_for_key(&key(" "), true), Some(Action::CommitAndClose));
        assert_eq!(
            action_for_key(&key("ArrowUp").with_alt(), true),
            Some(Action::CommitAndClose)
        );
    }

    #[test]
    fn alt_arrow_down_is_unmapped_when_open() {
        assert_eq!(action_for_key(&key("ArrowDown").with_alt(), true), None);
    }

    #[test]
    fn alt_arrow_opens_closed_menu() {
        assert_eq!(
            action_for_key(&key("ArrowDown").with_alt(), false),
            Some(Action::Open)
        );
    }

    #[test]
    fn page_keys_unmapped_when_closed() {
        assert_eq!(action_for_key(&key("PageDown"), false), None);
        assert_eq!(action_for_key(&key("PageUp"), false), None);
    }

    #[test]
    fn unrelated_keys_unmapped() {
        for open in [false, true] {
            assert_eq!(action_for_key(&key("Tab"), open), None);
            assert_eq!(action_for_key(&key("F5"), open), None);
            assert_eq!(action_for_key(&key("ArrowLeft"), open), None);
        }
    }

    #[test]
    fn intercept_everything_but_typing() {
        assert!(intercepts(&key("ArrowDown"), false));
        assert!(intercepts(&key("Escape"), true));
        assert!(!intercepts(&key("g"), true));
        assert!(!intercepts(&key("Tab"), true));
    }

    #[test]
    fn composite_steps_are_ordered() {
        assert_eq!(Action::CommitAndClose.steps(), &[Step::Commit, Step::Close]);
        assert_eq!(Action::MoveFirst.steps(), &[Step::Open, Step::Move]);
        assert_eq!(Action::TypeAhead.steps(), &[Step::Open, Step::Search]);
        assert_eq!(Action::MoveNext.steps(), &[Step::Move]);
    }
}

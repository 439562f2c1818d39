//! Native-select style type-ahead: prefix matching plus the search buffer
//! that accumulates rapid keypresses.

use combo_core::command::Command;
use combo_core::debounce::{Debounce, DebounceToken};
use std::time::Duration;

/// Find the option matching a typed search string.
///
/// Options are scanned cyclically starting at `start` (wrapping past the
/// end), and the first case-insensitive prefix match wins. When nothing
/// matches and the search is one letter repeated (`"aaa"`), the scan retries
/// with that single letter, so pressing the same key repeatedly cycles
/// through every option starting with it.
///
/// Returns the option's position in `options`, or `None`.
///
/// ```
/// use combo_widgets::type_ahead::index_by_letter;
///
/// let options = ["Apple", "Banana", "Apricot"];
/// assert_eq!(index_by_letter(&options, "ap", 0), Some(0));
/// assert_eq!(index_by_letter(&options, "a", 1), Some(2));
/// assert_eq!(index_by_letter(&options, "aa", 3), Some(0));
/// assert_eq!(index_by_letter(&options, "x", 0), None);
/// ```
pub fn index_by_letter<S: AsRef<str>>(options: &[S], search: &str, start: usize) -> Option<usize> {
    if options.is_empty() || search.is_empty() {
        return None;
    }
    let start = start % options.len();
    let needle = search.to_lowercase();

    first_prefix_match(options, &needle, start).or_else(|| {
        let mut chars = needle.chars();
        let first = chars.next()?;
        if chars.all(|c| c == first) {
            let mut buf = [0u8; 4];
            first_prefix_match(options, first.encode_utf8(&mut buf), start)
        } else {
            None
        }
    })
}

fn first_prefix_match<S: AsRef<str>>(options: &[S], needle: &str, start: usize) -> Option<usize> {
    let len = options.len();
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&i| options[i].as_ref().to_lowercase().starts_with(needle))
}

/// The characters typed so far, plus the inactivity timer that clears them.
#[derive(Debug, Clone)]
pub struct SearchBuffer {
    text: String,
    timer: Debounce,
}

impl SearchBuffer {
    /// Create an empty buffer that expires `timeout` after the last keypress.
    pub fn new(timeout: Duration) -> Self {
        Self {
            text: String::new(),
            timer: Debounce::new(timeout),
        }
    }

    /// The accumulated search string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a typed character.
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Drop the most recently typed character.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Empty the buffer and cancel the pending expiry.
    pub fn clear(&mut self) {
        self.text.clear();
        self.timer.cancel();
    }

    /// Restart the inactivity timer, superseding any pending one.
    pub fn restart_timer<Msg: Send + 'static>(
        &mut self,
        map: impl FnOnce(DebounceToken) -> Msg,
    ) -> Command<Msg> {
        self.timer.schedule(map)
    }

    /// Handle a timer delivery. Clears the buffer and returns `true` when the
    /// token belongs to the live timer; stale tokens are ignored.
    pub fn expire(&mut self, token: DebounceToken) -> bool {
        if self.timer.fire(token) {
            self.text.clear();
            true
        } else {
            false
        }
    }

    /// Whether an expiry is scheduled.
    pub fn is_timer_pending(&self) -> bool {
        self.timer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: [&str; 3] = ["Apple", "Banana", "Apricot"];
    const COLOURS: [&str; 3] = ["Red", "Green", "Blue"];

    #[test]
    fn prefix_match_from_start() {
        assert_eq!(index_by_letter(&FRUIT, "ap", 0), Some(0));
        assert_eq!(index_by_letter(&FRUIT, "apr", 0), Some(2));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(index_by_letter(&FRUIT, "BAN", 0), Some(1));
        assert_eq!(index_by_letter(&COLOURS, "gR", 0), Some(1));
    }

    #[test]
    fn rotation_starts_at_start_index() {
        assert_eq!(index_by_letter(&COLOURS, "b", 1), Some(2));
        assert_eq!(index_by_letter(&COLOURS, "r", 1), Some(0));
    }

    #[test]
    fn repeated_letter_cycles() {
        assert_eq!(index_by_letter(&FRUIT, "a", 1), Some(2));
        assert_eq!(index_by_letter(&FRUIT, "aa", 3), Some(0));
        assert_eq!(index_by_letter(&FRUIT, "aaa", 1), Some(2));
    }

    #[test]
    fn mixed_letters_without_match_is_none() {
        assert_eq!(index_by_letter(&FRUIT, "ab", 0), None);
    }

    #[test]
    fn empty_inputs_are_none() {
        let none: [&str; 0] = [];
        assert_eq!(index_by_letter(&none, "a", 0), None);
        assert_eq!(index_by_letter(&FRUIT, "", 0), None);
    }

    #[test]
    fn duplicate_labels_report_their_own_position() {
        let options = ["Beta", "Alpha", "Beta"];
        assert_eq!(index_by_letter(&options, "b", 1), Some(2));
        assert_eq!(index_by_letter(&options, "b", 3), Some(0));
    }

    #[test]
    fn buffer_accumulates_and_edits() {
        let mut buf = SearchBuffer::new(Duration::from_millis(500));
        buf.push('g');
        buf.push('r');
        assert_eq!(buf.as_str(), "gr");
        buf.pop();
        assert_eq!(buf.as_str(), "g");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn buffer_expires_only_for_live_timer() {
        let mut buf = SearchBuffer::new(Duration::from_millis(500));
        buf.push('a');
        let stale = buf.restart_timer(|t| t).into_after().map(|(_, t)| t);
        buf.push('b');
        let live = buf.restart_timer(|t| t).into_after().map(|(_, t)| t);

        assert!(!buf.expire(stale.expect("stale token")));
        assert_eq!(buf.as_str(), "ab");
        assert!(buf.expire(live.expect("live token")));
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_cancels_timer() {
        let mut buf = SearchBuffer::new(Duration::from_millis(500));
        buf.push('a');
        let token = buf
            .restart_timer(|t| t)
            .into_after()
            .map(|(_, t)| t)
            .expect("token");
        buf.clear();
        assert!(!buf.is_timer_pending());
        buf.push('z');
        assert!(!buf.expire(token));
        assert_eq!(buf.as_str(), "z");
    }
}

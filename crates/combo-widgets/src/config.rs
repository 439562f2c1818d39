//! Tunable settings for the select widget.

use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Identifier used for option ids when the combobox has none of its own.
pub const DEFAULT_BASE_ID: &str = "combo";

/// Class names written into the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Toggled on the container while the listbox is open.
    pub open: String,
    /// Carried by exactly one option: the active one.
    pub current: String,
    /// Carried by every option.
    pub option: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            open: "open".to_string(),
            current: "option-current".to_string(),
            option: "combo__option".to_string(),
        }
    }
}

/// Terminal styles for the ratatui view.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Style for options that are neither active nor selected.
    pub normal: Style,
    /// Style for the active option.
    pub active: Style,
    /// Style for the committed option when it is not active.
    pub selected: Style,
    /// Style for the placeholder shown before anything is committed.
    pub placeholder: Style,
    /// Symbol displayed next to the active option.
    pub highlight_symbol: String,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::UNDERLINED),
            placeholder: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// Configuration for a [`Select`](crate::select::Select).
///
/// ```
/// use combo_widgets::config::SelectConfig;
/// use std::time::Duration;
///
/// let config = SelectConfig::default()
///     .with_placeholder("Pick a colour")
///     .with_visible_rows(5)
///     .with_search_timeout(Duration::from_millis(800));
/// assert_eq!(config.visible_rows, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Text shown in the control until an option is committed.
    pub placeholder: String,
    /// Option id prefix used when the combobox has no id.
    pub fallback_id: String,
    /// Inactivity period after which the type-ahead buffer is cleared.
    pub search_timeout: Duration,
    /// Number of option rows the listbox shows before it scrolls.
    pub visible_rows: usize,
    /// Height of one option row, in the host's units.
    pub row_height: i32,
    pub classes: ClassNames,
    pub style: SelectStyle,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select...".to_string(),
            fallback_id: DEFAULT_BASE_ID.to_string(),
            search_timeout: Duration::from_millis(500),
            visible_rows: 10,
            row_height: 1,
            classes: ClassNames::default(),
            style: SelectStyle::default(),
        }
    }
}

impl SelectConfig {
    /// Set the placeholder text shown before the first commit.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the option id prefix used when the combobox has no id.
    pub fn with_fallback_id(mut self, id: impl Into<String>) -> Self {
        self.fallback_id = id.into();
        self
    }

    /// Set the type-ahead inactivity timeout.
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Set how many rows the listbox shows before scrolling (at least one).
    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows.max(1);
        self
    }

    /// Set the height of one option row (at least one).
    pub fn with_row_height(mut self, height: i32) -> Self {
        self.row_height = height.max(1);
        self
    }

    /// Set the class names written into the presentation.
    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    /// Set the terminal styles.
    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }
}

use std::fmt;

/// The sub-elements a select is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// The outer wrapper that carries the open-state class.
    Container,
    /// The focusable control showing the committed value.
    Combobox,
    /// The popup holding the options.
    Listbox,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRole::Container => f.write_str("container"),
            ElementRole::Combobox => f.write_str("combobox"),
            ElementRole::Listbox => f.write_str("listbox"),
        }
    }
}

/// Errors raised while constructing a [`Select`](crate::select::Select).
///
/// Interaction itself never fails; malformed input falls back to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// A required sub-element was not supplied, so the widget was not built.
    #[error("select is missing its {0} element")]
    MissingElement(ElementRole),
}

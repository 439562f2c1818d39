//! The accessible select widget for **combo**.
//!
//! [`Select`](select::Select) implements the WAI-ARIA combobox pattern for a
//! single-select dropdown: keyboard navigation, native-select style
//! type-ahead, pointer selection that survives the blur it causes, and scroll
//! management for long option lists. It implements [`combo_core::Component`],
//! so it embeds in any [`combo_core::Model`] and renders with [`ratatui`].
//!
//! Each transition re-renders a pure [`Presentation`](presentation::Presentation)
//! of roles, ARIA attributes and marker classes. Hosts drain the resulting
//! [`Effect`](select::Effect)s to mirror the widget into their own element
//! tree.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | The controller: messages, effects and the terminal view |
//! | [`action`] | Key press to action classification and the dispatch table |
//! | [`index`] | Bounded next-index arithmetic for navigation actions |
//! | [`type_ahead`] | Prefix matcher and the expiring search buffer |
//! | [`scroll`] | Viewport checks and minimal-scroll helpers |
//! | [`presentation`] | Rendered ARIA state and its diff |
//!
//! # Supporting types
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`key`] | Host-neutral key model, convertible from crossterm events |
//! | [`config`] | Placeholder, timeouts, classes and styles |
//! | [`state`] | Per-widget mutable state |
//! | [`error`] | Construction errors |

pub mod action;
pub mod config;
pub mod error;
pub mod index;
pub mod key;
pub mod presentation;
pub mod scroll;
pub mod select;
pub mod state;
pub mod type_ahead;

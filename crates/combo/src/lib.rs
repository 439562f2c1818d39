//! **combo** -- an accessible select widget for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything needed to embed a
//! select from a single dependency:
//!
//! ```toml
//! [dependencies]
//! combo = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`combo_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Debounce`], etc.).
//! * The [`widgets`] module re-exports everything from [`combo_widgets`]
//!   (the select controller and its helpers).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```
//! use combo::widgets::key::KeyInput;
//! use combo::widgets::select::{Message, Select, SelectElements};
//! use combo::Component;
//!
//! let fruit = ["Apple", "Banana", "Cherry"].map(String::from).to_vec();
//! let mut select = Select::new(SelectElements::with_combobox_id("fruit"), fruit).unwrap();
//!
//! select.update(Message::Key(KeyInput::named("c")));
//! select.update(Message::Key(KeyInput::named("Enter")));
//! assert_eq!(select.selected_value(), Some("Cherry"));
//! ```

pub use combo_core::*;
pub mod widgets {
    pub use combo_widgets::*;
}

// Re-export dependencies for downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

//! Core runtime pieces for the **combo** widget crates.
//!
//! `combo-core` provides the traits and types a widget needs to live inside
//! an event-driven host. The design follows the [Elm Architecture]: state
//! changes happen in a synchronous `update`, and side effects are pushed to
//! the edges as [`Command`]s that the host executes.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Model`] | Top-level host of one or more components |
//! | [`Command`] | Describes a side effect (immediate, deferred, or async message) |
//! | [`Debounce`] | Cancellable one-shot timer built on [`Command::after`] |
//! | [`executor::execute`] | Runs commands on a tokio runtime |
//! | [`TestProgram`](testing::TestProgram) | Headless harness with a fake clock |
//!
//! # Logging
//!
//! Widgets emit [`tracing`] events. Terminal hosts route them to a file with
//! [`log::init_file_logging`].
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod debounce;
pub mod executor;
pub mod log;
pub mod model;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use debounce::{Debounce, DebounceToken};
pub use log::{init_file_logging, log_to_file, LogError};
pub use model::Model;

use crate::command::Command;
use ratatui::Frame;

/// A top-level host for one or more components, following the
/// [Elm Architecture].
///
/// A `Model` is what an event loop (or [`TestProgram`](crate::testing::TestProgram))
/// drives: [`init`](Model::init) creates the state, [`update`](Model::update)
/// handles each message, and [`view`](Model::view) renders the current state.
/// Discovering widgets and feeding them events is the host's job; the model
/// only owns state and reacts to messages.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);
}

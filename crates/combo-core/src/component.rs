use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// Widgets such as the select implement `Component` so a parent
/// [`Model`](crate::Model) can own several independent instances, route
/// messages to each, and decide *where* each one renders by passing it a
/// sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use combo_core::{Model, Component, Command};
/// use combo_widgets::select::{self, Select};
///
/// struct Form { colour: Select }
///
/// enum FormMsg { Colour(select::Message) }
///
/// impl Model for Form {
///     type Message = FormMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<FormMsg>) { /* ... */ }
///
///     fn update(&mut self, msg: FormMsg) -> Command<FormMsg> {
///         match msg {
///             FormMsg::Colour(m) => self.colour.update(m).map(FormMsg::Colour),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.colour.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it into the parent
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle,
    /// except for overlays that deliberately extend below it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing. The default implementation returns
    /// `false`.
    fn focused(&self) -> bool {
        false
    }
}

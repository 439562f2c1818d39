//! Accessible single-select combobox.
//!
//! [`Select`] owns the widget state and turns raw keyboard, pointer and focus
//! messages into state transitions. After every transition it re-renders its
//! [`Presentation`] and queues the resulting [`Effect`]s (attribute patches,
//! scroll requests, focus requests) for the host to apply. It also implements
//! [`Component`] so terminal hosts can draw it directly with ratatui.
//!
//! # Example
//!
//! ```
//! use combo_widgets::key::KeyInput;
//! use combo_widgets::select::{Message, Select, SelectElements};
//! use combo_core::Component;
//!
//! let options = vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()];
//! let mut select = Select::new(SelectElements::with_combobox_id("colour"), options).unwrap();
//!
//! select.update(Message::Key(KeyInput::named("ArrowDown")));
//! assert!(select.is_open());
//! select.update(Message::Key(KeyInput::named("ArrowDown")));
//! select.update(Message::Key(KeyInput::named("Enter")));
//! assert_eq!(select.selected_value(), Some("Green"));
//! ```

use crate::action::{self, action_for_key, Action, Step};
use crate::config::SelectConfig;
use crate::error::{ElementRole, SelectError};
use crate::index::updated_index;
use crate::key::{Key, KeyInput};
use crate::presentation::{self, OptionIds, Patch, Presentation, Target};
use crate::scroll::{
    is_in_view, is_scrollable, maintain_scroll_visibility, Bounds, ListboxScroll, ScrollArea,
    Viewport,
};
use crate::state::SelectState;
use crate::type_ahead::index_by_letter;
use combo_core::command::Command;
use combo_core::component::Component;
use combo_core::debounce::DebounceToken;
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

/// Messages for the select component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A crossterm key event. Release events are ignored.
    KeyPress(KeyEvent),
    /// A host-neutral key press.
    Key(KeyInput),
    /// Pointer click on the combobox control.
    ComboClick,
    /// Pointer pressed on an option, ahead of the blur it will cause.
    OptionPointerDown(usize),
    /// The pointer gesture on an option was abandoned.
    OptionPointerCancel,
    /// Pointer click on an option.
    OptionClick(usize),
    /// The combobox gained focus.
    Focus,
    /// The combobox lost focus.
    Blur,
    /// The type-ahead inactivity timer elapsed.
    SearchExpired(DebounceToken),
    /// Emitted when an option is committed, carrying the index and label.
    Selected(usize, String),
}

/// A host element handed to the select at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRef {
    pub id: Option<String>,
}

impl ElementRef {
    /// An element without an id.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// The three elements a select is assembled from. A missing element makes
/// construction fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectElements {
    pub container: Option<ElementRef>,
    pub combobox: Option<ElementRef>,
    pub listbox: Option<ElementRef>,
}

impl SelectElements {
    /// All three elements present; the combobox has no id.
    pub fn new() -> Self {
        Self {
            container: Some(ElementRef::new()),
            combobox: Some(ElementRef::new()),
            listbox: Some(ElementRef::new()),
        }
    }

    /// All three elements present, with the given combobox id.
    pub fn with_combobox_id(id: impl Into<String>) -> Self {
        Self {
            combobox: Some(ElementRef::with_id(id)),
            ..Self::new()
        }
    }
}

/// A side effect the host applies after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Update an attribute, class or text on a host element.
    Patch(Patch),
    /// Set the listbox's internal scroll offset.
    ScrollListbox { top: i32 },
    /// Smoothly scroll the page so the target is visible, moving it the
    /// least distance needed.
    ScrollIntoView(Target),
    /// Move keyboard focus to the target.
    Focus(Target),
}

/// Where the select sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub viewport: Viewport,
    pub combobox: Bounds,
    /// Page position of the listbox's first content row.
    pub listbox_top: i32,
    pub listbox_left: i32,
    pub listbox_width: i32,
}

impl Geometry {
    /// Geometry for the terminal view: the listbox opens directly below
    /// `anchor`, inside a terminal of size `screen`.
    pub fn below(anchor: Rect, screen: Rect) -> Self {
        Self {
            viewport: Viewport::new(i32::from(screen.width), i32::from(screen.height)),
            combobox: Bounds::from(anchor),
            listbox_top: i32::from(anchor.bottom()),
            listbox_left: i32::from(anchor.x),
            listbox_width: i32::from(anchor.width),
        }
    }
}

/// A keyboard- and pointer-operable single-select dropdown.
pub struct Select {
    options: Vec<String>,
    ids: OptionIds,
    config: SelectConfig,
    state: SelectState,
    listbox: ListboxScroll,
    geometry: Option<Geometry>,
    rendered: Presentation,
    effects: Vec<Effect>,
    focus: bool,
}

impl Select {
    /// Build a select with the default configuration.
    pub fn new(elements: SelectElements, options: Vec<String>) -> Result<Self, SelectError> {
        Self::with_config(elements, options, SelectConfig::default())
    }

    /// Build a select. Fails without side effects if any element is missing.
    ///
    /// The effect queue starts with the patches that mount the initial
    /// presentation.
    pub fn with_config(
        elements: SelectElements,
        options: Vec<String>,
        config: SelectConfig,
    ) -> Result<Self, SelectError> {
        let missing = if elements.container.is_none() {
            Some(ElementRole::Container)
        } else if elements.combobox.is_none() {
            Some(ElementRole::Combobox)
        } else if elements.listbox.is_none() {
            Some(ElementRole::Listbox)
        } else {
            None
        };
        if let Some(role) = missing {
            tracing::debug!(message = "select.init.skipped", missing = %role);
            return Err(SelectError::MissingElement(role));
        }

        let combobox_id = elements.combobox.as_ref().and_then(|c| c.id.as_deref());
        let ids = OptionIds::new(combobox_id, &config.fallback_id);
        let state = SelectState::new(config.search_timeout);
        let listbox = ListboxScroll::new(options.len(), config.visible_rows, config.row_height);
        let rendered = presentation::render(&state, &options, &ids, &config);
        let effects = rendered.mount().into_iter().map(Effect::Patch).collect();

        tracing::debug!(
            message = "select.init",
            id = ids.base(),
            options = options.len()
        );

        Ok(Self {
            options,
            ids,
            config,
            state,
            listbox,
            geometry: None,
            rendered,
            effects,
            focus: false,
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn ids(&self) -> &OptionIds {
        &self.ids
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// The highlighted option.
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// The committed option, if the user has chosen one.
    pub fn selected_index(&self) -> Option<usize> {
        self.state.committed.then_some(self.state.selected_index)
    }

    /// Label of the committed option.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_index()
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// The type-ahead characters typed so far.
    pub fn search_text(&self) -> &str {
        self.state.search.as_str()
    }

    /// The current presentation, as last rendered.
    pub fn presentation(&self) -> &Presentation {
        &self.rendered
    }

    pub fn listbox_scroll(&self) -> &ListboxScroll {
        &self.listbox
    }

    /// Drain the queued effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Record where the widget sits on the page. Without geometry every
    /// element counts as visible.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }

    /// Whether the host should suppress the platform default for `key`.
    pub fn intercepts(&self, key: &KeyInput) -> bool {
        action::intercepts(key, self.state.open)
    }

    fn handle_key(&mut self, input: KeyInput) -> Command<Message> {
        let Some(action) = action_for_key(&input, self.state.open) else {
            tracing::trace!(message = "select.key.ignored", key = ?input.key);
            return Command::none();
        };
        tracing::trace!(message = "select.key", key = ?input.key, ?action);

        let mut cmds = Vec::new();
        for step in action.steps() {
            match step {
                Step::Open => self.set_open(true, true),
                Step::Close => self.set_open(false, true),
                Step::Commit => cmds.push(self.commit(self.state.active_index)),
                Step::Move => self.move_active(action),
                Step::Search => cmds.push(self.type_ahead(input.key)),
            }
        }
        Command::batch(cmds)
    }

    fn move_active(&mut self, action: Action) {
        let Some(max) = self.options.len().checked_sub(1) else {
            return;
        };
        let next = updated_index(self.state.active_index, max, action);
        self.set_active(next);
    }

    fn type_ahead(&mut self, key: Key) -> Command<Message> {
        match key {
            Key::Character(c) => self.state.search.push(c),
            Key::Backspace => self.state.search.pop(),
            Key::Clear => self.state.search.clear(),
            _ => {}
        }
        if self.state.search.is_empty() || self.options.is_empty() {
            self.state.search.clear();
            return Command::none();
        }

        let start = self.state.active_index + 1;
        match index_by_letter(&self.options, self.state.search.as_str(), start) {
            Some(index) => {
                tracing::debug!(
                    message = "select.search",
                    query = self.state.search.as_str(),
                    index
                );
                self.set_active(index);
                self.state.search.restart_timer(Message::SearchExpired)
            }
            None => {
                tracing::debug!(
                    message = "select.search.miss",
                    query = self.state.search.as_str()
                );
                self.state.search.clear();
                Command::none()
            }
        }
    }

    /// Make `index` the active option and bring it into view.
    fn set_active(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        if self.state.active_index != index {
            tracing::debug!(
                message = "select.active",
                from = self.state.active_index,
                to = index
            );
        }
        self.state.active_index = index;
        self.sync();

        if is_scrollable(&self.listbox) {
            let before = self.listbox.scroll_top();
            maintain_scroll_visibility(self.listbox.child(index), &mut self.listbox);
            let top = self.listbox.scroll_top();
            if top != before {
                self.effects.push(Effect::ScrollListbox { top });
            }
        }
        if !self.option_in_view(index) {
            self.effects
                .push(Effect::ScrollIntoView(Target::Option(index)));
        }
    }

    /// Commit `index` as the selection and notify the parent.
    fn commit(&mut self, index: usize) -> Command<Message> {
        let Some(label) = self.options.get(index).cloned() else {
            return Command::none();
        };
        self.state.active_index = index;
        self.state.selected_index = index;
        self.state.committed = true;
        self.sync();
        tracing::debug!(message = "select.commit", index, label = label.as_str());
        Command::message(Message::Selected(index, label))
    }

    /// Open or close the listbox. Setting the current state again does nothing.
    fn set_open(&mut self, open: bool, return_focus: bool) {
        if self.state.open == open {
            return;
        }
        self.state.open = open;
        self.sync();
        if open {
            tracing::debug!(message = "select.open", active = self.state.active_index);
        } else {
            tracing::debug!(message = "select.close", active = self.state.active_index);
        }

        if !open && !self.combobox_in_view() {
            self.effects.push(Effect::ScrollIntoView(Target::Combobox));
        }
        if return_focus {
            self.effects.push(Effect::Focus(Target::Combobox));
        }
    }

    fn on_blur(&mut self) -> Command<Message> {
        self.focus = false;
        if self.state.suppress_next_blur {
            self.state.suppress_next_blur = false;
            tracing::trace!(message = "select.blur.suppressed");
            return Command::none();
        }
        if !self.state.open {
            return Command::none();
        }
        let cmd = self.commit(self.state.active_index);
        self.set_open(false, false);
        cmd
    }

    fn on_option_click(&mut self, index: usize) -> Command<Message> {
        if index >= self.options.len() {
            return Command::none();
        }
        self.state.suppress_next_blur = false;
        self.set_active(index);
        let cmd = self.commit(index);
        self.set_open(false, true);
        cmd
    }

    /// Re-render and queue the patches for whatever changed.
    fn sync(&mut self) {
        let next = presentation::render(&self.state, &self.options, &self.ids, &self.config);
        self.effects
            .extend(next.diff(&self.rendered).into_iter().map(Effect::Patch));
        self.rendered = next;
    }

    fn option_in_view(&self, index: usize) -> bool {
        let Some(g) = self.geometry else {
            return true;
        };
        let child = self.listbox.child(index);
        let top = g.listbox_top + child.offset_top - self.listbox.scroll_top();
        let bounds = Bounds::new(top, g.listbox_left, g.listbox_width, child.offset_height);
        is_in_view(bounds, g.viewport)
    }

    fn combobox_in_view(&self) -> bool {
        self.geometry
            .is_none_or(|g| is_in_view(g.combobox, g.viewport))
    }

    fn render_option_row(&self, frame: &mut Frame, area: Rect, index: usize) {
        let style = &self.config.style;
        let label = self.options[index].as_str();
        let active = index == self.state.active_index;
        let selected = self.state.committed && index == self.state.selected_index;

        let prefix = if active {
            style.highlight_symbol.clone()
        } else {
            " ".repeat(style.highlight_symbol.chars().count())
        };
        let span_style = if active {
            style.active
        } else if selected {
            style.selected
        } else {
            style.normal
        };
        let line = Line::from(vec![
            Span::styled(prefix, span_style),
            Span::styled(label, span_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(event) => {
                if event.kind == KeyEventKind::Release {
                    return Command::none();
                }
                self.handle_key(KeyInput::from(event))
            }
            Message::Key(input) => self.handle_key(input),
            Message::ComboClick => {
                self.focus = true;
                self.set_open(!self.state.open, false);
                Command::none()
            }
            Message::OptionPointerDown(_) => {
                self.state.suppress_next_blur = true;
                Command::none()
            }
            Message::OptionPointerCancel => {
                self.state.suppress_next_blur = false;
                Command::none()
            }
            Message::OptionClick(index) => self.on_option_click(index),
            Message::Focus => {
                self.focus = true;
                Command::none()
            }
            Message::Blur => self.on_blur(),
            Message::SearchExpired(token) => {
                if self.state.search.expire(token) {
                    tracing::trace!(message = "select.search.expired");
                }
                Command::none()
            }
            Message::Selected(..) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = &self.config.style;

        let text = self.rendered.combobox.text().unwrap_or_default();
        let text_style = if self.state.committed {
            style.normal
        } else {
            style.placeholder
        };
        let arrow = if self.state.open { " ▾" } else { " ▸" };
        let trigger = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(arrow, style.placeholder),
        ]);
        frame.render_widget(Paragraph::new(trigger), Rect { height: 1, ..area });

        if !self.state.open || self.options.is_empty() {
            return;
        }

        let first = self.listbox.first_visible_row();
        let rows = self.listbox.visible_rows().min(self.options.len() - first);
        let listbox_area = Rect::new(
            area.x,
            area.bottom(),
            area.width,
            u16::try_from(rows).unwrap_or(u16::MAX),
        )
        .intersection(frame.area());
        if listbox_area.height == 0 || listbox_area.width == 0 {
            return;
        }

        frame.render_widget(Clear, listbox_area);
        for (row, index) in (first..first + rows)
            .enumerate()
            .take(usize::from(listbox_area.height))
        {
            let row_area = Rect {
                y: listbox_area.y + row as u16,
                height: 1,
                ..listbox_area
            };
            self.render_option_row(frame, row_area, index);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

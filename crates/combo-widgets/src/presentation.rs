//! The accessibility-facing output of the select: roles, ARIA attributes,
//! marker classes and display text.
//!
//! [`render`] is a pure function of widget state. The controller keeps the
//! last rendered [`Presentation`] and forwards only the [`Patch`]es produced
//! by [`Presentation::diff`], so a redundant transition emits nothing.

use crate::config::SelectConfig;
use crate::state::SelectState;
use std::collections::{BTreeMap, BTreeSet};

pub const ROLE: &str = "role";
pub const ID: &str = "id";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_ACTIVEDESCENDANT: &str = "aria-activedescendant";
pub const ARIA_SELECTED: &str = "aria-selected";
pub const DATA_SELECTED: &str = "data-selected";

/// Which element a patch or effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Container,
    Combobox,
    Listbox,
    Option(usize),
}

/// A single change to apply to a host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    SetAttribute { name: &'static str, value: String },
    RemoveAttribute(&'static str),
    AddClass(String),
    RemoveClass(String),
    SetText(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub target: Target,
    pub change: Change,
}

/// The attributes, classes and text of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementView {
    attributes: BTreeMap<&'static str, String>,
    classes: BTreeSet<String>,
    text: Option<String>,
}

impl ElementView {
    /// Value of an attribute, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    fn diff_into(&self, prev: &ElementView, target: Target, out: &mut Vec<Patch>) {
        let mut push = |change| out.push(Patch { target, change });

        for (&name, value) in &self.attributes {
            if prev.attributes.get(name) != Some(value) {
                push(Change::SetAttribute {
                    name,
                    value: value.clone(),
                });
            }
        }
        for &name in prev.attributes.keys() {
            if !self.attributes.contains_key(name) {
                push(Change::RemoveAttribute(name));
            }
        }
        for class in self.classes.difference(&prev.classes) {
            push(Change::AddClass(class.clone()));
        }
        for class in prev.classes.difference(&self.classes) {
            push(Change::RemoveClass(class.clone()));
        }
        if self.text != prev.text {
            push(Change::SetText(self.text.clone().unwrap_or_default()));
        }
    }
}

/// Element identifiers for options: `<base>-<index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionIds {
    base: String,
}

impl OptionIds {
    /// Use the combobox's own id as the base, or `fallback` if it has none.
    pub fn new(combobox_id: Option<&str>, fallback: &str) -> Self {
        let base = combobox_id
            .filter(|id| !id.is_empty())
            .unwrap_or(fallback)
            .to_string();
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn option(&self, index: usize) -> String {
        format!("{}-{}", self.base, index)
    }
}

/// Everything a host needs to reflect the widget on screen and to
/// assistive technology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    pub container: ElementView,
    pub combobox: ElementView,
    pub listbox: ElementView,
    pub options: Vec<ElementView>,
}

impl Presentation {
    /// Look up an element by target.
    pub fn element(&self, target: Target) -> Option<&ElementView> {
        match target {
            Target::Container => Some(&self.container),
            Target::Combobox => Some(&self.combobox),
            Target::Listbox => Some(&self.listbox),
            Target::Option(i) => self.options.get(i),
        }
    }

    /// The patches that turn `prev` into `self`.
    pub fn diff(&self, prev: &Presentation) -> Vec<Patch> {
        let mut out = Vec::new();
        self.container
            .diff_into(&prev.container, Target::Container, &mut out);
        self.combobox
            .diff_into(&prev.combobox, Target::Combobox, &mut out);
        self.listbox.diff_into(&prev.listbox, Target::Listbox, &mut out);

        let blank = ElementView::default();
        for (i, option) in self.options.iter().enumerate() {
            let before = prev.options.get(i).unwrap_or(&blank);
            option.diff_into(before, Target::Option(i), &mut out);
        }
        out
    }

    /// The patches that build this presentation from bare elements.
    pub fn mount(&self) -> Vec<Patch> {
        self.diff(&Presentation::default())
    }
}

/// Derive the presentation for a widget state.
pub fn render(
    state: &SelectState,
    options: &[String],
    ids: &OptionIds,
    config: &SelectConfig,
) -> Presentation {
    let classes = &config.classes;

    let mut container = ElementView::default();
    if state.open {
        container = container.with_class(classes.open.as_str());
    }

    let active_descendant = if state.open && state.active_index < options.len() {
        ids.option(state.active_index)
    } else {
        String::new()
    };
    let committed = state
        .committed
        .then(|| options.get(state.selected_index))
        .flatten();
    let mut combobox = ElementView::default()
        .with_attr(ROLE, "combobox")
        .with_attr(ARIA_EXPANDED, state.open.to_string())
        .with_attr(ARIA_ACTIVEDESCENDANT, active_descendant)
        .with_text(committed.map_or(config.placeholder.as_str(), String::as_str));
    if committed.is_some() {
        combobox = combobox.with_attr(DATA_SELECTED, state.selected_index.to_string());
    }

    let listbox = ElementView::default().with_attr(ROLE, "listbox");

    let options = options
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let view = ElementView::default()
                .with_attr(ROLE, "option")
                .with_attr(ID, ids.option(i))
                .with_attr(ARIA_SELECTED, (i == state.selected_index).to_string())
                .with_class(classes.option.as_str())
                .with_class(format!("{}--{}", classes.option, i))
                .with_text(label.as_str());
            if i == state.active_index {
                view.with_class(classes.current.as_str())
            } else {
                view
            }
        })
        .collect();

    Presentation {
        container,
        combobox,
        listbox,
        options,
    }
}

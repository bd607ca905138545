mod delegate;
mod node;
mod render;

pub use delegate::{removal_control_paths, removal_target, RemovalTarget};
pub use node::{Element, Node, Tag};
pub use render::{
    render, render_load_failure, ARIA_LABEL, CARD_CLASS, PARTICIPANTS_EMPTY_CLASS,
    PARTICIPANT_EMAIL_CLASS,
};

/// Path from the card region's root list down to a node, one child index per level.
pub type NodePath = Vec<usize>;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
const LOADING_MESSAGE: &str = "Loading activities...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The activity picker of the signup form. `None` selected means the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectControl {
    #[cfg(test)]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Drop every option and fall back to the placeholder.
    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }

    pub fn push(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    pub fn reset_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|option| option.value.as_str())
    }

    pub fn selected_label(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|option| option.label.as_str())
            .unwrap_or(SELECT_PLACEHOLDER)
    }

    /// Step forward through placeholder → options → placeholder.
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            None if !self.options.is_empty() => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            _ => None,
        };
    }

    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            None => self.options.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

/// Everything the renderer is allowed to touch: the card region and the activity picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    activities: Vec<Node>,
    activity_select: SelectControl,
}

impl ViewHandle {
    pub fn new() -> Self {
        Self {
            activities: vec![Element::new(Tag::P).text(LOADING_MESSAGE).into()],
            activity_select: SelectControl::default(),
        }
    }

    pub fn activities(&self) -> &[Node] {
        &self.activities
    }

    pub fn activity_select(&self) -> &SelectControl {
        &self.activity_select
    }

    pub fn activity_select_mut(&mut self) -> &mut SelectControl {
        &mut self.activity_select
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.activities.get(*first)?;
        for index in rest {
            node = node.as_element()?.children().get(*index)?;
        }
        Some(node)
    }

    fn replace_activities(&mut self, nodes: Vec<Node>) {
        self.activities = nodes;
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

use super::render::{DATA_ACTIVITY, DATA_EMAIL, DELETE_BUTTON_CLASS};
use super::{Node, NodePath, ViewHandle};

/// The (email, activity) pair carried by a removal control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTarget {
    pub email: String,
    pub activity: String,
}

/// Resolve an activation anywhere in the card region to the removal control it hit.
///
/// Looks at the activated node and then its ancestors for the nearest removal
/// control. Activations outside any control, and controls missing either data
/// value, resolve to `None`.
pub fn removal_target(view: &ViewHandle, path: &[usize]) -> Option<RemovalTarget> {
    let control = (1..=path.len())
        .rev()
        .filter_map(|len| view.node_at(&path[..len])?.as_element())
        .find(|element| element.has_class(DELETE_BUTTON_CLASS))?;

    let email = control.attr_value(DATA_EMAIL).filter(|v| !v.is_empty())?;
    let activity = control.attr_value(DATA_ACTIVITY).filter(|v| !v.is_empty())?;

    Some(RemovalTarget {
        email: email.to_string(),
        activity: activity.to_string(),
    })
}

/// Paths of every removal control, in document order.
pub fn removal_control_paths(view: &ViewHandle) -> Vec<NodePath> {
    let mut found = Vec::new();
    let mut path = Vec::new();
    for (index, node) in view.activities().iter().enumerate() {
        path.push(index);
        collect_controls(node, &mut path, &mut found);
        path.pop();
    }
    found
}

fn collect_controls(node: &Node, path: &mut NodePath, found: &mut Vec<NodePath>) {
    let Node::Element(element) = node else {
        return;
    };
    if element.has_class(DELETE_BUTTON_CLASS) {
        found.push(path.clone());
    }
    for (index, child) in element.children().iter().enumerate() {
        path.push(index);
        collect_controls(child, path, found);
        path.pop();
    }
}

//! Class tokens of the node create form and a parallel description of the
//! class-bearing elements `view.rs` renders for a given state. Both sides
//! read the same constants and `show_template_select`/`meta_items`.

use super::state::NodeCreateState;

pub const ROOT_CLASS: &str = "node-create";
pub const REGISTER_CLASS: &str = "register";
pub const TEMPLATE_CLASS: &str = "template";
pub const META_ITEM_CLASS: &str = "meta-item";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeCreateOutline {
    pub root: &'static str,
    /// Document order of the root's class-bearing descendants
    pub elements: Vec<&'static str>,
}

impl NodeCreateOutline {
    pub fn of(state: &NodeCreateState) -> Self {
        let mut elements = Vec::new();
        if state.show_template_select() {
            elements.push(TEMPLATE_CLASS);
        }
        elements.push(REGISTER_CLASS);
        elements.extend(state.meta_items().map(|_| META_ITEM_CLASS));

        Self {
            root: ROOT_CLASS,
            elements,
        }
    }

    pub fn count(&self, class: &str) -> usize {
        self.elements.iter().filter(|c| **c == class).count()
    }
}

/// Options of the template `<select>` with their selected flag, in offer order
pub fn template_options(state: &NodeCreateState) -> Vec<(String, bool)> {
    state
        .templates
        .iter()
        .map(|t| (t.clone(), state.selected_template.as_ref() == Some(t)))
        .collect()
}

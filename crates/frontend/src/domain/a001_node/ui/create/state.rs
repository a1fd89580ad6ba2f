use contracts::domain::a001_node::aggregate::{NodeCreateRequest, ADDRESS_KEY};
use std::collections::BTreeMap;

/// User interactions (and parent input) the node create form reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeCreateEvent {
    /// Click on the `register` control
    ToggleRegister,
    AddMetadata { key: String, value: String },
    SetTemplates(Vec<String>),
    SelectTemplate(Option<String>),
}

/// Local state of one node create form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeCreateState {
    pub templates: Vec<String>,
    pub metadata: BTreeMap<String, String>,
    pub register: bool,
    pub selected_template: Option<String>,
}

impl NodeCreateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Vec<String>) -> Self {
        Self::new().apply(NodeCreateEvent::SetTemplates(templates))
    }

    pub fn apply(mut self, event: NodeCreateEvent) -> Self {
        match event {
            NodeCreateEvent::ToggleRegister => self.toggle_register(),
            NodeCreateEvent::AddMetadata { key, value } => self.add_metadata(key, value),
            NodeCreateEvent::SetTemplates(templates) => {
                self.templates = templates;
                let still_offered = self
                    .selected_template
                    .as_ref()
                    .map_or(true, |t| self.templates.contains(t));
                if !still_offered {
                    self.selected_template = None;
                }
            }
            NodeCreateEvent::SelectTemplate(template) => {
                self.selected_template = template.filter(|t| self.templates.contains(t));
            }
        }
        self
    }

    /// Entering register mode replaces metadata with an empty address;
    /// leaving it drops every entry.
    pub fn toggle_register(&mut self) {
        self.register = !self.register;
        self.metadata.clear();
        if self.register {
            self.metadata.insert(ADDRESS_KEY.to_string(), String::new());
        }
    }

    /// Inserts or overwrites a single entry
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn show_template_select(&self) -> bool {
        !self.templates.is_empty()
    }

    pub fn meta_items(&self) -> impl Iterator<Item = (&String, &String)> {
        self.metadata.iter()
    }

    pub fn to_request(&self) -> NodeCreateRequest {
        NodeCreateRequest {
            register: self.register,
            template: self.selected_template.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Clean form for the next node, keeping the offered templates
    pub fn reset(&self) -> Self {
        Self::with_templates(self.templates.clone())
    }
}

pub fn reduce(state: &NodeCreateState, event: NodeCreateEvent) -> NodeCreateState {
    state.clone().apply(event)
}

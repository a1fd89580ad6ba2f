use super::model;
use super::state::{reduce, NodeCreateEvent, NodeCreateState};
use contracts::domain::a001_node::aggregate::NodeCreateResponse;
use leptos::prelude::*;

/// ViewModel for the node create form
///
/// All form mutations go through `dispatch`, which runs the pure reducer
/// over the current state. Collaborator calls (template load, submit) are
/// commands that write their outcome back into signals.
#[derive(Clone, Copy)]
pub struct NodeCreateViewModel {
    pub state: RwSignal<NodeCreateState>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    /// Key/value typed into the "new entry" row, not yet added
    pub draft_key: RwSignal<String>,
    pub draft_value: RwSignal<String>,
}

impl NodeCreateViewModel {
    pub fn new(templates: Vec<String>) -> Self {
        Self {
            state: RwSignal::new(NodeCreateState::with_templates(templates)),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            draft_key: RwSignal::new(String::new()),
            draft_value: RwSignal::new(String::new()),
        }
    }

    pub fn dispatch(&self, event: NodeCreateEvent) {
        log::debug!("node create: {:?}", event);
        self.state.update(|s| *s = reduce(s, event));
    }

    pub fn toggle_register(&self) {
        self.dispatch(NodeCreateEvent::ToggleRegister);
    }

    pub fn add_metadata(&self, key: impl Into<String>, value: impl Into<String>) {
        self.dispatch(NodeCreateEvent::AddMetadata {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Moves the draft row into metadata. A blank key leaves the draft in place.
    pub fn commit_draft(&self) {
        let key = self.draft_key.get_untracked();
        if key.trim().is_empty() {
            return;
        }
        self.add_metadata(key, self.draft_value.get_untracked());
        self.clear_draft();
    }

    fn clear_draft(&self) {
        self.draft_key.set(String::new());
        self.draft_value.set(String::new());
    }

    /// Clean form after a node was created; offered templates stay
    fn finish_save(&self) {
        self.state.update(|s| *s = s.reset());
        self.clear_draft();
    }

    pub fn select_template(&self, value: String) {
        let template = if value.is_empty() { None } else { Some(value) };
        self.dispatch(NodeCreateEvent::SelectTemplate(template));
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.with(|s| s.to_request().validate().is_ok())
    }

    /// Loads templates from the server unless the parent supplied some
    pub fn load_templates_command(&self) {
        if self.state.with_untracked(|s| s.show_template_select()) {
            return;
        }

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_templates().await {
                Ok(templates) => {
                    log::info!("node create: loaded {} templates", templates.len());
                    vm.dispatch(NodeCreateEvent::SetTemplates(templates));
                }
                Err(e) => {
                    log::error!("node create: template load failed: {}", e);
                    vm.error.set(Some(format!("Failed to load templates: {}", e)));
                }
            }
        });
    }

    pub fn save_command(&self, on_created: Option<Callback<NodeCreateResponse>>) {
        let request = self.state.with_untracked(|s| s.to_request());
        if let Err(e) = request.validate() {
            self.error.set(Some(e));
            return;
        }

        self.is_saving.set(true);
        self.error.set(None);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_node(&request).await {
                Ok(response) => {
                    log::info!("node create: created {}", response.address);
                    vm.finish_save();
                    if let Some(callback) = on_created {
                        callback.run(response);
                    }
                }
                Err(e) => {
                    log::error!("node create: submit failed: {}", e);
                    vm.error.set(Some(e));
                }
            }
            vm.is_saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_commit_draft_moves_entry_into_metadata() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = NodeCreateViewModel::new(Vec::new());
            vm.draft_key.set("pool".to_string());
            vm.draft_value.set("default".to_string());
            vm.commit_draft();

            let metadata = vm.state.with_untracked(|s| s.metadata.clone());
            assert_eq!(metadata.get("pool").map(String::as_str), Some("default"));
            assert_eq!(vm.draft_key.get_untracked(), "");
            assert_eq!(vm.draft_value.get_untracked(), "");
        });
    }

    #[test]
    fn test_commit_draft_skips_blank_key() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = NodeCreateViewModel::new(Vec::new());
            vm.draft_key.set("  ".to_string());
            vm.draft_value.set("v".to_string());
            vm.commit_draft();

            assert!(vm.state.with_untracked(|s| s.metadata.is_empty()));
            assert_eq!(vm.draft_value.get_untracked(), "v");
        });
    }

    #[test]
    fn test_finish_save_clears_form_and_draft() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = NodeCreateViewModel::new(vec!["small".to_string()]);
            vm.toggle_register();
            vm.add_metadata("address", "10.0.0.1");
            vm.select_template("small".to_string());
            vm.draft_key.set("half".to_string());
            vm.draft_value.set("typed".to_string());

            vm.finish_save();

            assert_eq!(
                vm.state.get_untracked(),
                NodeCreateState::with_templates(vec!["small".to_string()])
            );
            assert_eq!(vm.draft_key.get_untracked(), "");
            assert_eq!(vm.draft_value.get_untracked(), "");
        });
    }
}

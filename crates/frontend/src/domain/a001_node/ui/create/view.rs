use super::outline::{
    template_options, META_ITEM_CLASS, REGISTER_CLASS, ROOT_CLASS, TEMPLATE_CLASS,
};
use super::view_model::NodeCreateViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_node::aggregate::NodeCreateResponse;
use leptos::prelude::*;

#[component]
pub fn NodeCreate(
    /// Templates offered by the parent view; loaded from the server when empty
    #[prop(optional)]
    templates: Vec<String>,
    #[prop(optional)] on_created: Option<Callback<NodeCreateResponse>>,
) -> impl IntoView {
    let vm = NodeCreateViewModel::new(templates);

    Effect::new(move |_| {
        vm.load_templates_command();
    });

    let meta_entries = move || {
        vm.state.with(|s| {
            s.meta_items()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=ROOT_CLASS>
            <Show when=move || vm.state.with(|s| s.show_template_select())>
                <div class="form__group">
                    <label class="form__label" for="node-template">{"Template"}</label>
                    <select
                        id="node-template"
                        class=format!("form__select {}", TEMPLATE_CLASS)
                        on:change=move |ev| vm.select_template(event_target_value(&ev))
                    >
                        <option value="">{"No template"}</option>
                        {move || {
                            vm.state.with(template_options)
                                .into_iter()
                                .map(|(t, is_selected)| {
                                    let label = t.clone();
                                    view! { <option value=t selected=is_selected>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </Show>

            <button
                class=move || {
                    if vm.state.with(|s| s.register) {
                        format!("button button--primary {}", REGISTER_CLASS)
                    } else {
                        format!("button button--secondary {}", REGISTER_CLASS)
                    }
                }
                on:click=move |_| vm.toggle_register()
            >
                {icon("server")}
                {move || if vm.state.with(|s| s.register) { " Registering existing node" } else { " Register existing node" }}
            </button>

            <div class="detail-form">
                <For
                    each=meta_entries
                    key=|(k, _)| k.clone()
                    children=move |(key, _)| {
                        let key_for_value = key.clone();
                        let key_for_input = key.clone();
                        view! {
                            <div class=format!("form__group {}", META_ITEM_CLASS)>
                                <label class="form__label">{key}</label>
                                <input
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.state.with(|s| {
                                        s.metadata.get(&key_for_value).cloned().unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        vm.add_metadata(key_for_input.clone(), event_target_value(&ev));
                                    }
                                />
                            </div>
                        }
                    }
                />

                <div class="form__group meta-draft">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Key"
                        prop:value=move || vm.draft_key.get()
                        on:input=move |ev| vm.draft_key.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Value"
                        prop:value=move || vm.draft_value.get()
                        on:input=move |ev| vm.draft_value.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--secondary"
                        disabled=move || vm.draft_key.get().trim().is_empty()
                        on:click=move |_| vm.commit_draft()
                    >
                        {icon("plus")}
                        " Add"
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="modal-actions-top">
                <button
                    class="button button--primary"
                    disabled=move || vm.is_saving.get() || !vm.is_form_valid()
                    on:click=move |_| vm.save_command(on_created)
                >
                    {icon("save")}
                    {move || if vm.is_saving.get() { " Saving..." } else { " Create" }}
                </button>
            </div>
        </div>
    }
}

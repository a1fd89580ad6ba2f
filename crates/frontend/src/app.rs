use crate::domain::a001_node::ui::create::NodeCreate;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <h2 class="page__title">"New node"</h2>
            <NodeCreate />
        </main>
    }
}

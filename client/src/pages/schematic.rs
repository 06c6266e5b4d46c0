//! Interactive schematic page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::schematic_viewer::SchematicViewer;

#[component]
pub fn SchematicPage() -> impl IntoView {
    view! {
        <Title text="Harness schematic | Wireworks"/>
        <div class="page">
            <h1>"Inside an engine harness"</h1>
            <p class="page__lead">"Hover or click a component to learn what it does, or play the tour."</p>
            <SchematicViewer/>
        </div>
    }
}

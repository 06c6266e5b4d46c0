//! Brochure page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::flipbook::FlipBookViewer;

#[component]
pub fn BrochurePage() -> impl IntoView {
    view! {
        <Title text="Brochure | Wireworks"/>
        <div class="page">
            <h1>"Company brochure"</h1>
            <p class="page__lead">"Use the buttons or your arrow keys to turn the pages."</p>
            <FlipBookViewer/>
        </div>
    }
}

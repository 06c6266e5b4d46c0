//! Section wrapper that fades in the first time it scrolls into view.

use leptos::html::Section;
use leptos::prelude::*;

#[component]
pub fn Reveal(#[prop(into)] anchor: String, #[prop(optional, into)] section_class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<Section>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            crate::util::reveal::observe_once(&el);
        }
    });

    view! {
        <section node_ref=node id=anchor class=format!("reveal {section_class}")>
            {children()}
        </section>
    }
}

//! Site navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/products", "Products"),
    ("/schematic", "Schematic"),
    ("/brochure", "Brochure"),
    ("/contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "Wireworks"
            </A>
            <button
                class="nav-bar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "☰"
            </button>
            <nav class="nav-bar__links" class:nav-bar__links--open=move || open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <A href=href on:click=move |_| open.set(false)>
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

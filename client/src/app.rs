//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cookie_banner::CookieBanner;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::utm_tracker::UtmTracker;
use crate::pages::{
    brochure::BrochurePage, contact::ContactPage, home::HomePage, privacy::PrivacyPage, products::ProductsPage,
    schematic::SchematicPage,
};
use crate::state::consent::{ConsentState, ConsentUi};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Custom wire harnesses, cable assemblies and control panel wiring."
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Consent is read from cookies after hydration; the server always renders
/// the undecided state with the banner hidden until then.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let consent = RwSignal::new(ConsentUi::new(ConsentState::Unset));
    let consent_loaded = RwSignal::new(false);
    provide_context(consent);
    provide_context(ConsentLoaded(consent_loaded));

    view! {
        <Stylesheet id="leptos" href="/pkg/wireworks.css"/>
        <Title text="Wireworks Harness Systems"/>

        <Router>
            <UtmTracker/>
            <NavBar/>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("schematic") view=SchematicPage/>
                    <Route path=StaticSegment("brochure") view=BrochurePage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                </Routes>
            </main>
            <Footer/>
            <CookieBanner/>
        </Router>
    }
}

/// Set once stored consent has been read in the browser.
#[derive(Clone, Copy)]
pub struct ConsentLoaded(pub RwSignal<bool>);

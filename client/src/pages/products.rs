//! Product catalog page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::product_detail::ProductDetail;
use crate::components::product_sidebar::ProductSidebar;
use crate::state::catalog::CatalogSelection;

#[component]
pub fn ProductsPage() -> impl IntoView {
    provide_context(RwSignal::new(CatalogSelection::initial()));

    view! {
        <Title text="Products | Wireworks"/>
        <div class="products-page">
            <ProductSidebar/>
            <ProductDetail/>
        </div>
    }
}

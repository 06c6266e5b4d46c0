//! Catalog sidebar: category list and the products of the open category.

use leptos::prelude::*;

use crate::content::catalog::CATALOG;
use crate::state::catalog::CatalogSelection;

#[component]
pub fn ProductSidebar() -> impl IntoView {
    let selection = expect_context::<RwSignal<CatalogSelection>>();

    view! {
        <aside class="product-sidebar">
            <h2 class="product-sidebar__title">"Catalog"</h2>
            <ul class="product-sidebar__categories">
                {CATALOG
                    .iter()
                    .map(|category| {
                        let id = category.id;
                        let is_open = move || selection.get().category == Some(id);
                        view! {
                            <li class="product-sidebar__category">
                                <button
                                    class="product-sidebar__category-btn"
                                    class:is-active=is_open
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| selection.update(|s| s.select_category(id))
                                >
                                    {category.name}
                                </button>
                                <Show when=is_open>
                                    <ul class="product-sidebar__products">
                                        {category
                                            .products
                                            .iter()
                                            .map(|product| {
                                                let pid = product.id;
                                                view! {
                                                    <li>
                                                        <button
                                                            class="product-sidebar__product-btn"
                                                            class:is-active=move || selection.get().product == Some(pid)
                                                            on:click=move |_| selection.update(|s| s.select_product(pid))
                                                        >
                                                            {product.name}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Show>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

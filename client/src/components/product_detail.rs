//! Detail pane for the selected product: variant picker and resolved specs.

use leptos::prelude::*;

use crate::state::catalog::CatalogSelection;

#[component]
pub fn ProductDetail() -> impl IntoView {
    let selection = expect_context::<RwSignal<CatalogSelection>>();

    move || {
        let sel = selection.get();
        let Some(product) = sel.current_product() else {
            let hint = sel
                .current_category()
                .map_or("Choose a category to get started.", |_| "Choose a product to see its specifications.");
            return view! { <div class="product-detail product-detail--empty">{hint}</div> }.into_any();
        };

        let variants = product.variants();
        let specs = sel.resolved_specs();
        let active_variant = sel.variant;

        view! {
            <div class="product-detail">
                <h2 class="product-detail__name">{product.name}</h2>
                <p class="product-detail__summary">{product.summary}</p>
                <Show when=move || !variants.is_empty()>
                    <div class="product-detail__variants" role="radiogroup" aria-label="Variant">
                        {variants
                            .iter()
                            .map(|variant| {
                                let vid = variant.id;
                                view! {
                                    <button
                                        class="chip"
                                        class:is-active=active_variant == Some(vid)
                                        role="radio"
                                        aria-checked=(active_variant == Some(vid)).to_string()
                                        on:click=move |_| selection.update(|s| s.select_variant(vid))
                                    >
                                        {variant.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
                <table class="spec-table">
                    <tbody>
                        {specs
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <tr>
                                        <th scope="row">{label}</th>
                                        <td>{value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <a class="btn btn--primary" href="/contact">
                    "Request a quote"
                </a>
            </div>
        }
        .into_any()
    }
}

//! Interactive harness schematic.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SVG is fetched and inlined after mount. Hotspot listeners are bound
//! from [`on_svg_ready`], called directly after the markup is inserted, so
//! there is no polling for the elements to appear. Registry ids missing from
//! the drawing are skipped.
//!
//! The displayed transform chases `SchematicView::target` through a tween
//! stepped by a frame loop that ends when the tween completes. The frame and
//! auto-play loops both stop once the component unmounts.

use leptos::html::Div;
use leptos::prelude::*;

use crate::content::schematic::{COMPONENTS, component};
use crate::state::schematic::{SchematicView, ViewTransform};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

#[cfg(feature = "hydrate")]
type Listener = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>;

#[component]
pub fn SchematicViewer() -> impl IntoView {
    let view_state = RwSignal::new(SchematicView::default());
    let shown = RwSignal::new(ViewTransform::IDENTITY);
    let load = RwSignal::new(LoadState::Loading);
    let stage = NodeRef::<Div>::new();
    let drawing = NodeRef::<Div>::new();

    let autoplay = Memo::new(move |_| view_state.with(|v| v.autoplay));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
        use std::time::Duration;

        use crate::state::schematic::{AUTOPLAY_INTERVAL_MS, TWEEN_MS};
        use crate::util::tween::{Tween, now_ms};

        const FRAME_MS: u64 = 16;

        let alive = Arc::new(AtomicBool::new(true));
        let listeners = StoredValue::new_local(Vec::<Listener>::new());
        let tween = StoredValue::new(None::<Tween<ViewTransform>>);
        let animating = Arc::new(AtomicBool::new(false));
        let target = Memo::new(move |_| view_state.with(|v| v.target));

        // Restart the tween from wherever the view is now; one frame loop at a time.
        let alive_frames = alive.clone();
        Effect::new(move || {
            let target = target.get();
            let from = shown.get_untracked();
            if from == target {
                return;
            }
            tween.set_value(Some(Tween::new(from, target, now_ms(), TWEEN_MS)));
            if animating.swap(true, Ordering::Relaxed) {
                return;
            }
            let alive = alive_frames.clone();
            let animating = animating.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(Duration::from_millis(FRAME_MS)).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    let Some(t) = tween.try_get_value().flatten() else {
                        break;
                    };
                    let now = now_ms();
                    shown.set(t.sample(now));
                    if t.is_finished(now) {
                        tween.set_value(None);
                        break;
                    }
                }
                animating.store(false, Ordering::Relaxed);
            });
        });

        // Each enable starts a new generation; older loops exit on their next tick.
        let generation = Arc::new(AtomicU64::new(0));
        let alive_tour = alive.clone();
        Effect::new(move || {
            let current = generation.fetch_add(1, Ordering::Relaxed) + 1;
            if !autoplay.get() {
                return;
            }
            view_state.update(SchematicView::advance);
            let alive = alive_tour.clone();
            let generation = generation.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(AUTOPLAY_INTERVAL_MS))).await;
                    if !alive.load(Ordering::Relaxed) || generation.load(Ordering::Relaxed) != current {
                        break;
                    }
                    view_state.update(SchematicView::advance);
                }
            });
        });

        on_cleanup(move || alive.store(false, Ordering::Relaxed));

        Effect::new(move || {
            let Some(root) = drawing.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_svg(crate::content::schematic::SCHEMATIC_SVG_PATH).await {
                    Ok(svg) => {
                        root.set_inner_html(&svg);
                        on_svg_ready(&root, view_state, listeners);
                        measure(stage, view_state);
                        load.set(LoadState::Ready);
                    }
                    Err(e) => {
                        log::warn!("schematic load failed: {e}");
                        load.set(LoadState::Failed);
                    }
                }
            });
        });

        Effect::new(move || {
            let v = view_state.get();
            if load.get() != LoadState::Ready {
                return;
            }
            let Some(root) = drawing.get_untracked() else {
                return;
            };
            for id in v.available() {
                if let Ok(Some(el)) = root.query_selector(&format!("#{id}")) {
                    let _ = el.set_attribute("data-state", v.hotspot_state(id));
                }
            }
        });

        let resize = window_event_listener(leptos::ev::resize, move |_| measure(stage, view_state));
        on_cleanup(move || resize.remove());
    }

    let hovered_title = move || view_state.with(|v| v.hovered.and_then(component).map(|c| c.title));
    let toggle_autoplay = move |_| {
        view_state.update(|v| {
            let on = !v.autoplay;
            v.set_autoplay(on);
        });
    };
    let reset = move |_| {
        view_state.update(|v| {
            v.set_autoplay(false);
            v.reset();
        });
    };

    view! {
        <div class="schematic">
            <div class="schematic__toolbar">
                <button class="btn" aria-label="Zoom in" on:click=move |_| view_state.update(SchematicView::zoom_in)>
                    "+"
                </button>
                <button class="btn" aria-label="Zoom out" on:click=move |_| view_state.update(SchematicView::zoom_out)>
                    "−"
                </button>
                <button class="btn" on:click=reset>
                    "Reset view"
                </button>
                <button class="btn" class:is-active=move || autoplay.get() on:click=toggle_autoplay>
                    {move || if autoplay.get() { "Pause tour" } else { "Play tour" }}
                </button>
            </div>
            <div class="schematic__body">
                <div
                    class="schematic__stage"
                    node_ref=stage
                    class:has-selection=move || view_state.with(|v| v.selected.is_some())
                >
                    <div class="schematic__drawing" node_ref=drawing style:transform=move || shown.get().to_css()></div>
                    <Show when=move || hovered_title().is_some()>
                        <div class="schematic__tooltip">{move || hovered_title().unwrap_or_default()}</div>
                    </Show>
                    {move || match load.get() {
                        LoadState::Loading => Some(view! { <p class="schematic__status">"Loading schematic…"</p> }.into_any()),
                        LoadState::Failed => {
                            Some(view! { <p class="schematic__status">"The schematic could not be loaded."</p> }.into_any())
                        }
                        LoadState::Ready => None,
                    }}
                </div>
                <aside class="schematic__panel">
                    {move || match view_state.with(|v| v.selected).and_then(component) {
                        Some(c) => {
                            view! {
                                <h3>{c.title}</h3>
                                <p>{c.description}</p>
                                <table class="spec-table">
                                    <tbody>
                                        {c
                                            .specs
                                            .iter()
                                            .map(|&(label, value)| {
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
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="schematic__hint">
                                    "Select a highlighted component to see its details, or play the guided tour."
                                </p>
                                <ul class="schematic__index">
                                    {COMPONENTS
                                        .iter()
                                        .map(|c| {
                                            let id = c.id;
                                            view! {
                                                <li>
                                                    <button
                                                        class="btn btn--link"
                                                        on:click=move |_| view_state.update(|v| v.click(id))
                                                    >
                                                        {c.title}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </aside>
            </div>
        </div>
    }
}

/// Bind hover and click listeners to every registry element present in the
/// freshly inserted SVG, then restrict the view to those ids.
#[cfg(feature = "hydrate")]
fn on_svg_ready(
    root: &web_sys::HtmlDivElement,
    view_state: RwSignal<SchematicView>,
    listeners: StoredValue<Vec<Listener>, LocalStorage>,
) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let mut bound = Vec::new();
    for c in COMPONENTS {
        let Ok(Some(el)) = root.query_selector(&format!("#{}", c.id)) else {
            log::debug!("schematic element #{} not found; skipping", c.id);
            continue;
        };
        let id = c.id;
        let handlers: [(&str, Box<dyn FnMut(web_sys::Event)>); 3] = [
            ("mouseenter", Box::new(move |_| view_state.update(|v| v.hover(Some(id))))),
            ("mouseleave", Box::new(move |_| view_state.update(|v| v.hover(None)))),
            ("click", Box::new(move |_| view_state.update(|v| v.click(id)))),
        ];
        for (event, handler) in handlers {
            let closure = Closure::wrap(handler);
            if el
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .is_ok()
            {
                listeners.update_value(|l| l.push(closure));
            }
        }
        bound.push(id);
    }
    log::debug!("schematic bound {} of {} hotspots", bound.len(), COMPONENTS.len());
    view_state.update(|v| v.set_available(bound));
}

#[cfg(feature = "hydrate")]
fn measure(stage: NodeRef<Div>, view_state: RwSignal<SchematicView>) {
    use crate::state::schematic::Viewport;

    if let Some(el) = stage.get_untracked() {
        let rect = el.get_bounding_client_rect();
        view_state.update(|v| v.resize(Viewport { width: rect.width(), height: rect.height() }));
    }
}

//! Brochure flip-book viewer.

use leptos::prelude::*;

use crate::content::brochure::PAGES;
use crate::state::flipbook::{Direction, FlipBook};

/// Matches the `flip-*` keyframe duration in the stylesheet.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const FLIP_MS: u64 = 450;
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const SINGLE_PAGE_MAX_WIDTH: f64 = 768.0;

#[component]
pub fn FlipBookViewer() -> impl IntoView {
    let book = RwSignal::new(FlipBook::new(PAGES.len()));

    let turn = move |forward: bool| {
        let Some(turn_id) = book
            .try_update(|b| if forward { b.next() } else { b.prev() })
            .flatten()
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FLIP_MS)).await;
            let _ = book.try_update(|b| b.finish_turn(turn_id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = turn_id;
    };

    #[cfg(feature = "hydrate")]
    {
        let fit_to_window = move || {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(SINGLE_PAGE_MAX_WIDTH + 1.0);
            book.update(|b| b.set_spreads(width > SINGLE_PAGE_MAX_WIDTH));
        };
        Effect::new(move || fit_to_window());

        let keys = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
            "ArrowRight" => turn(true),
            "ArrowLeft" => turn(false),
            _ => {}
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| fit_to_window());
        on_cleanup(move || {
            keys.remove();
            resize.remove();
        });
    }

    let turning_class = move || match book.get().turning {
        Some(Direction::Forward) => "flipbook__pages flipbook__pages--flip-forward",
        Some(Direction::Backward) => "flipbook__pages flipbook__pages--flip-backward",
        None => "flipbook__pages",
    };

    view! {
        <div class="flipbook">
            <div class=turning_class>
                {move || {
                    book.get()
                        .visible_pages()
                        .map(|i| {
                            view! {
                                <img
                                    class="flipbook__page"
                                    src=PAGES[i]
                                    alt=format!("Brochure page {}", i + 1)
                                    loading="lazy"
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="flipbook__controls">
                <button
                    class="btn"
                    aria-label="Previous page"
                    disabled=move || !book.get().can_prev()
                    on:click=move |_| turn(false)
                >
                    "‹ Prev"
                </button>
                <span class="flipbook__indicator" aria-live="polite">
                    {move || book.get().label()}
                </span>
                <button
                    class="btn"
                    aria-label="Next page"
                    disabled=move || !book.get().can_next()
                    on:click=move |_| turn(true)
                >
                    "Next ›"
                </button>
            </div>
        </div>
    }
}

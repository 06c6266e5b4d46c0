//! One-shot scroll reveal via `IntersectionObserver`.
//!
//! Server-rendered sections carry the `reveal` class only; CSS keeps them
//! visible unless the `<html>` element has the `js` class, so content never
//! depends on this module running.

/// Class added once the element first intersects the viewport.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Observe `el` and add [`VISIBLE_CLASS`] the first time it becomes visible.
/// Falls back to revealing immediately when the observer is unavailable.
#[cfg(feature = "hydrate")]
pub fn observe_once(el: &web_sys::Element) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.15));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            callback.forget();
        }
        Err(_) => {
            let _ = el.class_list().add_1(VISIBLE_CLASS);
        }
    }
}

/// Mark the document as script-enabled so reveal styles take effect.
pub fn mark_js_enabled() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().add_1("js");
        }
    }
}

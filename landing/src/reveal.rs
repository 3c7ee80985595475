//! Scroll-triggered reveal for elements marked `data-reveal="once"`.
//!
//! Each element gets the `in-view` class the first time it intersects the
//! viewport and is then unobserved. Without `IntersectionObserver` support
//! elements are revealed straight away.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = "[data-reveal=\"once\"]";
const REVEALED_CLASS: &str = "in-view";

/// Start observing every reveal target currently in the document.
pub fn observe_reveal_targets() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    let elements: Vec<Element> = (0..targets.length())
        .filter_map(|i| targets.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let Some(observer) = build_observer() else {
        tracing::debug!("IntersectionObserver unavailable, revealing immediately");
        elements.iter().for_each(|element| {
            reveal(element);
        });
        return;
    };

    for element in &elements {
        observer.observe(element);
    }
    tracing::debug!(count = elements.len(), "observing reveal targets");
}

fn build_observer() -> Option<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    callback.forget(); // Keep the closure alive
    Some(observer)
}

/// Mark one element revealed. Returns whether the class was applied.
pub fn reveal(element: &Element) -> bool {
    match element.class_list().add_1(REVEALED_CLASS) {
        Ok(()) => {
            tracing::debug!(id = %element.id(), "revealed");
            true
        }
        Err(err) => {
            tracing::debug!(id = %element.id(), error = ?err, "reveal failed");
            false
        }
    }
}

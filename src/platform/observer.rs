//! Intersection observers for reveal targets

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::MountError;

/// Reported ratios can land a hair under the threshold that fired them
pub const RATIO_SLACK: f64 = 1e-3;

/// Whether the host provides `IntersectionObserver`
pub fn is_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Watches one element and reports its visible fraction.
///
/// The handler returns true once it no longer needs updates, after which the
/// element is unobserved. Dropping the observer disconnects it.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new<F>(target: &Element, threshold: f64, mut on_ratio: F) -> Result<Self, MountError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio() + RATIO_SLACK
                    } else {
                        0.0
                    };
                    if on_ratio(ratio.min(1.0)) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

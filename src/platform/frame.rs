//! requestAnimationFrame scheduling

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::MountError;

/// Run `f` once on the next animation frame
pub fn request_frame_once<F>(window: &Window, f: F) -> Result<i32, MountError>
where
    F: FnOnce(f64) + 'static,
{
    let callback = Closure::once_into_js(f);
    Ok(window.request_animation_frame(callback.unchecked_ref())?)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A per-frame callback that reschedules itself until stopped.
///
/// The callback registration and the pending frame id are owned here; drop
/// (or [`AnimationLoop::stop`]) cancels the pending frame and frees the closure.
/// Never drop a loop from inside its own tick.
pub struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, MountError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = super::window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        // Weak so the closure does not keep itself alive
        let weak = Rc::downgrade(&callback);
        let frame_window = window.clone();
        let frame_pending = pending.clone();
        *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
            frame_pending.set(None);
            tick(time);

            let Some(callback) = weak.upgrade() else { return };
            let Ok(slot) = callback.try_borrow() else { return };
            if let Some(closure) = slot.as_ref() {
                match frame_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => frame_pending.set(Some(id)),
                    Err(e) => log::warn!("Animation loop stopped: {:?}", e),
                }
            }
        }));

        let id = {
            let slot = callback.borrow();
            let closure = slot
                .as_ref()
                .ok_or_else(|| MountError::Js("animation callback missing".to_string()))?;
            window.request_animation_frame(closure.as_ref().unchecked_ref())?
        };
        pending.set(Some(id));

        Ok(Self {
            window,
            pending,
            callback,
        })
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

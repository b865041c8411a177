//! `requestAnimationFrame` loops.
//!
//! [`request_frames`] re-requests a frame after every step until the step
//! returns `false`; the browser pauses it while the tab is hidden.
//! [`FrameClock`] turns the frame timestamps into time since the first frame.

#[cfg(test)]
#[path = "animation_frame_test.rs"]
mod animation_frame_test;

/// Elapsed time measured from the first frame it sees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    origin: Option<f64>,
}

impl FrameClock {
    /// Milliseconds between the first frame and `timestamp_ms`.
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin.get_or_insert(timestamp_ms);
        (timestamp_ms - origin).max(0.0)
    }
}

/// Run `step` once per animation frame while it returns `true`.
#[cfg(feature = "hydrate")]
pub fn request_frames(mut step: impl FnMut(f64) -> bool + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let requeued = step(ts)
            && holder_for_cb.borrow().as_ref().is_some_and(|cb| {
                window_for_cb
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .is_ok()
            });
        if !requeued {
            // Breaks the holder cycle so the closure is freed.
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    }
}

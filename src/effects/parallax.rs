use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// How far the user has to scroll before the hero is fully faded out.
const FADE_DISTANCE: f64 = 500.0;
/// Scroll distance over which the hero shrinks; floored at MIN_SCALE.
const SHRINK_DISTANCE: f64 = 5000.0;
const MIN_SCALE: f64 = 0.95;

pub fn opacity_at(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / FADE_DISTANCE).clamp(0.0, 1.0)
}

pub fn scale_at(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / SHRINK_DISTANCE).max(MIN_SCALE)
}

/// Coalesces scroll-driven work to one scheduled frame at a time. The
/// pending flag is armed only after scheduling succeeds, so a failed frame
/// request leaves the next scroll event free to retry.
struct FrameGate {
    pending: Cell<bool>,
    handle: Cell<i32>,
}

impl FrameGate {
    fn new() -> Self {
        Self {
            pending: Cell::new(false),
            handle: Cell::new(0),
        }
    }

    fn try_schedule<E>(&self, request: impl FnOnce() -> Result<i32, E>) -> bool {
        if self.pending.get() {
            return false;
        }
        match request() {
            Ok(handle) => {
                self.handle.set(handle);
                self.pending.set(true);
                true
            }
            Err(_) => false,
        }
    }

    fn complete(&self) {
        self.pending.set(false);
    }

    fn pending_handle(&self) -> Option<i32> {
        if self.pending.get() {
            Some(self.handle.get())
        } else {
            None
        }
    }
}

/// Fades and shrinks the `[data-parallax]` hero element as the page scrolls.
///
/// Scroll events only schedule an animation frame through a [`FrameGate`];
/// the actual style write happens at most once per frame no matter how many
/// scroll events fire in between. Dropping the controller detaches the
/// listener and cancels any frame still in flight.
pub struct ParallaxController {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
    gate: Rc<FrameGate>,
}

impl ParallaxController {
    /// Attaches the scroll listener. Returns `None` when the page has no
    /// `[data-parallax]` element, in which case scrolling stays untouched.
    pub fn install(window: &Window, document: &Document) -> Option<Self> {
        let target = document
            .query_selector("[data-parallax]")
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        let gate = Rc::new(FrameGate::new());

        let on_frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new({
            let window = window.clone();
            let gate = gate.clone();
            move || {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let style = target.style();
                let _ = style.set_property("opacity", &opacity_at(scroll_y).to_string());
                let _ = style.set_property("transform", &format!("scale({})", scale_at(scroll_y)));
                gate.complete();
            }
        }) as Box<dyn FnMut()>));

        let on_scroll = Closure::wrap(Box::new({
            let window = window.clone();
            let gate = gate.clone();
            let on_frame = on_frame.clone();
            move || {
                gate.try_schedule(|| {
                    window.request_animation_frame(on_frame.as_ref().as_ref().unchecked_ref())
                });
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            window: window.clone(),
            on_scroll,
            _on_frame: on_frame,
            gate,
        })
    }
}

impl Drop for ParallaxController {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(handle) = self.gate.pending_handle() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn opacity_is_full_at_top() {
        assert!(close(opacity_at(0.0), 1.0));
    }

    #[test]
    fn opacity_fades_linearly() {
        assert!(close(opacity_at(250.0), 0.5));
        assert!(close(opacity_at(500.0), 0.0));
    }

    #[test]
    fn opacity_clamps_past_fade_distance() {
        assert!(close(opacity_at(600.0), 0.0));
        assert!(close(opacity_at(10_000.0), 0.0));
    }

    #[test]
    fn opacity_never_exceeds_one() {
        // Elastic overscroll can report a negative offset.
        assert!(close(opacity_at(-100.0), 1.0));
    }

    #[test]
    fn scale_shrinks_slowly() {
        assert!(close(scale_at(0.0), 1.0));
        assert!(close(scale_at(100.0), 0.98));
    }

    #[test]
    fn scale_floors_at_min() {
        assert!(close(scale_at(250.0), MIN_SCALE));
        assert!(close(scale_at(5000.0), MIN_SCALE));
        assert!(close(scale_at(50_000.0), MIN_SCALE));
    }

    #[test]
    fn gate_allows_one_pending_frame() {
        let gate = FrameGate::new();
        assert!(gate.try_schedule(|| Ok::<i32, ()>(1)));
        // Further scroll events within the same frame are coalesced.
        assert!(!gate.try_schedule(|| Ok::<i32, ()>(2)));
        assert_eq!(gate.pending_handle(), Some(1));

        gate.complete();
        assert!(gate.try_schedule(|| Ok::<i32, ()>(3)));
    }

    #[test]
    fn failed_request_leaves_gate_open() {
        let gate = FrameGate::new();
        assert!(!gate.try_schedule(|| Err::<i32, ()>(())));
        assert_eq!(gate.pending_handle(), None);
        // The next scroll event can still schedule an update.
        assert!(gate.try_schedule(|| Ok::<i32, ()>(7)));
        assert_eq!(gate.pending_handle(), Some(7));
    }
}

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const REVEAL_THRESHOLD: f64 = 0.1;
// Shrink the viewport by 50px at the bottom so elements reveal slightly
// before they would otherwise touch the fold.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Reveals `[data-animate]` elements the first time they scroll into view.
///
/// One shared observer watches every marked element. As soon as 10% of an
/// element crosses into the (shrunk) viewport it is unobserved, and after
/// its `data-delay` milliseconds the `animate-in` class is added. Elements
/// reveal exactly once and never revert.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn install(document: &Document) -> Option<Self> {
        let on_intersect = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            reveal(&entry.target(), &observer);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        let marked = document.query_selector_all("[data-animate]").ok()?;
        for i in 0..marked.length() {
            if let Some(el) = marked.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }

        Some(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal(element: &Element, observer: &IntersectionObserver) {
    // Unobserve first: the transition is one-shot, so the element must never
    // be re-evaluated even while its delay timer is still pending.
    observer.unobserve(element);
    let delay = parse_delay(element.get_attribute("data-delay").as_deref());
    let element = element.clone();
    Timeout::new(delay, move || {
        let _ = element.class_list().add_1("animate-in");
    })
    .forget();
}

fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_delay;

    #[test]
    fn missing_delay_defaults_to_zero() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("")), 0);
    }

    #[test]
    fn plain_milliseconds_parse() {
        assert_eq!(parse_delay(Some("250")), 250);
        assert_eq!(parse_delay(Some(" 100 ")), 100);
    }

    #[test]
    fn garbage_and_negative_values_default_to_zero() {
        assert_eq!(parse_delay(Some("fast")), 0);
        assert_eq!(parse_delay(Some("-50")), 0);
        assert_eq!(parse_delay(Some("1.5")), 0);
    }
}

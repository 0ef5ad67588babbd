use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Intercepts clicks on in-page anchors (`a[href^="#"]`) and smooth-scrolls
/// to the fragment target instead of jumping. Anchors whose fragment matches
/// nothing, and bare `#` hrefs, do nothing. Dropping the controller detaches
/// every click listener it installed.
pub struct SmoothScroll {
    handlers: Vec<(Element, Closure<dyn FnMut(Event)>)>,
}

impl SmoothScroll {
    pub fn install(document: &Document) -> Self {
        let mut handlers = Vec::new();
        let anchors = match document.query_selector_all(r##"a[href^="#"]"##) {
            Ok(list) => list,
            Err(_) => return Self { handlers },
        };

        for i in 0..anchors.length() {
            let anchor = match anchors.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                Some(el) => el,
                None => continue,
            };

            let on_click = Closure::wrap(Box::new({
                let anchor = anchor.clone();
                let document = document.clone();
                move |event: Event| {
                    event.prevent_default();
                    // Read the href at click time, like the browser would.
                    let href = anchor.get_attribute("href").unwrap_or_default();
                    if let Some(id) = fragment_id(&href) {
                        if let Some(target) = document.get_element_by_id(id) {
                            let options = ScrollIntoViewOptions::new();
                            options.set_behavior(ScrollBehavior::Smooth);
                            options.set_block(ScrollLogicalPosition::Start);
                            target.scroll_into_view_with_scroll_into_view_options(&options);
                        }
                    }
                }
            }) as Box<dyn FnMut(Event)>);

            if anchor
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .is_ok()
            {
                handlers.push((anchor, on_click));
            }
        }

        Self { handlers }
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        for (anchor, on_click) in &self.handlers {
            let _ = anchor
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::fragment_id;

    #[test]
    fn extracts_fragment() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#pricing"), Some("pricing"));
    }

    #[test]
    fn bare_hash_is_not_a_target() {
        assert_eq!(fragment_id("#"), None);
    }

    #[test]
    fn non_fragment_hrefs_are_ignored() {
        assert_eq!(fragment_id("/pricing"), None);
        assert_eq!(fragment_id("https://example.com/#x"), None);
        assert_eq!(fragment_id(""), None);
    }
}

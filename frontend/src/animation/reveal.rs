use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::hook;
use yew::prelude::*;

use super::AnimationError;
use crate::content::SectionId;

/// A section reveals once its top edge reaches this fraction of the viewport height.
pub const REVEAL_START: f64 = 0.8;

/// Shrinks the observed viewport so callbacks fire at the start line.
const ROOT_MARGIN: &str = "0px 0px -20% 0px";

/// Sections that have played their reveal. Grows monotonically for the life of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealRegistry {
    revealed: HashSet<SectionId>,
    transitions: usize,
    reveal_all: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealAction {
    /// Position of a section's top edge as a fraction of viewport height.
    Sample { section: SectionId, top_fraction: f64 },
    /// The observer could not start; show everything.
    RevealAll,
}

impl RevealRegistry {
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.reveal_all || self.revealed.contains(&section)
    }

    /// Number of reveal transitions that have played.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Returns true when this sample plays the section's reveal.
    pub fn observe(&mut self, section: SectionId, top_fraction: f64) -> bool {
        if self.is_revealed(section) || top_fraction > REVEAL_START {
            return false;
        }
        self.revealed.insert(section);
        self.transitions += 1;
        true
    }

    pub fn reveal_all(&mut self) {
        self.reveal_all = true;
    }

    /// CSS classes for a revealable section.
    pub fn classes(&self, section: SectionId) -> Classes {
        classes!("reveal-section", self.is_revealed(section).then_some("revealed"))
    }
}

impl Reducible for RevealRegistry {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Sample { section, top_fraction } => {
                let mut next = (*self).clone();
                if next.observe(section, top_fraction) {
                    debug!("revealed section {}", section.key());
                    Rc::new(next)
                } else {
                    self
                }
            }
            RevealAction::RevealAll if !self.reveal_all => {
                let mut next = (*self).clone();
                next.reveal_all();
                Rc::new(next)
            }
            RevealAction::RevealAll => self,
        }
    }
}

/// Converts an observed top edge into a viewport fraction.
///
/// `start_line` is the bottom of the observer's root, in the same pixels as
/// `top`. A section that intersects the root, or whose top has already passed
/// above the viewport, sits at the start line at most. Returns `None` when
/// there is no root height to measure against.
pub fn top_fraction(top: f64, start_line: f64, intersecting: bool) -> Option<f64> {
    if start_line <= 0.0 {
        return None;
    }
    let fraction = top / start_line * REVEAL_START;
    if intersecting || top < 0.0 {
        Some(fraction.min(REVEAL_START))
    } else {
        Some(fraction)
    }
}

fn sample_entry(entry: &IntersectionObserverEntry, fallback_line: f64) -> Option<RevealAction> {
    let start_line = entry
        .root_bounds()
        .map(|root| root.bottom())
        .filter(|bottom| *bottom > 0.0)
        .unwrap_or(fallback_line);
    let top = entry.bounding_client_rect().top();

    match top_fraction(top, start_line, entry.is_intersecting()) {
        Some(top_fraction) => {
            let section = entry
                .target()
                .get_attribute("data-section")
                .and_then(|key| SectionId::from_key(&key))?;
            Some(RevealAction::Sample { section, top_fraction })
        }
        None => Some(RevealAction::RevealAll),
    }
}

/// Owns the IntersectionObserver and its callback; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(
        targets: &[Element],
        on_sample: Callback<RevealAction>,
    ) -> Result<Self, AnimationError> {
        let window = web_sys::window().ok_or(AnimationError::NoWindow)?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|height| height.as_f64())
                    .unwrap_or(0.0);

                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let action = match sample_entry(&entry, viewport * REVEAL_START) {
                        Some(action) => action,
                        None => continue,
                    };
                    match action {
                        RevealAction::Sample { top_fraction, .. } if top_fraction <= REVEAL_START => {
                            observer.unobserve(&entry.target());
                        }
                        RevealAction::RevealAll => observer.disconnect(),
                        _ => {}
                    }
                    on_sample.emit(action);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(0.0));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for element in targets {
            observer.observe(element);
        }

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

/// Registers `targets` for a one-shot reveal. Each target must carry a
/// `data-section` attribute naming its `SectionId`.
#[hook]
pub fn use_reveal(targets: Vec<NodeRef>) -> UseReducerHandle<RevealRegistry> {
    let registry = use_reducer(RevealRegistry::default);

    {
        let dispatcher = registry.dispatcher();
        use_effect_with_deps(
            move |targets: &Vec<NodeRef>| {
                let elements: Vec<Element> =
                    targets.iter().filter_map(|target| target.cast::<Element>()).collect();
                let on_sample = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |action: RevealAction| dispatcher.dispatch(action))
                };
                let observer = match RevealObserver::attach(&elements, on_sample) {
                    Ok(observer) => {
                        info!("Reveal observer watching {} sections", elements.len());
                        Some(observer)
                    }
                    Err(err) => {
                        warn!("Reveal animations unavailable, showing all sections: {}", err);
                        dispatcher.dispatch(RevealAction::RevealAll);
                        None
                    }
                };
                move || drop(observer)
            },
            targets,
        );
    }

    registry
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn section_at(top_px: u32) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_attribute("data-section", "features").unwrap();
        element
            .set_attribute(
                "style",
                &format!("position: absolute; left: 0; top: {}px; width: 100px; height: 100px;", top_px),
            )
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn recorder() -> (Callback<RevealAction>, Rc<RefCell<Vec<RevealAction>>>) {
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        (Callback::from(move |action: RevealAction| sink.borrow_mut().push(action)), samples)
    }

    fn revealing(action: &RevealAction) -> bool {
        matches!(action, RevealAction::Sample { top_fraction, .. } if *top_fraction <= REVEAL_START)
    }

    #[wasm_bindgen_test]
    async fn section_in_view_reveals() {
        let element = section_at(0);
        let (on_sample, samples) = recorder();
        let observer = RevealObserver::attach(&[element.clone()], on_sample).unwrap();
        TimeoutFuture::new(150).await;

        assert!(samples.borrow().iter().any(revealing));
        drop(observer);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn section_far_below_stays_pending() {
        let element = section_at(20_000);
        let (on_sample, samples) = recorder();
        let observer = RevealObserver::attach(&[element.clone()], on_sample).unwrap();
        TimeoutFuture::new(150).await;

        assert!(!samples.borrow().is_empty());
        assert!(!samples.borrow().iter().any(revealing));
        drop(observer);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_observer_stops_sampling() {
        let element = section_at(20_000);
        let (on_sample, samples) = recorder();
        let observer = RevealObserver::attach(&[element.clone()], on_sample).unwrap();
        TimeoutFuture::new(150).await;
        drop(observer);
        let seen = samples.borrow().len();

        // would intersect and reveal if anything were still watching
        element.unchecked_ref::<HtmlElement>().style().set_property("top", "0px").unwrap();
        TimeoutFuture::new(150).await;

        assert_eq!(samples.borrow().len(), seen);
        assert!(!samples.borrow().iter().any(revealing));
        element.remove();
    }
}

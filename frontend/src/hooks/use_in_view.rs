use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::{AnimationError, ObserverConfig, Result, ViewportObserver, VisibilityHost};

/// `IntersectionObserver` as a [`VisibilityHost`]. Each observation gets its
/// own observer so releasing one never affects another section.
pub struct DomVisibility {
    callback: Function,
}

impl DomVisibility {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

impl VisibilityHost for DomVisibility {
    type Target = Element;
    type Handle = IntersectionObserver;

    fn observe(&mut self, target: &Element, config: &ObserverConfig) -> Result<IntersectionObserver> {
        if !intersection_observer_supported() {
            return Err(AnimationError::EnvironmentUnavailable(
                "IntersectionObserver is not available".to_string(),
            ));
        }
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold()));
        let observer = IntersectionObserver::new_with_options(&self.callback, &init).map_err(|e| {
            AnimationError::EnvironmentUnavailable(format!(
                "failed to create IntersectionObserver: {:?}",
                e
            ))
        })?;
        observer.observe(target);
        Ok(observer)
    }

    fn unobserve(&mut self, handle: IntersectionObserver) {
        handle.disconnect();
    }
}

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// The ratio to act on from one callback batch: the newest entry wins.
pub fn latest_ratio(ratios: impl Iterator<Item = f64>) -> Option<f64> {
    ratios.last()
}

/// What a freshly (re-)registered section shows before any callback.
///
/// `registered` is `None` when there was no element to watch, otherwise the
/// observer's own answer (already `true` if it fell back to visible).
pub fn initial_in_view(supported: bool, registered: Option<bool>) -> bool {
    !supported || registered.unwrap_or(true)
}

struct Watch {
    observer: ViewportObserver<DomVisibility>,
    host: DomVisibility,
}

/// Reports whether the element behind `node` has scrolled into view.
///
/// Without `IntersectionObserver` (or without a mounted element) the hook
/// reports `true` straight away so content is never stuck invisible.
#[hook]
pub fn use_in_view(node: NodeRef, config: ObserverConfig) -> bool {
    let in_view = use_state(|| !intersection_observer_supported());

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, config): &(NodeRef, ObserverConfig)| {
                let slot: Rc<RefCell<Option<Watch>>> = Rc::new(RefCell::new(None));

                let callback = {
                    let slot = slot.clone();
                    let in_view = in_view.clone();
                    Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                        let mut guard = slot.borrow_mut();
                        let Some(Watch { observer, host }) = guard.as_mut() else {
                            return;
                        };
                        let ratios = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .map(|entry| entry.intersection_ratio());
                        if let Some(ratio) = latest_ratio(ratios) {
                            let visible = observer.on_intersection(ratio, host);
                            if !observer.is_observing() {
                                debug!("Reveal latched at ratio {:.2}", ratio);
                            }
                            in_view.set(visible);
                        }
                    })
                };

                let mut host = DomVisibility::new(callback.as_ref().unchecked_ref::<Function>().clone());
                let watch = match node.cast::<Element>() {
                    Some(element) => {
                        let observer = ViewportObserver::register(*config, &mut host, &element);
                        debug!(
                            "Watching element at threshold {} (once: {})",
                            observer.config().threshold(),
                            observer.config().trigger_once()
                        );
                        Some(Watch { observer, host })
                    }
                    None => {
                        warn!("Reveal target is not mounted; showing it immediately");
                        None
                    }
                };
                // A new registration starts hidden until its first callback.
                in_view.set(initial_in_view(
                    intersection_observer_supported(),
                    watch.as_ref().map(|watch| watch.observer.is_in_view()),
                ));
                *slot.borrow_mut() = watch;

                move || {
                    if let Some(mut watch) = slot.borrow_mut().take() {
                        let Watch { observer, host } = &mut watch;
                        observer.teardown(host);
                    }
                    drop(callback);
                }
            },
            (node, config),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_in_a_batch_wins() {
        assert_eq!(latest_ratio([0.0, 0.6, 0.05].into_iter()), Some(0.05));
        assert_eq!(latest_ratio([0.4].into_iter()), Some(0.4));
    }

    #[test]
    fn empty_batch_changes_nothing() {
        assert_eq!(latest_ratio(std::iter::empty()), None);
    }

    #[test]
    fn registration_starts_hidden() {
        assert!(!initial_in_view(true, Some(false)));
    }

    #[test]
    fn unmounted_node_is_shown() {
        assert!(initial_in_view(true, None));
    }

    #[test]
    fn fallback_registration_is_shown() {
        assert!(initial_in_view(true, Some(true)));
    }

    #[test]
    fn unsupported_browser_is_shown() {
        assert!(initial_in_view(false, None));
        assert!(initial_in_view(false, Some(false)));
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::viewport::{BatchHandler, Observation, Viewport};

type Sink = Rc<RefCell<Option<BatchHandler<Element>>>>;

/// [`Viewport`] wrapping one `IntersectionObserver`.
pub struct DomViewport {
    observer: IntersectionObserver,
    handler: Sink,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomViewport {
    pub fn new(threshold: f64) -> Result<Self, JsValue> {
        let handler: Sink = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&handler);
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let batch: Vec<Observation<Element>> = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .map(|entry| Observation {
                    target: entry.target(),
                    intersecting: entry.is_intersecting(),
                })
                .collect();
            if let Some(handler) = sink.borrow().as_ref() {
                handler(&batch);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            handler,
            _callback: callback,
        })
    }
}

impl DomViewport {
    /// The visibility threshold the underlying observer was built with.
    pub fn threshold(&self) -> Option<f64> {
        self.observer.thresholds().get(0).as_f64()
    }
}

impl Viewport for DomViewport {
    type Node = Element;

    fn watch(&self, node: &Element) {
        self.observer.observe(node);
    }

    fn subscribe(&self, handler: BatchHandler<Element>) {
        *self.handler.borrow_mut() = Some(handler);
    }

    fn unwatch(&self, node: &Element) {
        self.observer.unobserve(node);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

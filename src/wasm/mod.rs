use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PageTransitionEvent;

use crate::{EffectConfig, Error, Page};

mod dom;
mod observer;
mod timers;

pub use dom::DomStage;
pub use observer::DomViewport;
pub use timers::WindowScheduler;

type LivePage = Page<DomStage, WindowScheduler, DomViewport>;

thread_local! {
    static PAGE: RefCell<Option<LivePage>> = const { RefCell::new(None) };
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(format!("{value:?}"))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The reveal and finale observers, in that order.
pub fn observers(config: &EffectConfig) -> Result<(DomViewport, DomViewport), JsValue> {
    Ok((
        DomViewport::new(config.reveal.threshold)?,
        DomViewport::new(config.reveal.finale_threshold)?,
    ))
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = EffectConfig::default();

    let stage = Rc::new(DomStage::new(document, config.selectors.clone()));
    let timers = Rc::new(WindowScheduler::new(window.clone()));
    let (reveal, finale) = observers(&config)?;

    let page = Page::mount(stage, timers, reveal, finale, Rng::new(), &config)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    // A page kept in the back/forward cache resumes with its timers intact.
    let on_hide = Closure::wrap(Box::new(move |e: PageTransitionEvent| {
        if !e.persisted() {
            teardown();
        }
    }) as Box<dyn FnMut(PageTransitionEvent)>);
    window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
    on_hide.forget();

    Ok(())
}

/// Stop every effect. Called on `pagehide`; also exported for hosts that
/// swap the page out themselves.
#[wasm_bindgen]
pub fn teardown() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().take() {
            page.teardown();
        }
    });
}

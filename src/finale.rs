//! Finale-zone visibility: the flag that gates bursts and the watcher that
//! keeps it current.

use std::cell::Cell;
use std::rc::Rc;

use crate::burst::BurstEmitter;
use crate::schedule::Scheduler;
use crate::stage::Stage;
use crate::viewport::{Observation, Viewport};

/// Create the finale-visible flag. Exactly one writer exists; readers can be
/// cloned freely.
pub fn visibility_flag() -> (VisibilityWriter, VisibilityReader) {
    let cell = Rc::new(Cell::new(false));
    (VisibilityWriter(Rc::clone(&cell)), VisibilityReader(cell))
}

pub struct VisibilityWriter(Rc<Cell<bool>>);

impl VisibilityWriter {
    /// Record the latest observation; returns the previous value.
    pub fn set(&self, visible: bool) -> bool {
        self.0.replace(visible)
    }

    pub fn reader(&self) -> VisibilityReader {
        VisibilityReader(Rc::clone(&self.0))
    }
}

#[derive(Clone)]
pub struct VisibilityReader(Rc<Cell<bool>>);

impl VisibilityReader {
    pub fn is_visible(&self) -> bool {
        self.0.get()
    }
}

/// Tracks whether the finale zone is on screen and fires a burst the moment
/// it comes into view.
pub struct FinaleWatcher<S: Stage, T: Scheduler, V> {
    finale: S::Node,
    flag: VisibilityWriter,
    burst: Rc<BurstEmitter<S, T>>,
    viewport: V,
}

impl<S, T, V> FinaleWatcher<S, T, V>
where
    S: Stage + 'static,
    T: Scheduler + 'static,
    V: Viewport<Node = S::Node> + 'static,
{
    /// Start watching `finale` through `viewport`.
    pub fn attach(
        finale: S::Node,
        flag: VisibilityWriter,
        burst: Rc<BurstEmitter<S, T>>,
        viewport: V,
    ) -> Rc<Self> {
        let watcher = Rc::new(Self {
            finale,
            flag,
            burst,
            viewport,
        });
        let weak = Rc::downgrade(&watcher);
        watcher.viewport.subscribe(Box::new(move |batch| {
            if let Some(watcher) = weak.upgrade() {
                watcher.handle(batch);
            }
        }));
        watcher.viewport.watch(&watcher.finale);
        watcher
    }

    pub fn handle(&self, batch: &[Observation<S::Node>]) {
        for entry in batch.iter().filter(|e| e.target == self.finale) {
            let was_visible = self.flag.set(entry.intersecting);
            if entry.intersecting && !was_visible {
                log::debug!("finale zone entered");
                self.burst.attempt();
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.flag.reader().is_visible()
    }

    pub fn disconnect(&self) {
        self.viewport.disconnect();
    }
}

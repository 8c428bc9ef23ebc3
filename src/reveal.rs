use std::rc::Rc;

use crate::stage::Stage;
use crate::viewport::{Observation, Viewport};

/// Marks watched elements visible the first time they scroll into view.
/// The mark is never taken back.
pub struct RevealController<S: Stage, V> {
    stage: Rc<S>,
    viewport: V,
}

impl<S, V> RevealController<S, V>
where
    S: Stage + 'static,
    V: Viewport<Node = S::Node> + 'static,
{
    pub fn attach(stage: Rc<S>, viewport: V) -> Rc<Self> {
        let controller = Rc::new(Self { stage, viewport });
        let weak = Rc::downgrade(&controller);
        controller.viewport.subscribe(Box::new(move |batch| {
            if let Some(controller) = weak.upgrade() {
                controller.handle(batch);
            }
        }));
        controller
    }

    /// Start watching `node`. Safe to call at any time, including for
    /// elements created after load.
    pub fn register(&self, node: &S::Node) {
        self.viewport.watch(node);
    }

    pub fn unregister(&self, node: &S::Node) {
        self.viewport.unwatch(node);
    }

    pub fn handle(&self, batch: &[Observation<S::Node>]) {
        for entry in batch.iter().filter(|e| e.intersecting) {
            self.stage.mark_visible(&entry.target);
        }
    }

    pub fn disconnect(&self) {
        self.viewport.disconnect();
    }
}

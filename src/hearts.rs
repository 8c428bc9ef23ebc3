use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use fastrand::Rng;

use crate::config::HeartConfig;
use crate::schedule::{IntervalId, Scheduler};
use crate::sprite::{FloatingHeart, Sprite};
use crate::stage::Stage;
use crate::transient::spawn_transient;

/// Ambient stream of floating hearts.
///
/// `start` fires a staggered opening wave, then keeps spawning on a fixed
/// period until `stop`. Every heart removes itself after `ttl`.
pub struct HeartEmitter<S: Stage, T: Scheduler> {
    stage: Rc<S>,
    timers: Rc<T>,
    container: S::Node,
    rng: RefCell<Rng>,
    config: HeartConfig,
    running: Cell<bool>,
    /// Bumped on every start and stop; opening-wave timers from an older
    /// run see a different value and do nothing.
    generation: Cell<u64>,
    interval: Cell<Option<IntervalId>>,
}

impl<S, T> HeartEmitter<S, T>
where
    S: Stage + 'static,
    T: Scheduler + 'static,
{
    pub fn new(
        stage: Rc<S>,
        timers: Rc<T>,
        container: S::Node,
        rng: Rng,
        config: HeartConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            stage,
            timers,
            container,
            rng: RefCell::new(rng),
            config,
            running: Cell::new(false),
            generation: Cell::new(0),
            interval: Cell::new(None),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn start(self: &Rc<Self>) {
        if self.running.replace(true) {
            return;
        }
        let generation = self.bump_generation();

        for i in 0..self.config.initial_count {
            let weak = Rc::downgrade(self);
            self.timers.once(
                i * self.config.initial_stagger,
                Box::new(move || Self::tick(&weak, generation)),
            );
        }

        let weak = Rc::downgrade(self);
        let id = self.timers.every(
            self.config.period,
            Box::new(move || Self::tick(&weak, generation)),
        );
        self.interval.set(Some(id));
    }

    /// Cancel the interval and drop opening-wave spawns that have not fired.
    /// Hearts already on the page still expire on schedule.
    pub fn stop(&self) {
        self.running.set(false);
        self.bump_generation();
        if let Some(id) = self.interval.take() {
            self.timers.cancel(id);
        }
    }

    /// Spawn one heart now.
    pub fn emit(&self) -> Option<S::Node> {
        let heart = FloatingHeart::sample(&mut self.rng.borrow_mut(), &self.config);
        match spawn_transient(
            &self.stage,
            &*self.timers,
            &self.container,
            &Sprite::Heart(heart),
            self.config.ttl,
        ) {
            Ok(node) => Some(node),
            Err(e) => {
                log::warn!("floating heart skipped: {e}");
                None
            }
        }
    }

    fn bump_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn tick(weak: &Weak<Self>, generation: u64) {
        if let Some(emitter) = weak.upgrade() {
            if emitter.running.get() && emitter.generation.get() == generation {
                emitter.emit();
            }
        }
    }
}

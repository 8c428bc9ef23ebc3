use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;

use crate::config::BurstConfig;
use crate::finale::VisibilityReader;
use crate::schedule::{IntervalId, Scheduler};
use crate::sprite::{BurstParticle, Sprite};
use crate::stage::Stage;
use crate::transient::spawn_transient;

/// Radial particle burst over the burst zone, gated on finale visibility.
pub struct BurstEmitter<S: Stage, T: Scheduler> {
    stage: Rc<S>,
    timers: Rc<T>,
    zone: S::Node,
    visible: VisibilityReader,
    rng: RefCell<Rng>,
    config: BurstConfig,
    interval: Cell<Option<IntervalId>>,
}

impl<S, T> BurstEmitter<S, T>
where
    S: Stage + 'static,
    T: Scheduler + 'static,
{
    pub fn new(
        stage: Rc<S>,
        timers: Rc<T>,
        zone: S::Node,
        visible: VisibilityReader,
        rng: Rng,
        config: BurstConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            stage,
            timers,
            zone,
            visible,
            rng: RefCell::new(rng),
            config,
            interval: Cell::new(None),
        })
    }

    /// Spawn one ring of particles if the finale zone is on screen.
    /// Returns how many particles were placed.
    pub fn attempt(&self) -> usize {
        if !self.visible.is_visible() {
            return 0;
        }

        let ring = BurstParticle::ring(&mut self.rng.borrow_mut(), &self.config);
        let mut placed = 0;
        for particle in ring {
            match spawn_transient(
                &self.stage,
                &*self.timers,
                &self.zone,
                &Sprite::Burst(particle),
                self.config.ttl,
            ) {
                Ok(_) => placed += 1,
                Err(e) => log::warn!("burst particle skipped: {e}"),
            }
        }
        log::debug!("burst: {placed} particles");
        placed
    }

    /// Attempt a burst every `period` until `stop`.
    pub fn start(self: &Rc<Self>) {
        if self.interval.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let id = self.timers.every(
            self.config.period,
            Box::new(move || {
                if let Some(emitter) = weak.upgrade() {
                    emitter.attempt();
                }
            }),
        );
        self.interval.set(Some(id));
    }

    pub fn stop(&self) {
        if let Some(id) = self.interval.take() {
            self.timers.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.get().is_some()
    }
}

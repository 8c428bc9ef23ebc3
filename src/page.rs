use std::rc::Rc;

use fastrand::Rng;

use crate::burst::BurstEmitter;
use crate::catalog::CATALOG;
use crate::config::EffectConfig;
use crate::error::{Error, Result};
use crate::finale::{visibility_flag, FinaleWatcher};
use crate::gallery;
use crate::hearts::HeartEmitter;
use crate::reveal::RevealController;
use crate::schedule::Scheduler;
use crate::stage::{Slot, Stage};
use crate::viewport::Viewport;

/// Every effect on the page, wired together and running.
pub struct Page<S: Stage, T: Scheduler, V> {
    pub hearts: Rc<HeartEmitter<S, T>>,
    pub burst: Rc<BurstEmitter<S, T>>,
    pub reveal: Rc<RevealController<S, V>>,
    pub finale: Rc<FinaleWatcher<S, T, V>>,
    /// Gallery cards rendered at mount, empty when the page has no gallery.
    pub cards: Vec<S::Node>,
}

fn required<S: Stage>(stage: &S, slot: Slot) -> Result<S::Node> {
    stage.slot(slot).ok_or(Error::MissingElement(slot.name()))
}

impl<S, T, V> Page<S, T, V>
where
    S: Stage + 'static,
    T: Scheduler + 'static,
    V: Viewport<Node = S::Node> + 'static,
{
    /// Wire up the page in load order: reveal targets, gallery, finale
    /// watcher, floating hearts, burst interval.
    ///
    /// `reveal_viewport` and `finale_viewport` must already carry the
    /// reveal and finale thresholds from `config`.
    pub fn mount(
        stage: Rc<S>,
        timers: Rc<T>,
        reveal_viewport: V,
        finale_viewport: V,
        mut rng: Rng,
        config: &EffectConfig,
    ) -> Result<Self> {
        let hearts_container = required(&*stage, Slot::FloatingHearts)?;
        let burst_zone = required(&*stage, Slot::BurstZone)?;
        let finale_zone = required(&*stage, Slot::Finale)?;

        let reveal = RevealController::attach(Rc::clone(&stage), reveal_viewport);
        for node in stage.reveal_targets() {
            reveal.register(&node);
        }

        let cards = gallery::render(&stage, &*reveal, &mut rng, &CATALOG, config.gallery.picks)
            .unwrap_or_default();

        let (writer, reader) = visibility_flag();
        let burst = BurstEmitter::new(
            Rc::clone(&stage),
            Rc::clone(&timers),
            burst_zone,
            reader,
            rng.fork(),
            config.burst.clone(),
        );
        let finale = FinaleWatcher::attach(finale_zone, writer, Rc::clone(&burst), finale_viewport);

        let hearts = HeartEmitter::new(
            stage,
            timers,
            hearts_container,
            rng.fork(),
            config.hearts.clone(),
        );
        hearts.start();
        burst.start();

        log::info!("page mounted with {} gallery cards", cards.len());
        Ok(Self {
            hearts,
            burst,
            reveal,
            finale,
            cards,
        })
    }

    /// Stop both emitters and both observers. Effects already on screen
    /// still expire on their own timers.
    pub fn teardown(&self) {
        self.hearts.stop();
        self.burst.stop();
        self.reveal.disconnect();
        self.finale.disconnect();
        log::info!("page effects stopped");
    }
}

use std::rc::Rc;

use fastrand::Rng;

use crate::catalog::{Card, CatalogEntry};
use crate::reveal::RevealController;
use crate::stage::{Slot, Stage};
use crate::viewport::Viewport;

/// `count` distinct entries in random order: a full Fisher-Yates shuffle of
/// a copy of `catalog`, truncated.
pub fn pick(rng: &mut Rng, catalog: &[CatalogEntry], count: usize) -> Vec<CatalogEntry> {
    let mut pool = catalog.to_vec();
    rng.shuffle(&mut pool);
    pool.truncate(count);
    pool
}

/// Replace the gallery with `count` random cards and hand each one to the
/// reveal controller.
///
/// Returns the rendered cards, or `None` when the page has no gallery.
pub fn render<S, V>(
    stage: &Rc<S>,
    reveal: &RevealController<S, V>,
    rng: &mut Rng,
    catalog: &[CatalogEntry],
    count: usize,
) -> Option<Vec<S::Node>>
where
    S: Stage + 'static,
    V: Viewport<Node = S::Node> + 'static,
{
    let Some(gallery) = stage.slot(Slot::Gallery) else {
        log::warn!("no #{} on the page, gallery skipped", Slot::Gallery.name());
        return None;
    };

    let chosen = pick(rng, catalog, count);
    log::debug!(
        "gallery: {}",
        chosen.iter().map(|e| e.name).collect::<Vec<_>>().join(", ")
    );

    for stale in stage.children(&gallery) {
        reveal.unregister(&stale);
    }
    stage.clear(&gallery);
    let mut cards = Vec::with_capacity(chosen.len());
    for entry in &chosen {
        match stage.append_card(&gallery, &Card::from(entry)) {
            Ok(node) => {
                reveal.register(&node);
                cards.push(node);
            }
            Err(e) => log::warn!("gallery card for {} skipped: {e}", entry.name),
        }
    }
    Some(cards)
}

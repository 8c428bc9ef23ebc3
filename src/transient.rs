use std::rc::Rc;

use crate::error::Result;
use crate::schedule::{Millis, Scheduler};
use crate::sprite::Sprite;
use crate::stage::Stage;

/// Append `sprite` under `parent` and remove it `ttl` later.
///
/// Removal is driven by the timer alone; the sprite's own animation length
/// plays no part in it.
pub fn spawn_transient<S, T>(
    stage: &Rc<S>,
    timers: &T,
    parent: &S::Node,
    sprite: &Sprite,
    ttl: Millis,
) -> Result<S::Node>
where
    S: Stage + 'static,
    T: Scheduler + ?Sized,
{
    let node = stage.append_sprite(parent, sprite)?;
    let stage = Rc::clone(stage);
    let expired = node.clone();
    timers.once(ttl, Box::new(move || stage.remove(&expired)));
    Ok(node)
}

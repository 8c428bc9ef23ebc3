use crate::catalog::Card;
use crate::error::Result;
use crate::sprite::Sprite;

/// Named regions of the page the effects draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    FloatingHearts,
    BurstZone,
    Gallery,
    Finale,
}

impl Slot {
    pub fn name(self) -> &'static str {
        match self {
            Slot::FloatingHearts => "floating-hearts",
            Slot::BurstZone => "heart-burst",
            Slot::Gallery => "poke-gallery",
            Slot::Finale => "forever",
        }
    }
}

/// The page surface the effects mutate.
pub trait Stage {
    type Node: Clone + PartialEq + 'static;

    fn slot(&self, slot: Slot) -> Option<Self::Node>;

    /// Elements present at load that should reveal on scroll.
    fn reveal_targets(&self) -> Vec<Self::Node>;

    fn append_sprite(&self, parent: &Self::Node, sprite: &Sprite) -> Result<Self::Node>;

    fn append_card(&self, parent: &Self::Node, card: &Card) -> Result<Self::Node>;

    /// Current element children of `parent`.
    fn children(&self, parent: &Self::Node) -> Vec<Self::Node>;

    /// Drop every child of `parent`.
    fn clear(&self, parent: &Self::Node);

    /// Detach `node`. Removing a detached node is a no-op.
    fn remove(&self, node: &Self::Node);

    /// Apply the one-way visible mark. Marking twice changes nothing.
    fn mark_visible(&self, node: &Self::Node);
}

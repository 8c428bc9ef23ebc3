//! In-memory stand-ins for the browser: a virtual-clock scheduler, a stage
//! that records every node it creates, and a viewport driven by hand.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use heart_page::catalog::Card;
use heart_page::sprite::Sprite;
use heart_page::viewport::BatchHandler;
use heart_page::{Error, IntervalId, Millis, Observation, Result, Scheduler, Slot, Stage, Viewport};

enum Task {
    Once(Box<dyn FnOnce()>),
    Every {
        id: i32,
        period: u64,
        task: Box<dyn FnMut()>,
    },
}

struct Pending {
    due: u64,
    seq: u64,
    task: Task,
}

/// Deterministic scheduler. Time only moves through `advance`.
#[derive(Default)]
pub struct VirtualClock {
    now: Cell<u64>,
    seq: Cell<u64>,
    next_id: Cell<i32>,
    queue: RefCell<Vec<Pending>>,
    cancelled: RefCell<HashSet<i32>>,
}

impl VirtualClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn push(&self, due: u64, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending { due, seq, task });
    }

    /// Run every task due within the next `ms`, in due order.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| queue.swap_remove(i))
            };
            let Some(pending) = next else { break };
            self.now.set(pending.due);
            match pending.task {
                Task::Once(task) => task(),
                Task::Every {
                    id,
                    period,
                    mut task,
                } => {
                    task();
                    if !self.cancelled.borrow().contains(&id) {
                        self.push(pending.due + period, Task::Every { id, period, task });
                    }
                }
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for VirtualClock {
    fn once(&self, delay: Millis, task: Box<dyn FnOnce()>) {
        self.push(self.now.get() + u64::from(delay), Task::Once(task));
    }

    fn every(&self, period: Millis, task: Box<dyn FnMut()>) -> IntervalId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let period = u64::from(period);
        self.push(self.now.get() + period, Task::Every { id, period, task });
        IntervalId(id)
    }

    fn cancel(&self, id: IntervalId) {
        self.cancelled.borrow_mut().insert(id.0);
        self.queue
            .borrow_mut()
            .retain(|p| !matches!(p.task, Task::Every { id: other, .. } if other == id.0));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Slot(Slot),
    RevealTarget,
    Sprite(Sprite),
    Card(Card),
}

#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub kind: NodeKind,
    pub parent: Option<usize>,
    pub attached: bool,
    pub visible: bool,
    pub created_at: u64,
    pub removed_at: Option<u64>,
}

/// Stage that keeps every node it ever created, attached or not.
pub struct MemoryStage {
    clock: Rc<VirtualClock>,
    nodes: RefCell<Vec<NodeRecord>>,
    slots: HashMap<Slot, usize>,
    reveal_targets: Vec<usize>,
    pub fail_appends: Cell<bool>,
}

impl MemoryStage {
    /// A page with the given slots and `reveal_targets` static reveal nodes.
    pub fn new(clock: Rc<VirtualClock>, slots: &[Slot], reveal_targets: usize) -> Rc<Self> {
        let mut nodes = Vec::new();
        let mut by_slot = HashMap::new();
        for &slot in slots {
            by_slot.insert(slot, nodes.len());
            nodes.push(NodeRecord {
                kind: NodeKind::Slot(slot),
                parent: None,
                attached: true,
                visible: false,
                created_at: 0,
                removed_at: None,
            });
        }
        let mut targets = Vec::new();
        for _ in 0..reveal_targets {
            targets.push(nodes.len());
            nodes.push(NodeRecord {
                kind: NodeKind::RevealTarget,
                parent: None,
                attached: true,
                visible: false,
                created_at: 0,
                removed_at: None,
            });
        }
        Rc::new(Self {
            clock,
            nodes: RefCell::new(nodes),
            slots: by_slot,
            reveal_targets: targets,
            fail_appends: Cell::new(false),
        })
    }

    pub fn full_page(clock: Rc<VirtualClock>) -> Rc<Self> {
        Self::new(
            clock,
            &[Slot::FloatingHearts, Slot::BurstZone, Slot::Gallery, Slot::Finale],
            3,
        )
    }

    pub fn slot_id(&self, slot: Slot) -> usize {
        self.slots[&slot]
    }

    pub fn record(&self, id: usize) -> NodeRecord {
        self.nodes.borrow()[id].clone()
    }

    /// Every node ever appended under `parent`, in creation order.
    pub fn created_under(&self, parent: usize) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(parent))
            .map(|(i, _)| i)
            .collect()
    }

    /// Nodes currently attached under `parent`.
    pub fn live_under(&self, parent: usize) -> Vec<usize> {
        self.created_under(parent)
            .into_iter()
            .filter(|&i| self.nodes.borrow()[i].attached)
            .collect()
    }

    pub fn is_visible(&self, id: usize) -> bool {
        self.nodes.borrow()[id].visible
    }

    pub fn card(&self, id: usize) -> Option<Card> {
        match &self.nodes.borrow()[id].kind {
            NodeKind::Card(card) => Some(card.clone()),
            _ => None,
        }
    }

    pub fn sprite(&self, id: usize) -> Option<Sprite> {
        match &self.nodes.borrow()[id].kind {
            NodeKind::Sprite(sprite) => Some(sprite.clone()),
            _ => None,
        }
    }

    fn append(&self, parent: usize, kind: NodeKind) -> Result<usize> {
        if self.fail_appends.get() {
            return Err(Error::Dom("append refused".into()));
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeRecord {
            kind,
            parent: Some(parent),
            attached: true,
            visible: false,
            created_at: self.clock.now(),
            removed_at: None,
        });
        Ok(nodes.len() - 1)
    }

    fn detach(&self, id: usize) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[id];
        if node.attached {
            node.attached = false;
            node.removed_at = Some(self.clock.now());
        }
    }
}

impl Stage for MemoryStage {
    type Node = usize;

    fn slot(&self, slot: Slot) -> Option<usize> {
        self.slots.get(&slot).copied()
    }

    fn reveal_targets(&self) -> Vec<usize> {
        self.reveal_targets.clone()
    }

    fn append_sprite(&self, parent: &usize, sprite: &Sprite) -> Result<usize> {
        self.append(*parent, NodeKind::Sprite(sprite.clone()))
    }

    fn append_card(&self, parent: &usize, card: &Card) -> Result<usize> {
        self.append(*parent, NodeKind::Card(card.clone()))
    }

    fn children(&self, parent: &usize) -> Vec<usize> {
        self.live_under(*parent)
    }

    fn clear(&self, parent: &usize) {
        for id in self.live_under(*parent) {
            self.detach(id);
        }
    }

    fn remove(&self, node: &usize) {
        self.detach(*node);
    }

    fn mark_visible(&self, node: &usize) {
        self.nodes.borrow_mut()[*node].visible = true;
    }
}

#[derive(Default)]
struct ViewportState {
    watched: RefCell<Vec<usize>>,
    handler: RefCell<Option<BatchHandler<usize>>>,
    disconnected: Cell<bool>,
}

/// Viewport whose intersection reports are fed in by the test. Clones share
/// state so a test can keep a handle after moving one into the page.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<ViewportState>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watched(&self) -> Vec<usize> {
        self.state.watched.borrow().clone()
    }

    pub fn is_disconnected(&self) -> bool {
        self.state.disconnected.get()
    }

    /// Deliver a batch of `(node, intersecting)` reports. Reports for nodes
    /// that are not watched are dropped, as a real observer would never
    /// produce them.
    pub fn emit(&self, reports: &[(usize, bool)]) {
        let watched = self.state.watched.borrow().clone();
        let batch: Vec<Observation<usize>> = reports
            .iter()
            .filter(|(node, _)| watched.contains(node))
            .map(|&(target, intersecting)| Observation {
                target,
                intersecting,
            })
            .collect();
        if batch.is_empty() {
            return;
        }
        if let Some(handler) = self.state.handler.borrow().as_ref() {
            handler(&batch);
        }
    }
}

impl Viewport for ManualViewport {
    type Node = usize;

    fn watch(&self, node: &usize) {
        if !self.state.disconnected.get() {
            self.state.watched.borrow_mut().push(*node);
        }
    }

    fn unwatch(&self, node: &usize) {
        self.state.watched.borrow_mut().retain(|n| n != node);
    }

    fn subscribe(&self, handler: BatchHandler<usize>) {
        *self.state.handler.borrow_mut() = Some(handler);
    }

    fn disconnect(&self) {
        self.state.disconnected.set(true);
        self.state.watched.borrow_mut().clear();
    }
}

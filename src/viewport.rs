/// One intersection report for a watched node.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<N> {
    pub target: N,
    pub intersecting: bool,
}

pub type BatchHandler<N> = Box<dyn Fn(&[Observation<N>])>;

/// A source of intersection reports with a fixed visibility threshold.
pub trait Viewport {
    type Node;

    fn watch(&self, node: &Self::Node);

    /// Stop observing one node. Unknown nodes are ignored.
    fn unwatch(&self, node: &Self::Node);

    /// Replace the handler that receives observation batches.
    fn subscribe(&self, handler: BatchHandler<Self::Node>);

    /// Stop observing every node.
    fn disconnect(&self);
}

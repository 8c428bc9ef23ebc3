/// Timer delays and periods, in milliseconds.
pub type Millis = u32;

/// Handle to a repeating task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalId(pub i32);

/// Single-threaded timer source.
///
/// Tasks run to completion one at a time; a task may schedule further tasks.
/// One-shot tasks are fire-and-forget and cannot be cancelled.
pub trait Scheduler {
    fn once(&self, delay: Millis, task: Box<dyn FnOnce()>);

    fn every(&self, period: Millis, task: Box<dyn FnMut()>) -> IntervalId;

    /// Stop a repeating task. Unknown or already cancelled ids are ignored.
    fn cancel(&self, id: IntervalId);
}

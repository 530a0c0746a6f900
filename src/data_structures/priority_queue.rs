use crate::Result;

/// Min-priority queue with decrease-key, as needed by Dijkstra's algorithm.
///
/// Items are vertices; a queue holds at most one *live* entry per item that it can
/// address through [`PriorityQueue::decrease_priority`]. Popped items are no longer
/// live.
pub trait PriorityQueue<V, P> {
    /// Returns true if the priority queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the priority queue
    fn len(&self) -> usize;

    /// Returns true if `item` has a live entry
    fn contains(&self, item: &V) -> bool;

    /// Pushes an item with the given priority
    fn push(&mut self, priority: P, item: V);

    /// Lowers the priority of the live entry for `item`
    fn decrease_priority(&mut self, item: &V, priority: P) -> Result<()>;

    /// Removes and returns the entry with the smallest priority
    fn pop_min(&mut self) -> Option<(P, V)>;

    /// Short name used in logs and benchmark reports
    fn name(&self) -> &'static str;

    /// Decreases the live entry for `item`, or pushes a fresh one if there is none
    fn push_or_decrease(&mut self, item: V, priority: P) -> Result<()> {
        if self.contains(&item) {
            self.decrease_priority(&item, priority)
        } else {
            self.push(priority, item);
            Ok(())
        }
    }
}

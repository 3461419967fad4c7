//! Non-owning registry of shared values.
//!
//! [`WeakRegistry`] remembers values handed out by a factory without keeping
//! them alive. Entries whose value has been dropped are skipped on iteration
//! and removed by [`WeakRegistry::prune`], which [`WeakRegistry::register`]
//! also runs whenever the list has doubled since the last prune.

use std::fmt;
use std::rc::{Rc, Weak};

const MIN_PRUNE_LEN: usize = 8;

/// An ordered list of weak references.
///
/// Registration order is preserved, so [`WeakRegistry::live`] yields values
/// in the order they were created.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use factory_patterns::WeakRegistry;
///
/// let mut registry = WeakRegistry::new();
/// let kept = Rc::new(1);
/// let dropped = Rc::new(2);
/// registry.register(&kept);
/// registry.register(&dropped);
/// drop(dropped);
///
/// let live: Vec<i32> = registry.live().map(|v| *v).collect();
/// assert_eq!(live, vec![1]);
/// assert_eq!(registry.prune(), 1);
/// ```
pub struct WeakRegistry<T: ?Sized> {
    entries: Vec<Weak<T>>,
    prune_at: usize,
}

impl<T: ?Sized> WeakRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            prune_at: MIN_PRUNE_LEN,
        }
    }

    /// Records a weak reference to `value`.
    ///
    /// Dead entries are pruned once the list reaches twice its size after
    /// the previous prune, so the registry stays proportional to the number
    /// of live values.
    pub fn register(&mut self, value: &Rc<T>) {
        self.entries.push(Rc::downgrade(value));
        if self.entries.len() >= self.prune_at {
            self.prune();
        }
    }

    /// Iterates over the values that are still alive, in registration order.
    ///
    /// Each yielded `Rc` holds the value alive only while the caller keeps it.
    pub fn live(&self) -> impl Iterator<Item = Rc<T>> + '_ {
        self.entries.iter().filter_map(Weak::upgrade)
    }

    pub fn live_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Number of entries, dead ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops entries whose value is gone, returning how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.strong_count() > 0);
        let removed = before - self.entries.len();
        self.prune_at = (self.entries.len() * 2).max(MIN_PRUNE_LEN);
        if removed > 0 {
            log::trace!("pruned {removed} dead registry entries");
        }
        removed
    }
}

impl<T: ?Sized> Default for WeakRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for WeakRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRegistry")
            .field("len", &self.len())
            .field("live", &self.live_count())
            .finish()
    }
}

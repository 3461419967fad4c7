//! Shared mutable cell.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A cloneable handle to a shared, replaceable value.
///
/// Every clone points at the same cell, so a [`Slot::set`] through any handle
/// is seen by all of them on their next read. Reads go through [`Slot::get`],
/// which never holds the cell borrowed after it returns, so a `set` from
/// elsewhere cannot collide with a reader.
///
/// # Example
///
/// ```rust
/// use factory_patterns::Slot;
///
/// let slot = Slot::new("before");
/// let other = slot.clone();
/// slot.set("after");
/// assert_eq!(other.get(), "after");
/// ```
pub struct Slot<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    /// Replaces the held value, returning the previous one.
    pub fn set(&self, value: T) -> T {
        self.cell.replace(value)
    }

    pub fn downgrade(&self) -> WeakSlot<T> {
        WeakSlot {
            cell: Rc::downgrade(&self.cell),
        }
    }

    /// Returns true if both handles share one cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    pub(crate) fn cell(&self) -> &Rc<RefCell<T>> {
        &self.cell
    }

    pub(crate) fn from_cell(cell: Rc<RefCell<T>>) -> Self {
        Self { cell }
    }
}

impl<T: Clone> Slot<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&*self.cell.borrow()).finish()
    }
}

/// Non-owning counterpart of [`Slot`].
pub struct WeakSlot<T> {
    cell: Weak<RefCell<T>>,
}

impl<T> WeakSlot<T> {
    /// Returns the slot if some handle still owns it.
    pub fn upgrade(&self) -> Option<Slot<T>> {
        self.cell.upgrade().map(Slot::from_cell)
    }
}

impl<T> Clone for WeakSlot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Weak::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for WeakSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSlot")
            .field("alive", &(self.cell.strong_count() > 0))
            .finish()
    }
}

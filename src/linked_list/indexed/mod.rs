//! # Index-Linked Circular List
//!
//! The same circular list, but records live in a caller-owned slice and link
//! to each other by index. There is no pointer arithmetic and no `unsafe`:
//! an out-of-range index panics through slice indexing, and a record linked
//! twice or removed while detached trips a debug assertion.
//!
//! Every operation borrows the slice for its own duration only, so one slice
//! can back any number of lists as long as each record is in at most one.

pub use intrusive_dll_derive::IndexLinked;

/// Marks a link that is not part of any list.
pub const DETACHED: usize = usize::MAX;

/// A pair of neighbor indices embedded in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLink {
    next: usize,
    prev: usize,
}

impl IndexLink {
    /// Creates a detached link.
    pub const fn new() -> Self {
        IndexLink {
            next: DETACHED,
            prev: DETACHED,
        }
    }

    /// Detaches the link. Only call this on a link that is not in a list.
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Returns `true` if the link carries live neighbor indices.
    #[inline]
    pub fn is_linked(&self) -> bool {
        !self.is_detached()
    }

    /// Returns `true` if the link is detached.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.next == DETACHED && self.prev == DETACHED
    }
}

impl Default for IndexLink {
    fn default() -> Self {
        Self::new()
    }
}

/// A record that embeds exactly one [`IndexLink`].
pub trait IndexLinked {
    /// Get the link embedded in this record
    fn index_link(&self) -> &IndexLink;

    /// Get a mutable reference to the link embedded in this record
    fn index_link_mut(&mut self) -> &mut IndexLink;
}

/// The root of an index-linked circular list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexList {
    head: Option<usize>,
}

impl IndexList {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        IndexList { head: None }
    }

    /// Resets to the empty list; former members keep live links.
    pub fn init(&mut self) {
        self.head = None;
    }

    /// Check if the list has no members
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get the head index
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Get the tail index, the head's predecessor
    pub fn tail<R: IndexLinked>(&self, slots: &[R]) -> Option<usize> {
        self.head.map(|head| prev(slots, head))
    }

    /// Pushes `index` in front of the head and makes it the head.
    pub fn push_head<R: IndexLinked>(&mut self, slots: &mut [R], index: usize) {
        self.push_tail(slots, index);
        self.head = Some(index);
    }

    /// Pushes `index` after the tail.
    pub fn push_tail<R: IndexLinked>(&mut self, slots: &mut [R], index: usize) {
        match self.head {
            Some(head) => weave_before(slots, head, index),
            None => {
                let link = slots[index].index_link_mut();
                debug_assert!(link.is_detached(), "record is already linked into a list");
                link.next = index;
                link.prev = index;
                self.head = Some(index);
            }
        }
    }

    /// Removes and returns the head index, detaching its link.
    pub fn pop_head<R: IndexLinked>(&mut self, slots: &mut [R]) -> Option<usize> {
        let head = self.head?;
        self.head = unweave(slots, head);
        Some(head)
    }

    /// Removes and returns the tail index, detaching its link.
    pub fn pop_tail<R: IndexLinked>(&mut self, slots: &mut [R]) -> Option<usize> {
        let tail = self.tail(slots)?;
        Some(self.remove(slots, tail))
    }

    /// Inserts `new` right before `anchor`; before the head, `new` becomes the head.
    pub fn insert_before<R: IndexLinked>(&mut self, slots: &mut [R], anchor: usize, new: usize) {
        if self.head == Some(anchor) {
            self.push_head(slots, new);
        } else {
            splice_before(slots, anchor, new);
        }
    }

    /// Removes `index` from this list, advancing the head if it was the head.
    pub fn remove<R: IndexLinked>(&mut self, slots: &mut [R], index: usize) -> usize {
        let successor = unweave(slots, index);
        if self.head == Some(index) {
            self.head = successor;
        }
        index
    }

    /// Iterates member indices from head to tail.
    pub fn iter<'a, R: IndexLinked>(&self, slots: &'a [R]) -> IndexIter<'a, R> {
        IndexIter {
            slots,
            current: self.head,
            head: self.head,
        }
    }

    /// Count the members by walking the chain once.
    pub fn count<R: IndexLinked>(&self, slots: &[R]) -> usize {
        self.iter(slots).count()
    }
}

/// The index after `index`; a lone record is its own successor.
pub fn next<R: IndexLinked>(slots: &[R], index: usize) -> usize {
    let link = slots[index].index_link();
    debug_assert!(link.is_linked(), "record is not linked into any list");
    link.next
}

/// The index before `index`; a lone record is its own predecessor.
pub fn prev<R: IndexLinked>(slots: &[R], index: usize) -> usize {
    let link = slots[index].index_link();
    debug_assert!(link.is_linked(), "record is not linked into any list");
    link.prev
}

/// Inserts `new` right after `anchor`. No head moves.
pub fn insert_after<R: IndexLinked>(slots: &mut [R], anchor: usize, new: usize) {
    let right = next(slots, anchor);
    weave_before(slots, right, new);
}

/// Inserts `new` right before `anchor` without touching any head.
pub fn splice_before<R: IndexLinked>(slots: &mut [R], anchor: usize, new: usize) {
    weave_before(slots, anchor, new);
}

/// Unlinks `index` from its chain without touching any head.
pub fn unlink<R: IndexLinked>(slots: &mut [R], index: usize) -> usize {
    unweave(slots, index);
    index
}

fn weave_before<R: IndexLinked>(slots: &mut [R], at: usize, new: usize) {
    debug_assert!(
        slots[new].index_link().is_detached(),
        "record is already linked into a list"
    );
    let left = prev(slots, at);
    {
        let link = slots[new].index_link_mut();
        link.next = at;
        link.prev = left;
    }
    slots[left].index_link_mut().next = new;
    slots[at].index_link_mut().prev = new;
}

fn unweave<R: IndexLinked>(slots: &mut [R], index: usize) -> Option<usize> {
    let right = next(slots, index);
    let successor = if right == index {
        None
    } else {
        let left = slots[index].index_link().prev;
        slots[left].index_link_mut().next = right;
        slots[right].index_link_mut().prev = left;
        Some(right)
    };
    slots[index].index_link_mut().init();
    successor
}

/// An iterator over member indices, once around from the head.
pub struct IndexIter<'a, R: IndexLinked> {
    slots: &'a [R],
    current: Option<usize>,
    head: Option<usize>,
}

impl<'a, R> Iterator for IndexIter<'a, R>
where
    R: IndexLinked,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let following = next(self.slots, current);
        self.current = if Some(following) == self.head {
            None
        } else {
            Some(following)
        };
        Some(current)
    }
}

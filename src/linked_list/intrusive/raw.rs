//! Offset-based list operations.
//!
//! Records are opaque here: every operation takes the byte offset of the
//! record's [`Link`] and converts between records and links with
//! [`record_from_link`] and [`link_from_record`]. The typed
//! [`CircularList`](super::list::CircularList) is a thin layer on top.
//!
//! Operations that need the list's head cell are methods on [`RawList`].
//! Operations that only touch neighbors are free functions; they never update
//! a head cell, so using them on the head element of a rooted list leaves that
//! root pointing wherever it pointed before.

use core::ptr::NonNull;

use super::link::{link_from_record, record_from_link, Link};

/// The root of a circular doubly linked list: a pointer to the head link.
#[derive(Debug, Default)]
pub struct RawList {
    head: Option<NonNull<Link>>,
}

impl RawList {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        RawList { head: None }
    }

    /// Resets the root to the empty list without touching any member.
    ///
    /// Former members keep live links and must be re-poisoned with
    /// [`Link::init`] before they are pushed again.
    pub fn init(&mut self) {
        self.head = None;
    }

    /// Returns `true` if the root holds no head link.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The link of the head record, if any.
    pub fn head_link(&self) -> Option<NonNull<Link>> {
        self.head
    }

    /// Returns the head record.
    ///
    /// # Safety
    ///
    /// `offset` must be the link offset of every record in this list.
    pub unsafe fn head<R>(&self, offset: usize) -> Option<NonNull<R>> {
        self.head.map(|head| unsafe { record_from_link(offset, head) })
    }

    /// Returns the tail record, i.e. `head.prev`.
    ///
    /// # Safety
    ///
    /// `offset` must be the link offset of every record in this list.
    pub unsafe fn tail<R>(&self, offset: usize) -> Option<NonNull<R>> {
        self.head
            .map(|head| unsafe { record_from_link(offset, head.as_ref().prev()) })
    }

    /// Pushes `record` in front of the current head and makes it the head.
    ///
    /// # Safety
    ///
    /// `record` must be valid, carry a detached link at `offset`, and stay
    /// valid and unmoved for as long as it is linked.
    pub unsafe fn push_head<R>(&mut self, offset: usize, record: NonNull<R>) {
        unsafe {
            self.push_tail(offset, record);
            self.head = Some(link_from_record(offset, record));
        }
    }

    /// Pushes `record` after the current tail.
    ///
    /// # Safety
    ///
    /// Same as [`RawList::push_head`].
    pub unsafe fn push_tail<R>(&mut self, offset: usize, record: NonNull<R>) {
        unsafe {
            let new = link_from_record(offset, record);
            match self.head {
                Some(head) => Link::weave_before(head, new),
                None => {
                    let new_ref = new.as_ref();
                    debug_assert!(new_ref.is_detached(), "record is already linked into a list");
                    new_ref.set_next(new);
                    new_ref.set_prev(new);
                    self.head = Some(new);
                }
            }
        }
    }

    /// Removes and returns the head record, poisoning its link.
    ///
    /// # Safety
    ///
    /// `offset` must be the link offset of every record in this list.
    pub unsafe fn pop_head<R>(&mut self, offset: usize) -> Option<NonNull<R>> {
        let head = self.head?;
        unsafe {
            self.head = Link::unweave(head);
            Some(record_from_link(offset, head))
        }
    }

    /// Removes and returns the tail record, poisoning its link.
    ///
    /// # Safety
    ///
    /// `offset` must be the link offset of every record in this list.
    pub unsafe fn pop_tail<R>(&mut self, offset: usize) -> Option<NonNull<R>> {
        unsafe {
            let tail = self.tail::<R>(offset)?;
            Some(self.remove(offset, tail))
        }
    }

    /// Inserts `new` right before `anchor`.
    ///
    /// If `anchor` is the head, `new` becomes the head.
    ///
    /// # Safety
    ///
    /// `anchor` must be a member of this list and `new` must satisfy the
    /// contract of [`RawList::push_head`].
    pub unsafe fn insert_before<R>(&mut self, offset: usize, anchor: NonNull<R>, new: NonNull<R>) {
        unsafe {
            if self.head == Some(link_from_record(offset, anchor)) {
                self.push_head(offset, new);
            } else {
                splice_before(offset, anchor, new);
            }
        }
    }

    /// Removes `record` from this list, poisoning its link.
    ///
    /// Removing the head advances the head to its successor.
    ///
    /// # Safety
    ///
    /// `record` must be a member of this list.
    pub unsafe fn remove<R>(&mut self, offset: usize, record: NonNull<R>) -> NonNull<R> {
        unsafe {
            let link = link_from_record(offset, record);
            if self.head == Some(link) {
                self.head = Link::unweave(link);
            } else {
                Link::unweave(link);
            }
            record
        }
    }
}

unsafe impl Send for RawList {}
unsafe impl Sync for RawList {}

/// Returns the record after `record`. A lone record is its own successor.
///
/// # Safety
///
/// `record` must be a linked record whose link lives at `offset`.
pub unsafe fn next<R>(offset: usize, record: NonNull<R>) -> NonNull<R> {
    unsafe {
        let link = link_from_record(offset, record).as_ref();
        debug_assert!(link.is_linked(), "record is not linked into any list");
        record_from_link(offset, link.next())
    }
}

/// Returns the record before `record`. A lone record is its own predecessor.
///
/// # Safety
///
/// `record` must be a linked record whose link lives at `offset`.
pub unsafe fn prev<R>(offset: usize, record: NonNull<R>) -> NonNull<R> {
    unsafe {
        let link = link_from_record(offset, record).as_ref();
        debug_assert!(link.is_linked(), "record is not linked into any list");
        record_from_link(offset, link.prev())
    }
}

/// Inserts `new` right after `anchor`.
///
/// No head cell is involved: inserting after the tail makes `new` the tail
/// while the head stays where it is.
///
/// # Safety
///
/// `anchor` must be linked and `new` must satisfy the contract of
/// [`RawList::push_head`].
pub unsafe fn insert_after<R>(offset: usize, anchor: NonNull<R>, new: NonNull<R>) {
    unsafe { splice_before(offset, next(offset, anchor), new) }
}

/// Inserts `new` right before `anchor` without updating any head cell.
///
/// When `anchor` is the head of a rooted list this is the same as inserting
/// after the tail.
///
/// # Safety
///
/// `anchor` must be linked and `new` must satisfy the contract of
/// [`RawList::push_head`].
pub unsafe fn splice_before<R>(offset: usize, anchor: NonNull<R>, new: NonNull<R>) {
    unsafe {
        Link::weave_before(
            link_from_record(offset, anchor),
            link_from_record(offset, new),
        )
    }
}

/// Unlinks `record` from whatever chain it is in and poisons its link.
///
/// No head cell is updated. If `record` is the head of a rooted list, or its
/// only member, that root is left dangling; use [`RawList::remove`] instead.
///
/// # Safety
///
/// `record` must be a linked record whose link lives at `offset`.
pub unsafe fn unlink<R>(offset: usize, record: NonNull<R>) -> NonNull<R> {
    unsafe {
        Link::unweave(link_from_record(offset, record));
    }
    record
}

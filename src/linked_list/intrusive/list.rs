use core::{marker::PhantomData, ptr::NonNull};

use super::{iter::Iter, raw::{self, RawList}, traits::Linked};

/// A generic intrusive circular doubly linked list.
///
/// The list only stores a pointer to the head record; the tail is reached
/// through the head's `prev` link. Records are never allocated, moved or
/// dropped by the list.
pub struct CircularList<T: Linked> {
    raw: RawList,
    _marker: PhantomData<NonNull<T>>,
}

impl<T> CircularList<T>
where
    T: Linked,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        CircularList {
            raw: RawList::new(),
            _marker: PhantomData,
        }
    }

    /// Forgets every member and resets to the empty list.
    ///
    /// Only the root is touched. Former members still carry live links and
    /// report [`Linked::is_linked`] as `true`; call
    /// [`Link::init`](super::link::Link::init) on each before pushing it
    /// again, or pushing it trips the double-insert check. Prefer draining
    /// with [`CircularList::pop_head`], which poisons every link.
    pub fn init(&mut self) {
        self.raw.init();
    }

    /// Check if the list has no members
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Get the head record
    pub fn head(&self) -> Option<NonNull<T>> {
        unsafe { self.raw.head(T::LINK_OFFSET) }
    }

    /// Get the tail record, the head's predecessor
    pub fn tail(&self) -> Option<NonNull<T>> {
        unsafe { self.raw.tail(T::LINK_OFFSET) }
    }

    /// Push a record to the front of the list
    ///
    /// # Safety
    ///
    /// `record` must be valid, not linked into any list, and must stay valid
    /// and unmoved until it is removed again.
    pub unsafe fn push_head(&mut self, record: NonNull<T>) {
        unsafe { self.raw.push_head(T::LINK_OFFSET, record) }
    }

    /// Push a record to the back of the list
    ///
    /// # Safety
    ///
    /// Same as [`CircularList::push_head`].
    pub unsafe fn push_tail(&mut self, record: NonNull<T>) {
        unsafe { self.raw.push_tail(T::LINK_OFFSET, record) }
    }

    /// Pop the head record, poisoning its link
    pub fn pop_head(&mut self) -> Option<NonNull<T>> {
        unsafe { self.raw.pop_head(T::LINK_OFFSET) }
    }

    /// Pop the tail record, poisoning its link
    pub fn pop_tail(&mut self) -> Option<NonNull<T>> {
        unsafe { self.raw.pop_tail(T::LINK_OFFSET) }
    }

    /// Insert `new` right before `anchor`, moving the head if `anchor` is the head
    ///
    /// # Safety
    ///
    /// `anchor` must be a member of this list; `new` must satisfy the
    /// contract of [`CircularList::push_head`].
    pub unsafe fn insert_before(&mut self, anchor: NonNull<T>, new: NonNull<T>) {
        unsafe { self.raw.insert_before(T::LINK_OFFSET, anchor, new) }
    }

    /// Remove `record` from this list, advancing the head if needed
    ///
    /// # Safety
    ///
    /// `record` must be a member of this list.
    pub unsafe fn remove(&mut self, record: NonNull<T>) -> NonNull<T> {
        unsafe { self.raw.remove(T::LINK_OFFSET, record) }
    }

    /// The record after `record`; a lone record is its own successor.
    ///
    /// # Safety
    ///
    /// `record` must be linked into a list.
    pub unsafe fn next(record: NonNull<T>) -> NonNull<T> {
        unsafe { raw::next(T::LINK_OFFSET, record) }
    }

    /// The record before `record`; a lone record is its own predecessor.
    ///
    /// # Safety
    ///
    /// `record` must be linked into a list.
    pub unsafe fn prev(record: NonNull<T>) -> NonNull<T> {
        unsafe { raw::prev(T::LINK_OFFSET, record) }
    }

    /// Insert `new` right after `anchor`. The head never moves.
    ///
    /// # Safety
    ///
    /// `anchor` must be linked; `new` must satisfy the contract of
    /// [`CircularList::push_head`].
    pub unsafe fn insert_after(anchor: NonNull<T>, new: NonNull<T>) {
        unsafe { raw::insert_after(T::LINK_OFFSET, anchor, new) }
    }

    /// Insert `new` right before `anchor` without touching any head.
    ///
    /// Before the head of a list this lands `new` at the tail.
    ///
    /// # Safety
    ///
    /// Same as [`CircularList::insert_after`].
    pub unsafe fn splice_before(anchor: NonNull<T>, new: NonNull<T>) {
        unsafe { raw::splice_before(T::LINK_OFFSET, anchor, new) }
    }

    /// Unlink `record` from its chain without touching any head.
    ///
    /// # Safety
    ///
    /// `record` must be linked, and must not be the head of a list whose
    /// root is used again afterwards.
    pub unsafe fn unlink(record: NonNull<T>) -> NonNull<T> {
        unsafe { raw::unlink(T::LINK_OFFSET, record) }
    }

    /// Get an iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw.head_link())
    }

    /// Count the members by walking the chain once.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Check whether `record` is a member of this list.
    pub fn contains(&self, record: NonNull<T>) -> bool {
        self.iter().any(|member| NonNull::from(member) == record)
    }
}

impl<T> Default for CircularList<T>
where
    T: Linked,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for CircularList<T>
where
    T: Linked,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CircularList")
            .field("head", &self.head())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T>
where
    T: Linked,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<T: Linked + Send> Send for CircularList<T> {}
unsafe impl<T: Linked + Sync> Sync for CircularList<T> {}

use core::{cell::UnsafeCell, ptr::NonNull};

/// Address written into both fields of a link that is not in any list.
///
/// Following a poisoned pointer faults on every mainstream target instead of
/// silently walking into unrelated memory.
pub const POISON_ADDR: usize = 0xdead_beef;

const POISON: NonNull<Link> = unsafe { NonNull::new_unchecked(POISON_ADDR as *mut Link) };

/// A link in a circular doubly linked list.
/// This struct should be embedded in the struct that you want to store in the list.
///
/// In a list of one, both `next` and `prev` point back at the link itself.
pub struct Link {
    next: UnsafeCell<NonNull<Link>>,
    prev: UnsafeCell<NonNull<Link>>,
}

impl Link {
    /// Creates a poisoned link that is not part of any list.
    pub const fn new() -> Self {
        Link {
            next: UnsafeCell::new(POISON),
            prev: UnsafeCell::new(POISON),
        }
    }

    /// Poisons the link, marking it as not part of any list.
    ///
    /// Only call this on a link that is not currently linked; re-initializing
    /// a member corrupts its list.
    pub fn init(&mut self) {
        *self.next.get_mut() = POISON;
        *self.prev.get_mut() = POISON;
    }

    /// Returns `true` if the link carries live neighbor pointers.
    #[inline]
    pub fn is_linked(&self) -> bool {
        !self.is_detached()
    }

    /// Returns `true` if the link is poisoned.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.next() == POISON && self.prev() == POISON
    }

    #[inline]
    pub(crate) fn next(&self) -> NonNull<Link> {
        unsafe { *self.next.get() }
    }

    #[inline]
    pub(crate) fn prev(&self) -> NonNull<Link> {
        unsafe { *self.prev.get() }
    }

    #[inline]
    pub(crate) fn set_next(&self, next: NonNull<Link>) {
        unsafe { *self.next.get() = next };
    }

    #[inline]
    pub(crate) fn set_prev(&self, prev: NonNull<Link>) {
        unsafe { *self.prev.get() = prev };
    }

    #[inline]
    pub(crate) fn poison(&self) {
        self.set_next(POISON);
        self.set_prev(POISON);
    }

    /// Weaves `new` into the chain right before `at`.
    ///
    /// # Safety
    ///
    /// `at` must be a live member of a list and `new` must be a valid,
    /// detached link.
    pub(crate) unsafe fn weave_before(at: NonNull<Link>, new: NonNull<Link>) {
        unsafe {
            let at_ref = at.as_ref();
            let new_ref = new.as_ref();
            debug_assert!(at_ref.is_linked(), "record is not linked into any list");
            debug_assert!(new_ref.is_detached(), "record is already linked into a list");

            let left = at_ref.prev();
            new_ref.set_next(at);
            new_ref.set_prev(left);
            left.as_ref().set_next(new);
            at_ref.set_prev(new);
        }
    }

    /// Closes the gap around `link`, then poisons it.
    ///
    /// Returns the former successor, or `None` if `link` was alone.
    ///
    /// # Safety
    ///
    /// `link` must be a live member of a list.
    pub(crate) unsafe fn unweave(link: NonNull<Link>) -> Option<NonNull<Link>> {
        unsafe {
            let link_ref = link.as_ref();
            debug_assert!(link_ref.is_linked(), "record is not linked into any list");

            let right = link_ref.next();
            let successor = if right == link {
                None
            } else {
                let left = link_ref.prev();
                left.as_ref().set_next(right);
                right.as_ref().set_prev(left);
                Some(right)
            };
            link_ref.poison();
            successor
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Link {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_detached() {
            f.write_str("Link(detached)")
        } else {
            f.debug_struct("Link")
                .field("next", &self.next())
                .field("prev", &self.prev())
                .finish()
        }
    }
}

unsafe impl Send for Link {}
unsafe impl Sync for Link {}

/// Returns the record whose link, `offset` bytes from its start, is `link`.
///
/// # Safety
///
/// `link` must be embedded in a record of type `R` at exactly `offset` bytes.
#[inline]
pub unsafe fn record_from_link<R>(offset: usize, link: NonNull<Link>) -> NonNull<R> {
    unsafe { link.byte_sub(offset).cast() }
}

/// Returns the link embedded `offset` bytes into `record`.
///
/// # Safety
///
/// `record` must point to a record whose link lives at exactly `offset` bytes.
#[inline]
pub unsafe fn link_from_record<R>(offset: usize, record: NonNull<R>) -> NonNull<Link> {
    unsafe { record.byte_add(offset).cast() }
}

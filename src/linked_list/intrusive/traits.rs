use core::ptr::NonNull;

use super::link::{link_from_record, record_from_link, Link};

/// A record type that embeds exactly one [`Link`].
///
/// The easiest way to implement this trait is to use `derive`:
///
/// ```
/// use intrusive_dll::linked_list::intrusive::{link::Link, traits::Linked};
///
/// #[derive(Linked)]
/// struct Waiter {
///     tid: u32,
///     link: Link,
/// }
///
/// assert_eq!(Waiter::LINK_OFFSET, core::mem::offset_of!(Waiter, link));
/// ```
///
/// The derive only accepts this crate's [`Link`]; a different type that is
/// also named `Link` does not compile:
///
/// ```compile_fail
/// use intrusive_dll::linked_list::intrusive::traits::Linked;
///
/// mod other {
///     pub struct Link(pub u8);
/// }
///
/// #[derive(Linked)]
/// struct Bogus {
///     link: other::Link,
/// }
/// ```
///
/// # Safety
///
/// `LINK_OFFSET` must be the byte offset of a `Link` field inside `Self`.
pub unsafe trait Linked: Sized {
    /// Byte distance from the start of the record to its link.
    const LINK_OFFSET: usize;

    /// Get the link embedded in this record
    #[inline]
    fn link(&self) -> &Link {
        unsafe { link_from_record(Self::LINK_OFFSET, NonNull::from(self)).as_ref() }
    }

    /// Check whether this record is currently a member of some list
    #[inline]
    fn is_linked(&self) -> bool {
        self.link().is_linked()
    }

    /// Get the record owning `link`
    ///
    /// # Safety
    ///
    /// `link` must be embedded in a record of type `Self`.
    #[inline]
    unsafe fn from_link(link: NonNull<Link>) -> NonNull<Self> {
        unsafe { record_from_link(Self::LINK_OFFSET, link) }
    }
}

pub use intrusive_dll_derive::Linked;

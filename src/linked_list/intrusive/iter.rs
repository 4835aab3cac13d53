use core::{marker::PhantomData, ptr::NonNull};

use super::{link::Link, traits::Linked};

/// An iterator over a circular list, once around from head to tail.
///
/// Iterating from the back starts at the tail and walks `prev` links. The two
/// ends meet in the middle and never yield a record twice.
pub struct Iter<'a, T: Linked> {
    front: Option<NonNull<Link>>,
    back: Option<NonNull<Link>>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T>
where
    T: Linked,
{
    pub(crate) fn new(head: Option<NonNull<Link>>) -> Self {
        Self {
            front: head,
            back: head.map(|head| unsafe { head.as_ref().prev() }),
            _marker: PhantomData,
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: Linked,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.front?;
        if Some(current) == self.back {
            self.finish();
        } else {
            self.front = Some(unsafe { current.as_ref().next() });
        }
        Some(unsafe { T::from_link(current).as_ref() })
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T>
where
    T: Linked,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let current = self.back?;
        if Some(current) == self.front {
            self.finish();
        } else {
            self.back = Some(unsafe { current.as_ref().prev() });
        }
        Some(unsafe { T::from_link(current).as_ref() })
    }
}

impl<'a, T> core::iter::FusedIterator for Iter<'a, T> where T: Linked {}

unsafe impl<'a, T> Send for Iter<'a, T> where T: Linked + Sync {}
unsafe impl<'a, T> Sync for Iter<'a, T> where T: Linked + Sync {}

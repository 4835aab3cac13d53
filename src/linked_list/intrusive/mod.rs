//! # Intrusive Circular Linked List
//!
//! This module provides an implementation of an intrusive circular doubly
//! linked list.
//!
//! ## Core Components
//!
//! - [`link::Link`]: the `next`/`prev` pair embedded in every record, plus the
//!   offset conversions between a record and its link.
//! - [`raw::RawList`]: the offset-based list; every operation takes the byte
//!   offset of the record's link.
//! - [`traits::Linked`]: records that know their own link offset.
//! - [`list::CircularList`]: a typed list over [`traits::Linked`] records.
//!
//! ## Safety
//!
//! The list never allocates and never locks. The user of this module is
//! responsible for upholding several invariants:
//!
//! - Records must stay valid and must not move while they are linked.
//! - A record must not be in two lists at the same time.
//! - Concurrent access to one list must be serialized by the caller.
//! - Headless operations (`splice_before`, `unlink`) must not be used on the
//!   head of a list whose root is still in use.
//!
//! Detached links are poisoned. In debug builds every operation checks the
//! poison and panics on double insertion or on removing a detached record.

pub mod link;
pub mod raw;
pub mod traits;
pub mod list;
pub mod iter;

#[cfg(test)]
mod tests;

//! Intrusive circular doubly linked lists.
//!
//! In an intrusive linked list, the links are stored directly in the records
//! being linked. A record must have a field that is a `Link`, and the list
//! never allocates a node of its own.
//!
//! Two flavors are provided: [`intrusive`] links records by pointer and
//! recovers a record from its link through a fixed byte offset, while
//! [`indexed`] links records stored in a slice by index.
//!
//! # Examples
//!
//! ```
//! use intrusive_dll::linked_list::intrusive::{
//!     link::Link,
//!     list::CircularList,
//!     traits::Linked,
//! };
//! use core::ptr::NonNull;
//!
//! #[derive(Linked)]
//! struct Task {
//!     id: u32,
//!     link: Link,
//! }
//!
//! let task1 = Task { id: 1, link: Link::new() };
//! let task2 = Task { id: 2, link: Link::new() };
//! let task3 = Task { id: 3, link: Link::new() };
//!
//! let mut queue = CircularList::<Task>::new();
//! unsafe {
//!     queue.push_tail(NonNull::from(&task1));
//!     queue.push_tail(NonNull::from(&task2));
//!     queue.push_head(NonNull::from(&task3));
//! }
//!
//! let ids: Vec<u32> = queue.iter().map(|task| task.id).collect();
//! assert_eq!(ids, vec![3, 1, 2]);
//!
//! while let Some(task) = queue.pop_head() {
//!     assert!(!unsafe { task.as_ref() }.is_linked());
//! }
//! assert!(queue.is_empty());
//! ```
pub mod intrusive;
pub mod indexed;

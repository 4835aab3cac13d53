extern crate std;

use std::vec::Vec;

use core::ptr::NonNull;

use crate::linked_list::intrusive::{link::Link, list::CircularList, traits::Linked};


#[derive(Linked)]
#[linked(crate_path = "crate")]
struct Item {
    value: i32,
    link: Link,
}

impl Item {
    fn new(value: i32) -> Self {
        Self {
            value,
            link: Link::new(),
        }
    }
}

/// Walks the chain both ways from the head and checks it closes after
/// exactly `expected.len()` steps, visiting `expected` in order.
fn assert_chain(list: &CircularList<Item>, expected: &[i32]) {
    let Some(head) = list.head() else {
        assert!(expected.is_empty(), "list is empty, expected {:?}", expected);
        return;
    };

    let mut forward = Vec::new();
    let mut current = head;
    for _ in 0..expected.len() {
        forward.push(unsafe { current.as_ref().value });
        current = unsafe { CircularList::next(current) };
    }
    assert_eq!(forward, expected);
    assert_eq!(current, head, "next chain does not close after {} steps", expected.len());

    let mut backward = Vec::new();
    for _ in 0..expected.len() {
        current = unsafe { CircularList::prev(current) };
        backward.push(unsafe { current.as_ref().value });
    }
    backward.reverse();
    assert_eq!(backward, expected);
    assert_eq!(current, head, "prev chain does not close after {} steps", expected.len());
}

fn values(list: &CircularList<Item>) -> Vec<i32> {
    list.iter().map(|item| item.value).collect()
}

fn ptr(item: &Item) -> NonNull<Item> {
    NonNull::from(item)
}

#![no_std]
#![doc = "Intrusive circular doubly linked lists that never allocate."]

pub mod linked_list;

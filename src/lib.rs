//! Intrusive queue primitives with external storage.
//!
//! This crate provides the two structures kernel-style schedulers are
//! built from: a sentinel-free circular list (ready queues, blocked lists,
//! wait lists) and a binary min-heap with per-record position tracking
//! (timer queues, priority wait structures). Records carry their link
//! fields inline; the structures coordinate handles and never own data.
//!
//! # Design Philosophy
//!
//! Traditional collections own their data:
//!
//! ```text
//! LinkedList<T>   - owns nodes, no O(1) removal by reference
//! BinaryHeap<T>   - owns values, no removal except at the root
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Storage (Arena)  - owns records, provides stable handles
//! ring / Heap      - coordinate handles, don't own data
//! ```
//!
//! Benefits:
//! - **O(1) splice/unlink anywhere**: each record embeds its own links
//! - **O(log n) heap removal by handle**: each record knows its position
//! - **Zero allocation on the hot path**: pre-allocate storage up front
//! - **Typed record recovery**: a handle plus `storage.get` replaces the
//!   offset-arithmetic "containing record" cast of pointer-based
//!   intrusive lists
//!
//! # Quick Start
//!
//! ```
//! use cinder_collections::{ring, Arena, Handle, Heap, HeapId, HeapNode, RingNode, Storage};
//! use std::cmp::Ordering;
//!
//! // A thread control block embedding both kinds of links
//! #[derive(Debug)]
//! struct Tcb {
//!     deadline: u64,
//!     next: u32,
//!     prev: u32,
//!     pos: u32,
//!     owner: Option<HeapId>,
//! }
//!
//! impl Tcb {
//!     fn new(deadline: u64) -> Self {
//!         Self { deadline, next: u32::NONE, prev: u32::NONE, pos: u32::NONE, owner: None }
//!     }
//! }
//!
//! impl RingNode<u32> for Tcb {
//!     fn next(&self) -> u32 { self.next }
//!     fn prev(&self) -> u32 { self.prev }
//!     fn set_next(&mut self, handle: u32) { self.next = handle; }
//!     fn set_prev(&mut self, handle: u32) { self.prev = handle; }
//! }
//!
//! impl HeapNode<u32> for Tcb {
//!     fn pos(&self) -> u32 { self.pos }
//!     fn set_pos(&mut self, pos: u32) { self.pos = pos; }
//!     fn owner(&self) -> Option<HeapId> { self.owner }
//!     fn set_owner(&mut self, owner: Option<HeapId>) { self.owner = owner; }
//! }
//!
//! impl Ord for Tcb {
//!     fn cmp(&self, other: &Self) -> Ordering { self.deadline.cmp(&other.deadline) }
//! }
//! impl PartialOrd for Tcb {
//!     fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
//! }
//! impl PartialEq for Tcb {
//!     fn eq(&self, other: &Self) -> bool { self.deadline == other.deadline }
//! }
//! impl Eq for Tcb {}
//!
//! let mut storage: Arena<Tcb> = Arena::with_capacity(64);
//! let mut timers: Heap<u32> = Heap::with_capacity(64);
//!
//! // A ready queue is just an anchor node
//! let ready = storage.try_insert(Tcb::new(0)).unwrap();
//! ring::init(&mut storage, ready);
//!
//! let t1 = storage.try_insert(Tcb::new(30)).unwrap();
//! let t2 = storage.try_insert(Tcb::new(10)).unwrap();
//!
//! // Enqueue both at the back of the ready queue
//! ring::insert_before(&mut storage, ready, t1);
//! ring::insert_before(&mut storage, ready, t2);
//! assert_eq!(ring::next(&storage, ready), t1);
//!
//! // The same records sit in the timer heap, ordered by deadline
//! timers.push(&mut storage, t1);
//! timers.push(&mut storage, t2);
//! assert_eq!(timers.peek(), Some(t2));
//!
//! // Timeout fires: pull the earliest deadline out of both structures
//! let expired = timers.pop(&mut storage).unwrap();
//! ring::remove(&mut storage, expired);
//! assert_eq!(ring::len(&storage, ready), 1);
//! ```
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a ring or heap must use the same storage instance
//! that holds its records. This is the caller's responsibility (same
//! discipline as the `slab` crate); mixing storages scrambles links.
//!
//! # Concurrency
//!
//! None. Every operation is a handful of field reads and writes on
//! caller-owned state; callers serialize access exactly as they would
//! around any other shared mutable structure.
//!
//! # Feature Flags
//!
//! - `slab` - [`Storage`] impl for `slab::Slab` (growable backing store)

#![warn(missing_docs)]

pub mod handle;
pub mod heap;
pub mod ring;
pub mod storage;

pub use handle::Handle;
pub use heap::{Heap, HeapId, HeapNode};
pub use ring::RingNode;
pub use storage::{Arena, Full, Storage};

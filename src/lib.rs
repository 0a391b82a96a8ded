// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A singly linked last in, first out stack.
//!
//! A [`Stack`][Stack] is a chain of heap allocated nodes. Every node is owned
//! by exactly one link: either the stack's head or the node above it. Nothing
//! is ever shared between two stacks or between two links in the same chain,
//! so there are no cycles and no reference counts. Each node is freed exactly
//! once, when it's popped, erased or dropped along with its stack.
//!
//! # Usage
//!
//! [`Stack::push()`][push] puts a value on top of the stack,
//! [`Stack::pop()`][pop] takes it back off and [`Stack::peek()`][peek] looks at
//! it without removing it. Popping or peeking at an empty stack fails with
//! [`EmptyContainerError`][EmptyContainerError] every time, rather than
//! making up a value.
//!
//! [`Stack::clone()`][Clone] makes a deep copy: every node is freshly
//! allocated, and the copy holds the same values in the same order.
//! [`Clone::clone_from()`][Clone::clone_from] erases the destination first
//! and then copies into it.
//!
//! # Long Stacks
//!
//! Dropping a chain of boxes the naive way recurses once per node, which
//! will overflow the call stack for long enough chains.
//! [`Stack::erase()`][erase], the copy operations and the `Drop`
//! implementation all unlink one node at a time in a loop instead, so a
//! stack of millions of elements is as safe to drop as an empty one.
//!
//! # Thread Safety
//!
//! `Stack` doesn't do any locking. It's `Send` and `Sync` when its contents
//! are, like any other owned collection, and sharing one between threads
//! works through the usual `&`/`&mut` rules or a mutex of your choosing.
//!
//! # Logging
//!
//! The crate emits [`tracing`][tracing] events at the `TRACE` level when a
//! stack is erased or copied, and when `pop()` or `peek()` are called on an
//! empty stack. It never installs a subscriber itself.
//!
//! # Example
//!
//! ```rust
//! # use linkstack::{EmptyContainerError, Stack};
//! let mut stack = Stack::new();
//! stack.push("A");
//! stack.push("B");
//!
//! // Copies don't share anything with the original.
//! let mut copy = stack.clone();
//! assert_eq!(Ok("B"), copy.pop());
//! assert_eq!(2, stack.len());
//!
//! // Last in, first out.
//! assert_eq!(Ok("B"), stack.pop());
//! assert_eq!(Ok("A"), stack.pop());
//! assert_eq!(Err(EmptyContainerError), stack.pop());
//! ```
//!
//! [Stack]: struct.Stack.html
//! [push]: struct.Stack.html#method.push
//! [pop]: struct.Stack.html#method.pop
//! [peek]: struct.Stack.html#method.peek
//! [erase]: struct.Stack.html#method.erase
//! [EmptyContainerError]: struct.EmptyContainerError.html
//! [Clone]: https://doc.rust-lang.org/std/clone/trait.Clone.html
//! [Clone::clone_from]: https://doc.rust-lang.org/std/clone/trait.Clone.html#method.clone_from
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod counter;
mod error;
mod node;
mod stack;
mod types;

pub use self::error::EmptyContainerError;
pub use self::stack::Stack;

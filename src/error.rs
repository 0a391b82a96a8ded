// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// The error returned when an operation needs at least one element but the
/// stack is empty.
///
/// # Examples
///
/// ```rust
/// # use linkstack::{EmptyContainerError, Stack};
/// let mut stack: Stack<u8> = Stack::new();
/// assert_eq!(Err(EmptyContainerError), stack.pop());
/// assert_eq!(Err(EmptyContainerError), stack.peek());
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("operation requires a non-empty stack")]
pub struct EmptyContainerError;

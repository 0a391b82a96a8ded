// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::types::Link;

/// One link in a stack's chain.
///
/// A node exclusively owns the node below it, so dropping a node drops
/// everything it still links to. `Stack` always unlinks `next` before letting
/// a node go, which keeps every drop shallow.
pub(crate) struct Node<A> {
    pub(crate) data: A,
    pub(crate) next: Link<A>,
}

impl<A> Node<A> {
    pub(crate) fn new(data: A) -> Self {
        Self { data, next: None }
    }

    /// Allocate a node on top of `next`, taking ownership of it.
    pub(crate) fn boxed(data: A, next: Link<A>) -> Box<Self> {
        Box::new(Self { data, next })
    }

    pub(crate) fn into_data(self: Box<Self>) -> A {
        debug_assert!(self.next.is_none());
        self.data
    }
}

impl<A> Default for Node<A>
where
    A: Default,
{
    fn default() -> Self {
        Self::new(Default::default())
    }
}

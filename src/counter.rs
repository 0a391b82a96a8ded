// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Element count bookkeeping for a stack.
pub(crate) trait Counter: Default {
    fn inc(&mut self);
    fn dec(&mut self);
    fn count(&self) -> usize;
}

impl Counter for usize {
    #[inline(always)]
    fn inc(&mut self) {
        *self += 1;
    }

    #[inline(always)]
    fn dec(&mut self) {
        debug_assert!(*self > 0, "element count underflow");
        *self -= 1;
    }

    #[inline(always)]
    fn count(&self) -> usize {
        *self
    }
}

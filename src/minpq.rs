/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! The priority queue trait and its implementations.

mod doublemap;
mod heap;
mod optimized;
mod unsorted;

pub use self::doublemap::DoubleMapMinPQ;
pub use self::heap::HeapMinPQ;
pub use self::optimized::OptimizedHeapMinPQ;
pub use self::unsorted::UnsortedArrayMinPQ;

use crate::Result;

/// A min-priority queue of unique items with extrinsic priorities.
///
/// If several items share the minimal priority, it is unspecified which of
/// them is returned by `peek_min` and `remove_min`.
pub trait ExtrinsicMinPQ<T> {
    /// Add an item with the given priority.
    ///
    /// Fails with `Error::DuplicateItem` if the item is already contained.
    fn add(&mut self, item: T, priority: f64) -> Result<()>;

    /// Return `true` iff `item` is contained in the queue.
    fn contains(&self, item: &T) -> bool;

    /// Return the item with the smallest priority.
    ///
    /// Fails with `Error::EmptyQueue` if the queue is empty.
    fn peek_min(&self) -> Result<&T>;

    /// Remove and return the item with the smallest priority.
    ///
    /// Fails with `Error::EmptyQueue` if the queue is empty.
    fn remove_min(&mut self) -> Result<T>;

    /// Change the priority of an item contained in the queue.
    ///
    /// The new priority may be smaller or larger than the old one. Fails with
    /// `Error::ItemNotFound` if the item is not contained.
    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()>;

    /// Return the current priority of `item` or `None` if it is not
    /// contained.
    fn priority(&self, item: &T) -> Option<f64>;

    /// Return the number of items in the queue.
    fn len(&self) -> usize;

    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements from the queue.
    fn clear(&mut self);
}

impl<'a, P, T> ExtrinsicMinPQ<T> for &'a mut P
where
    P: ExtrinsicMinPQ<T>,
{
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        (**self).add(item, priority)
    }

    fn contains(&self, item: &T) -> bool {
        (**self).contains(item)
    }

    fn peek_min(&self) -> Result<&T> {
        (**self).peek_min()
    }

    fn remove_min(&mut self) -> Result<T> {
        (**self).remove_min()
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        (**self).change_priority(item, priority)
    }

    fn priority(&self, item: &T) -> Option<f64> {
        (**self).priority(item)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Priority queue on top of `std::collections::BinaryHeap`.

use crate::minpq::ExtrinsicMinPQ;
use crate::{Error, PriorityNode, Result};

use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by *reversed* priority, so that the max-heap of the
/// standard library returns the minimum.
struct Entry<T>(PriorityNode<T>);

impl<T> Entry<T> {
    fn key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.0.priority())
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Priority queue without item index.
///
/// `add`, `contains` and `change_priority` must search the whole heap and
/// therefore need linear time. A priority change removes the node and
/// pushes a new one.
pub struct HeapMinPQ<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> HeapMinPQ<T> {
    pub fn new() -> Self {
        Default::default()
    }

    fn find(&self, item: &T) -> Option<&PriorityNode<T>>
    where
        T: PartialEq,
    {
        self.heap.iter().map(|e| &e.0).find(|node| node.item() == item)
    }
}

impl<T> Default for HeapMinPQ<T> {
    fn default() -> Self {
        HeapMinPQ {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T> ExtrinsicMinPQ<T> for HeapMinPQ<T>
where
    T: PartialEq + Clone,
{
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::DuplicateItem);
        }
        self.heap.push(Entry(PriorityNode::new(item, priority)));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    fn peek_min(&self) -> Result<&T> {
        self.heap.peek().map(|e| e.0.item()).ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        self.heap.pop().map(|e| e.0.into_item()).ok_or(Error::EmptyQueue)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        if !self.contains(item) {
            return Err(Error::ItemNotFound);
        }
        self.heap.retain(|e| e.0.item() != item);
        self.heap.push(Entry(PriorityNode::new(item.clone(), priority)));
        Ok(())
    }

    fn priority(&self, item: &T) -> Option<f64> {
        self.find(item).map(PriorityNode::priority)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }
}

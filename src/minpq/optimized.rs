// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap with an item index.
//!
//! The heap is stored in a vector in the usual implicit way. Positions on the
//! heap are called *slots* and are 1-based: the root is slot 1 and the
//! children of slot $i$ are the slots $2i$ and $2i+1$, the parent is slot
//! $\lfloor i/2 \rfloor$. Slot 0 is a virtual sentinel, slot $i$ is stored at
//! index $i-1$ of the vector.
//!
//! Additionally, a hash map stores the current slot of each item. This allows
//! changing the priority of an arbitrary item in $O(\log n)$ time. The map is
//! kept synchronized with the heap by `swap`,
//! which is the only operation moving elements on the heap.

use crate::minpq::ExtrinsicMinPQ;
use crate::{Error, PriorityNode, Result};

use log::trace;
use num_traits::{FromPrimitive, ToPrimitive};

use std::collections::HashMap;
use std::hash::Hash;

/// Binary min-heap with $O(\log n)$ priority changes.
///
/// The type parameter `ID` is the integer type used to store slots in the
/// index map. The heap can hold at most as many items as `ID` can represent.
pub struct OptimizedHeapMinPQ<T, ID = u32> {
    /// The heap elements, slot `i` is at position `i - 1`.
    heap: Vec<PriorityNode<T>>,
    /// The slot of each item on the heap.
    index: HashMap<T, ID>,
}

impl<T> OptimizedHeapMinPQ<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap with space for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        OptimizedHeapMinPQ {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }
}

impl<T, ID> Default for OptimizedHeapMinPQ<T, ID> {
    fn default() -> Self {
        OptimizedHeapMinPQ {
            heap: vec![],
            index: HashMap::new(),
        }
    }
}

fn parent(slot: usize) -> usize {
    slot / 2
}

fn left(slot: usize) -> usize {
    2 * slot
}

fn right(slot: usize) -> usize {
    left(slot) + 1
}

impl<T, ID> ExtrinsicMinPQ<T> for OptimizedHeapMinPQ<T, ID>
where
    T: Eq + Hash + Clone,
    ID: FromPrimitive + ToPrimitive + Copy,
{
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        debug_assert!(!priority.is_nan(), "priority must not be NaN");
        if self.index.contains_key(&item) {
            return Err(Error::DuplicateItem);
        }
        let slot = self.heap.len() + 1;
        let id = Self::to_id(slot);
        self.index.insert(item.clone(), id);
        self.heap.push(PriorityNode::new(item, priority));
        self.swim(slot);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T> {
        self.heap.first().map(PriorityNode::item).ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len();
        self.swap(1, last);
        let min = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.index.remove(min.item());
        if !self.heap.is_empty() {
            self.sink(1);
        }
        Ok(min.into_item())
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        debug_assert!(!priority.is_nan(), "priority must not be NaN");
        let slot = match self.index.get(item) {
            Some(id) => Self::from_id(*id),
            None => return Err(Error::ItemNotFound),
        };
        self.heap[slot - 1].set_priority(priority);

        // At most one of both directions can move the element.
        let mut new_slot = self.sink(slot);
        if new_slot == slot {
            new_slot = self.swim(slot);
        }
        trace!("changed priority to {}, moved from slot {} to {}", priority, slot, new_slot);
        Ok(())
    }

    fn priority(&self, item: &T) -> Option<f64> {
        self.index
            .get(item)
            .map(|&id| self.heap[Self::from_id(id) - 1].priority())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }
}

impl<T, ID> OptimizedHeapMinPQ<T, ID>
where
    T: Eq + Hash,
    ID: FromPrimitive + ToPrimitive + Copy,
{
    fn to_id(slot: usize) -> ID {
        ID::from_usize(slot).expect("Heap size exceeds the range of the index type")
    }

    fn from_id(id: ID) -> usize {
        id.to_usize().expect("Invalid slot in heap index")
    }

    /// Return `true` iff `slot` refers to an element on the heap.
    fn is_valid(&self, slot: usize) -> bool {
        1 <= slot && slot <= self.heap.len()
    }

    fn priority_at(&self, slot: usize) -> f64 {
        self.heap[slot - 1].priority()
    }

    /// Exchange the elements at the slots `i` and `j` and update their
    /// entries in the index.
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i - 1, j - 1);
        for &slot in &[i, j] {
            let id = Self::to_id(slot);
            if let Some(pos) = self.index.get_mut(self.heap[slot - 1].item()) {
                *pos = id;
            }
        }
    }

    /// Move the element at `slot` up in the heap until its parent does not
    /// have a larger priority or the root is reached.
    ///
    /// Returns the final slot of the element.
    fn swim(&mut self, slot: usize) -> usize {
        let mut cur = slot;
        while self.is_valid(parent(cur)) {
            let par = parent(cur);
            if self.priority_at(par) <= self.priority_at(cur) {
                break;
            }
            self.swap(cur, par);
            cur = par;
        }
        cur
    }

    /// Return the child of `slot` with the smaller priority or `None` if
    /// `slot` is a leaf.
    fn min_child(&self, slot: usize) -> Option<usize> {
        let (l, r) = (left(slot), right(slot));
        if !self.is_valid(l) {
            None
        } else if self.is_valid(r) && self.priority_at(r) < self.priority_at(l) {
            Some(r)
        } else {
            Some(l)
        }
    }

    /// Move the element at `slot` down in the heap until no child has a
    /// smaller priority.
    ///
    /// Returns the final slot of the element.
    fn sink(&mut self, slot: usize) -> usize {
        let mut cur = slot;
        while let Some(child) = self.min_child(cur) {
            if self.priority_at(child) >= self.priority_at(cur) {
                break;
            }
            self.swap(cur, child);
            cur = child;
        }
        cur
    }
}

#[cfg(test)]
mod tests {
    use super::OptimizedHeapMinPQ;
    use crate::{Error, ExtrinsicMinPQ};
    use num_traits::{FromPrimitive, ToPrimitive};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::hash::Hash;

    /// Verify heap order and consistency of the index.
    fn check<T, ID>(pq: &OptimizedHeapMinPQ<T, ID>)
    where
        T: Eq + Hash + Clone + std::fmt::Debug,
        ID: FromPrimitive + ToPrimitive + Copy,
    {
        let n = pq.heap.len();
        assert_eq!(pq.index.len(), n);
        for slot in 1..=n {
            let item = pq.heap[slot - 1].item();
            let pos = pq.index.get(item).map(|id| id.to_usize().unwrap());
            assert_eq!(pos, Some(slot), "wrong index for {:?}", item);
            for &child in &[2 * slot, 2 * slot + 1] {
                if child <= n {
                    assert!(pq.priority_at(slot) <= pq.priority_at(child));
                }
            }
        }
    }

    #[test]
    fn test_scenario() {
        let mut pq = OptimizedHeapMinPQ::<char>::new();
        pq.add('A', 5.0).unwrap();
        pq.add('B', 2.0).unwrap();
        pq.add('C', 8.0).unwrap();
        pq.change_priority(&'C', 1.0).unwrap();
        check(&pq);

        assert_eq!(pq.peek_min(), Ok(&'C'));
        assert_eq!(pq.remove_min(), Ok('C'));
        assert_eq!(pq.remove_min(), Ok('B'));
        assert_eq!(pq.remove_min(), Ok('A'));
        assert_eq!(pq.len(), 0);
        assert!(pq.is_empty());
        assert_eq!(pq.remove_min(), Err(Error::EmptyQueue));
        assert_eq!(pq.peek_min(), Err(Error::EmptyQueue));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut pq = OptimizedHeapMinPQ::<u32>::new();
        for i in 0..10 {
            pq.add(i, f64::from(10 - i)).unwrap();
        }
        let before: Vec<_> = pq.heap.iter().map(|n| (*n.item(), n.priority())).collect();
        assert_eq!(pq.add(4, -100.0), Err(Error::DuplicateItem));
        let after: Vec<_> = pq.heap.iter().map(|n| (*n.item(), n.priority())).collect();
        assert_eq!(before, after);
        assert_eq!(pq.priority(&4), Some(6.0));
        check(&pq);
    }

    #[test]
    fn test_missing_item() {
        let mut pq = OptimizedHeapMinPQ::<&str>::new();
        pq.add("x", 1.0).unwrap();
        assert_eq!(pq.change_priority(&"y", 0.0), Err(Error::ItemNotFound));
        assert_eq!(pq.priority(&"y"), None);
        assert_eq!(pq.priority(&"x"), Some(1.0));
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut pq = OptimizedHeapMinPQ::<usize, u8>::default();
        for i in 0..16 {
            pq.add(i, i as f64).unwrap();
        }
        // push the root down to a leaf
        pq.change_priority(&0, 100.0).unwrap();
        check(&pq);
        assert_eq!(pq.peek_min(), Ok(&1));
        // pull a leaf up to the root
        pq.change_priority(&15, -1.0).unwrap();
        check(&pq);
        assert_eq!(pq.peek_min(), Ok(&15));
        // unchanged priority must not break anything
        pq.change_priority(&7, 7.0).unwrap();
        check(&pq);

        let order: Vec<_> = std::iter::from_fn(|| pq.remove_min().ok()).collect();
        assert_eq!(order, vec![15, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0]);
    }

    #[test]
    fn test_clear() {
        let mut pq = OptimizedHeapMinPQ::<u32>::new();
        pq.add(1, 1.0).unwrap();
        pq.add(2, 0.5).unwrap();
        pq.clear();
        assert!(pq.is_empty());
        assert!(!pq.contains(&1));
        pq.add(1, 3.0).unwrap();
        assert_eq!(pq.remove_min(), Ok(1));
    }

    #[test]
    fn test_random_operations() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut pq = OptimizedHeapMinPQ::<u32>::new();
        for _ in 0..5000 {
            let item = rng.random_range(0..64);
            let priority = f64::from(rng.random_range(0..32_u32));
            match rng.random_range(0..4) {
                0 | 1 => {
                    let had = pq.contains(&item);
                    let res = pq.add(item, priority);
                    assert_eq!(res.is_err(), had);
                }
                2 => {
                    let res = pq.change_priority(&item, priority);
                    if res.is_ok() {
                        assert_eq!(pq.priority(&item), Some(priority));
                    }
                }
                _ => {
                    if let Ok(&min) = pq.peek_min() {
                        let p = pq.priority(&min).unwrap();
                        assert!(pq.heap.iter().all(|n| n.priority() >= p));
                        assert_eq!(pq.remove_min(), Ok(min));
                        assert!(!pq.contains(&min));
                    } else {
                        assert_eq!(pq.remove_min(), Err(Error::EmptyQueue));
                    }
                }
            }
            check(&pq);
        }
    }
}

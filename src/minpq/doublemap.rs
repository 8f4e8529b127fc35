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

//! Priority queue based on an ordered map and a hash map.

use crate::minpq::ExtrinsicMinPQ;
use crate::{Error, Result};

use ordered_float::OrderedFloat;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// Priority queue with two maps.
///
/// The ordered map stores for each priority value the set of items with that
/// priority, the hash map stores the priority of each item. Buckets never
/// stay empty.
pub struct DoubleMapMinPQ<T> {
    by_priority: BTreeMap<OrderedFloat<f64>, HashSet<T>>,
    by_item: HashMap<T, f64>,
}

impl<T> DoubleMapMinPQ<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Default::default()
    }
}

impl<T> Default for DoubleMapMinPQ<T> {
    fn default() -> Self {
        DoubleMapMinPQ {
            by_priority: BTreeMap::new(),
            by_item: HashMap::new(),
        }
    }
}

impl<T> DoubleMapMinPQ<T>
where
    T: Eq + Hash,
{
    /// Remove `item` from the bucket of `priority`, dropping the bucket if it
    /// becomes empty.
    fn unlink(&mut self, item: &T, priority: f64) {
        let key = OrderedFloat(priority);
        if let Some(bucket) = self.by_priority.get_mut(&key) {
            bucket.remove(item);
            if bucket.is_empty() {
                self.by_priority.remove(&key);
            }
        }
    }
}

impl<T> ExtrinsicMinPQ<T> for DoubleMapMinPQ<T>
where
    T: Eq + Hash + Clone,
{
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.by_item.contains_key(&item) {
            return Err(Error::DuplicateItem);
        }
        self.by_priority
            .entry(OrderedFloat(priority))
            .or_insert_with(HashSet::new)
            .insert(item.clone());
        self.by_item.insert(item, priority);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.by_item.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T> {
        self.by_priority
            .values()
            .next()
            .and_then(|bucket| bucket.iter().next())
            .ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        let mut entry = self.by_priority.first_entry().ok_or(Error::EmptyQueue)?;
        let item = entry.get().iter().next().cloned().ok_or(Error::EmptyQueue)?;
        entry.get_mut().remove(&item);
        if entry.get().is_empty() {
            entry.remove();
        }
        self.by_item.remove(&item);
        Ok(item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        let old = *self.by_item.get(item).ok_or(Error::ItemNotFound)?;
        if OrderedFloat(old) != OrderedFloat(priority) {
            self.unlink(item, old);
            self.by_priority
                .entry(OrderedFloat(priority))
                .or_insert_with(HashSet::new)
                .insert(item.clone());
            self.by_item.insert(item.clone(), priority);
        }
        Ok(())
    }

    fn priority(&self, item: &T) -> Option<f64> {
        self.by_item.get(item).cloned()
    }

    fn len(&self) -> usize {
        self.by_item.len()
    }

    fn clear(&mut self) {
        self.by_priority.clear();
        self.by_item.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::DoubleMapMinPQ;
    use crate::{Error, ExtrinsicMinPQ};

    #[test]
    fn test_doublemap() {
        let mut pq = DoubleMapMinPQ::new();
        for i in 1..=6 {
            pq.add(i.to_string(), f64::from(i)).unwrap();
        }
        pq.change_priority(&"3".to_string(), 0.0).unwrap();
        pq.change_priority(&"1".to_string(), 7.0).unwrap();
        assert_eq!(pq.change_priority(&"7".to_string(), 7.0), Err(Error::ItemNotFound));

        let mut order = vec![];
        while !pq.is_empty() {
            order.push(pq.remove_min().unwrap());
        }
        assert_eq!(order, vec!["3", "2", "4", "5", "6", "1"]);
        assert!(pq.by_priority.is_empty());
    }

    #[test]
    fn test_buckets() {
        let mut pq = DoubleMapMinPQ::new();
        pq.add('x', 3.0).unwrap();
        pq.add('y', 3.0).unwrap();
        assert_eq!(pq.by_priority.len(), 1);

        pq.change_priority(&'x', 3.0).unwrap();
        assert_eq!(pq.by_priority.len(), 1);
        pq.change_priority(&'x', 4.0).unwrap();
        assert_eq!(pq.by_priority.len(), 2);
        pq.change_priority(&'y', 4.0).unwrap();
        assert_eq!(pq.by_priority.len(), 1);
        assert_eq!(pq.priority(&'y'), Some(4.0));

        let first = pq.remove_min().unwrap();
        let second = pq.remove_min().unwrap();
        assert_ne!(first, second);
        assert!(pq.by_priority.is_empty());
        assert_eq!(pq.peek_min(), Err(Error::EmptyQueue));
    }
}

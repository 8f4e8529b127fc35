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

use crate::minpq::ExtrinsicMinPQ;
use crate::{Error, PriorityNode, Result};

/// Priority queue storing its elements in an unsorted vector.
///
/// All operations except `len` need linear time.
pub struct UnsortedArrayMinPQ<T> {
    items: Vec<PriorityNode<T>>,
}

impl<T> UnsortedArrayMinPQ<T> {
    pub fn new() -> Self {
        Default::default()
    }

    fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|node| node.item() == item)
    }

    /// Position of the first element with minimal priority.
    fn min_pos(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, node) in self.items.iter().enumerate() {
            match best {
                Some((_, p)) if p <= node.priority() => {}
                _ => best = Some((i, node.priority())),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<T> Default for UnsortedArrayMinPQ<T> {
    fn default() -> Self {
        UnsortedArrayMinPQ { items: vec![] }
    }
}

impl<T> ExtrinsicMinPQ<T> for UnsortedArrayMinPQ<T>
where
    T: PartialEq,
{
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::DuplicateItem);
        }
        self.items.push(PriorityNode::new(item, priority));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    fn peek_min(&self) -> Result<&T> {
        self.min_pos()
            .map(|i| self.items[i].item())
            .ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        let i = self.min_pos().ok_or(Error::EmptyQueue)?;
        Ok(self.items.swap_remove(i).into_item())
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        let i = self.find(item).ok_or(Error::ItemNotFound)?;
        self.items[i].set_priority(priority);
        Ok(())
    }

    fn priority(&self, item: &T) -> Option<f64> {
        self.find(item).map(|i| self.items[i].priority())
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear()
    }
}

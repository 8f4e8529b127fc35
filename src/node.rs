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

use std::hash::{Hash, Hasher};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// An item together with its (extrinsic) priority.
///
/// Two nodes are equal if and only if their items are equal, the priority is
/// ignored by `PartialEq` and `Hash`. Hence a node with an arbitrary
/// placeholder priority can be used to look up the node of an item.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PriorityNode<T> {
    item: T,
    priority: f64,
}

impl<T> PriorityNode<T> {
    pub fn new(item: T, priority: f64) -> Self {
        PriorityNode { item, priority }
    }

    /// The item of this node.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The current priority of this node.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Change the priority in place.
    ///
    /// Only queues that track the position of their nodes may do this.
    /// Everybody else must build a new node.
    pub fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T: PartialEq> PartialEq for PriorityNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T: Eq> Eq for PriorityNode<T> {}

impl<T: Hash> Hash for PriorityNode<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state)
    }
}

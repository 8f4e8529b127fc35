// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Extrinsic min-priority queues.
//!
//! An *extrinsic* priority queue stores arbitrary unique items together with
//! a numeric priority that lives outside the item. Priorities can be changed
//! after insertion, which is what algorithms like Dijkstra's shortest path
//! method need for their decrease-key step.
//!
//! All queues implement [`ExtrinsicMinPQ`]. The implementations differ only
//! in their running times:
//!
//! - [`OptimizedHeapMinPQ`]: binary heap with an item index, all updates in
//!   $O(\log n)$,
//! - [`DoubleMapMinPQ`]: ordered map of priorities plus a hash map of items,
//! - [`HeapMinPQ`]: plain binary heap, linear time `contains` and
//!   `change_priority`,
//! - [`UnsortedArrayMinPQ`]: unsorted vector, linear time for almost
//!   everything.
//!
//! # Example
//!
//! ```
//! use minpq::{Error, ExtrinsicMinPQ, OptimizedHeapMinPQ};
//!
//! let mut pq = OptimizedHeapMinPQ::new();
//! pq.add("a", 5.0).unwrap();
//! pq.add("b", 2.0).unwrap();
//! pq.add("c", 8.0).unwrap();
//! pq.change_priority(&"c", 1.0).unwrap();
//!
//! assert_eq!(pq.add("a", 0.0), Err(Error::DuplicateItem));
//! assert_eq!(pq.remove_min(), Ok("c"));
//! assert_eq!(pq.remove_min(), Ok("b"));
//! assert_eq!(pq.remove_min(), Ok("a"));
//! assert_eq!(pq.remove_min(), Err(Error::EmptyQueue));
//! ```

mod error;
pub use self::error::{Error, Result};

mod node;
pub use self::node::PriorityNode;

pub mod minpq;
pub use self::minpq::{DoubleMapMinPQ, ExtrinsicMinPQ, HeapMinPQ, OptimizedHeapMinPQ, UnsortedArrayMinPQ};

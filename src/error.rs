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

use std::error;
use std::fmt;

/// Error returned by the operations of an [`ExtrinsicMinPQ`](crate::ExtrinsicMinPQ).
///
/// All errors are contract violations by the caller. A failing operation
/// never modifies the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// `add` was called with an item that is already in the queue.
    ///
    /// Use `change_priority` to update the priority of an existing item.
    DuplicateItem,
    /// `peek_min` or `remove_min` was called on an empty queue.
    EmptyQueue,
    /// `change_priority` was called with an item that is not in the queue.
    ItemNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            DuplicateItem => write!(fmt, "Item is already contained in the queue"),
            EmptyQueue => write!(fmt, "Queue is empty"),
            ItemNotFound => write!(fmt, "Item is not contained in the queue"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

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

//! Read `item priority` lines and print the items in extraction order.
//!
//! A line naming an item that is already in the queue changes its priority.
//! Empty lines and lines starting with `#` are ignored.

use log::{debug, info};
use time::OffsetDateTime;

use rustop::opts;

use minpq::{DoubleMapMinPQ, ExtrinsicMinPQ, HeapMinPQ, OptimizedHeapMinPQ, UnsortedArrayMinPQ};

use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Error when reading the input file.
#[derive(Debug)]
enum Error {
    Io(io::Error),
    Format { line: usize, msg: String },
    Queue(minpq::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<minpq::Error> for Error {
    fn from(err: minpq::Error) -> Self {
        Error::Queue(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Queue(err) => err.fmt(fmt),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Queue(err) => Some(err),
            _ => None,
        }
    }
}

fn read<P, R>(pq: &mut P, reader: R) -> Result<usize, Error>
where
    P: ExtrinsicMinPQ<String>,
    R: BufRead,
{
    let mut nchanges = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut toks = line.split_whitespace();
        let (item, priority) = match (toks.next(), toks.next(), toks.next()) {
            (Some(item), Some(priority), None) => (item.to_string(), priority),
            _ => {
                return Err(Error::Format {
                    line: i + 1,
                    msg: "expected 'item priority'".to_string(),
                })
            }
        };
        let priority: f64 = priority.parse().map_err(|e| Error::Format {
            line: i + 1,
            msg: format!("invalid priority: {}", e),
        })?;
        if !priority.is_finite() {
            return Err(Error::Format {
                line: i + 1,
                msg: "priority must be finite".to_string(),
            });
        }

        if pq.contains(&item) {
            debug!("line {}: change priority of {} to {}", i + 1, item, priority);
            pq.change_priority(&item, priority)?;
            nchanges += 1;
        } else {
            pq.add(item, priority)?;
        }
    }
    Ok(nchanges)
}

fn run<P>(mut pq: P, file: &str) -> Result<(), Error>
where
    P: ExtrinsicMinPQ<String>,
{
    let tstart = OffsetDateTime::now_utc();
    let nchanges = read(&mut pq, BufReader::new(File::open(file)?))?;
    info!("read {} items, {} priority changes", pq.len(), nchanges);

    while !pq.is_empty() {
        let priority = pq.peek_min().ok().and_then(|item| pq.priority(item));
        let item = pq.remove_min()?;
        match priority {
            Some(p) => println!("{} {}", item, p),
            None => println!("{}", item),
        }
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    Ok(())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Print items in the order of increasing priority.";
        opt unsorted:bool, desc:"Use the unsorted array queue.";
        opt doublemap:bool, desc:"Use the double map queue.";
        opt naive:bool, desc:"Use the binary heap without item index.";
        param file:String, desc:"Input file with 'item priority' lines";
    }
    .parse_or_exit();

    if args.unsorted {
        info!("queue: {}", std::any::type_name::<UnsortedArrayMinPQ<String>>());
        run(UnsortedArrayMinPQ::new(), &args.file)?;
    } else if args.doublemap {
        info!("queue: {}", std::any::type_name::<DoubleMapMinPQ<String>>());
        run(DoubleMapMinPQ::new(), &args.file)?;
    } else if args.naive {
        info!("queue: {}", std::any::type_name::<HeapMinPQ<String>>());
        run(HeapMinPQ::new(), &args.file)?;
    } else {
        info!("queue: {}", std::any::type_name::<OptimizedHeapMinPQ<String>>());
        run(OptimizedHeapMinPQ::new(), &args.file)?;
    }

    Ok(())
}

/*!
# IO

Utilities for reading graphs from files.

The only supported input format is the **EdgeList** format: a header line `n m` followed by `m`
edge lines `u v` with 0-based node ids. See [`edge_list`] for details.

Readers report malformed input as [`std::io::Error`] with kind [`ErrorKind::InvalidData`], and a
missing header as [`ErrorKind::NotFound`]. A header declaring more nodes than can be allocated
yields [`ErrorKind::OutOfMemory`]. A failed read never produces a partial graph.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Result},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next().ok_or_else(|| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            )
        })?;

        next.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Invalid value found. Cannot parse {}.", $name)
            )
        })?
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

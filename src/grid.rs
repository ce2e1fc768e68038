//! Incremental site-percolation model on an `n × n` grid.
//!
//! Sites are addressed by 1-based `(row, col)` and mapped to forest ids
//! `(row - 1) * n + col`; id 0 is the virtual top. Row-1 sites join the
//! virtual top only when they are opened, so a closed site is never full.
//!
//! # Backwash
//!
//! A virtual-bottom node joined to the whole bottom row would make every
//! open bottom site look full as soon as any path percolates. Instead,
//! each component root carries a `touches_bottom` flag, OR-ed together on
//! every merge. Fullness looks only at the virtual top; percolation looks
//! at both, and is checked for the site just opened.

use std::fmt;

use crate::collections::UnionFind;
use crate::error::PercolationError;

const VIRTUAL_TOP: usize = 0;

/// An `n × n` grid of sites that can only go from closed to open.
///
/// # Examples
/// ```
/// use percolation::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(2).unwrap();
/// grid.open(1, 1).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(!grid.percolates());
///
/// grid.open(2, 1).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(2, 2).unwrap());
/// assert_eq!(grid.number_of_open_sites(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    forest: UnionFind,
    opened: Vec<bool>,
    /// Meaningful only at component roots.
    touches_bottom: Vec<bool>,
    open_count: usize,
    percolated: bool,
}

impl PercolationGrid {
    /// Creates an `n × n` grid with every site closed.
    ///
    /// Fails with [`PercolationError::InvalidArgument`] if `n < 1` or if
    /// `n² + 1` does not fit in `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be at least 1, got {}",
                n
            )));
        }
        let slots = n
            .checked_mul(n)
            .and_then(|sites| sites.checked_add(1))
            .ok_or_else(|| {
                PercolationError::InvalidArgument(format!("grid size {} is too large", n))
            })?;

        Ok(Self {
            n,
            forest: UnionFind::new(slots),
            opened: vec![false; slots],
            touches_bottom: vec![false; slots],
            open_count: 0,
            percolated: false,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    fn site_id(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        if row < 1 || row > self.n {
            return Err(PercolationError::out_of_range("row", row, 1, self.n));
        }
        if col < 1 || col > self.n {
            return Err(PercolationError::out_of_range("col", col, 1, self.n));
        }
        Ok((row - 1) * self.n + col)
    }

    /// Ids of the up/down/left/right neighbours that exist on the grid.
    fn neighbors(&self, row: usize, col: usize, site: usize) -> [Option<usize>; 4] {
        let n = self.n;
        [
            (row > 1).then(|| site - n),
            (row < n).then(|| site + n),
            (col > 1).then(|| site - 1),
            (col < n).then(|| site + 1),
        ]
    }

    /// Opens the site at `(row, col)`. Opening an already-open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let site = self.site_id(row, col)?;
        if self.opened[site] {
            return Ok(());
        }
        self.opened[site] = true;
        self.open_count += 1;

        let mut touches_bottom = row == self.n;
        let top = (row == 1).then_some(VIRTUAL_TOP);
        for other in self.neighbors(row, col, site).into_iter().flatten().chain(top) {
            if other != VIRTUAL_TOP && !self.opened[other] {
                continue;
            }
            let root = self.forest.find(other)?;
            touches_bottom |= self.touches_bottom[root];
            self.forest.union(site, other)?;
        }

        let root = self.forest.find(site)?;
        self.touches_bottom[root] |= touches_bottom;

        if self.touches_bottom[root] && self.forest.connected(site, VIRTUAL_TOP)? {
            self.percolated = true;
        }
        Ok(())
    }

    /// Returns `true` if `(row, col)` has been opened.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.site_id(row, col)?;
        Ok(self.opened[site])
    }

    /// Returns `true` if `(row, col)` is open and joined to the top row
    /// through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.site_id(row, col)?;
        if !self.opened[site] {
            return Ok(false);
        }
        Ok(self.forest.root(site)? == self.forest.root(VIRTUAL_TOP)?)
    }

    /// Number of sites opened so far; never decreases.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` once some open path links the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.percolated
    }
}

/// Renders one line per row: `#` closed, `.` open, `*` full.
impl fmt::Display for PercolationGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.forest.root(VIRTUAL_TOP).map_err(|_| fmt::Error)?;
        for row in 0..self.n {
            for col in 0..self.n {
                let site = row * self.n + col + 1;
                let glyph = if !self.opened[site] {
                    '#'
                } else if self.forest.root(site).map_err(|_| fmt::Error)? == top {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

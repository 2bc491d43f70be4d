//! Longest-common-subsequence line diff
//!
//! `table[i][j]` holds the LCS length of the first `i` items of `a` and the
//! first `j` items of `b`. The table is O(n·m), so its size is checked against
//! a cell limit before anything is allocated.

use crate::artifacts::diff::edit::Edit;
use crate::errors::{Error, Result};
use derive_new::new;

/// Largest DP table built by default (64 MiB of `u32` cells)
pub const DEFAULT_CELL_LIMIT: usize = 1 << 24;

#[derive(Debug)]
pub struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.width + j] = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    cell_limit: usize,
}

impl<'d, T: Eq + Clone> LcsDiff<'d, T> {
    pub fn compute_table(&self) -> Result<LcsTable> {
        let (n, m) = (self.a.len(), self.b.len());
        let requested = (n + 1).saturating_mul(m + 1);
        if requested > self.cell_limit {
            return Err(Error::ResourceExceeded {
                resource: "diff table cells",
                limit: self.cell_limit,
                requested,
            });
        }

        let mut table = LcsTable {
            width: m + 1,
            cells: vec![0; requested],
        };

        for i in 1..=n {
            for j in 1..=m {
                let value = if self.a[i - 1] == self.b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i, j - 1).max(table.get(i - 1, j))
                };
                table.set(i, j, value);
            }
        }

        Ok(table)
    }

    /// Walk the table back from the bottom-right corner.
    ///
    /// On a mismatch the walk moves along `b` only when that side is strictly
    /// longer, so ties are resolved by dropping an item of `a`.
    pub fn lcs(&self) -> Result<Vec<T>> {
        let table = self.compute_table()?;
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut lcs = Vec::with_capacity(table.get(i, j) as usize);

        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                lcs.push(self.a[i - 1].clone());
                i -= 1;
                j -= 1;
            } else if table.get(i, j - 1) > table.get(i - 1, j) {
                j -= 1;
            } else {
                i -= 1;
            }
        }

        lcs.reverse();
        Ok(lcs)
    }

    /// Edit script turning `a` into `b`.
    ///
    /// Items are matched against the LCS in order; within each gap every
    /// deletion is emitted before the insertions.
    pub fn diff(&self) -> Result<Vec<Edit<T>>> {
        let lcs = self.lcs()?;
        let mut edits = Vec::with_capacity(self.a.len() + self.b.len() - lcs.len());
        let (mut ia, mut ib) = (0, 0);

        for common in &lcs {
            while let Some(line) = self.a.get(ia)
                && line != common
            {
                edits.push(Edit::Delete {
                    value: line.clone(),
                });
                ia += 1;
            }
            while let Some(line) = self.b.get(ib)
                && line != common
            {
                edits.push(Edit::Insert {
                    value: line.clone(),
                });
                ib += 1;
            }

            edits.push(Edit::Equal {
                value: common.clone(),
            });
            ia += 1;
            ib += 1;
        }

        edits.extend(
            self.a
                .iter()
                .skip(ia)
                .map(|value| Edit::Delete {
                    value: value.clone(),
                }),
        );
        edits.extend(
            self.b
                .iter()
                .skip(ib)
                .map(|value| Edit::Insert {
                    value: value.clone(),
                }),
        );

        Ok(edits)
    }
}

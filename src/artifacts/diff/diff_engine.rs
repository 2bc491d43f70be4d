use crate::areas::database::Database;
use crate::artifacts::diff::lcs::{DEFAULT_CELL_LIMIT, LcsDiff};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::patch::Patch;
use crate::errors::Result;
use tracing::debug;

/// Computes line diffs, stores them as patch objects and replays them.
#[derive(Debug)]
pub struct DiffEngine<'d> {
    database: &'d Database,
    cell_limit: usize,
}

impl<'d> DiffEngine<'d> {
    pub fn new(database: &'d Database) -> Self {
        DiffEngine {
            database,
            cell_limit: DEFAULT_CELL_LIMIT,
        }
    }

    pub fn with_cell_limit(mut self, cell_limit: usize) -> Self {
        self.cell_limit = cell_limit;
        self
    }

    pub fn compute_lcs(&self, a: &[String], b: &[String]) -> Result<Vec<String>> {
        LcsDiff::new(a, b, self.cell_limit).lcs()
    }

    pub fn compute_patch(&self, a: &[String], b: &[String]) -> Result<Patch> {
        Ok(Patch::new(LcsDiff::new(a, b, self.cell_limit).diff()?))
    }

    /// Diff `a` against `b` and store the result as a patch object.
    pub fn compute_diff(&self, a: &[String], b: &[String]) -> Result<ObjectId> {
        let patch = self.compute_patch(a, b)?;
        let oid = self.database.store(&patch)?;
        debug!(patch = %oid, edits = patch.edits().len(), "stored patch");

        Ok(oid)
    }

    pub fn apply_patch(&self, base: &[String], patch_oid: &ObjectId) -> Result<Vec<String>> {
        let patch = self.database.parse_object_as_patch(patch_oid)?;

        Ok(patch.apply(base))
    }
}

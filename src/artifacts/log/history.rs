use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;

/// A commit together with the id it is stored under
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HistoryEntry {
    pub oid: ObjectId,
    pub commit: Commit,
}

/// Newest-first walk along parent links, loading one commit per step.
///
/// The walk ends after the commit whose parent is `root`. A commit that cannot
/// be loaded is yielded as an error and ends the walk.
#[derive(Debug)]
pub struct History<'r> {
    database: &'r Database,
    next_oid: Option<ObjectId>,
}

impl<'r> History<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        History {
            database,
            next_oid: start,
        }
    }
}

impl Iterator for History<'_> {
    type Item = Result<HistoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next_oid.take()?;

        match self.database.parse_object_as_commit(&oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.next_oid = commit.parent().cloned();
                Some(Ok(HistoryEntry::new(oid, commit)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
